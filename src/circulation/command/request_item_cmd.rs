use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct RequestItemCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> RequestItemCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RequestItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl RequestItemCommandRequest {
    pub fn new(patron_id: &str, item_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestItemCommandResponse {
    pub message: String,
    pub item: ItemDto,
}

impl RequestItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            message: "request successful".to_string(),
            item,
        }
    }
}

impl Command<RequestItemCommandRequest, RequestItemCommandResponse> for RequestItemCommand<'_> {
    fn execute(&mut self, req: RequestItemCommandRequest) -> Result<RequestItemCommandResponse, CommandError> {
        self.circulation_service.request(req.patron_id.as_str(), req.item_id.as_str())?;
        self.circulation_service.find_item_by_id(req.item_id.as_str())
            .map_err(CommandError::from).map(RequestItemCommandResponse::new)
    }
}

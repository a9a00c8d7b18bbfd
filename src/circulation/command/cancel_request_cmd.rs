use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct CancelRequestCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> CancelRequestCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CancelRequestCommandRequest {
    patron_id: String,
    item_id: String,
}

impl CancelRequestCommandRequest {
    pub fn new(patron_id: &str, item_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CancelRequestCommandResponse {
    pub message: String,
    pub item: ItemDto,
}

impl CancelRequestCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            message: "request canceled".to_string(),
            item,
        }
    }
}

impl Command<CancelRequestCommandRequest, CancelRequestCommandResponse> for CancelRequestCommand<'_> {
    fn execute(&mut self, req: CancelRequestCommandRequest) -> Result<CancelRequestCommandResponse, CommandError> {
        self.circulation_service.cancel_request(req.patron_id.as_str(), req.item_id.as_str())?;
        self.circulation_service.find_item_by_id(req.item_id.as_str())
            .map_err(CommandError::from).map(CancelRequestCommandResponse::new)
    }
}

use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct ReturnItemCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> ReturnItemCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnItemCommandRequest {
    item_id: String,
}

impl ReturnItemCommandRequest {
    pub fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    pub message: String,
    pub item: ItemDto,
}

impl ReturnItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            message: "return successful".to_string(),
            item,
        }
    }
}

impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand<'_> {
    fn execute(&mut self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.circulation_service.returned(req.item_id.as_str())?;
        self.circulation_service.find_item_by_id(req.item_id.as_str())
            .map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}

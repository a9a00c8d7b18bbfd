use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::{ItemEntity, ItemKind};
use crate::items::dto::ItemDto;

pub struct AddItemCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> AddItemCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemCommandRequest {
    item_id: String,
    title: String,
    #[serde(flatten)]
    kind: ItemKind,
}

impl AddItemCommandRequest {
    pub fn new(item_id: &str, title: &str, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            kind,
        }
    }

    pub fn to_entity(&self) -> ItemEntity {
        ItemEntity::new(self.item_id.as_str(), self.title.as_str(), self.kind.clone())
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'_> {
    fn execute(&mut self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        self.circulation_service.add_item(req.to_entity())?;
        self.circulation_service.find_item_by_id(req.item_id.as_str())
            .map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}

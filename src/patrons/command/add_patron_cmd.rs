use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

pub struct AddPatronCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> AddPatronCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddPatronCommandRequest {
    patron_id: String,
    name: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn to_entity(&self) -> PatronEntity {
        PatronEntity::new(self.patron_id.as_str(), self.name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand<'_> {
    fn execute(&mut self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        self.circulation_service.add_patron(req.to_entity())?;
        self.circulation_service.find_patron_by_id(req.patron_id.as_str())
            .map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}

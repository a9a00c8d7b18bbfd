use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct CheckoutItemCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> CheckoutItemCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl CheckoutItemCommandRequest {
    pub fn new(patron_id: &str, item_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutItemCommandResponse {
    pub message: String,
    pub item: ItemDto,
}

impl CheckoutItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            message: "check out successful".to_string(),
            item,
        }
    }
}

impl Command<CheckoutItemCommandRequest, CheckoutItemCommandResponse> for CheckoutItemCommand<'_> {
    fn execute(&mut self, req: CheckoutItemCommandRequest) -> Result<CheckoutItemCommandResponse, CommandError> {
        self.circulation_service.checkout(req.patron_id.as_str(), req.item_id.as_str())?;
        self.circulation_service.find_item_by_id(req.item_id.as_str())
            .map_err(CommandError::from).map(CheckoutItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::circulation::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
    use crate::circulation::factory::create_library;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::ItemLocation;
    use crate::circulation::domain::CirculationService;
    use crate::gateway::GatewayPublisherVia;
    use crate::items::domain::model::ItemEntity;
    use crate::patrons::domain::model::PatronEntity;

    #[test]
    fn test_should_run_checkout_item() {
        let mut library = create_library(&Configuration::new("test"), GatewayPublisherVia::Memory);
        library.add_patron(PatronEntity::new("P1", "Ada")).expect("should add patron");
        library.add_item(ItemEntity::book("B1", "Dune", "Frank Herbert")).expect("should add book");

        let res = CheckoutItemCommand::new(&mut library).execute(
            CheckoutItemCommandRequest::new("P1", "B1")).expect("should checkout item");
        assert_eq!("check out successful", res.message.as_str());
        assert_eq!(ItemLocation::CheckedOut, res.item.location);
        assert_eq!(Some("P1".to_string()), res.item.checked_out_by);

        let err = CheckoutItemCommand::new(&mut library).execute(
            CheckoutItemCommandRequest::new("P1", "B1")).unwrap_err();
        assert!(matches!(err, CommandError::Conflict { .. }));
        assert_eq!("item already checked out", err.reason_code());
    }
}

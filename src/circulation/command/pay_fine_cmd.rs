use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::PatronDto;

pub struct PayFineCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> PayFineCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayFineCommandRequest {
    patron_id: String,
    amount: f64,
}

impl PayFineCommandRequest {
    pub fn new(patron_id: &str, amount: f64) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayFineCommandResponse {
    pub message: String,
    pub patron: PatronDto,
}

impl PayFineCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            message: "payment successful".to_string(),
            patron,
        }
    }
}

impl Command<PayFineCommandRequest, PayFineCommandResponse> for PayFineCommand<'_> {
    fn execute(&mut self, req: PayFineCommandRequest) -> Result<PayFineCommandResponse, CommandError> {
        self.circulation_service.pay_fine(req.patron_id.as_str(), req.amount)?;
        self.circulation_service.find_patron_by_id(req.patron_id.as_str())
            .map_err(CommandError::from).map(PayFineCommandResponse::new)
    }
}

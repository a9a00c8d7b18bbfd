use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Tick;

// Upper bound on the ticks a single request may advance.
pub const MAX_TICKS_PER_REQUEST: Tick = 10_000;

pub struct AdvanceTickCommand<'a> {
    circulation_service: &'a mut dyn CirculationService,
}

impl<'a> AdvanceTickCommand<'a> {
    pub fn new(circulation_service: &'a mut dyn CirculationService) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdvanceTickCommandRequest {
    #[serde(default = "one_tick")]
    ticks: Tick,
}

fn one_tick() -> Tick {
    1
}

impl AdvanceTickCommandRequest {
    pub fn new(ticks: Tick) -> Self {
        Self {
            ticks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceTickCommandResponse {
    pub tick: Tick,
    pub overdue: Vec<CheckoutDto>,
}

impl Command<AdvanceTickCommandRequest, AdvanceTickCommandResponse> for AdvanceTickCommand<'_> {
    fn execute(&mut self, req: AdvanceTickCommandRequest) -> Result<AdvanceTickCommandResponse, CommandError> {
        if req.ticks > MAX_TICKS_PER_REQUEST {
            return Err(CommandError::Validation {
                message: format!("cannot advance {} ticks, limit is {}", req.ticks, MAX_TICKS_PER_REQUEST),
                reason_code: "too many ticks".to_string(),
            });
        }
        for _ in 0..req.ticks {
            self.circulation_service.advance_tick();
        }
        Ok(AdvanceTickCommandResponse {
            tick: self.circulation_service.current_tick(),
            overdue: self.circulation_service.query_overdue(),
        })
    }
}

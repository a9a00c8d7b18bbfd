use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use crate::circulation::command::advance_tick_cmd::{AdvanceTickCommand, AdvanceTickCommandRequest};
use crate::circulation::command::cancel_request_cmd::{CancelRequestCommand, CancelRequestCommandRequest};
use crate::circulation::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
use crate::circulation::command::pay_fine_cmd::{PayFineCommand, PayFineCommandRequest};
use crate::circulation::command::request_item_cmd::{RequestItemCommand, RequestItemCommandRequest};
use crate::circulation::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::circulation::domain::CirculationService;
use crate::circulation::factory::{create_library, populate_library, CatalogDocument};
use crate::core::command::{Command, CommandError};
use crate::core::domain::{Configuration, Tick};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;
use crate::items::dto::ItemDto;
use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use crate::patrons::dto::PatronDto;

// Scenario is a scripted session against a fresh library.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: Configuration,
    #[serde(flatten)]
    pub catalog: CatalogDocument,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScenarioStep {
    AddItem(AddItemCommandRequest),
    AddPatron(AddPatronCommandRequest),
    CheckOut(CheckoutItemCommandRequest),
    Return(ReturnItemCommandRequest),
    Request(RequestItemCommandRequest),
    CancelRequest(CancelRequestCommandRequest),
    PayFine(PayFineCommandRequest),
    AdvanceTick(AdvanceTickCommandRequest),
    QueryOverdue,
}

impl ScenarioStep {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::AddItem(_) => "add_item",
            ScenarioStep::AddPatron(_) => "add_patron",
            ScenarioStep::CheckOut(_) => "check_out",
            ScenarioStep::Return(_) => "return",
            ScenarioStep::Request(_) => "request",
            ScenarioStep::CancelRequest(_) => "cancel_request",
            ScenarioStep::PayFine(_) => "pay_fine",
            ScenarioStep::AdvanceTick(_) => "advance_tick",
            ScenarioStep::QueryOverdue => "query_overdue",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub op: String,
    pub tick: Tick,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub branch_id: String,
    pub final_tick: Tick,
    pub outcomes: Vec<StepOutcome>,
    pub holdings: Vec<ItemDto>,
    pub members: Vec<PatronDto>,
}

pub fn json_to_command_error(err: serde_json::Error) -> CommandError {
    CommandError::Serialization { message: format!("{}", err) }
}

fn to_json<T: Serialize>(res: T) -> Result<Value, CommandError> {
    serde_json::to_value(res).map_err(json_to_command_error)
}

pub fn handle_step(svc: &mut dyn CirculationService, step: ScenarioStep) -> Result<Value, CommandError> {
    match step {
        ScenarioStep::AddItem(req) => to_json(AddItemCommand::new(svc).execute(req)?),
        ScenarioStep::AddPatron(req) => to_json(AddPatronCommand::new(svc).execute(req)?),
        ScenarioStep::CheckOut(req) => to_json(CheckoutItemCommand::new(svc).execute(req)?),
        ScenarioStep::Return(req) => to_json(ReturnItemCommand::new(svc).execute(req)?),
        ScenarioStep::Request(req) => to_json(RequestItemCommand::new(svc).execute(req)?),
        ScenarioStep::CancelRequest(req) => to_json(CancelRequestCommand::new(svc).execute(req)?),
        ScenarioStep::PayFine(req) => to_json(PayFineCommand::new(svc).execute(req)?),
        ScenarioStep::AdvanceTick(req) => to_json(AdvanceTickCommand::new(svc).execute(req)?),
        ScenarioStep::QueryOverdue => to_json(svc.query_overdue()),
    }
}

pub fn run_scenario(scenario: Scenario, via: GatewayPublisherVia) -> LibraryResult<ScenarioReport> {
    let mut library = create_library(&scenario.config, via);
    populate_library(&mut library, &scenario.catalog)?;
    info!(branch_id = %scenario.config.branch_id, items = library.holdings().len(),
          patrons = library.members().len(), steps = scenario.steps.len(), "running scenario");

    let mut outcomes = vec![];
    for (step, req) in scenario.steps.into_iter().enumerate() {
        let op = req.name().to_string();
        let res = handle_step(&mut library, req);
        let tick = library.current_tick();
        let outcome = match res {
            Ok(response) => {
                let message = response.get("message").and_then(Value::as_str).unwrap_or("ok").to_string();
                StepOutcome { step, op, tick, outcome: message, response: Some(response), error: None }
            }
            Err(err) => {
                debug!(step, op = %op, reason = err.reason_code(), "scenario step rejected");
                StepOutcome { step, op, tick, outcome: err.reason_code().to_string(), response: None, error: Some(err) }
            }
        };
        outcomes.push(outcome);
    }

    Ok(ScenarioReport {
        branch_id: library.config().branch_id.to_string(),
        final_tick: library.current_tick(),
        outcomes,
        holdings: library.holdings().iter().map(ItemDto::from).collect(),
        members: library.members().iter().map(PatronDto::from).collect(),
    })
}

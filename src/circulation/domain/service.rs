use tracing::{debug, info, warn};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::CheckoutDto;
use crate::core::domain::{Configuration, Tick};
use crate::core::events::DomainEvent;
use crate::core::library::{ItemLocation, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemEntity;
use crate::items::dto::ItemDto;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

// Library owns every item and patron for its whole lifetime and drives the
// location state machine of each item: ON_SHELF, ON_HOLD_SHELF, CHECKED_OUT.
// Every operation checks all of its preconditions before it mutates anything.
pub struct Library {
    config: Configuration,
    holdings: Vec<ItemEntity>,
    members: Vec<PatronEntity>,
    current_tick: Tick,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            holdings: vec![],
            members: vec![],
            current_tick: 0,
            events_publisher,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn holdings(&self) -> &[ItemEntity] {
        &self.holdings
    }

    pub fn members(&self) -> &[PatronEntity] {
        &self.members
    }

    pub fn lookup_item(&self, item_id: &str) -> Option<&ItemEntity> {
        self.holdings.iter().find(|item| item.item_id == item_id)
    }

    pub fn lookup_patron(&self, patron_id: &str) -> Option<&PatronEntity> {
        self.members.iter().find(|patron| patron.patron_id == patron_id)
    }

    fn emit(&mut self, event: serde_json::Result<DomainEvent>) {
        let published = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = published {
            warn!(error = %err, "failed to publish domain event");
        }
    }
}

fn find_item_mut<'a>(holdings: &'a mut [ItemEntity], item_id: &str) -> LibraryResult<&'a mut ItemEntity> {
    holdings.iter_mut().find(|item| item.item_id == item_id)
        .ok_or_else(|| LibraryError::item_not_found(item_id))
}

fn find_patron_mut<'a>(members: &'a mut [PatronEntity], patron_id: &str) -> LibraryResult<&'a mut PatronEntity> {
    members.iter_mut().find(|patron| patron.patron_id == patron_id)
        .ok_or_else(|| LibraryError::patron_not_found(patron_id))
}

impl CirculationService for Library {
    fn add_item(&mut self, item: ItemEntity) -> LibraryResult<()> {
        if self.lookup_item(item.item_id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(format!("item with id {} already exists",
                                                           item.item_id).as_str()));
        }
        let dto = ItemDto::from(&item);
        self.holdings.push(item);
        self.emit(DomainEvent::added("item_added", "catalog", dto.item_id.as_str(), self.current_tick, &dto));
        Ok(())
    }

    fn add_patron(&mut self, patron: PatronEntity) -> LibraryResult<()> {
        if self.lookup_patron(patron.patron_id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(format!("patron with id {} already exists",
                                                           patron.patron_id).as_str()));
        }
        let dto = PatronDto::from(&patron);
        self.members.push(patron);
        self.emit(DomainEvent::added("patron_added", "patrons", dto.patron_id.as_str(), self.current_tick, &dto));
        Ok(())
    }

    fn find_item_by_id(&self, item_id: &str) -> LibraryResult<ItemDto> {
        self.lookup_item(item_id).map(ItemDto::from)
            .ok_or_else(|| LibraryError::item_not_found(item_id))
    }

    fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto> {
        self.lookup_patron(patron_id).map(PatronDto::from)
            .ok_or_else(|| LibraryError::patron_not_found(patron_id))
    }

    fn checkout(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()> {
        let today = self.current_tick;
        let patron = find_patron_mut(&mut self.members, patron_id)?;
        let item = find_item_mut(&mut self.holdings, item_id)?;
        // The hold shelf blocks everyone, the requester included.
        match item.location {
            ItemLocation::CheckedOut => return Err(LibraryError::already_checked_out(item_id)),
            ItemLocation::OnHoldShelf => return Err(LibraryError::on_hold_for_other(item_id)),
            ItemLocation::OnShelf => {}
        }
        item.checked_out_by = Some(patron_id.to_string());
        item.checked_out_at = Some(today);
        item.location = ItemLocation::CheckedOut;
        if item.requested_by.as_deref() == Some(patron_id) {
            item.requested_by = None;
        }
        patron.add_item(item_id);
        debug!(patron_id, item_id, tick = today, "item checked out");
        let dto = ItemDto::from(&*item);
        self.emit(DomainEvent::updated("item_checked_out", "checkout", item_id, today, &dto));
        Ok(())
    }

    fn returned(&mut self, item_id: &str) -> LibraryResult<()> {
        let today = self.current_tick;
        let item = find_item_mut(&mut self.holdings, item_id)?;
        if item.location != ItemLocation::CheckedOut {
            return Err(LibraryError::not_checked_out(item_id));
        }
        let borrower = item.checked_out_by.take();
        // The requester stays on the item until they check it out.
        item.location = if item.requested_by.is_some() {
            ItemLocation::OnHoldShelf
        } else {
            ItemLocation::OnShelf
        };
        let dto = ItemDto::from(&*item);
        match borrower {
            Some(ref patron_id) => match find_patron_mut(&mut self.members, patron_id) {
                Ok(patron) => {
                    if !patron.remove_item(item_id) {
                        warn!(patron_id = %patron_id, item_id, "returned item missing from borrowed items");
                    }
                }
                Err(_) => warn!(patron_id = %patron_id, item_id, "borrower of returned item is not a member"),
            },
            None => warn!(item_id, "checked out item had no borrower"),
        }
        debug!(item_id, location = %dto.location, tick = today, "item returned");
        self.emit(DomainEvent::updated("item_returned", "checkout", item_id, today, &dto));
        Ok(())
    }

    fn request(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()> {
        let today = self.current_tick;
        if self.lookup_patron(patron_id).is_none() {
            return Err(LibraryError::patron_not_found(patron_id));
        }
        let item = find_item_mut(&mut self.holdings, item_id)?;
        if item.requested_by.is_some() {
            return Err(LibraryError::already_requested(item_id));
        }
        item.requested_by = Some(patron_id.to_string());
        // Checked out items reach the hold shelf when they are returned.
        if item.location == ItemLocation::OnShelf {
            item.location = ItemLocation::OnHoldShelf;
        }
        debug!(patron_id, item_id, location = %item.location, "item requested");
        let dto = ItemDto::from(&*item);
        self.emit(DomainEvent::added("item_requested", "hold", item_id, today, &dto));
        Ok(())
    }

    fn cancel_request(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()> {
        let today = self.current_tick;
        if self.lookup_patron(patron_id).is_none() {
            return Err(LibraryError::patron_not_found(patron_id));
        }
        let item = find_item_mut(&mut self.holdings, item_id)?;
        if item.requested_by.as_deref() != Some(patron_id) {
            return Err(LibraryError::not_requested(patron_id, item_id));
        }
        item.requested_by = None;
        if item.location == ItemLocation::OnHoldShelf {
            item.location = ItemLocation::OnShelf;
        }
        debug!(patron_id, item_id, location = %item.location, "item request canceled");
        let dto = ItemDto::from(&*item);
        self.emit(DomainEvent::deleted("item_request_canceled", "hold", item_id, today, &dto));
        Ok(())
    }

    fn pay_fine(&mut self, patron_id: &str, amount: f64) -> LibraryResult<()> {
        let today = self.current_tick;
        let patron = find_patron_mut(&mut self.members, patron_id)?;
        if amount.is_nan() || amount < 0.0 {
            return Err(LibraryError::negative_amount(amount));
        }
        patron.amend_fine(-amount);
        debug!(patron_id, amount, balance = patron.fine_amount, "fine paid");
        let dto = PatronDto::from(&*patron);
        self.emit(DomainEvent::updated("fine_paid", "fines", patron_id, today, &dto));
        Ok(())
    }

    fn advance_tick(&mut self) {
        self.current_tick += 1;
        let today = self.current_tick;
        let fine = self.config.fine_per_tick;
        let holdings = &self.holdings;
        let mut fined = vec![];
        for patron in self.members.iter_mut() {
            let overdue = patron.checked_out_items.iter()
                .filter_map(|item_id| holdings.iter().find(|item| item.item_id == *item_id))
                .filter(|item| item.overdue_by(today).is_some())
                .count();
            // One increment per overdue item, applied again on every tick it stays out.
            for _ in 0..overdue {
                patron.amend_fine(fine);
            }
            if overdue > 0 {
                info!(patron_id = %patron.patron_id, overdue, balance = patron.fine_amount, tick = today, "fines accrued");
                fined.push(PatronDto::from(&*patron));
            }
        }
        for dto in fined {
            self.emit(DomainEvent::updated("fine_accrued", "fines", dto.patron_id.as_str(), today, &dto));
        }
    }

    fn current_tick(&self) -> Tick {
        self.current_tick
    }

    fn query_overdue(&self) -> Vec<CheckoutDto> {
        self.holdings.iter()
            .filter_map(|item| CheckoutDto::overdue(item, self.current_tick))
            .collect()
    }
}

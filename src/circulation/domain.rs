use crate::circulation::dto::CheckoutDto;
use crate::core::domain::Tick;
use crate::core::library::LibraryResult;
use crate::items::domain::model::ItemEntity;
use crate::items::dto::ItemDto;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;

pub mod service;

pub trait CirculationService {
    fn add_item(&mut self, item: ItemEntity) -> LibraryResult<()>;
    fn add_patron(&mut self, patron: PatronEntity) -> LibraryResult<()>;
    fn find_item_by_id(&self, item_id: &str) -> LibraryResult<ItemDto>;
    fn find_patron_by_id(&self, patron_id: &str) -> LibraryResult<PatronDto>;
    fn checkout(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()>;
    fn returned(&mut self, item_id: &str) -> LibraryResult<()>;
    fn request(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()>;
    fn cancel_request(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()>;
    fn pay_fine(&mut self, patron_id: &str, amount: f64) -> LibraryResult<()>;
    fn advance_tick(&mut self);
    fn current_tick(&self) -> Tick;
    fn query_overdue(&self) -> Vec<CheckoutDto>;
}

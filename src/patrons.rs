use crate::core::domain::Identifiable;

pub mod command;
pub mod domain;
pub mod dto;

pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn fine_amount(&self) -> f64;
    fn checked_out_items(&self) -> &[String];

    fn has_checked_out(&self, item_id: &str) -> bool {
        self.checked_out_items().iter().any(|id| id == item_id)
    }
}

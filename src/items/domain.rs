use crate::core::domain::{Identifiable, Tick};
use crate::core::library::ItemLocation;

pub mod model;

pub trait LibraryItem: Identifiable {
    fn title(&self) -> &str;
    fn location(&self) -> ItemLocation;
    fn checkout_length(&self) -> Tick;
    fn checked_out_at(&self) -> Option<Tick>;

    // Ticks past the due date, or None when the item is not overdue at `today`.
    fn overdue_by(&self, today: Tick) -> Option<Tick> {
        let checked_out_at = self.checked_out_at()?;
        if self.location() != ItemLocation::CheckedOut {
            return None;
        }
        let elapsed = today.saturating_sub(checked_out_at);
        if elapsed > self.checkout_length() {
            Some(elapsed - self.checkout_length())
        } else {
            None
        }
    }

    fn due_at(&self) -> Option<Tick> {
        self.checked_out_at().map(|at| at + self.checkout_length())
    }
}

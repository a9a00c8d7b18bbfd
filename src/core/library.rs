use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum LibraryError {
    #[error("patron {patron_id} not found")]
    PatronNotFound {
        patron_id: String,
    },
    #[error("item {item_id} not found")]
    ItemNotFound {
        item_id: String,
    },
    #[error("item {item_id} already checked out")]
    AlreadyCheckedOut {
        item_id: String,
    },
    // Raised for every item on the hold shelf, including for the patron who requested it.
    #[error("item {item_id} on hold by other patron")]
    OnHoldForOther {
        item_id: String,
    },
    #[error("item {item_id} already in library")]
    NotCheckedOut {
        item_id: String,
    },
    #[error("item {item_id} already on hold")]
    AlreadyRequested {
        item_id: String,
    },
    #[error("item {item_id} is not requested by patron {patron_id}")]
    NotRequested {
        patron_id: String,
        item_id: String,
    },
    #[error("cannot pay negative fine amount {amount}")]
    NegativeAmount {
        amount: f64,
    },
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn patron_not_found(patron_id: &str) -> LibraryError {
        LibraryError::PatronNotFound { patron_id: patron_id.to_string() }
    }

    pub fn item_not_found(item_id: &str) -> LibraryError {
        LibraryError::ItemNotFound { item_id: item_id.to_string() }
    }

    pub fn already_checked_out(item_id: &str) -> LibraryError {
        LibraryError::AlreadyCheckedOut { item_id: item_id.to_string() }
    }

    pub fn on_hold_for_other(item_id: &str) -> LibraryError {
        LibraryError::OnHoldForOther { item_id: item_id.to_string() }
    }

    pub fn not_checked_out(item_id: &str) -> LibraryError {
        LibraryError::NotCheckedOut { item_id: item_id.to_string() }
    }

    pub fn already_requested(item_id: &str) -> LibraryError {
        LibraryError::AlreadyRequested { item_id: item_id.to_string() }
    }

    pub fn not_requested(patron_id: &str, item_id: &str) -> LibraryError {
        LibraryError::NotRequested { patron_id: patron_id.to_string(), item_id: item_id.to_string() }
    }

    pub fn negative_amount(amount: f64) -> LibraryError {
        LibraryError::NegativeAmount { amount }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // Result strings reported back to callers.
    pub fn reason_code(&self) -> &'static str {
        match self {
            LibraryError::PatronNotFound { .. } => { "patron not found" }
            LibraryError::ItemNotFound { .. } => { "item not found" }
            LibraryError::AlreadyCheckedOut { .. } => { "item already checked out" }
            LibraryError::OnHoldForOther { .. } => { "item on hold by other patron" }
            LibraryError::NotCheckedOut { .. } => { "item already in library" }
            LibraryError::AlreadyRequested { .. } => { "item already on hold" }
            LibraryError::NotRequested { .. } => { "item not requested by patron" }
            LibraryError::NegativeAmount { .. } => { "ERROR: Cannot pay negative fine amount" }
            LibraryError::DuplicateKey { .. } => { "duplicate id" }
            LibraryError::Serialization { .. } => { "serialization error" }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

/// A specialized Result type for circulation operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ItemLocation tracks where a physical item currently is.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemLocation {
    #[default]
    OnShelf,
    OnHoldShelf,
    CheckedOut,
}

impl Display for ItemLocation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemLocation::OnShelf => write!(f, "ON_SHELF"),
            ItemLocation::OnHoldShelf => write!(f, "ON_HOLD_SHELF"),
            ItemLocation::CheckedOut => write!(f, "CHECKED_OUT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemLocation, LibraryError};

    #[test]
    fn test_should_create_not_found_errors() {
        assert!(matches!(LibraryError::patron_not_found("p1"), LibraryError::PatronNotFound{ patron_id: _ }));
        assert!(matches!(LibraryError::item_not_found("i1"), LibraryError::ItemNotFound{ item_id: _ }));
    }

    #[test]
    fn test_should_create_state_errors() {
        assert!(matches!(LibraryError::already_checked_out("i1"), LibraryError::AlreadyCheckedOut{ item_id: _ }));
        assert!(matches!(LibraryError::on_hold_for_other("i1"), LibraryError::OnHoldForOther{ item_id: _ }));
        assert!(matches!(LibraryError::not_checked_out("i1"), LibraryError::NotCheckedOut{ item_id: _ }));
        assert!(matches!(LibraryError::already_requested("i1"), LibraryError::AlreadyRequested{ item_id: _ }));
        assert!(matches!(LibraryError::not_requested("p1", "i1"), LibraryError::NotRequested{ patron_id: _, item_id: _ }));
        assert!(matches!(LibraryError::negative_amount(-1.0), LibraryError::NegativeAmount{ amount: _ }));
    }

    #[test]
    fn test_should_map_reason_codes() {
        assert_eq!("patron not found", LibraryError::patron_not_found("p1").reason_code());
        assert_eq!("item not found", LibraryError::item_not_found("i1").reason_code());
        assert_eq!("item already checked out", LibraryError::already_checked_out("i1").reason_code());
        assert_eq!("item on hold by other patron", LibraryError::on_hold_for_other("i1").reason_code());
        assert_eq!("item already in library", LibraryError::not_checked_out("i1").reason_code());
        assert_eq!("item already on hold", LibraryError::already_requested("i1").reason_code());
        assert_eq!("ERROR: Cannot pay negative fine amount", LibraryError::negative_amount(-2.0).reason_code());
    }

    #[test]
    fn test_should_display_error_with_ids() {
        assert_eq!("patron P9 not found", LibraryError::patron_not_found("P9").to_string());
        assert_eq!("item B1 already checked out", LibraryError::already_checked_out("B1").to_string());
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<ItemLocation>("\"SOMEWHERE\"").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_item_location() {
        assert_eq!(ItemLocation::OnShelf, ItemLocation::default());
        assert_eq!("ON_SHELF", ItemLocation::OnShelf.to_string());
        assert_eq!("ON_HOLD_SHELF", ItemLocation::OnHoldShelf.to_string());
        assert_eq!("CHECKED_OUT", ItemLocation::CheckedOut.to_string());
        for location in [ItemLocation::OnShelf, ItemLocation::OnHoldShelf, ItemLocation::CheckedOut] {
            let json = serde_json::to_string(&location).expect("should serialize");
            assert_eq!(format!("\"{}\"", location), json);
        }
    }
}

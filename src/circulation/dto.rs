use serde::{Deserialize, Serialize};
use crate::core::domain::Tick;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemEntity;

// CheckoutDto describes an item that is out past its checkout length.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub item_id: String,
    pub patron_id: String,
    pub checked_out_at: Tick,
    pub due_at: Tick,
    pub overdue_by: Tick,
}

impl CheckoutDto {
    pub(crate) fn overdue(item: &ItemEntity, today: Tick) -> Option<Self> {
        let overdue_by = item.overdue_by(today)?;
        Some(CheckoutDto {
            item_id: item.item_id.to_string(),
            patron_id: item.checked_out_by.clone()?,
            checked_out_at: item.checked_out_at?,
            due_at: item.due_at()?,
            overdue_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::circulation::dto::CheckoutDto;
    use crate::core::library::ItemLocation;
    use crate::items::domain::model::ItemEntity;

    #[test]
    fn test_should_build_overdue_checkout() {
        let mut album = ItemEntity::album("A1", "Blue", "Joni Mitchell");
        assert_eq!(None, CheckoutDto::overdue(&album, 30));
        album.location = ItemLocation::CheckedOut;
        album.checked_out_by = Some("P1".to_string());
        album.checked_out_at = Some(2);
        assert_eq!(None, CheckoutDto::overdue(&album, 16));
        let checkout = CheckoutDto::overdue(&album, 20).expect("should be overdue");
        assert_eq!("P1", checkout.patron_id.as_str());
        assert_eq!(16, checkout.due_at);
        assert_eq!(4, checkout.overdue_by);
    }
}

use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, Tick};
use crate::core::library::ItemLocation;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::{ItemEntity, ItemKind};

// ItemDto is a read-only snapshot of an item handed out of the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub checkout_length: Tick,
    pub location: ItemLocation,
    pub checked_out_by: Option<String>,
    pub requested_by: Option<String>,
    pub checked_out_at: Option<Tick>,
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> ItemDto {
        ItemDto {
            item_id: other.item_id.to_string(),
            title: other.title.to_string(),
            kind: other.kind.clone(),
            checkout_length: other.kind.checkout_length(),
            location: other.location,
            checked_out_by: other.checked_out_by.clone(),
            requested_by: other.requested_by.clone(),
            checked_out_at: other.checked_out_at,
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}

impl LibraryItem for ItemDto {
    fn title(&self) -> &str {
        &self.title
    }

    fn location(&self) -> ItemLocation {
        self.location
    }

    fn checkout_length(&self) -> Tick {
        self.checkout_length
    }

    fn checked_out_at(&self) -> Option<Tick> {
        self.checked_out_at
    }
}

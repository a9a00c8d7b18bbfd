use serde::{Deserialize, Serialize};
use crate::core::domain::{Identifiable, Tick};
use crate::core::library::ItemLocation;
use crate::items::domain::LibraryItem;

pub const BOOK_CHECKOUT_LENGTH: Tick = 21;
pub const ALBUM_CHECKOUT_LENGTH: Tick = 14;
pub const MOVIE_CHECKOUT_LENGTH: Tick = 7;

// ItemKind carries the kind-specific creator of a library item.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemKind {
    Book { author: String },
    Album { artist: String },
    Movie { director: String },
}

impl ItemKind {
    pub fn checkout_length(&self) -> Tick {
        match self {
            ItemKind::Book { .. } => BOOK_CHECKOUT_LENGTH,
            ItemKind::Album { .. } => ALBUM_CHECKOUT_LENGTH,
            ItemKind::Movie { .. } => MOVIE_CHECKOUT_LENGTH,
        }
    }
}

// ItemEntity abstracts a physical book, album or movie owned by the library.
// Borrower and requester are patron ids resolved through the library.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    pub(crate) item_id: String,
    pub(crate) title: String,
    pub(crate) kind: ItemKind,
    pub(crate) location: ItemLocation,
    pub(crate) checked_out_by: Option<String>,
    pub(crate) requested_by: Option<String>,
    pub(crate) checked_out_at: Option<Tick>,
}

impl ItemEntity {
    pub fn new(item_id: &str, title: &str, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            kind,
            location: ItemLocation::OnShelf,
            checked_out_by: None,
            requested_by: None,
            checked_out_at: None,
        }
    }

    pub fn book(item_id: &str, title: &str, author: &str) -> Self {
        Self::new(item_id, title, ItemKind::Book { author: author.to_string() })
    }

    pub fn album(item_id: &str, title: &str, artist: &str) -> Self {
        Self::new(item_id, title, ItemKind::Album { artist: artist.to_string() })
    }

    pub fn movie(item_id: &str, title: &str, director: &str) -> Self {
        Self::new(item_id, title, ItemKind::Movie { director: director.to_string() })
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn checked_out_by(&self) -> Option<&str> {
        self.checked_out_by.as_deref()
    }

    pub fn requested_by(&self) -> Option<&str> {
        self.requested_by.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Book { author } => Some(author),
            _ => None,
        }
    }

    pub fn artist(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Album { artist } => Some(artist),
            _ => None,
        }
    }

    pub fn director(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Movie { director } => Some(director),
            _ => None,
        }
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}

impl LibraryItem for ItemEntity {
    fn title(&self) -> &str {
        &self.title
    }

    fn location(&self) -> ItemLocation {
        self.location
    }

    fn checkout_length(&self) -> Tick {
        self.kind.checkout_length()
    }

    fn checked_out_at(&self) -> Option<Tick> {
        self.checked_out_at
    }
}

use serde::Deserialize;
use crate::catalog::command::add_item_cmd::AddItemCommandRequest;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::Library;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::patrons::command::add_patron_cmd::AddPatronCommandRequest;

// CatalogDocument is the JSON shape used to seed holdings and members.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub items: Vec<AddItemCommandRequest>,
    #[serde(default)]
    pub patrons: Vec<AddPatronCommandRequest>,
}

pub fn create_library(config: &Configuration, via: GatewayPublisherVia) -> Library {
    Library::new(config, create_publisher(via))
}

pub fn populate_library(library: &mut dyn CirculationService, catalog: &CatalogDocument) -> LibraryResult<()> {
    for item in catalog.items.iter() {
        library.add_item(item.to_entity())?;
    }
    for patron in catalog.patrons.iter() {
        library.add_patron(patron.to_entity())?;
    }
    Ok(())
}

pub fn load_library(config: &Configuration, json: &str, via: GatewayPublisherVia) -> LibraryResult<Library> {
    let catalog: CatalogDocument = serde_json::from_str(json)?;
    let mut library = create_library(config, via);
    populate_library(&mut library, &catalog)?;
    Ok(library)
}

#[cfg(test)]
mod tests {
    use crate::circulation::domain::CirculationService;
    use crate::circulation::factory::{create_library, load_library};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::GatewayPublisherVia;

    const CATALOG: &str = r#"{
        "items": [
            {"item_id": "B1", "title": "Dune", "kind": "Book", "author": "Frank Herbert"},
            {"item_id": "A1", "title": "Blue", "kind": "Album", "artist": "Joni Mitchell"},
            {"item_id": "M1", "title": "Alien", "kind": "Movie", "director": "Ridley Scott"}
        ],
        "patrons": [
            {"patron_id": "P1", "name": "Ada"}
        ]
    }"#;

    #[test]
    fn test_should_create_empty_library() {
        let library = create_library(&Configuration::new("test"), GatewayPublisherVia::Logs);
        assert_eq!(0, library.current_tick());
        assert!(library.holdings().is_empty());
    }

    #[test]
    fn test_should_load_library_from_json() {
        let library = load_library(&Configuration::new("test"), CATALOG, GatewayPublisherVia::Memory)
            .expect("should load library");
        assert_eq!(3, library.holdings().len());
        assert_eq!(1, library.members().len());
        assert_eq!(Some("Ridley Scott"), library.lookup_item("M1").and_then(|i| i.director()));
        assert_eq!(14, library.find_item_by_id("A1").expect("album").checkout_length);
    }

    #[test]
    fn test_should_fail_loading_bad_catalog() {
        let res = load_library(&Configuration::new("test"), "{\"items\": 5}", GatewayPublisherVia::Memory);
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
        let res = load_library(&Configuration::new("test"),
                               r#"{"patrons": [{"patron_id": "P1", "name": "a"}, {"patron_id": "P1", "name": "b"}]}"#,
                               GatewayPublisherVia::Memory);
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }
}

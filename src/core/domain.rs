use serde::{Deserialize, Serialize};

// Tick is the simulated date counter; it starts at 0 and only moves forward.
pub type Tick = u64;

pub const DEFAULT_FINE_PER_TICK: f64 = 0.10;

// Identifiable defines common traits that can be shared by library records
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    #[serde(default = "default_fine_per_tick")]
    pub fine_per_tick: f64,
}

fn default_fine_per_tick() -> f64 {
    DEFAULT_FINE_PER_TICK
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            fine_per_tick: DEFAULT_FINE_PER_TICK,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, DEFAULT_FINE_PER_TICK};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(DEFAULT_FINE_PER_TICK, config.fine_per_tick);
    }

    #[test]
    fn test_should_default_fine_when_missing_from_json() {
        let config: Configuration = serde_json::from_str(r#"{"branch_id": "east"}"#).expect("should parse config");
        assert_eq!("east", config.branch_id.as_str());
        assert_eq!(0.10, config.fine_per_tick);
    }
}

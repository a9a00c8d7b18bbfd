use tracing::{debug, info};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        info!("published {} for {} at tick {}", event.name, event.key, event.tick);
        debug!(event = %event.name, group = %event.group, "{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let event = DomainEvent::added("item_added", "catalog", "B1", 0, &"B1").expect("build event");
        let mut publisher = LogPublisher::new();
        assert!(publisher.publish(&event).is_ok());
        assert!(publisher.publish(&event).is_ok());
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps a journal of events; clones share the same journal so a
// caller can hold on to one while the library owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    journal: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.journal.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.journal.borrow().iter().map(|e| e.name.to_string()).collect()
    }

    pub fn clear(&self) {
        self.journal.borrow_mut().clear();
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        self.journal.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_share_journal_between_clones() {
        let handle = MemoryPublisher::new();
        let mut publisher = handle.clone();
        let event = DomainEvent::added("patron_added", "patrons", "P1", 0, &"P1").expect("build event");
        publisher.publish(&event).expect("should publish");
        assert_eq!(vec!["patron_added".to_string()], handle.names());
        assert_eq!(event, handle.events()[0]);
        handle.clear();
        assert!(publisher.events().is_empty());
    }
}

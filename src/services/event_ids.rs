//! Event identifier generation.

use crate::models::event::EventId;

const ID_PREFIX: &str = "evt";

/// Hands out `evt-1`, `evt-2`, ... for the lifetime of one app session.
#[derive(Debug, Default)]
pub struct EventIdGenerator {
    issued: u64,
}

impl EventIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EventId {
        self.issued += 1;
        EventId::new(format!("{}-{}", ID_PREFIX, self.issued))
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = EventIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "evt-1");
        assert_eq!(ids.next_id().as_str(), "evt-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_ids_never_repeat() {
        let mut ids = EventIdGenerator::new();
        let seen: HashSet<EventId> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }
}

//! Event observers.
//!
//! Observers receive each event by shared reference after the action that
//! caused it has fully resolved. A rejected action produces no events.

use super::event::GameEvent;

/// Receives engine events in causal order.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent);
}

/// Observer that keeps every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events with the given [`GameEvent::name`].
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| e.name() == name)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::PlayerSkipped { player: PlayerId::new(1) });
        log.on_event(&GameEvent::TurnAdvanced { player: PlayerId::new(2), turn: 2 });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.named("player_skipped").count(), 1);

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = 0;
        {
            let mut counter = |_: &GameEvent| seen += 1;
            counter.on_event(&GameEvent::PlayerSkipped { player: PlayerId::new(0) });
            counter.on_event(&GameEvent::PlayerSkipped { player: PlayerId::new(1) });
        }
        assert_eq!(seen, 2);
    }
}

use slideshow_model::{EventLabel, EventMetadata, SlideshowEvent};
use tokio::sync::broadcast;
use tracing::{debug, warn};

pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// In-process fan-out of widget notifications.
///
/// Publishing never blocks and never fails; a bus without receivers simply
/// drops the event. Receivers that fall more than `capacity` events behind
/// lose the oldest ones.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SlideshowEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SlideshowEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SlideshowEvent) {
        debug!(event = %event, "publish");
        let _ = self.sender.send(event);
    }

    pub fn emit(&self, label: EventLabel) {
        self.publish(SlideshowEvent::new(label));
    }

    pub fn emit_with(&self, label: EventLabel, metadata: EventMetadata) {
        self.publish(SlideshowEvent::with_metadata(label, metadata));
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Collect everything currently queued on `receiver` without waiting.
pub fn drain(
    receiver: &mut broadcast::Receiver<SlideshowEvent>,
) -> Vec<SlideshowEvent> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "event receiver lagged behind");
            }
            Err(broadcast::error::TryRecvError::Empty)
            | Err(broadcast::error::TryRecvError::Closed) => break,
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishing_without_receivers_is_fine() {
        let bus = EventBus::new(4);
        bus.emit(EventLabel::SlideNext);
        assert_eq!(bus.receiver_count(), 0);
    }

    #[test]
    fn receivers_see_events_in_publish_order() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.emit(EventLabel::SlideNext);
        bus.emit_with(EventLabel::SlideInByIndex, EventMetadata::Index { index: 2 });

        let labels: Vec<_> = drain(&mut rx).into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![EventLabel::SlideNext, EventLabel::SlideInByIndex]);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn lagging_receiver_keeps_the_newest_events() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();
        for _ in 0..3 {
            bus.emit(EventLabel::MoveLeft);
        }
        bus.emit(EventLabel::SlideIn);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert_eq!(events.last().map(|e| e.label), Some(EventLabel::SlideIn));
    }
}

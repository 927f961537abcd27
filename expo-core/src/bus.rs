//! Refresh broadcast bus
//!
//! When the wizard commits data, dependent views (availability pools,
//! recent-activity feeds) need to refetch. The bus is an explicit
//! publish/subscribe channel handed around by construction; publishers do
//! not know who listens.

use tokio::sync::broadcast;

/// Which remote collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    Installations,
    Events,
    Consumables,
}

/// Broadcast channel for "data changed, please refetch" signals
#[derive(Debug, Clone)]
pub struct RefreshBus {
    tx: broadcast::Sender<RefreshEvent>,
}

impl RefreshBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to refresh signals
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.tx.subscribe()
    }

    /// Publish a refresh signal; a bus with no subscribers swallows it
    pub fn publish(&self, event: RefreshEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!(?event, "Refresh signal dropped, no subscribers");
        }
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = RefreshBus::default();
        let mut rx = bus.subscribe();
        bus.publish(RefreshEvent::Installations);
        assert_eq!(rx.recv().await.unwrap(), RefreshEvent::Installations);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = RefreshBus::default();
        bus.publish(RefreshEvent::Consumables);
    }
}

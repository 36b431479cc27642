use tokio::sync::broadcast;

use crate::storage::adapter::{ChangeEvent, Collection};

const FEED_CAPACITY: usize = 256;

/// Fan-out of change events to live subscribers
///
/// Both store backends publish through one feed per store instance, so a
/// write made by any caller reaches every subscriber of that collection.
#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Publish a change; silently a no-op when nobody is listening
    pub fn publish(&self, event: ChangeEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self, collection: Collection) -> Subscription {
        Subscription {
            collection,
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// A live listener on one collection
///
/// Dropping the subscription detaches it from the feed, which is how a
/// consumer going away stops receiving pushes (the cleanup obligation for
/// components that unmount mid-flight).
pub struct Subscription {
    collection: Collection,
    rx: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Wait for the next change on the subscribed collection
    ///
    /// Events for other collections are skipped. Returns `None` once the
    /// owning store is gone. A slow consumer that lags the feed resumes
    /// from the oldest retained event with a warning.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.collection == self.collection => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        collection = %self.collection,
                        skipped,
                        "subscriber lagged behind change feed"
                    );
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

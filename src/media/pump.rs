use tokio::sync::mpsc;
use tracing::debug;

use super::mirror::SharedMedia;
use super::types::MediaEvent;

/// Engine-side end of the event channel. Cheap to clone and usable from any
/// thread.
#[derive(Debug, Clone)]
pub struct MediaEventSender {
    tx: mpsc::UnboundedSender<MediaEvent>,
}

impl MediaEventSender {
    pub fn send(&self, event: MediaEvent) {
        if let Err(err) = self.tx.send(event) {
            debug!("Media event pump is gone, dropping {:?}", err.0);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// UI-thread end of the event channel.
///
/// Owns the mirror handle; events are only applied when the UI thread drains
/// the queue, so observers never run on an engine thread.
pub struct MediaEventPump {
    rx: mpsc::UnboundedReceiver<MediaEvent>,
    media: SharedMedia,
}

pub fn media_event_channel(media: SharedMedia) -> (MediaEventSender, MediaEventPump) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MediaEventSender { tx }, MediaEventPump { rx, media })
}

impl MediaEventPump {
    pub fn media(&self) -> &SharedMedia {
        &self.media
    }

    /// Apply every queued event and return how many were applied
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.media.borrow_mut().apply(event);
            applied += 1;
        }
        applied
    }

    /// Apply events as they arrive until every sender is dropped.
    ///
    /// The mirror is not `Send`, so run this on a current-thread runtime or
    /// inside a `LocalSet`.
    pub async fn run(mut self) {
        debug!("Media event pump started");
        while let Some(event) = self.rx.recv().await {
            self.media.borrow_mut().apply(event);
        }
        debug!("Media event pump stopped, all senders dropped");
    }
}

/// ThreadedAssetLoader - fetches on worker threads, completes over a channel.
///
/// Each request runs `AssetSource::fetch` on its own named thread and
/// sends the completion through an unbounded flume channel; `poll` drains
/// whatever has arrived without blocking.

use std::sync::Arc;
use std::time::Duration;
use crate::assets::{AssetCompletion, AssetLoader, AssetRequest, AssetSource, LoadTicket};
use crate::error::Error;
use crate::{engine_debug, engine_error};

pub struct ThreadedAssetLoader {
    source: Arc<dyn AssetSource>,
    sender: flume::Sender<AssetCompletion>,
    receiver: flume::Receiver<AssetCompletion>,
    in_flight: usize,
}

impl ThreadedAssetLoader {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            source: Arc::new(source),
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Wait up to `timeout` for at least one completion, then drain
    pub fn poll_blocking(&mut self, timeout: Duration) -> Vec<AssetCompletion> {
        if self.in_flight == 0 {
            return Vec::new();
        }
        let mut completions = Vec::new();
        if let Ok(first) = self.receiver.recv_timeout(timeout) {
            completions.push(first);
            completions.extend(self.receiver.try_iter());
        }
        self.in_flight = self.in_flight.saturating_sub(completions.len());
        completions
    }
}

impl AssetLoader for ThreadedAssetLoader {
    fn request(&mut self, ticket: LoadTicket, request: AssetRequest) {
        engine_debug!("galaxy3d::ThreadedAssetLoader", "Loading '{}' (ticket {})",
            request.label(), ticket.id);
        self.in_flight += 1;

        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let worker_request = request.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("galaxy3d-asset-{}", ticket.id))
            .spawn(move || {
                let result = source.fetch(&worker_request);
                // The loader may already be gone; nobody is waiting then
                let _ = sender.send(AssetCompletion { ticket, request: worker_request, result });
            });

        if let Err(e) = spawned {
            engine_error!("galaxy3d::ThreadedAssetLoader", "Failed to spawn loader thread: {}", e);
            let result = Err(Error::AssetLoad(format!("failed to spawn loader thread: {}", e)));
            let _ = self.sender.send(AssetCompletion { ticket, request, result });
        }
    }

    fn poll(&mut self) -> Vec<AssetCompletion> {
        let completions: Vec<AssetCompletion> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(completions.len());
        completions
    }

    fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
#[path = "threaded_loader_tests.rs"]
mod tests;

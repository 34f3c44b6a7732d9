//! Storage actor - runs blocking file I/O for saves and loads

use tokio::sync::mpsc;

use crate::messages::{AppEvent, StorageCommand, StorageResponse};
use crate::models::Request;
use crate::storage::store::Storage;

/// Storage actor; commands are handled one at a time so a save and a
/// following load are never reordered
pub struct StorageActor {
    storage: Storage,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl StorageActor {
    pub fn new(storage: Storage, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        StorageActor { storage, event_tx }
    }

    /// Run the storage actor message loop
    pub async fn run(self, mut cmd_rx: mpsc::UnboundedReceiver<StorageCommand>) {
        while let Some(cmd) = cmd_rx.recv().await {
            let response = match cmd {
                StorageCommand::Save(request) => {
                    tracing::info!(name = %request.name, "Saving request");
                    let storage = self.storage.clone();
                    let result = tokio::task::spawn_blocking(move || storage.save(&request)).await;
                    to_response(result, StorageResponse::Saved)
                }
                StorageCommand::LoadAll => {
                    let storage = self.storage.clone();
                    let result = tokio::task::spawn_blocking(move || storage.load_all()).await;
                    to_response(result, StorageResponse::Loaded)
                }
                StorageCommand::Shutdown => break,
            };

            if let StorageResponse::Loaded(requests) | StorageResponse::Saved(requests) = &response {
                tracing::debug!(count = requests.len(), dir = %self.storage.dir().display(), "Saved requests refreshed");
            }

            if self.event_tx.send(AppEvent::Storage(response)).is_err() {
                break;
            }
        }
    }
}

fn to_response(
    result: Result<anyhow::Result<Vec<Request>>, tokio::task::JoinError>,
    ok: fn(Vec<Request>) -> StorageResponse,
) -> StorageResponse {
    match result {
        Ok(Ok(requests)) => ok(requests),
        Ok(Err(e)) => StorageResponse::Failed(format!("{:#}", e)),
        Err(e) => StorageResponse::Failed(format!("Storage task failed: {}", e)),
    }
}

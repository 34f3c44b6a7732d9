//! App actor - single event loop owning the session state

use tokio::sync::mpsc;

use crate::app::state::{AppState, Effect};
use crate::messages::{AppEvent, NetworkCommand, RenderState, StorageCommand};

/// App actor that processes terminal input and background results
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    storage_tx: mpsc::UnboundedSender<StorageCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        storage_tx: mpsc::UnboundedSender<StorageCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            storage_tx,
            render_tx,
        }
    }

    /// Run the actor message loop until quit or until every sender is gone
    pub async fn run(mut self, mut event_rx: mpsc::UnboundedReceiver<AppEvent>) {
        let _ = self.storage_tx.send(StorageCommand::LoadAll);
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = event_rx.recv().await {
            let effect = match event {
                AppEvent::Key(key) => self.state.handle_key(key),
                AppEvent::Resize { width, height } => {
                    self.state.resize(width, height);
                    None
                }
                AppEvent::Network(response) => {
                    self.state.handle_network_response(response);
                    None
                }
                AppEvent::Storage(response) => {
                    self.state.handle_storage_response(response);
                    None
                }
            };

            if let Some(effect) = effect {
                if self.dispatch(effect) {
                    tracing::info!("Quit requested");
                    break;
                }
            }

            let _ = self.render_tx.send(self.state.to_render_state());
        }

        let _ = self.network_tx.send(NetworkCommand::Shutdown);
        let _ = self.storage_tx.send(StorageCommand::Shutdown);
    }

    /// Hand work to the owning actor. Returns true if quit was requested.
    fn dispatch(&self, effect: Effect) -> bool {
        match effect {
            Effect::Network(cmd) => {
                let _ = self.network_tx.send(cmd);
            }
            Effect::Storage(cmd) => {
                let _ = self.storage_tx.send(cmd);
            }
            Effect::Quit => return true,
        }
        false
    }
}

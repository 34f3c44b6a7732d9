//! Network actor - runs HTTP requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{AppEvent, NetworkCommand};
use crate::network::client::execute_request;

/// Network actor that processes send commands
pub struct NetworkActor {
    client: reqwest::Client,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: reqwest::Client, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        NetworkActor {
            client,
            event_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, request }) => {
                            let event_tx = self.event_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %request.url, method = request.method.as_str(), "Executing request");
                                let result = execute_request(&client, &request, id).await;
                                tracing::info!(id, "Request completed");
                                let _ = event_tx.send(AppEvent::Network(result));
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

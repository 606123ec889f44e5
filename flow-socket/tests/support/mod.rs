//! Shared recording doubles for integration tests.

use async_trait::async_trait;
use flow_socket::{
    ClientId, FlowContext, FlowMessage, Namespace, NodeStatus, OutputSlots, SocketTransport,
    TransportError,
};
use std::sync::Mutex;

/// Namespace double that records every emission and disconnect.
#[derive(Default)]
pub struct RecordingNamespace {
    pub clients: Vec<ClientId>,
    pub fail_disconnects: bool,
    pub broadcasts: Mutex<Vec<(String, FlowMessage)>>,
    pub targeted: Mutex<Vec<(ClientId, String, FlowMessage)>>,
    pub disconnected: Mutex<Vec<ClientId>>,
    pub listeners_removed: Mutex<bool>,
}

impl RecordingNamespace {
    pub fn with_clients(clients: &[&str]) -> Self {
        Self {
            clients: clients.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Namespace for RecordingNamespace {
    async fn emit(&self, channel: &str, message: &FlowMessage) -> Result<(), TransportError> {
        self.broadcasts
            .lock()
            .unwrap()
            .push((channel.to_string(), message.clone()));
        Ok(())
    }

    async fn emit_to(
        &self,
        client_id: &ClientId,
        channel: &str,
        message: &FlowMessage,
    ) -> Result<(), TransportError> {
        if !self.clients.contains(client_id) {
            return Err(TransportError::ClientGone(client_id.clone()));
        }
        self.targeted.lock().unwrap().push((
            client_id.clone(),
            channel.to_string(),
            message.clone(),
        ));
        Ok(())
    }

    async fn connected_clients(&self) -> Vec<ClientId> {
        self.clients.clone()
    }

    async fn disconnect(&self, client_id: &ClientId) -> Result<(), TransportError> {
        if self.fail_disconnects {
            return Err(TransportError::Disconnect("socket already closed".to_string()));
        }
        self.disconnected.lock().unwrap().push(client_id.clone());
        Ok(())
    }

    async fn remove_all_listeners(&self) {
        *self.listeners_removed.lock().unwrap() = true;
    }
}

/// Transport double tracking namespace deregistrations.
#[derive(Default)]
pub struct RecordingTransport {
    pub known_paths: Vec<String>,
    pub removed: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn with_namespace(base_path: &str) -> Self {
        Self {
            known_paths: vec![base_path.to_string()],
            ..Default::default()
        }
    }
}

#[async_trait]
impl SocketTransport for RecordingTransport {
    async fn remove_namespace(&self, base_path: &str) -> bool {
        self.removed.lock().unwrap().push(base_path.to_string());
        self.known_paths.iter().any(|path| path == base_path)
    }
}

/// Flow-runtime double recording statuses and downstream outputs.
#[derive(Default)]
pub struct RecordingFlow {
    pub statuses: Mutex<Vec<NodeStatus>>,
    pub outputs: Mutex<Vec<OutputSlots>>,
}

impl FlowContext for RecordingFlow {
    fn report_status(&self, status: NodeStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    fn send_output(&self, output: OutputSlots) {
        self.outputs.lock().unwrap().push(output);
    }
}

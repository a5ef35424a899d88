//! Transports whose replies are released by the test.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use realty_client::transport::{Request, Transport};
use realty_client::TransportError;
use serde_json::Value;
use tokio::sync::oneshot;

type Reply = Result<Value, TransportError>;

/// Each request waits on the next gate, in issue order.
#[derive(Default)]
pub struct Gated {
    gates: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    requests: Mutex<Vec<Request>>,
    arrived: AtomicUsize,
}

impl Gated {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a gate for the next request; send on the returned handle to
    /// let it complete.
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Wait until `n` requests have reached the transport.
    pub async fn arrived(&self, n: usize) {
        while self.arrived.load(Ordering::SeqCst) < n {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl Transport for Gated {
    async fn send(&self, request: Request) -> Reply {
        let gate = self.gates.lock().unwrap().pop_front();
        self.requests.lock().unwrap().push(request);
        self.arrived.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(gate) => gate
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
            None => Err(TransportError::Network("no gate queued".into())),
        }
    }
}

//! In-memory transports for unit tests

use crate::core::errors::FonbnkError;
use crate::core::kernel::transport::{AuthenticatedRequest, HttpTransport, RawResponse, ResponseBody};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Body that counts how often it is read and released
struct SpyBody {
    bytes: Vec<u8>,
    reads: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl Drop for SpyBody {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ResponseBody for SpyBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>, FonbnkError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.bytes.clone())
    }
}

/// Records every request and replays queued responses, `200 {}` once empty
#[derive(Default)]
pub(crate) struct FakeTransport {
    requests: Mutex<Vec<AuthenticatedRequest>>,
    responses: Mutex<VecDeque<(u16, Vec<u8>)>>,
    pub(crate) reads: Arc<AtomicUsize>,
    pub(crate) drops: Arc<AtomicUsize>,
}

impl FakeTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.push(status, body);
        Arc::new(transport)
    }

    pub(crate) fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.as_bytes().to_vec()));
    }

    pub(crate) fn sent(&self) -> Vec<AuthenticatedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: AuthenticatedRequest) -> Result<RawResponse, FonbnkError> {
        self.requests.lock().unwrap().push(request);
        let (status, bytes) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, b"{}".to_vec()));

        Ok(RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: Box::new(SpyBody {
                bytes,
                reads: self.reads.clone(),
                drops: self.drops.clone(),
            }),
        })
    }
}

/// Never answers
pub(crate) struct PendingTransport;

#[async_trait]
impl HttpTransport for PendingTransport {
    async fn send(&self, _request: AuthenticatedRequest) -> Result<RawResponse, FonbnkError> {
        std::future::pending().await
    }
}

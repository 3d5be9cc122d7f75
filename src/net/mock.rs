//! Scripted `Transport` for tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::http::{ApiClient, ApiError, OutboundRequest, RawResponse, Transport};
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::MemoryStorage;
use crate::util::token_store::TokenStore;

pub const TEST_BASE_URL: &str = "http://backend.test/api";

type Scripted = (String, Result<RawResponse, ApiError>);

/// Answers requests whose URL contains a registered fragment, first match
/// wins, each scripted response used once. Unmatched requests fail as
/// transport errors. Clones share the script and the request log.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Vec<Scripted>>>,
    sent: Rc<RefCell<Vec<OutboundRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url_fragment: &str, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push((url_fragment.to_owned(), Ok(RawResponse::new(status, body))));
    }

    pub fn fail(&self, url_fragment: &str, message: &str) {
        self.script
            .borrow_mut()
            .push((url_fragment.to_owned(), Err(ApiError::Transport(message.to_owned()))));
    }

    pub fn sent(&self) -> Vec<OutboundRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ApiError> {
        let position = self
            .script
            .borrow()
            .iter()
            .position(|(fragment, _)| request.url.contains(fragment.as_str()));
        self.sent.borrow_mut().push(request);
        match position {
            Some(i) => self.script.borrow_mut().remove(i).1,
            None => Err(ApiError::Transport("no scripted response".to_owned())),
        }
    }
}

pub type TestClient = ApiClient<MemoryStorage, ScriptedTransport, RecordingNavigator>;

/// A client plus handles onto its storage, transport, and navigator.
pub struct Harness {
    pub client: TestClient,
    pub storage: MemoryStorage,
    pub transport: ScriptedTransport,
    pub navigator: RecordingNavigator,
}

impl Harness {
    pub fn new() -> Self {
        let storage = MemoryStorage::new();
        let transport = ScriptedTransport::new();
        let navigator = RecordingNavigator::new();
        let client = ApiClient::new(
            TEST_BASE_URL,
            TokenStore::new(storage.clone()),
            transport.clone(),
            navigator.clone(),
        );
        Self { client, storage, transport, navigator }
    }

    pub fn logged_in(token: &str, email: &str) -> Self {
        let harness = Self::new();
        harness.client.token_store().save(token, email);
        harness
    }

    pub fn store(&self) -> TokenStore<MemoryStorage> {
        TokenStore::new(self.storage.clone())
    }
}

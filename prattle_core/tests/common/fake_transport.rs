//! A deterministic in-process stand-in for the transport.
//!
//! * Script the status the command layer reads, and the status a connect
//!   dispatch returns, via the builder methods.
//! * Inspect every dispatch the command layer made via `details_calls`
//!   and `account_calls`.
//!
//! This lets the command tests exercise the real orchestration logic
//! without opening a socket.

use std::sync::Mutex;

use async_trait::async_trait;
use prattle_core::{AccountProfile, ConnectionStatus, Transport};

/// One recorded `connect_with_details` dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsCall {
    pub jid: String,
    pub password: String,
    pub server: Option<String>,
    pub port: u16,
}

pub struct FakeTransport {
    status: Mutex<ConnectionStatus>,
    dial_result: ConnectionStatus,
    account: Mutex<Option<String>>,
    pub details_calls: Mutex<Vec<DetailsCall>>,
    pub account_calls: Mutex<Vec<AccountProfile>>,
}

impl FakeTransport {
    pub fn with_status(status: ConnectionStatus) -> Self {
        Self {
            status: Mutex::new(status),
            dial_result: ConnectionStatus::Connecting,
            account: Mutex::new(None),
            details_calls: Mutex::new(Vec::new()),
            account_calls: Mutex::new(Vec::new()),
        }
    }

    /// Idle transport whose dials are accepted.
    pub fn idle() -> Self {
        Self::with_status(ConnectionStatus::Disconnected)
    }

    /// Script the status a connect dispatch returns.
    pub fn dial_returns(mut self, status: ConnectionStatus) -> Self {
        self.dial_result = status;
        self
    }

    /// Script the current session's account name.
    pub fn with_account_name(self, name: &str) -> Self {
        *self.account.lock().unwrap() = Some(name.to_string());
        self
    }

    pub fn details_calls(&self) -> Vec<DetailsCall> {
        self.details_calls.lock().unwrap().clone()
    }

    pub fn account_calls(&self) -> Vec<AccountProfile> {
        self.account_calls.lock().unwrap().clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.details_calls.lock().unwrap().len() + self.account_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn status(&self) -> ConnectionStatus {
        *self.status.lock().unwrap()
    }

    async fn account_name(&self) -> Option<String> {
        self.account.lock().unwrap().clone()
    }

    async fn connect_with_details(
        &self,
        jid: &str,
        password: &str,
        server: Option<&str>,
        port: u16,
    ) -> ConnectionStatus {
        self.details_calls.lock().unwrap().push(DetailsCall {
            jid: jid.to_string(),
            password: password.to_string(),
            server: server.map(str::to_string),
            port,
        });
        self.dial_result
    }

    async fn connect_with_account(&self, account: &AccountProfile) -> ConnectionStatus {
        self.account_calls.lock().unwrap().push(account.clone());
        self.dial_result
    }

    async fn disconnect(&self) -> ConnectionStatus {
        *self.status.lock().unwrap() = ConnectionStatus::Disconnected;
        *self.account.lock().unwrap() = None;
        ConnectionStatus::Disconnected
    }
}

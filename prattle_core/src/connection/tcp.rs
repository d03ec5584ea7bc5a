use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::{debug, error, info};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::{broadcast, mpsc, Mutex as AsyncMutex};

use crate::accounts::profile::AccountProfile;

use super::errors::ConnectionError;
use super::status::ConnectionStatus;
use super::transport::Transport;

/// Default client-to-server port when neither the account nor the command
/// line overrides it.
pub const DEFAULT_PORT: u16 = 5222;

enum IoEvent {
    Write(Vec<u8>),
    Stop,
}

/// Per-session I/O bookkeeping.
///
/// 1. `io_task` reads from the socket and broadcasts received chunks
///    (via `broadcast_tx`) to all listeners (e.g. the console).
/// 2. `write_stop_tx` is exposed through the public API (`write_bytes`,
///    `disconnect`) so UIs can send data to, and stop, the session.
struct Session {
    io_task: tokio::task::JoinHandle<()>,
    write_stop_tx: mpsc::Sender<IoEvent>,
    broadcast_tx: broadcast::Sender<Vec<u8>>,
}

/// TCP-backed transport for a single client session.
///
/// Owns the shared `ConnectionStatus` and is its only writer once a dial has
/// been dispatched. A successful dial leaves the status at `Connecting`;
/// stream negotiation (and the move to `Connected`) belongs to the layer
/// above and is not handled here. The I/O task flips the status back to
/// `Disconnected` when the peer closes the stream or a read fails.
pub struct TcpTransport {
    status: Arc<Mutex<ConnectionStatus>>,
    session: AsyncMutex<Option<Session>>,
    account: Mutex<Option<String>>,
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TcpTransport {
    pub fn new() -> Self {
        Self {
            status: Arc::new(Mutex::new(ConnectionStatus::Disconnected)),
            session: AsyncMutex::new(None),
            account: Mutex::new(None),
        }
    }

    fn set_status(&self, status: ConnectionStatus) {
        *self.status.lock().unwrap() = status;
    }

    fn current_status(&self) -> ConnectionStatus {
        *self.status.lock().unwrap()
    }

    /// Subscribe to the raw byte stream of the current session, if any.
    pub async fn subscribe(&self) -> Option<broadcast::Receiver<Vec<u8>>> {
        let session = self.session.lock().await;
        session.as_ref().map(|s| s.broadcast_tx.subscribe())
    }

    /// Write bytes to the current session.
    pub async fn write_bytes(&self, data: &[u8]) -> Result<usize, ConnectionError> {
        let session = self.session.lock().await;
        match session.as_ref() {
            Some(s) => {
                debug!("write: {:?}", data);
                s.write_stop_tx
                    .send(IoEvent::Write(data.to_vec()))
                    .await
                    .map_err(|_| ConnectionError::Other("I/O task channel closed".into()))?;
                Ok(data.len())
            }
            None => Err(ConnectionError::Other("No active connection".into())),
        }
    }

    /// Dial `host:port` and, on success, spawn the per-session I/O task.
    async fn open(&self, jid: &str, host: &str, port: u16) -> ConnectionStatus {
        self.set_status(ConnectionStatus::Connecting);
        info!("Opening stream to {}:{} for '{}'", host, port, jid);

        let mut stream = match TcpStream::connect((host, port)).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("Connect to {}:{} failed: {}", host, port, e);
                self.set_status(ConnectionStatus::Disconnected);
                return ConnectionStatus::Disconnected;
            }
        };

        // Broadcast bytes from the session to all listeners (UIs)
        let (broadcast_tx, _) = broadcast::channel::<Vec<u8>>(256);

        // Channel public API -> I/O task.
        let (write_stop_tx, mut write_stop_rx) = mpsc::channel::<IoEvent>(32);

        let jid_clone = jid.to_string();
        let status_clone = Arc::clone(&self.status);
        let broadcast_tx_clone = broadcast_tx.clone();
        let io_task = tokio::spawn(async move {
            info!("I/O task started for '{}'.", jid_clone);
            let mut buf = [0u8; 4096];
            loop {
                // Awaits concurrently for write/stop events and socket reads
                tokio::select! {
                    Some(event) = write_stop_rx.recv() => {
                        match event {
                            IoEvent::Write(data) => {
                                if let Err(e) = stream.write_all(&data).await {
                                    error!("Write error on '{}': {}", jid_clone, e);
                                }
                            },
                            IoEvent::Stop => {
                                info!("Stop received for '{}'. Exiting task.", jid_clone);
                                break;
                            },
                        }
                    },
                    result = stream.read(&mut buf) => {
                        match result {
                            Ok(0) => {
                                debug!("Stream closed by peer for '{}'", jid_clone);
                                break;
                            },
                            Ok(n) => {
                                debug!("Read {} bytes from '{}'", n, jid_clone);
                                let _ = broadcast_tx_clone.send(buf[..n].to_vec());
                            },
                            Err(e) => {
                                debug!("Read error on '{}': {}", jid_clone, e);
                                break;
                            },
                        }
                    }
                }
            }
            *status_clone.lock().unwrap() = ConnectionStatus::Disconnected;
            info!("I/O task ended for '{}'.", jid_clone);
        });

        {
            let mut session = self.session.lock().await;
            *session = Some(Session {
                io_task,
                write_stop_tx,
                broadcast_tx,
            });
        }
        *self.account.lock().unwrap() = Some(jid.to_string());

        ConnectionStatus::Connecting
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn status(&self) -> ConnectionStatus {
        self.current_status()
    }

    async fn account_name(&self) -> Option<String> {
        self.account.lock().unwrap().clone()
    }

    async fn connect_with_details(
        &self,
        jid: &str,
        _password: &str,
        server: Option<&str>,
        port: u16,
    ) -> ConnectionStatus {
        // Credentials are consumed by the negotiation layer above; the dial
        // itself only needs a host and port.
        let host = server.unwrap_or_else(|| jid_domain(jid)).to_string();
        let port = if port == 0 { DEFAULT_PORT } else { port };
        self.open(jid, &host, port).await
    }

    async fn connect_with_account(&self, account: &AccountProfile) -> ConnectionStatus {
        let host = account
            .server
            .clone()
            .unwrap_or_else(|| jid_domain(&account.jid).to_string());
        let port = if account.port == 0 {
            DEFAULT_PORT
        } else {
            account.port
        };
        let status = self.open(&account.jid, &host, port).await;
        if status == ConnectionStatus::Connecting {
            *self.account.lock().unwrap() = Some(account.name.clone());
        }
        status
    }

    async fn disconnect(&self) -> ConnectionStatus {
        let session = self.session.lock().await.take();
        let Some(session) = session else {
            return self.current_status();
        };
        self.set_status(ConnectionStatus::Disconnecting);
        let _ = session.write_stop_tx.send(IoEvent::Stop).await;
        let _ = session.io_task.await;
        self.set_status(ConnectionStatus::Disconnected);
        *self.account.lock().unwrap() = None;
        ConnectionStatus::Disconnected
    }
}

/// Host part of a bare or full JID ("user@host/resource" -> "host").
fn jid_domain(jid: &str) -> &str {
    let bare = jid.split_once('/').map_or(jid, |(bare, _)| bare);
    bare.split_once('@').map_or(bare, |(_, domain)| domain)
}

//! Dictionary Session
//!
//! A connected, stateful conversation with one DICT server.

use std::net::{Shutdown, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::Connection;
use crate::config::Config;
use crate::error::{DictError, Result};
use crate::model::{Database, DatabaseRegistry, Definition, MatchingStrategy};
use crate::protocol::status::{self, status_code};
use crate::protocol::{
    expect_status, read_database_list, read_definitions, read_line, read_match_list,
    read_strategy_list, Command,
};

/// Lifecycle of a session
///
/// Connecting happens inside [`DictSession::connect`]; a session value only
/// exists once the greeting was accepted, so it starts out `Connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Closed,
}

/// A session with a DICT server
///
/// ## Concurrency Model
///
/// DICT allows one command in flight per connection. Every operation takes
/// the session lock for its whole request/reply exchange, so a session can
/// be shared across threads (`Arc<DictSession>`) and callers simply queue.
///
/// Operations block until the reply is fully read. Without a configured read
/// timeout a silent server blocks forever; an [`InterruptHandle`] taken
/// beforehand can shut the socket from another thread.
pub struct DictSession {
    /// Connection, state and registry, guarded together
    inner: Mutex<SessionInner>,

    /// Shared with interrupt handles, usable without the lock
    interrupt: Arc<Interrupt>,

    host: String,
    port: u16,
}

struct SessionInner {
    state: SessionState,

    /// `None` once the session is closed
    connection: Option<Connection>,

    /// Databases advertised by the server, filled on first need
    databases: DatabaseRegistry,
}

struct Interrupt {
    stream: TcpStream,
    requested: AtomicBool,
}

/// Cancels whatever the session is doing by shutting its socket
///
/// The session is unusable afterwards.
#[derive(Clone)]
pub struct InterruptHandle {
    interrupt: Arc<Interrupt>,
}

impl InterruptHandle {
    pub fn interrupt(&self) {
        tracing::debug!("Interrupting session");
        self.interrupt.requested.store(true, Ordering::SeqCst);
        let _ = self.interrupt.stream.shutdown(Shutdown::Both);
    }
}

impl DictSession {
    // =========================================================================
    // Connection Lifecycle
    // =========================================================================

    /// Connect to `host:port` and complete the greeting
    pub fn open(host: &str, port: u16) -> Result<Self> {
        let config = Config::builder().host(host).port(port).build();
        Self::connect(&config)
    }

    /// Connect to `host` on the default DICT port
    pub fn open_default(host: &str) -> Result<Self> {
        Self::connect(&Config::builder().host(host).build())
    }

    /// Connect using a full configuration
    ///
    /// Steps:
    /// 1. Open the TCP connection
    /// 2. Read the greeting, which must be `220`
    /// 3. Send `CLIENT` if configured, which must be answered with `250`
    pub fn connect(config: &Config) -> Result<Self> {
        tracing::debug!(host = %config.host, port = config.port, "Connecting");
        let mut connection = Connection::open(config)?;

        let greeting = read_line(connection.reader()).map_err(handshake_error)?;
        if status_code(&greeting) != Some(status::READY) {
            let _ = connection.shutdown();
            return Err(DictError::connection(format!(
                "server refused session: {}",
                greeting
            )));
        }
        tracing::debug!(greeting = %greeting, "Greeting received");

        if let Some(text) = &config.client_text {
            connection.send(&Command::client(text)?)?;
            expect_status(connection.reader(), status::OK).map_err(handshake_error)?;
        }

        let interrupt = Arc::new(Interrupt {
            stream: connection.try_clone_stream()?,
            requested: AtomicBool::new(false),
        });

        tracing::info!(
            host = %config.host,
            port = config.port,
            peer = %connection.peer_addr(),
            "Connected to DICT server"
        );

        Ok(Self {
            inner: Mutex::new(SessionInner {
                state: SessionState::Connected,
                connection: Some(connection),
                databases: DatabaseRegistry::new(),
            }),
            interrupt,
            host: config.host.clone(),
            port: config.port,
        })
    }

    /// Send `QUIT` and close the socket
    ///
    /// Never fails; errors while saying goodbye are logged and dropped.
    /// Calling it again is a no-op.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if let Some(mut connection) = inner.connection.take() {
            tracing::debug!(peer = %connection.peer_addr(), "Terminating connection");
            if let Err(e) = connection.send(&Command::Quit) {
                tracing::debug!("QUIT not delivered: {}", e);
            }
            if let Err(e) = connection.shutdown() {
                tracing::debug!("Error shutting down socket: {}", e);
            }
            tracing::info!(host = %self.host, port = self.port, "Connection terminated");
        }
        inner.state = SessionState::Closed;
    }

    /// Handle that can cancel an operation from another thread
    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle {
            interrupt: Arc::clone(&self.interrupt),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Databases offered by the server, in advertised order
    ///
    /// Issues `SHOW DB` only while the registry is empty; later calls are
    /// served from the registry.
    pub fn list_databases(&self) -> Result<Vec<Arc<Database>>> {
        self.with_connection(ensure_databases)
    }

    /// Matching strategies supported by the server (`SHOW STRAT`)
    pub fn list_strategies(&self) -> Result<Vec<MatchingStrategy>> {
        self.with_connection(|connection, _| {
            connection.send(&Command::ShowStrat)?;
            read_strategy_list(connection.reader())
        })
    }

    /// Definitions of `word` from `database` (a name, `*` or `!`)
    ///
    /// Lists the databases first if that has not happened yet, so headers
    /// can be resolved to registry entries.
    pub fn define(&self, word: &str, database: &str) -> Result<Vec<Definition>> {
        let command = Command::define(database, word)?;
        self.with_connection(|connection, databases| {
            ensure_databases(connection, databases)?;
            connection.send(&command)?;
            read_definitions(connection.reader(), databases)
        })
    }

    /// Words matching `word` under `strategy` in `database`, without repeats
    pub fn match_word(&self, word: &str, strategy: &str, database: &str) -> Result<Vec<String>> {
        let command = Command::match_word(database, strategy, word)?;
        self.with_connection(|connection, _| {
            connection.send(&command)?;
            read_match_list(connection.reader())
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> SessionState {
        self.inner.lock().state
    }

    pub fn is_connected(&self) -> bool {
        self.state() == SessionState::Connected
    }

    /// Remote address, while connected
    pub fn peer_addr(&self) -> Option<String> {
        let inner = self.inner.lock();
        inner.connection.as_ref().map(|c| c.peer_addr().to_string())
    }

    /// A database from the registry, if already listed
    pub fn database(&self, name: &str) -> Option<Arc<Database>> {
        self.inner.lock().databases.get(name)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Run one exchange under the session lock
    ///
    /// Connection failures, protocol errors and interrupts can leave unread
    /// reply lines on the socket, so they close the session. Rejections
    /// (550, 551, 501) end their reply and keep it open.
    fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Connection, &mut DatabaseRegistry) -> Result<T>,
    {
        let mut inner = self.inner.lock();
        if self.interrupted() {
            inner.mark_closed();
        }

        let SessionInner {
            state,
            connection,
            databases,
        } = &mut *inner;
        let connection = match (state, connection.as_mut()) {
            (SessionState::Connected, Some(connection)) => connection,
            _ => return Err(DictError::NotConnected),
        };

        let result = op(connection, databases);

        if let Err(e) = &result {
            let out_of_sync = matches!(e, DictError::Connection { .. } | DictError::Protocol(_));
            if self.interrupted() || out_of_sync {
                tracing::warn!(host = %self.host, "Session closed after error: {}", e);
                inner.mark_closed();
            }
        }
        result
    }

    fn interrupted(&self) -> bool {
        self.interrupt.requested.load(Ordering::SeqCst)
    }
}

impl Drop for DictSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl SessionInner {
    fn mark_closed(&mut self) {
        if let Some(connection) = self.connection.take() {
            let _ = connection.shutdown();
        }
        self.state = SessionState::Closed;
    }
}

/// Fill the registry on first use, then answer from it
fn ensure_databases(
    connection: &mut Connection,
    databases: &mut DatabaseRegistry,
) -> Result<Vec<Arc<Database>>> {
    if !databases.is_empty() {
        return Ok(databases.databases());
    }

    connection.send(&Command::ShowDb)?;
    for database in read_database_list(connection.reader())? {
        databases.insert(database);
    }
    tracing::debug!(count = databases.len(), "Database registry populated");

    Ok(databases.databases())
}

/// Failures before the session exists are all connection failures
fn handshake_error(err: DictError) -> DictError {
    match err {
        DictError::Protocol(message) => DictError::connection(message),
        other => other,
    }
}

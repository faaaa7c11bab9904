//! Lifecycle and message dispatch for the single telemetry connection.
//!
//! The manager owns at most one live transport. Browser (or test) callbacks
//! feed it `handle_*` events tagged with the [`ConnectionId`] they belong to,
//! so events from a superseded socket are dropped instead of reviving state
//! that the owner already tore down.
//!
//! ```text
//! Disconnected --connect--> Connecting --open--> Ready
//!      ^                        |                  |
//!      +------ Closing <--------+---error/close----+
//! ```

use crate::error::{CoreError, CoreResult};
use crate::protocol::{Inbound, Outbound};
use fnv::FnvHashMap;

/// Outgoing half of a streaming connection.
pub trait Transport {
    fn send_text(&mut self, text: &str) -> CoreResult<()>;
    /// Close the underlying connection. Called at most once per instance.
    fn close(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Ready,
    Closing,
}

/// Identity of one connection instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Why a connection instance ended.
#[derive(Clone, Debug, PartialEq)]
pub enum CloseReason {
    /// Transport reported a failure.
    Error(String),
    /// Remote side (or network) closed the stream.
    Closed { code: u16, reason: String },
    /// Owner closed it locally.
    Teardown,
}

pub type Handler = Box<dyn FnMut(&Inbound) -> CoreResult<()>>;
pub type ClosedHook = Box<dyn FnMut(ConnectionId, &CloseReason)>;

struct Live<T> {
    id: ConnectionId,
    transport: T,
}

pub struct ConnectionManager<T: Transport> {
    state: ConnectionState,
    live: Option<Live<T>>,
    next_id: u64,
    handlers: FnvHashMap<String, Handler>,
    on_closed: Option<ClosedHook>,
}

impl<T: Transport> Default for ConnectionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ConnectionManager<T> {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            live: None,
            next_id: 0,
            handlers: FnvHashMap::default(),
            on_closed: None,
        }
    }

    /// Register the handler for a tag, replacing any previous one.
    pub fn on(&mut self, tag: &str, handler: impl FnMut(&Inbound) -> CoreResult<()> + 'static) {
        self.handlers.insert(tag.to_string(), Box::new(handler));
    }

    /// Hook run exactly once per connection instance when it ends.
    pub fn set_on_closed(&mut self, hook: impl FnMut(ConnectionId, &CloseReason) + 'static) {
        self.on_closed = Some(Box::new(hook));
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ConnectionState::Ready
    }

    pub fn connection_id(&self) -> Option<ConnectionId> {
        self.live.as_ref().map(|l| l.id)
    }

    /// Reserve the id for the next connection so the caller can tag its
    /// transport callbacks before the transport exists.
    pub fn next_connection_id(&self) -> ConnectionId {
        ConnectionId(self.next_id)
    }

    /// Adopt a freshly opened transport. A previous live connection is torn
    /// down first.
    pub fn connect(&mut self, transport: T) -> ConnectionId {
        if self.live.is_some() {
            self.close();
        }
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.live = Some(Live { id, transport });
        self.state = ConnectionState::Connecting;
        log::info!("[socket] #{} connecting", id.0);
        id
    }

    pub fn handle_open(&mut self, id: ConnectionId) {
        if !self.is_current(id) {
            log::debug!("[socket] open from stale #{}", id.0);
            return;
        }
        if self.state == ConnectionState::Connecting {
            self.state = ConnectionState::Ready;
            log::info!("[socket] #{} ready", id.0);
        }
    }

    /// Decode and dispatch one inbound text frame.
    ///
    /// Frames for stale ids or arriving outside `Ready` are dropped. Unknown
    /// tags are ignored. Decode and handler failures are returned.
    pub fn handle_message(&mut self, id: ConnectionId, text: &str) -> CoreResult<()> {
        if !self.is_current(id) || self.state != ConnectionState::Ready {
            log::debug!("[socket] dropping frame for #{} in {:?}", id.0, self.state);
            return Ok(());
        }
        let frame = Inbound::decode(text)?;
        match self.handlers.get_mut(frame.tag()) {
            Some(handler) => handler(&frame),
            None => {
                log::debug!("[socket] ignoring tag `{}`", frame.tag());
                Ok(())
            }
        }
    }

    pub fn handle_error(&mut self, id: ConnectionId, detail: impl Into<String>) {
        if self.is_current(id) {
            let detail = detail.into();
            log::warn!("[socket] #{} error: {}", id.0, detail);
            self.shut_down(CloseReason::Error(detail), true);
        }
    }

    /// The transport reports it is closed; no explicit close is needed.
    pub fn handle_close(&mut self, id: ConnectionId, code: u16, reason: impl Into<String>) {
        if self.is_current(id) {
            let reason = reason.into();
            log::info!("[socket] #{} closed ({}) {}", id.0, code, reason);
            self.shut_down(CloseReason::Closed { code, reason }, false);
        }
    }

    /// Owner-initiated teardown. No-op when nothing is live.
    pub fn close(&mut self) {
        if self.live.is_some() {
            self.shut_down(CloseReason::Teardown, true);
        }
    }

    /// Send a frame. Only valid while `Ready`; anything else is a caller bug.
    pub fn emit(&mut self, message: &Outbound) -> CoreResult<()> {
        match (&mut self.live, self.state) {
            (Some(live), ConnectionState::Ready) => live.transport.send_text(&message.encode()),
            (_, state) => {
                log::error!("[socket] emit `{}` while {:?}", message.tag(), state);
                Err(CoreError::NotReady { state })
            }
        }
    }

    /// Send raw text (greeting, keepalive). Same readiness rule as `emit`.
    pub fn send_text(&mut self, text: &str) -> CoreResult<()> {
        match (&mut self.live, self.state) {
            (Some(live), ConnectionState::Ready) => live.transport.send_text(text),
            (_, state) => Err(CoreError::NotReady { state }),
        }
    }

    fn is_current(&self, id: ConnectionId) -> bool {
        self.live.as_ref().is_some_and(|l| l.id == id)
    }

    fn shut_down(&mut self, reason: CloseReason, close_transport: bool) {
        let Some(mut live) = self.live.take() else {
            return;
        };
        self.state = ConnectionState::Closing;
        if close_transport {
            live.transport.close();
        }
        self.state = ConnectionState::Disconnected;
        if let Some(hook) = self.on_closed.as_mut() {
            hook(live.id, &reason);
        }
    }
}

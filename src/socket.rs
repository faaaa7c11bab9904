//! Browser WebSocket bound to the core connection manager.
//!
//! Each socket gets its own set of callbacks tagged with the connection id
//! the manager will assign, so a late event from a replaced socket is
//! recognized as stale by the manager.

use crate::app::Shared;
use fsr_core::{ConnectionId, ConnectionManager, CoreError, CoreResult, Transport};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct SocketClosures {
    _open: Closure<dyn FnMut(web::Event)>,
    _message: Closure<dyn FnMut(web::MessageEvent)>,
    _error: Closure<dyn FnMut(web::Event)>,
    _close: Closure<dyn FnMut(web::CloseEvent)>,
}

pub struct WebSocketTransport {
    ws: web::WebSocket,
    closures: Option<SocketClosures>,
    closed: bool,
}

impl WebSocketTransport {
    fn detach(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        // The manager may drop us from inside one of these callbacks; free
        // them once the current callback has returned.
        if let Some(closures) = self.closures.take() {
            wasm_bindgen_futures::spawn_local(async move {
                drop(closures);
            });
        }
    }
}

impl Transport for WebSocketTransport {
    fn send_text(&mut self, text: &str) -> CoreResult<()> {
        self.ws
            .send_with_str(text)
            .map_err(|e| CoreError::Transport(format!("{:?}", e)))
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.detach();
            _ = self.ws.close();
        }
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.detach();
    }
}

// Text frames arrive as strings; some firmware sends the same JSON as binary.
fn frame_text(data: &wasm_bindgen::JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    let buf = data.dyn_ref::<js_sys::ArrayBuffer>()?;
    String::from_utf8(js_sys::Uint8Array::new(buf).to_vec()).ok()
}

type Manager = RefCell<ConnectionManager<WebSocketTransport>>;

fn wire(ws: &web::WebSocket, id: ConnectionId, shared: &Shared) -> SocketClosures {
    let conn: Weak<Manager> = Rc::downgrade(&shared.connection);

    let open = {
        let conn = conn.clone();
        let shared = shared.clone();
        Closure::wrap(Box::new(move |_ev: web::Event| {
            let Some(conn) = conn.upgrade() else { return };
            let ready = {
                let mut c = conn.borrow_mut();
                c.handle_open(id);
                c.is_ready() && c.connection_id() == Some(id)
            };
            if !ready {
                return;
            }
            shared.reconnect_attempts.set(0);
            shared.dashboard.borrow_mut().on_connected();
            shared.panel_dirty.set(true);
            let greeting = shared.dashboard.borrow().config().greeting.clone();
            if !greeting.is_empty() {
                if let Err(e) = conn.borrow_mut().send_text(&greeting) {
                    log::warn!("[socket] greeting not sent: {}", e);
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    let message = {
        let conn = conn.clone();
        let dirty = shared.panel_dirty.clone();
        Closure::wrap(Box::new(move |ev: web::MessageEvent| {
            let Some(conn) = conn.upgrade() else { return };
            let Some(text) = frame_text(&ev.data()) else {
                log::warn!("[socket] ignoring undecodable frame");
                return;
            };
            let result = conn.borrow_mut().handle_message(id, &text);
            match result {
                Ok(()) => dirty.set(true),
                Err(e) => log::warn!("[socket] {}", e),
            }
        }) as Box<dyn FnMut(_)>)
    };

    let error = {
        let conn = conn.clone();
        Closure::wrap(Box::new(move |_ev: web::Event| {
            if let Some(conn) = conn.upgrade() {
                conn.borrow_mut().handle_error(id, "websocket error");
            }
        }) as Box<dyn FnMut(_)>)
    };

    let close = Closure::wrap(Box::new(move |ev: web::CloseEvent| {
        if let Some(conn) = conn.upgrade() {
            conn.borrow_mut().handle_close(id, ev.code(), ev.reason());
        }
    }) as Box<dyn FnMut(_)>);

    ws.set_onopen(Some(open.as_ref().unchecked_ref()));
    ws.set_onmessage(Some(message.as_ref().unchecked_ref()));
    ws.set_onerror(Some(error.as_ref().unchecked_ref()));
    ws.set_onclose(Some(close.as_ref().unchecked_ref()));

    SocketClosures {
        _open: open,
        _message: message,
        _error: error,
        _close: close,
    }
}

/// Dial the endpoint and hand the socket to the connection manager.
pub fn open(shared: &Shared) -> anyhow::Result<ConnectionId> {
    let ws = web::WebSocket::new(&shared.endpoint).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ws.set_binary_type(web::BinaryType::Arraybuffer);
    let id = shared.connection.borrow().next_connection_id();
    let closures = wire(&ws, id, shared);
    let transport = WebSocketTransport {
        ws,
        closures: Some(closures),
        closed: false,
    };
    let assigned = shared.connection.borrow_mut().connect(transport);
    debug_assert_eq!(assigned, id);
    log::info!("[socket] dialing {}", shared.endpoint);
    Ok(assigned)
}

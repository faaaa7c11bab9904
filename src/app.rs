use crate::dom::Listeners;
use crate::socket::WebSocketTransport;
use fsr_core::{
    Camera, ConnectionManager, Dashboard, HitTestController, MotionController, MotionTarget,
    SceneGraph, Tilt,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Scene-side state mutated by clicks and the frame tick.
pub struct View {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub motion: MotionController<MotionTarget>,
    pub picker: HitTestController,
    pub tilt: Tilt,
}

/// Handles shared by listeners, socket callbacks and the frame loop. Every
/// field is owned by the single page-level app; clones only share it.
#[derive(Clone)]
pub struct Shared {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub endpoint: Rc<str>,
    pub dashboard: Rc<RefCell<Dashboard>>,
    pub connection: Rc<RefCell<ConnectionManager<WebSocketTransport>>>,
    pub view: Rc<RefCell<View>>,
    pub listeners: Rc<RefCell<Listeners>>,
    /// Set whenever the readout may have changed; cleared by the frame tick.
    pub panel_dirty: Rc<Cell<bool>>,
    /// When the host should dial again, if a reconnect is pending.
    pub reconnect_at: Rc<Cell<Option<Instant>>>,
    pub reconnect_attempts: Rc<Cell<u32>>,
    pub running: Rc<Cell<bool>>,
}

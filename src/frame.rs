use crate::app::{Shared, View};
use crate::constants::STATUS_ID;
use crate::dom;
use crate::input;
use crate::panel::{self, PanelRenderer};
use crate::render;
use crate::socket;
use fsr_core::{ConnectionState, Dashboard, NodeId};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub shared: Shared,
    pub ctx2d: Option<web::CanvasRenderingContext2d>,
    pub panel: PanelRenderer,
    pub pad_nodes: Vec<NodeId>,
    pub last_instant: Instant,
    pub last_state: Option<ConnectionState>,
}

impl FrameContext {
    pub fn new(shared: Shared, pad_nodes: Vec<NodeId>) -> Self {
        let ctx2d = render::context_2d(&shared.canvas);
        if ctx2d.is_none() {
            log::error!("[frame] 2d context unavailable; scene will not be drawn");
        }
        Self {
            shared,
            ctx2d,
            panel: PanelRenderer::default(),
            pad_nodes,
            last_instant: Instant::now(),
            last_state: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.maybe_reconnect(now);

        let state = self.shared.connection.borrow().state();
        if self.last_state != Some(state) {
            dom::set_text(&self.shared.document, STATUS_ID, &format!("{:?}", state));
            self.last_state = Some(state);
        }

        let backing = input::canvas_backing_size(&self.shared.canvas);
        {
            let mut view = self.shared.view.borrow_mut();
            let View {
                scene,
                camera,
                motion,
                picker,
                ..
            } = &mut *view;
            motion.advance(dt, |target, value| {
                picker.apply_motion(target, value, camera, scene)
            });
            picker.sync_emphasis(scene, self.shared.dashboard.borrow().selection());
            camera.set_viewport(backing.x, backing.y);
        }

        if let Some(ctx) = &self.ctx2d {
            render::draw(ctx, &self.shared.view.borrow(), &self.pad_nodes, backing, state);
        }

        if self.shared.panel_dirty.replace(false) {
            let d = self.shared.dashboard.borrow();
            panel::set_visible(&self.shared.document, d.panel_open());
            if d.panel_open() {
                self.panel.render(&self.shared.document, &d.readout());
            } else {
                self.panel.invalidate();
            }
        }
        panel::apply_tilt(&self.shared.document, self.shared.view.borrow().tilt);
    }

    fn maybe_reconnect(&mut self, now: Instant) {
        let Some(at) = self.shared.reconnect_at.get() else {
            return;
        };
        if now < at {
            return;
        }
        self.shared.reconnect_at.set(None);
        if let Err(e) = socket::open(&self.shared) {
            log::error!("[frame] reconnect failed: {:?}", e);
            schedule_reconnect(
                &self.shared.dashboard.borrow(),
                &self.shared.reconnect_attempts,
                &self.shared.reconnect_at,
            );
        }
    }
}

/// Arm the next reconnect attempt according to the configured policy.
pub fn schedule_reconnect(
    dashboard: &Dashboard,
    attempts: &Cell<u32>,
    reconnect_at: &Cell<Option<Instant>>,
) {
    let attempt = attempts.get();
    match dashboard.config().reconnect.delay(attempt) {
        Some(d) => {
            attempts.set(attempt.saturating_add(1));
            reconnect_at.set(Some(Instant::now() + d));
            log::info!("[frame] reconnecting in {} ms (attempt {})", d.as_millis(), attempt + 1);
        }
        None => reconnect_at.set(None),
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().shared.running.get() {
            // Breaks the closure's self-reference so it can be freed.
            let dead = tick_clone.borrow_mut().take();
            wasm_bindgen_futures::spawn_local(async move {
                drop(dead);
            });
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
use crate::app::{Shared, View};
use crate::constants::{CANVAS_ID, CONFIG_SCRIPT_ID};
use crate::dom::Listeners;
use fsr_core::{
    bind_handlers, Camera, CloseReason, ConnectionManager, Dashboard, DashboardConfig,
    FocusPolicy, HitTestController, MotionController, Tilt,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod panel;
mod render;
mod socket;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, listeners: &mut Listeners) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        listeners.add(&window, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

/// Config from the page's `<script id="fsr-config">` block, or defaults.
fn load_config(document: &web::Document) -> DashboardConfig {
    let Some(text) = dom::element_text(document, CONFIG_SCRIPT_ID) else {
        return DashboardConfig::default();
    };
    match DashboardConfig::from_json(&text) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[config] {}; using defaults", e);
            DashboardConfig::default()
        }
    }
}

fn endpoint(window: &web::Window, config: &DashboardConfig) -> String {
    let location = window.location();
    let host = location.hostname().unwrap_or_else(|_| "localhost".to_string());
    let secure = location.protocol().map(|p| p == "https:").unwrap_or(false);
    config.endpoint_for_host(&host, secure)
}

// Reset readouts whenever a connection ends; re-arm the dial unless the page
// closed it on purpose.
fn install_close_hook(shared: &Shared) {
    let dashboard = shared.dashboard.clone();
    let dirty = shared.panel_dirty.clone();
    let attempts = shared.reconnect_attempts.clone();
    let reconnect_at = shared.reconnect_at.clone();
    shared
        .connection
        .borrow_mut()
        .set_on_closed(move |id, reason| {
            log::info!("[socket] #{} ended: {:?}", id.get(), reason);
            dashboard.borrow_mut().reset();
            dirty.set(true);
            if *reason != CloseReason::Teardown {
                frame::schedule_reconnect(&dashboard.borrow(), &attempts, &reconnect_at);
            }
        });
}

fn wire_teardown(shared: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shared.clone();
    shared
        .listeners
        .borrow_mut()
        .add(&window, "pagehide", move |_ev: web::Event| {
            log::info!("[app] tearing down");
            s.running.set(false);
            s.reconnect_at.set(None);
            s.connection.borrow_mut().close();
            s.listeners.borrow_mut().detach_all();
        });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fsr-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = load_config(&document);
    let endpoint = endpoint(&window, &config);
    log::info!(
        "[config] pads={:?} capacity={} endpoint={}",
        config.pad_names,
        config.ring_buffer_capacity,
        endpoint
    );

    let scene = layout::build_device_scene(&config.pad_names);
    let picker = HitTestController::new(&scene, &config.pad_names, FocusPolicy::default());
    let pad_nodes = picker.registered().map(|(node, _)| node).collect();
    let view = View {
        scene,
        camera: Camera::default(),
        motion: MotionController::new(),
        picker,
        tilt: Tilt::default(),
    };

    let dashboard = Rc::new(RefCell::new(
        Dashboard::new(config).map_err(|e| anyhow::anyhow!("{}", e))?,
    ));
    let mut connection = ConnectionManager::new();
    bind_handlers(&dashboard, &mut connection);

    let shared = Shared {
        document,
        canvas,
        endpoint: endpoint.into(),
        dashboard,
        connection: Rc::new(RefCell::new(connection)),
        view: Rc::new(RefCell::new(view)),
        listeners: Rc::new(RefCell::new(Listeners::default())),
        panel_dirty: Rc::new(Cell::new(true)),
        reconnect_at: Rc::new(Cell::new(None)),
        reconnect_attempts: Rc::new(Cell::new(0)),
        running: Rc::new(Cell::new(true)),
    };
    install_close_hook(&shared);

    wire_canvas_resize(&shared.canvas, &mut shared.listeners.borrow_mut());
    events::wire_pointer(&shared);
    events::wire_keyboard(&shared);
    events::wire_panel(&shared);
    wire_teardown(&shared);
    log::info!("[app] {} listeners attached", shared.listeners.borrow().len());

    if let Err(e) = socket::open(&shared) {
        log::error!("[socket] {:?}", e);
        frame::schedule_reconnect(
            &shared.dashboard.borrow(),
            &shared.reconnect_attempts,
            &shared.reconnect_at,
        );
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(shared, pad_nodes)));
    frame::start_loop(frame_ctx);
    Ok(())
}

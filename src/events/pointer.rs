use crate::app::{Shared, View};
use crate::constants::{PANEL_ID, PANEL_TILT_MAX_DEG};
use crate::input;
use fsr_core::{tilt_for_pointer, PointerClick};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(shared: &Shared) {
    wire_click(shared);
    wire_pointermove(shared);
}

fn wire_click(shared: &Shared) {
    let s = shared.clone();
    let canvas: web::EventTarget = shared.canvas.clone().into();
    shared
        .listeners
        .borrow_mut()
        .add(&canvas, "click", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            ev.prevent_default();
            let click = PointerClick {
                client: input::pointer_offset(ev, &s.canvas),
                viewport: input::element_size(&s.canvas),
            };

            let outcome = {
                let mut view = s.view.borrow_mut();
                let View {
                    scene,
                    camera,
                    motion,
                    picker,
                    ..
                } = &mut *view;
                let mut dashboard = s.dashboard.borrow_mut();
                let outcome = picker.on_click(click, camera, scene, dashboard.selection_mut(), motion);
                if outcome.is_some() {
                    dashboard.set_panel_open(true);
                }
                outcome
            };
            if let Some(o) = outcome {
                log::info!("[click] pad {} selected={} nudged={}", o.pad, o.selected, o.nudged);
                s.panel_dirty.set(true);
            }
        });
}

fn wire_pointermove(shared: &Shared) {
    let s = shared.clone();
    let Some(window) = web::window() else {
        return;
    };
    shared
        .listeners
        .borrow_mut()
        .add(&window, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let Some(panel) = s.document.get_element_by_id(PANEL_ID) else {
                return;
            };
            let tilt = tilt_for_pointer(
                input::pointer_offset(ev, &panel),
                input::element_size(&panel),
                PANEL_TILT_MAX_DEG,
            );
            s.view.borrow_mut().tilt = tilt;
        });
}

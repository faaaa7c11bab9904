use crate::app::Shared;
use crate::constants::{
    PAD_INDEX_ATTR, PANEL_CLOSE_ID, PANEL_ROWS_ID, THRESHOLD_INPUT_MAX, THRESHOLD_INPUT_MIN,
};
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_panel(shared: &Shared) {
    wire_threshold_edits(shared);
    wire_close_button(shared);
}

// Threshold fields are rebuilt with the rows, so listen once on the container.
fn wire_threshold_edits(shared: &Shared) {
    let s = shared.clone();
    shared.listeners.borrow_mut().add_by_id(
        &shared.document,
        PANEL_ROWS_ID,
        "change",
        move |ev: web::Event| {
            let Some(field) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(index) = field
                .get_attribute(PAD_INDEX_ATTR)
                .and_then(|a| a.parse::<usize>().ok())
            else {
                return;
            };
            let Some(value) = input::parse_threshold(
                &field.value(),
                THRESHOLD_INPUT_MIN as f32,
                THRESHOLD_INPUT_MAX as f32,
            ) else {
                log::warn!("[panel] rejected threshold `{}`", field.value());
                s.panel_dirty.set(true);
                return;
            };

            let edit = s.dashboard.borrow_mut().edit_threshold(index, value);
            s.panel_dirty.set(true);
            let message = match edit {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[panel] {}", e);
                    return;
                }
            };
            let mut conn = s.connection.borrow_mut();
            if !conn.is_ready() {
                log::warn!("[panel] threshold {} kept locally; not connected", index);
                return;
            }
            if let Err(e) = conn.emit(&message) {
                log::error!("[panel] update_threshold failed: {}", e);
            }
        },
    );
}

fn wire_close_button(shared: &Shared) {
    let s = shared.clone();
    shared.listeners.borrow_mut().add_by_id(
        &shared.document,
        PANEL_CLOSE_ID,
        "click",
        move |_ev: web::Event| {
            s.dashboard.borrow_mut().set_panel_open(false);
            s.panel_dirty.set(true);
        },
    );
}

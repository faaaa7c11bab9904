use crate::app::Shared;
use crate::input::{panel_key, PanelKey};
use wasm_bindgen::JsCast;
use web_sys as web;

// 'H' toggles the readout panel, Escape closes it. Selection is untouched.
pub fn wire_keyboard(shared: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shared.clone();
    shared
        .listeners
        .borrow_mut()
        .add(&window, "keydown", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let Some(action) = panel_key(&ev.key()) else {
                return;
            };
            {
                let mut d = s.dashboard.borrow_mut();
                let open = match action {
                    PanelKey::Toggle => !d.panel_open(),
                    PanelKey::Close => false,
                };
                d.set_panel_open(open);
            }
            s.panel_dirty.set(true);
            ev.prevent_default();
        });
}

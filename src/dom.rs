use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Text content of an element, if it exists.
pub fn element_text(document: &web::Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| el.text_content())
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners registered during setup, removed together on teardown.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[dom] could not listen for `{}`", kind);
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    /// Listen on an element by id; missing elements are skipped.
    pub fn add_by_id(
        &mut self,
        document: &web::Document,
        element_id: &str,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        if let Some(el) = document.get_element_by_id(element_id) {
            self.add(&el, kind, handler);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every listener. The closures are dropped on the next microtask
    /// so a listener may call this from inside its own invocation.
    pub fn detach_all(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        for l in &entries {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
        wasm_bindgen_futures::spawn_local(async move {
            drop(entries);
        });
    }
}

use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position relative to the element's top-left corner, CSS pixels.
#[inline]
pub fn pointer_offset(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Element size in CSS pixels.
#[inline]
pub fn element_size(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Backing-store size of the canvas in device pixels.
#[inline]
pub fn canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

// ---------------- Parsing ----------------

/// Parse a threshold typed into the panel. Non-numbers and values outside
/// `min..=max` are rejected.
#[inline]
pub fn parse_threshold(text: &str, min: f32, max: f32) -> Option<f32> {
    let v: f32 = text.trim().parse().ok()?;
    (v.is_finite() && (min..=max).contains(&v)).then_some(v)
}

// ---------------- Keys ----------------

/// What a key does to the readout panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKey {
    Toggle,
    Close,
}

#[inline]
pub fn panel_key(key: &str) -> Option<PanelKey> {
    match key {
        "h" | "H" => Some(PanelKey::Toggle),
        "Escape" => Some(PanelKey::Close),
        _ => None,
    }
}

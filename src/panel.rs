// Readout panel: one row per selected pad with threshold, raw force and
// smoothed force. Rows are rebuilt only when their structure changes so a
// threshold field being edited is not replaced under the user.

use crate::constants::{
    FORCE_SLIDER_PREFIX, FORCE_TEXT_PREFIX, PAD_INDEX_ATTR, PANEL_ID, PANEL_ROWS_ID,
    SMOOTHED_TEXT_PREFIX, THRESHOLD_INPUT_MAX, THRESHOLD_INPUT_MIN,
};
use fsr_core::{slider_value, PadReadout, Tilt, FORCE_MAX, FORCE_MIN};
use std::fmt::Write;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if visible {
        show(document);
    } else {
        hide(document);
    }
}

/// Structure key: which pads are listed and with what thresholds.
pub fn rows_key(rows: &[PadReadout]) -> String {
    let mut key = String::new();
    for r in rows {
        _ = write!(key, "{}:{};", r.index, r.threshold);
    }
    key
}

fn format_force(v: Option<f32>) -> String {
    match v {
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}

/// Escape text placed in markup; pad names come from page config.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn rows_html(rows: &[PadReadout]) -> String {
    if rows.is_empty() {
        return "<p class='readout-empty'>Click a pad to inspect it.</p>".to_string();
    }
    let mut html = String::new();
    for r in rows {
        let slider = r.force.map(slider_value).unwrap_or(FORCE_MIN);
        _ = write!(
            html,
            "<div class='readout-row{trig}'>\
               <p>{name} | Threshold: \
                 <input type='number' min='{tmin}' max='{tmax}' step='1' value='{thr:.0}' {attr}='{idx}'>\
               </p>\
               <label>Force: <span id='{ftxt}{idx}'>{force}</span> \
                 (smoothed <span id='{stxt}{idx}'>{smooth}</span>)</label>\
               <input id='{fsl}{idx}' class='w-full' type='range' min='{fmin}' max='{fmax}' value='{slider:.0}' disabled>\
             </div>",
            trig = if r.triggered { " triggered" } else { "" },
            name = escape_html(&r.name),
            tmin = THRESHOLD_INPUT_MIN,
            tmax = THRESHOLD_INPUT_MAX,
            thr = r.threshold,
            attr = PAD_INDEX_ATTR,
            idx = r.index,
            ftxt = FORCE_TEXT_PREFIX,
            stxt = SMOOTHED_TEXT_PREFIX,
            fsl = FORCE_SLIDER_PREFIX,
            force = format_force(r.force),
            smooth = format_force(r.smoothed),
            fmin = FORCE_MIN,
            fmax = FORCE_MAX,
            slider = slider,
        );
    }
    html
}

/// Keeps the last rendered structure so unchanged rows are patched in place.
#[derive(Default)]
pub struct PanelRenderer {
    last_key: Option<String>,
}

impl PanelRenderer {
    pub fn render(&mut self, document: &web::Document, rows: &[PadReadout]) {
        let key = rows_key(rows);
        if self.last_key.as_deref() != Some(key.as_str()) {
            if let Some(el) = document.get_element_by_id(PANEL_ROWS_ID) {
                el.set_inner_html(&rows_html(rows));
            }
            self.last_key = Some(key);
            return;
        }
        for r in rows {
            crate::dom::set_text(
                document,
                &format!("{}{}", FORCE_TEXT_PREFIX, r.index),
                &format_force(r.force),
            );
            crate::dom::set_text(
                document,
                &format!("{}{}", SMOOTHED_TEXT_PREFIX, r.index),
                &format_force(r.smoothed),
            );
            if let Some(slider) = document
                .get_element_by_id(&format!("{}{}", FORCE_SLIDER_PREFIX, r.index))
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            {
                let v = r.force.map(slider_value).unwrap_or(FORCE_MIN);
                slider.set_value(&format!("{:.0}", v));
            }
        }
    }

    /// Forget the rendered structure so the next render rebuilds the rows.
    pub fn invalidate(&mut self) {
        self.last_key = None;
    }
}

pub fn apply_tilt(document: &web::Document, tilt: Tilt) {
    if let Some(el) = document
        .get_element_by_id(PANEL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("transform", &tilt.to_css());
    }
}

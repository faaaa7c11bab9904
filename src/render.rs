//! Flat projection of the device scene onto a 2D canvas.
//!
//! Each node with bounds is drawn as the screen rectangle enclosing its
//! projected box, far nodes first. Pad emphasis picks the fill color.

use crate::app::View;
use crate::constants::{BASE_COLOR, CLEAR_COLOR, LABEL_COLOR, STATUS_COLOR};
use fsr_core::{
    client_from_ndc, Camera, ConnectionState, NodeId, SceneGraph, PAD_COLOR_IDLE, PAD_COLOR_SELECTED,
};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Screen rectangle of a node plus its depth for painter ordering.
#[derive(Clone, Copy, Debug)]
pub struct ScreenBox {
    pub node: NodeId,
    pub min: Vec2,
    pub max: Vec2,
    pub depth: f32,
}

#[inline]
pub fn css_hex(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xFF_FFFF)
}

/// Project every bounded node. Nodes with a corner behind the eye are
/// skipped.
pub fn project_boxes(scene: &SceneGraph, camera: &Camera, viewport: Vec2) -> Vec<ScreenBox> {
    let mut out = Vec::new();
    let mut stack = vec![scene.root()];
    while let Some(id) = stack.pop() {
        stack.extend(scene.node(id).children().iter().copied());
        let Some(bounds) = scene.world_bounds(id) else {
            continue;
        };
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut depth = 0.0f32;
        let mut visible = true;
        for corner in bounds.corners() {
            match camera.project(corner) {
                Some(ndc) => {
                    let p = client_from_ndc(ndc.truncate(), viewport);
                    min = min.min(p);
                    max = max.max(p);
                    depth = depth.max(ndc.z);
                }
                None => {
                    visible = false;
                    break;
                }
            }
        }
        if visible {
            out.push(ScreenBox {
                node: id,
                min,
                max,
                depth,
            });
        }
    }
    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    view: &View,
    pad_nodes: &[NodeId],
    viewport: Vec2,
    state: ConnectionState,
) {
    ctx.set_fill_style(&JsValue::from_str(CLEAR_COLOR));
    ctx.fill_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);

    for b in project_boxes(&view.scene, &view.camera, viewport) {
        let node = view.scene.node(b.node);
        let is_pad = pad_nodes.contains(&b.node);
        let fill = match (is_pad, node.emphasis) {
            (false, _) => BASE_COLOR.to_string(),
            (true, true) => css_hex(PAD_COLOR_SELECTED),
            (true, false) => css_hex(PAD_COLOR_IDLE),
        };
        let size = b.max - b.min;
        ctx.set_fill_style(&JsValue::from_str(&fill));
        ctx.fill_rect(b.min.x as f64, b.min.y as f64, size.x as f64, size.y as f64);
        if is_pad {
            ctx.set_fill_style(&JsValue::from_str(LABEL_COLOR));
            ctx.set_text_align("center");
            let c = (b.min + b.max) * 0.5;
            _ = ctx.fill_text(&node.name, c.x as f64, c.y as f64);
        }
    }

    ctx.set_fill_style(&JsValue::from_str(STATUS_COLOR));
    ctx.set_text_align("left");
    _ = ctx.fill_text(&format!("{:?}", state), 12.0, 20.0);
}

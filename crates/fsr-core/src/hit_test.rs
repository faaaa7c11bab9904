//! Pointer clicks to pad selection.
//!
//! A click is turned into NDC, cast through the camera into the scene, and
//! the nearest hit that belongs to a registered pad node toggles that pad.
//! A pad hit also focuses the view: the camera eases to a fixed viewpoint
//! and the model is nudged once along a fixed axis.

use crate::camera::{ndc_from_client, Camera};
use crate::constants::{FOCUSED_EYE, FOCUS_TWEEN_MS, MODEL_NUDGE};
use crate::motion::{Easing, MotionController};
use crate::scene::{NodeId, SceneGraph};
use crate::selection::SelectionModel;
use glam::{Vec2, Vec3};
use std::time::Duration;

/// What a tween moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionTarget {
    CameraEye,
    Model,
}

/// Where a pad hit moves the view.
#[derive(Clone, Debug)]
pub struct FocusPolicy {
    pub eye: Vec3,
    pub nudge: Vec3,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for FocusPolicy {
    fn default() -> Self {
        Self {
            eye: FOCUSED_EYE,
            nudge: MODEL_NUDGE,
            duration: Duration::from_millis(FOCUS_TWEEN_MS),
            easing: Easing::QuadraticOut,
        }
    }
}

/// A click in client pixels plus the viewport it happened in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerClick {
    pub client: Vec2,
    pub viewport: Vec2,
}

/// Result of a click that landed on a pad.
#[derive(Clone, Debug, PartialEq)]
pub struct HitOutcome {
    pub pad: String,
    pub node: NodeId,
    pub selected: bool,
    /// Whether the model nudge tween was started.
    pub nudged: bool,
}

pub struct HitTestController {
    pads: Vec<(NodeId, String)>,
    model: NodeId,
    focus: FocusPolicy,
}

impl HitTestController {
    /// Register every pad name found in `scene`. Missing names are logged and
    /// skipped; they simply can never be hit.
    pub fn new(scene: &SceneGraph, pad_names: &[String], focus: FocusPolicy) -> Self {
        let pads = pad_names
            .iter()
            .filter_map(|name| match scene.find(name) {
                Some(id) => Some((id, name.clone())),
                None => {
                    log::warn!("[pick] pad node `{}` not found in scene", name);
                    None
                }
            })
            .collect();
        Self {
            pads,
            model: scene.root(),
            focus,
        }
    }

    pub fn model(&self) -> NodeId {
        self.model
    }

    pub fn registered(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.pads.iter().map(|(id, n)| (*id, n.as_str()))
    }

    /// Registered pad under `ndc`, nearest first. Non-pad hits are skipped.
    pub fn resolve(&self, scene: &SceneGraph, camera: &Camera, ndc: Vec2) -> Option<(NodeId, &str)> {
        if self.pads.is_empty() {
            return None;
        }
        let ray = camera.ray_from_ndc(ndc);
        scene.intersect(&ray).iter().find_map(|hit| {
            self.pads
                .iter()
                .find(|(pad, _)| scene.is_within(hit.node, *pad))
                .map(|(pad, name)| (*pad, name.as_str()))
        })
    }

    /// Handle a click. No pad hit is a silent no-op.
    pub fn on_click(
        &self,
        click: PointerClick,
        camera: &Camera,
        scene: &mut SceneGraph,
        selection: &mut SelectionModel,
        motion: &mut MotionController<MotionTarget>,
    ) -> Option<HitOutcome> {
        let ndc = ndc_from_client(click.client, click.viewport)?;
        let (node, pad) = self.resolve(scene, camera, ndc)?;
        let pad = pad.to_string();

        let selected = match selection.toggle(&pad) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[click] {}", e);
                return None;
            }
        };
        scene.node_mut(node).emphasis = selected;
        log::info!("[click] {} -> {}", pad, if selected { "selected" } else { "cleared" });

        motion.tween_to(
            MotionTarget::CameraEye,
            camera.eye,
            self.focus.eye,
            self.focus.duration,
            self.focus.easing,
        );

        let current = scene.node(self.model).position;
        let axis = self.focus.nudge.normalize_or_zero();
        let nudged = current.dot(axis) == 0.0 && !motion.is_animating(MotionTarget::Model);
        if nudged {
            motion.tween_to(
                MotionTarget::Model,
                current,
                current + self.focus.nudge,
                self.focus.duration,
                self.focus.easing,
            );
        }

        Some(HitOutcome {
            pad,
            node,
            selected,
            nudged,
        })
    }

    /// Write a tweened value to whatever it drives.
    pub fn apply_motion(
        &self,
        target: MotionTarget,
        value: Vec3,
        camera: &mut Camera,
        scene: &mut SceneGraph,
    ) {
        match target {
            MotionTarget::CameraEye => camera.eye = value,
            MotionTarget::Model => scene.node_mut(self.model).position = value,
        }
    }

    /// Copy highlight flags from the selection onto the pad nodes.
    pub fn sync_emphasis(&self, scene: &mut SceneGraph, selection: &SelectionModel) {
        for (node, name) in &self.pads {
            let on = selection
                .pad_index(name)
                .is_some_and(|i| selection.is_highlighted(i));
            scene.node_mut(*node).emphasis = on;
        }
    }
}

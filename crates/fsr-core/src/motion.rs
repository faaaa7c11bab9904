//! Time-based interpolation of camera and model positions.
//!
//! The host's frame callback calls [`MotionController::advance`] once per
//! tick; the controller never schedules itself.

use fnv::FnvHashMap;
use glam::Vec3;
use std::hash::Hash;
use std::time::Duration;

/// Easing curves over `t` in 0..1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    QuadraticIn,
    #[default]
    QuadraticOut,
    QuadraticInOut,
    CubicOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
        }
    }
}

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, f: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, end: Self, f: f32) -> Self {
        self + (end - self) * f
    }
}

impl Lerp for Vec3 {
    fn lerp_to(self, end: Self, f: f32) -> Self {
        self.lerp(end, f)
    }
}

/// One interpolation job.
#[derive(Clone, Debug)]
pub struct Tween<V: Lerp> {
    pub start: V,
    pub end: V,
    pub duration: Duration,
    pub elapsed: Duration,
    pub easing: Easing,
}

impl<V: Lerp> Tween<V> {
    pub fn new(start: V, end: V, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the value to apply. Once finished this is
    /// exactly `end`.
    pub fn step(&mut self, dt: Duration) -> V {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_finished() {
            return self.end;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let f = self.easing.apply(t).clamp(0.0, 1.0);
        self.start.lerp_to(self.end, f)
    }
}

/// Independent tweens keyed by what they move. Issuing a tween for a key that
/// is already animating replaces it.
pub struct MotionController<K> {
    tweens: FnvHashMap<K, Tween<Vec3>>,
}

impl<K: Copy + Eq + Hash> Default for MotionController<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> MotionController<K> {
    pub fn new() -> Self {
        Self {
            tweens: FnvHashMap::default(),
        }
    }

    /// Start moving `key` from `current` to `target`.
    pub fn tween_to(
        &mut self,
        key: K,
        current: Vec3,
        target: Vec3,
        duration: Duration,
        easing: Easing,
    ) {
        self.tweens
            .insert(key, Tween::new(current, target, duration, easing));
    }

    pub fn is_animating(&self, key: K) -> bool {
        self.tweens.contains_key(&key)
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Stop a tween where it is; no further values are applied.
    pub fn cancel(&mut self, key: K) -> bool {
        self.tweens.remove(&key).is_some()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    /// Advance every tween by `dt`, handing each new value to `apply`.
    /// Finished tweens apply their target once and are dropped.
    pub fn advance(&mut self, dt: Duration, mut apply: impl FnMut(K, Vec3)) {
        self.tweens.retain(|key, tween| {
            apply(*key, tween.step(dt));
            !tween.is_finished()
        });
    }
}

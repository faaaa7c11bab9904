use glam::Vec2;

/// Hover tilt for a panel, derived from where the pointer sits inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

pub const TILT_MAX_DEG: f32 = 6.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

impl Tilt {
    pub fn to_css(self) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// `offset` is the pointer position relative to the element's top-left
/// corner, `size` the element size. Pointers outside the element give no
/// tilt; the center gives none either.
pub fn tilt_for_pointer(offset: Vec2, size: Vec2, max_deg: f32) -> Tilt {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Tilt::default();
    }
    let uv = offset / size;
    if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
        return Tilt::default();
    }
    let centered = uv * 2.0 - Vec2::ONE;
    Tilt {
        rotate_x_deg: -centered.y * max_deg,
        rotate_y_deg: centered.x * max_deg,
    }
}

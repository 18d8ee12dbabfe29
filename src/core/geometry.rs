use glam::Vec2;

use super::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_POSITION, DEFAULT_ROTATION_DEG, DEFAULT_SCALE,
    ROTATION_LIMIT_DEG, SCALE_MAX, SCALE_MIN,
};

/// Placement of the character on the canvas.
///
/// The character image is drawn centred on `position`, scaled uniformly and
/// rotated about its centre. Fields are private so that `scale` can never
/// reach zero; use the setters, which clamp to the supported ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec2,
    scale: f32,
    rotation_deg: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::from(DEFAULT_POSITION),
            scale: DEFAULT_SCALE,
            rotation_deg: DEFAULT_ROTATION_DEG,
        }
    }
}

impl Transform {
    pub fn new(position: Vec2, scale: f32, rotation_deg: f32) -> Self {
        let mut t = Self::default();
        t.set_x(position.x);
        t.set_y(position.y);
        t.set_scale(scale);
        t.set_rotation_deg(rotation_deg);
        t
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
    #[inline]
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = finite_or(x, self.position.x).clamp(0.0, CANVAS_WIDTH);
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = finite_or(y, self.position.y).clamp(0.0, CANVAS_HEIGHT);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = finite_or(scale, self.scale).clamp(SCALE_MIN, SCALE_MAX);
    }

    pub fn set_rotation_deg(&mut self, deg: f32) {
        self.rotation_deg =
            finite_or(deg, self.rotation_deg).clamp(-ROTATION_LIMIT_DEG, ROTATION_LIMIT_DEG);
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

/// Which cut-line endpoint anchors the head rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotSide {
    #[default]
    Left,
    Right,
}

impl PivotSide {
    /// Sign applied to the hinge angle so the head swings away from the pivot.
    #[inline]
    pub fn rotation_direction(self) -> f32 {
        match self {
            PivotSide::Left => -1.0,
            PivotSide::Right => 1.0,
        }
    }
}

/// User-drawn line in canvas space separating head from body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CutLine {
    pub start: Option<Vec2>,
    pub end: Option<Vec2>,
}

impl CutLine {
    pub fn begin(start: Vec2) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Returns a copy with `end` moved, or `self` unchanged when no start exists.
    pub fn extended_to(self, end: Vec2) -> Self {
        match self.start {
            Some(_) => Self {
                end: Some(end),
                ..self
            },
            None => self,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both endpoints, only when the line is complete.
    #[inline]
    pub fn endpoints(&self) -> Option<(Vec2, Vec2)> {
        Some((self.start?, self.end?))
    }

    /// The anchor endpoint for `side`.
    pub fn pivot(&self, side: PivotSide) -> Option<Vec2> {
        let (start, end) = self.endpoints()?;
        Some(match side {
            PivotSide::Left => start,
            PivotSide::Right => end,
        })
    }
}

/// Map a canvas point into the character image's local pixel space.
///
/// Inverts translate + scale about the image centre. The outer rotation is
/// not inverted: the result is only meaningful inside a drawing context that
/// has already been rotated by `transform.rotation_deg()`.
#[inline]
pub fn to_local(canvas_point: Vec2, transform: &Transform, image_size: Vec2) -> Vec2 {
    (canvas_point - transform.position()) / transform.scale() + image_size * 0.5
}

/// Forward map from image-local space back to the canvas, rotation ignored.
#[inline]
pub fn to_canvas(local_point: Vec2, transform: &Transform, image_size: Vec2) -> Vec2 {
    (local_point - image_size * 0.5) * transform.scale() + transform.position()
}

/// Cut line endpoints in image-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalCut {
    pub start: Vec2,
    pub end: Vec2,
}

impl LocalCut {
    pub fn from_canvas(
        cut: &CutLine,
        transform: &Transform,
        image_size: Vec2,
    ) -> Option<Self> {
        let (start, end) = cut.endpoints()?;
        Some(Self {
            start: to_local(start, transform, image_size),
            end: to_local(end, transform, image_size),
        })
    }

    /// The cut is horizontal in local space, at the topmost endpoint.
    #[inline]
    pub fn cut_y(&self) -> f32 {
        self.start.y.min(self.end.y)
    }

    #[inline]
    pub fn pivot(&self, side: PivotSide) -> Vec2 {
        match side {
            PivotSide::Left => self.start,
            PivotSide::Right => self.end,
        }
    }
}

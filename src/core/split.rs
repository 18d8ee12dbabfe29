use glam::Vec2;
use smallvec::SmallVec;

use super::geometry::{CutLine, LocalCut, PivotSide, Transform};

/// Axis-aligned rectangle in the centred image frame, where the image
/// occupies `(-w/2, -h/2)..(w/2, h/2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ClipRect {
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One Canvas 2D call. Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasOp {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
    ClipRect(ClipRect),
    /// Draw the whole image with its top-left corner at `origin`.
    DrawImage { origin: Vec2 },
}

pub type OpList = SmallVec<[CanvasOp; 20]>;

/// Hinge angle in degrees. Left pivots swing negative, right pivots positive.
#[inline]
pub fn hinge_angle_deg(openness: f32, max_angle_deg: f32, side: PivotSide) -> f32 {
    openness.clamp(0.0, 1.0) * max_angle_deg * side.rotation_direction()
}

/// Geometry for one split draw of the character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitPlan {
    pub transform: Transform,
    pub image_size: Vec2,
    pub local: LocalCut,
    /// Cut depth in image-local pixels, unclamped.
    pub cut_y: f32,
    /// Fixed body piece: cut down to the image bottom.
    pub lower: ClipRect,
    /// Hinged head piece: image top down to the cut.
    pub upper: ClipRect,
    /// Rotation anchor in image-local pixels.
    pub pivot_local: Vec2,
    /// Rotation anchor in the centred drawing frame.
    pub pivot: Vec2,
    pub hinge_deg: f32,
}

impl SplitPlan {
    /// Returns `None` for an incomplete cut line; callers then draw the
    /// character undistorted with [`plan_static`].
    pub fn new(
        cut: &CutLine,
        transform: Transform,
        side: PivotSide,
        openness: f32,
        max_angle_deg: f32,
        image_size: Vec2,
    ) -> Option<Self> {
        let local = LocalCut::from_canvas(cut, &transform, image_size)?;
        let cut_y = local.cut_y();
        let (lower, upper) = split_rects(cut_y, image_size);
        let pivot_local = local.pivot(side);
        Some(Self {
            transform,
            image_size,
            local,
            cut_y,
            lower,
            upper,
            pivot_local,
            pivot: pivot_local - image_size * 0.5,
            hinge_deg: hinge_angle_deg(openness, max_angle_deg, side),
        })
    }

    /// Lower to canvas calls in composition order: outer rotation, scale,
    /// fixed lower piece, then the upper piece rotated about the pivot.
    pub fn ops(&self) -> OpList {
        let origin = -self.image_size * 0.5;
        let mut ops = OpList::new();
        push_placement(&mut ops, &self.transform);

        ops.push(CanvasOp::Save);
        ops.push(CanvasOp::ClipRect(self.lower));
        ops.push(CanvasOp::DrawImage { origin });
        ops.push(CanvasOp::Restore);

        ops.push(CanvasOp::Save);
        ops.push(CanvasOp::Translate(self.pivot));
        ops.push(CanvasOp::Rotate(self.hinge_deg.to_radians()));
        ops.push(CanvasOp::Translate(-self.pivot));
        ops.push(CanvasOp::ClipRect(self.upper));
        ops.push(CanvasOp::DrawImage { origin });
        ops.push(CanvasOp::Restore);

        ops.push(CanvasOp::Restore);
        ops
    }
}

/// Split the image at `cut_y` into (lower, upper) clip rectangles.
///
/// `cut_y` is clamped to the image so the two rectangles always cover it
/// exactly once, sharing only the boundary row.
pub fn split_rects(cut_y: f32, image_size: Vec2) -> (ClipRect, ClipRect) {
    let cy = cut_y.clamp(0.0, image_size.y);
    let left = -image_size.x * 0.5;
    let top = -image_size.y * 0.5;
    let lower = ClipRect {
        x: left,
        y: top + cy,
        width: image_size.x,
        height: image_size.y - cy,
    };
    let upper = ClipRect {
        x: left,
        y: top,
        width: image_size.x,
        height: cy,
    };
    (lower, upper)
}

/// Undistorted draw of the whole character at its transform.
pub fn plan_static(transform: &Transform, image_size: Vec2) -> OpList {
    let mut ops = OpList::new();
    push_placement(&mut ops, transform);
    ops.push(CanvasOp::DrawImage {
        origin: -image_size * 0.5,
    });
    ops.push(CanvasOp::Restore);
    ops
}

fn push_placement(ops: &mut OpList, transform: &Transform) {
    ops.push(CanvasOp::Save);
    ops.push(CanvasOp::Translate(transform.position()));
    ops.push(CanvasOp::Rotate(transform.rotation_deg().to_radians()));
    ops.push(CanvasOp::Scale(transform.scale()));
}

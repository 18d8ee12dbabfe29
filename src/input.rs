use glam::Vec2;
use web_sys as web;

/// Convert a client-space point to canvas backing-store pixels.
///
/// `rect_origin` and `rect_size` are the canvas' displayed bounds in CSS
/// pixels; `backing_size` is its `width`/`height`. A collapsed rect maps
/// everything to the origin rather than dividing by zero.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) * (backing_size / rect_size)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Edge-triggered state for the designated key.
///
/// Auto-repeat keydowns are dropped; only real transitions are reported.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyLatch {
    pub held: bool,
}

impl KeyLatch {
    /// Returns the new held state when this event changes it.
    pub fn on_key(&mut self, down: bool, repeat: bool) -> Option<bool> {
        if down && repeat {
            return None;
        }
        if self.held == down {
            return None;
        }
        self.held = down;
        Some(down)
    }

    pub fn reset(&mut self) {
        self.held = false;
    }
}

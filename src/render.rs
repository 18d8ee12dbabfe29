use crate::assets;
use crate::constants::*;
use crate::core::{plan_static, CanvasOp, CutLine, PivotSide, Session, Stage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// ===================== Canvas 2D renderer =====================

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame from a session snapshot and the current images.
    pub fn render(
        &self,
        session: &Session,
        background: Option<&web::HtmlImageElement>,
        character: Option<&web::HtmlImageElement>,
        now_ms: f64,
    ) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        match background.filter(|img| assets::is_ready(img)) {
            Some(img) => {
                _ = self
                    .ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(
                        img,
                        0.0,
                        0.0,
                        self.width,
                        self.height,
                    );
            }
            None => self.draw_placeholder(),
        }

        if let Some(img) = character.filter(|img| assets::is_ready(img)) {
            let ops = match session.split_plan() {
                Some(plan) => plan.ops(),
                None => plan_static(&session.transform, assets::natural_size(img)),
            };
            self.apply_ops(img, &ops);
        }

        if session.stage() == Stage::CutLine {
            self.draw_cut_guide(&session.cut_line(), session.pivot, now_ms);
        }
    }

    fn draw_placeholder(&self) {
        let grad = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, self.height);
        _ = grad.add_color_stop(0.0, BG_GRADIENT_TOP);
        _ = grad.add_color_stop(1.0, BG_GRADIENT_BOTTOM);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&grad);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(GROUND_COLOR));
        self.ctx
            .fill_rect(0.0, self.height - GROUND_HEIGHT, self.width, GROUND_HEIGHT);
    }

    /// Replay a canvas op list against the 2D context.
    pub fn apply_ops(&self, img: &web::HtmlImageElement, ops: &[CanvasOp]) {
        let ctx = &self.ctx;
        for op in ops {
            match *op {
                CanvasOp::Save => ctx.save(),
                CanvasOp::Restore => ctx.restore(),
                CanvasOp::Translate(v) => {
                    _ = ctx.translate(v.x as f64, v.y as f64);
                }
                CanvasOp::Rotate(rad) => {
                    _ = ctx.rotate(rad as f64);
                }
                CanvasOp::Scale(s) => {
                    _ = ctx.scale(s as f64, s as f64);
                }
                CanvasOp::ClipRect(r) => {
                    ctx.begin_path();
                    ctx.rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
                    ctx.clip();
                }
                CanvasOp::DrawImage { origin } => {
                    _ = ctx.draw_image_with_html_image_element(
                        img,
                        origin.x as f64,
                        origin.y as f64,
                    );
                }
            }
        }
    }

    fn draw_cut_guide(&self, cut: &CutLine, pivot: PivotSide, now_ms: f64) {
        let Some(start) = cut.start else { return };
        let ctx = &self.ctx;
        ctx.save();
        #[allow(deprecated)]
        ctx.set_stroke_style(&JsValue::from_str(GUIDE_COLOR));
        ctx.set_line_width(GUIDE_WIDTH);
        _ = ctx.set_line_dash(&dash_pattern(&GUIDE_DASH));
        ctx.set_line_dash_offset(dash_offset(now_ms));
        ctx.begin_path();
        ctx.move_to(start.x as f64, start.y as f64);
        if let Some(end) = cut.end {
            ctx.line_to(end.x as f64, end.y as f64);
        }
        ctx.stroke();

        if let (Some(end), Some(anchor)) = (cut.end, cut.pivot(pivot)) {
            let (start_fill, end_fill) = match pivot {
                PivotSide::Left => (PIVOT_COLOR, FREE_END_COLOR),
                PivotSide::Right => (FREE_END_COLOR, PIVOT_COLOR),
            };
            #[allow(deprecated)]
            ctx.set_stroke_style(&JsValue::from_str(HANDLE_OUTLINE));
            ctx.set_line_width(HANDLE_OUTLINE_WIDTH);
            _ = ctx.set_line_dash(&dash_pattern(&[]));
            self.handle(start.x as f64, start.y as f64, start_fill);
            self.handle(end.x as f64, end.y as f64, end_fill);

            #[allow(deprecated)]
            ctx.set_stroke_style(&JsValue::from_str(PIVOT_COLOR));
            ctx.begin_path();
            _ = ctx.arc(
                anchor.x as f64,
                anchor.y as f64,
                PIVOT_RING_RADIUS,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.stroke();
        }
        ctx.restore();
    }

    fn handle(&self, x: f64, y: f64, fill: &str) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(fill));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(x, y, HANDLE_RADIUS, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
        self.ctx.stroke();
    }
}

// Negative offset makes the dashes march forward along the line.
#[inline]
fn dash_offset(now_ms: f64) -> f64 {
    -now_ms / GUIDE_DASH_MS_PER_PX
}

fn dash_pattern(segments: &[f64]) -> JsValue {
    segments
        .iter()
        .map(|&s| JsValue::from_f64(s))
        .collect::<js_sys::Array>()
        .into()
}

//! `DrawingContext` over the browser's `CanvasRenderingContext2d`.

use c2d_core::{DrawingContext, ImageBlit, Point, Rect};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// A bound 2D context. Only [`crate::host::BrowserHost`] creates these, so
/// holding one means the canvas was initialized.
pub struct WebContext {
    ctx: CanvasRenderingContext2d,
}

impl WebContext {
    pub(crate) fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawingContext for WebContext {
    type Image = HtmlImageElement;

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        // Throws IndexSizeError on a negative radius.
        if let Err(err) = self.ctx.arc(center.x, center.y, radius, start_angle, end_angle) {
            log::warn!("arc rejected (radius {radius}): {err:?}");
        }
    }

    fn quadratic_curve_to(&mut self, control: Point, to: Point) {
        self.ctx.quadratic_curve_to(control.x, control.y, to.x, to.y);
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.ctx
            .bezier_curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn draw_image(&mut self, image: &HtmlImageElement, blit: ImageBlit) {
        let result = match blit {
            ImageBlit::Natural { dx, dy } => self.ctx.draw_image_with_html_image_element(image, dx, dy),
            ImageBlit::Scaled { dest } => self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                dest.x0,
                dest.y0,
                dest.width(),
                dest.height(),
            ),
            ImageBlit::Cropped { src, dest } => self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    src.x0,
                    src.y0,
                    src.width(),
                    src.height(),
                    dest.x0,
                    dest.y0,
                    dest.width(),
                    dest.height(),
                ),
        };
        if let Err(err) = result {
            log::warn!("drawImage failed for {blit:?}: {err:?}");
        }
    }
}

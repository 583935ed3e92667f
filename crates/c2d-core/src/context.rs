//! The boundary to a host 2D drawing API.
//!
//! Mirrors the subset of `CanvasRenderingContext2D` the demo needs: style
//! properties, path construction, fill/stroke and image blits. The browser
//! implementation lives in `c2d-wasm`; [`crate::recorder::Recorder`] is the
//! in-memory one.

use crate::model::ImageBlit;
use kurbo::{Point, Rect};

/// A stateful 2D drawing context.
///
/// Style setters persist until changed. Path methods accumulate segments
/// into the current path, which `fill` or `stroke` consumes.
pub trait DrawingContext {
    /// Decoded bitmap the context can blit.
    type Image;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Clockwise arc around `center`; angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    fn quadratic_curve_to(&mut self, control: Point, to: Point);
    fn bezier_curve_to(&mut self, control1: Point, control2: Point, to: Point);
    fn close_path(&mut self);

    fn fill(&mut self);
    fn stroke(&mut self);
    /// Fill `rect` directly, without touching the current path.
    fn fill_rect(&mut self, rect: Rect);

    fn draw_image(&mut self, image: &Self::Image, blit: ImageBlit);
}

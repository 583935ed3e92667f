//! Stateless shape primitives.
//!
//! Each primitive optionally overrides the fill or stroke style, builds its
//! own path from scratch and consumes it with a single fill or stroke. When
//! `color` is `None` the context's current style is left as it is.

use crate::context::DrawingContext;
use crate::model::DEFAULT_LINE_WIDTH;
use kurbo::{Point, Rect};
use std::f64::consts::TAU;

/// Fill an axis-aligned rectangle.
pub fn draw_rect<C: DrawingContext + ?Sized>(ctx: &mut C, rect: Rect, color: Option<&str>) {
    apply_fill(ctx, color);
    ctx.fill_rect(rect);
}

/// Stroke a straight segment from `from` to `to`.
pub fn draw_line<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    from: Point,
    to: Point,
    color: Option<&str>,
    line_width: Option<f64>,
) {
    apply_stroke(ctx, color, line_width);
    ctx.begin_path();
    ctx.move_to(from);
    ctx.line_to(to);
    ctx.close_path();
    ctx.stroke();
}

/// Fill a polygon given as a flat `[x0, y0, x1, y1, ...]` list.
///
/// Needs at least three vertices and an even number of values; anything
/// else is ignored without drawing.
pub fn draw_polygon<C: DrawingContext + ?Sized>(ctx: &mut C, points: &[f64], color: Option<&str>) {
    if points.len() < 6 || points.len() % 2 == 1 {
        log::debug!("polygon skipped: {} coordinates", points.len());
        return;
    }

    apply_fill(ctx, color);
    let mut vertices = points.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1]));
    ctx.begin_path();
    if let Some(first) = vertices.next() {
        ctx.move_to(first);
    }
    for vertex in vertices {
        ctx.line_to(vertex);
    }
    ctx.close_path();
    ctx.fill();
}

/// Fill a full circle.
pub fn draw_circle<C: DrawingContext + ?Sized>(ctx: &mut C, center: Point, radius: f64, color: Option<&str>) {
    apply_fill(ctx, color);
    ctx.begin_path();
    ctx.arc(center, radius, 0.0, TAU);
    ctx.close_path();
    ctx.fill();
}

/// Fill a circular sector between `start_angle` and `end_angle` (radians).
pub fn draw_fan<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    color: Option<&str>,
) {
    apply_fill(ctx, color);
    ctx.begin_path();
    ctx.move_to(center);
    ctx.arc(center, radius, start_angle, end_angle);
    ctx.close_path();
    ctx.fill();
}

/// Stroke a quadratic Bézier curve with one control point.
pub fn draw_quadratic_bezier<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    from: Point,
    to: Point,
    control: Point,
    color: Option<&str>,
    line_width: Option<f64>,
) {
    apply_stroke(ctx, color, line_width);
    ctx.begin_path();
    ctx.move_to(from);
    ctx.quadratic_curve_to(control, to);
    ctx.close_path();
    ctx.stroke();
}

/// Stroke a cubic Bézier curve. `control1` pulls away from `from`,
/// `control2` pulls into `to`.
pub fn draw_cubic_bezier<C: DrawingContext + ?Sized>(
    ctx: &mut C,
    from: Point,
    to: Point,
    control1: Point,
    control2: Point,
    color: Option<&str>,
    line_width: Option<f64>,
) {
    apply_stroke(ctx, color, line_width);
    ctx.begin_path();
    ctx.move_to(from);
    ctx.bezier_curve_to(control1, control2, to);
    ctx.close_path();
    ctx.stroke();
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn apply_fill<C: DrawingContext + ?Sized>(ctx: &mut C, color: Option<&str>) {
    if let Some(color) = color {
        ctx.set_fill_style(color);
    }
}

fn apply_stroke<C: DrawingContext + ?Sized>(ctx: &mut C, color: Option<&str>, line_width: Option<f64>) {
    if let Some(color) = color {
        ctx.set_stroke_style(color);
    }
    ctx.set_line_width(line_width.unwrap_or(DEFAULT_LINE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawCommand;
    use crate::recorder::Recorder;
    use pretty_assertions::assert_eq;

    fn count(rec: &Recorder, cmd: &DrawCommand) -> usize {
        rec.commands().iter().filter(|c| *c == cmd).count()
    }

    #[test]
    fn rect_sets_color_then_fills() {
        let mut rec = Recorder::new();
        let rect = Rect::new(10.0, 20.0, 40.0, 60.0);
        draw_rect(&mut rec, rect, Some("#ff0000"));

        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::SetFillStyle("#ff0000".into()),
                DrawCommand::FillRect(rect),
            ]
        );
    }

    #[test]
    fn line_defaults_width_to_one() {
        let mut rec = Recorder::new();
        let (a, b) = (Point::new(0.0, 0.0), Point::new(50.0, 50.0));
        draw_line(&mut rec, a, b, None, None);

        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::SetLineWidth(1.0),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(a),
                DrawCommand::LineTo(b),
                DrawCommand::ClosePath,
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn line_applies_color_and_width() {
        let mut rec = Recorder::new();
        draw_line(&mut rec, Point::ZERO, Point::new(1.0, 1.0), Some("blue"), Some(4.0));
        assert_eq!(rec.stroke_style(), "blue");
        assert_eq!(rec.line_width(), 4.0);
    }

    #[test]
    fn triangle_draws_one_close_and_one_fill() {
        let mut rec = Recorder::new();
        draw_polygon(&mut rec, &[0.0, 0.0, 10.0, 0.0, 10.0, 10.0], None);

        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Point::new(0.0, 0.0)),
                DrawCommand::LineTo(Point::new(10.0, 0.0)),
                DrawCommand::LineTo(Point::new(10.0, 10.0)),
                DrawCommand::ClosePath,
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn two_point_polygon_is_ignored() {
        let mut rec = Recorder::new();
        draw_polygon(&mut rec, &[0.0, 0.0, 10.0, 0.0], Some("red"));
        assert!(rec.commands().is_empty());
        assert_eq!(rec.fill_style(), "#000000");
    }

    #[test]
    fn odd_length_polygon_is_ignored() {
        let mut rec = Recorder::new();
        draw_polygon(&mut rec, &[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 5.0], Some("red"));
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn circle_spans_full_turn() {
        let mut rec = Recorder::new();
        draw_circle(&mut rec, Point::new(100.0, 100.0), 25.0, Some("green"));

        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::SetFillStyle("green".into()),
                DrawCommand::BeginPath,
                DrawCommand::Arc {
                    center: Point::new(100.0, 100.0),
                    radius: 25.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                },
                DrawCommand::ClosePath,
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn fan_starts_at_center() {
        let mut rec = Recorder::new();
        let center = Point::new(50.0, 50.0);
        draw_fan(&mut rec, center, 30.0, 0.0, TAU / 4.0, None);

        assert_eq!(rec.commands()[0], DrawCommand::BeginPath);
        assert_eq!(rec.commands()[1], DrawCommand::MoveTo(center));
        assert_eq!(
            rec.commands()[2],
            DrawCommand::Arc {
                center,
                radius: 30.0,
                start_angle: 0.0,
                end_angle: TAU / 4.0,
            }
        );
        assert_eq!(count(&rec, &DrawCommand::Fill), 1);
    }

    #[test]
    fn quadratic_bezier_strokes_through_control() {
        let mut rec = Recorder::new();
        let (from, to, control) = (Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, -40.0));
        draw_quadratic_bezier(&mut rec, from, to, control, Some("#333"), Some(2.0));

        assert_eq!(
            rec.commands(),
            &[
                DrawCommand::SetStrokeStyle("#333".into()),
                DrawCommand::SetLineWidth(2.0),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(from),
                DrawCommand::QuadraticCurveTo { control, to },
                DrawCommand::ClosePath,
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn cubic_bezier_orders_control_points() {
        let mut rec = Recorder::new();
        let from = Point::new(0.0, 0.0);
        let to = Point::new(90.0, 0.0);
        let c1 = Point::new(30.0, 30.0);
        let c2 = Point::new(60.0, -30.0);
        draw_cubic_bezier(&mut rec, from, to, c1, c2, None, None);

        assert!(rec.commands().contains(&DrawCommand::BezierCurveTo {
            control1: c1,
            control2: c2,
            to,
        }));
        assert_eq!(count(&rec, &DrawCommand::Stroke), 1);
        assert_eq!(count(&rec, &DrawCommand::Fill), 0);
    }
}

//! Plain data shared by drawing contexts, the recorder and the render pass.

use kurbo::{Point, Rect};
use serde::Serialize;

/// Line width applied by stroked primitives when the caller gives none.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Fill and stroke style of a freshly acquired 2D context.
pub const DEFAULT_STYLE: &str = "#000000";

/// The three `drawImage` forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageBlit {
    /// Natural size, top-left corner at `(dx, dy)`.
    Natural { dx: f64, dy: f64 },
    /// The whole image scaled into `dest`.
    Scaled { dest: Rect },
    /// The `src` region of the image scaled into `dest`.
    Cropped { src: Rect, dest: Rect },
}

impl ImageBlit {
    /// Top-left corner of the blit on the surface.
    pub fn origin(&self) -> Point {
        match *self {
            ImageBlit::Natural { dx, dy } => Point::new(dx, dy),
            ImageBlit::Scaled { dest } | ImageBlit::Cropped { dest, .. } => dest.origin(),
        }
    }
}

/// One call against a drawing context, as captured by the recorder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum DrawCommand {
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    QuadraticCurveTo {
        control: Point,
        to: Point,
    },
    BezierCurveTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    ClosePath,
    Fill,
    Stroke,
    FillRect(Rect),
    DrawImage {
        image: String,
        blit: ImageBlit,
    },
}

impl DrawCommand {
    /// True for commands that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::Fill | DrawCommand::Stroke | DrawCommand::FillRect(_) | DrawCommand::DrawImage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_origin_follows_destination() {
        let natural = ImageBlit::Natural { dx: 4.0, dy: 8.0 };
        assert_eq!(natural.origin(), Point::new(4.0, 8.0));

        let cropped = ImageBlit::Cropped {
            src: Rect::new(0.0, 0.0, 10.0, 10.0),
            dest: Rect::new(30.0, 40.0, 50.0, 60.0),
        };
        assert_eq!(cropped.origin(), Point::new(30.0, 40.0));
    }

    #[test]
    fn path_construction_is_not_paint() {
        assert!(!DrawCommand::BeginPath.is_paint());
        assert!(!DrawCommand::MoveTo(Point::ZERO).is_paint());
        assert!(!DrawCommand::SetFillStyle("red".into()).is_paint());
        assert!(DrawCommand::Fill.is_paint());
        assert!(DrawCommand::FillRect(Rect::ZERO).is_paint());
    }
}

//! In-memory drawing context.
//!
//! [`Recorder`] keeps a display list of every call plus the style state a
//! real 2D context would hold. Used for headless render plans and tests.

use crate::context::DrawingContext;
use crate::model::{DEFAULT_LINE_WIDTH, DEFAULT_STYLE, DrawCommand, ImageBlit};
use crate::render::{Rendered, Scene};
use crate::surface::{Surface, SurfaceHost, Viewport};
use kurbo::{Point, Rect};
use serde::Serialize;
use std::convert::Infallible;

/// Stand-in for a decoded bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl RecordedImage {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            fill_style: DEFAULT_STYLE.to_string(),
            stroke_style: DEFAULT_STYLE.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn stroke_style(&self) -> &str {
        &self.stroke_style
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Serialize the display list as a JSON array.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.commands).map_err(|e| format!("Serialization error: {e}"))
    }
}

impl DrawingContext for Recorder {
    type Image = RecordedImage;

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
        self.commands.push(DrawCommand::SetFillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
        self.commands.push(DrawCommand::SetStrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores zero, negative and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn quadratic_curve_to(&mut self, control: Point, to: Point) {
        self.commands.push(DrawCommand::QuadraticCurveTo { control, to });
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(DrawCommand::BezierCurveTo {
            control1,
            control2,
            to,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_image(&mut self, image: &RecordedImage, blit: ImageBlit) {
        self.commands.push(DrawCommand::DrawImage {
            image: image.name.clone(),
            blit,
        });
    }
}

/// Surface host backed by a [`Recorder`]. Never fails.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    viewport: Viewport,
    size: Option<(u32, u32)>,
}

impl RecordingHost {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, size: None }
    }

    /// Pixel size the surface was last resized to.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }
}

impl SurfaceHost for RecordingHost {
    type Context = Recorder;
    type Error = Infallible;

    fn viewport(&self) -> Result<Viewport, Infallible> {
        Ok(self.viewport)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn context_2d(&self) -> Result<Recorder, Infallible> {
        Ok(Recorder::new())
    }
}

/// Run the full demo lifecycle against a recorder.
pub fn record_demo(viewport: Viewport, image: RecordedImage) -> Rendered<Recorder> {
    let mut host = RecordingHost::new(viewport);
    let Ok(surface) = Surface::initialize(&mut host);
    Scene::new(surface, image).render()
}

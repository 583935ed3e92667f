pub mod config;
pub mod context;
pub mod loader;
pub mod model;
pub mod random;
pub mod recorder;
pub mod render;
pub mod shapes;
pub mod surface;

pub use config::DemoConfig;
pub use context::DrawingContext;
pub use loader::{ImageLoader, LoadCallback, LoadState, PendingLoad};
pub use model::*;
pub use recorder::{RecordedImage, Recorder, RecordingHost, record_demo};
pub use render::{RENDER_PASS, Rendered, Scene, render_pass};
pub use surface::{Surface, SurfaceHost, Viewport};

// Re-export kurbo geometry so downstream crates don't need a direct dependency
pub use kurbo::{Point, Rect};

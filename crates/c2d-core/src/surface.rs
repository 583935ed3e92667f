//! Drawing surface initialization.
//!
//! A [`Surface`] can only be produced by [`Surface::initialize`], which sizes
//! the host surface to the viewport and binds its 2D context. Everything that
//! draws takes the context out of a `Surface`, so drawing before
//! initialization does not type-check.

use crate::context::DrawingContext;

/// Viewport size in CSS pixels, read once at initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whole-pixel surface size covering the viewport. Negative or NaN
    /// dimensions collapse to zero.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

/// Host side of a drawing surface: something with a resizable pixel buffer
/// and a 2D context (an HTML canvas, a recording stub, ...).
pub trait SurfaceHost {
    type Context: DrawingContext;
    type Error;

    /// Current viewport dimensions.
    fn viewport(&self) -> Result<Viewport, Self::Error>;
    /// Set the surface's pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);
    /// Acquire the 2D drawing context.
    fn context_2d(&self) -> Result<Self::Context, Self::Error>;
}

/// An initialized, ready-to-draw surface.
pub struct Surface<C> {
    width: u32,
    height: u32,
    ctx: C,
}

impl<C: DrawingContext> Surface<C> {
    /// Resize the host surface to fill the viewport, then bind its context.
    ///
    /// Later viewport changes are not tracked.
    pub fn initialize<H>(host: &mut H) -> Result<Self, H::Error>
    where
        H: SurfaceHost<Context = C>,
    {
        let viewport = host.viewport()?;
        let (width, height) = viewport.pixel_size();
        host.resize(width, height);
        let ctx = host.context_2d()?;
        log::debug!("surface initialized at {width}x{height}");
        Ok(Self { width, height, ctx })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }
}

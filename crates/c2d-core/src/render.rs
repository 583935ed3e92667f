//! The one-shot render pass and its lifecycle.
//!
//! `Surface` + loaded image → [`Scene`] → [`Scene::render`] → [`Rendered`].
//! Rendering consumes the scene, so a pass runs exactly once.

use crate::context::DrawingContext;
use crate::model::ImageBlit;
use crate::surface::Surface;
use kurbo::Rect;

/// Image at natural size.
pub const NATURAL_BLIT: ImageBlit = ImageBlit::Natural { dx: 100.0, dy: 100.0 };

/// Whole image scaled to 200×200.
pub const SCALED_BLIT: ImageBlit = ImageBlit::Scaled {
    dest: Rect::new(300.0, 100.0, 500.0, 300.0),
};

/// 96×96 crop from (16, 16), scaled down to 50×50.
pub const CROPPED_BLIT: ImageBlit = ImageBlit::Cropped {
    src: Rect::new(16.0, 16.0, 112.0, 112.0),
    dest: Rect::new(100.0, 300.0, 150.0, 350.0),
};

pub const RENDER_PASS: [ImageBlit; 3] = [NATURAL_BLIT, SCALED_BLIT, CROPPED_BLIT];

/// Blit `image` at every position of [`RENDER_PASS`], in order.
pub fn render_pass<C: DrawingContext + ?Sized>(ctx: &mut C, image: &C::Image) {
    for blit in RENDER_PASS {
        log::trace!("blit at {:?}", blit.origin());
        ctx.draw_image(image, blit);
    }
}

/// An initialized surface paired with its loaded image, ready to render.
pub struct Scene<C: DrawingContext> {
    surface: Surface<C>,
    image: C::Image,
}

impl<C: DrawingContext> Scene<C> {
    pub fn new(surface: Surface<C>, image: C::Image) -> Self {
        Self { surface, image }
    }

    /// Run the render pass. Terminal: the result cannot render again.
    pub fn render(self) -> Rendered<C> {
        let Scene { mut surface, image } = self;
        render_pass(surface.context_mut(), &image);
        log::debug!(
            "render pass drew {} blits on {}x{}",
            RENDER_PASS.len(),
            surface.width(),
            surface.height()
        );
        Rendered { surface, image }
    }
}

/// A scene after its render pass.
pub struct Rendered<C: DrawingContext> {
    surface: Surface<C>,
    image: C::Image,
}

impl<C: DrawingContext> Rendered<C> {
    pub fn surface(&self) -> &Surface<C> {
        &self.surface
    }

    pub fn image(&self) -> &C::Image {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawCommand;
    use crate::recorder::{RecordedImage, Recorder};
    use pretty_assertions::assert_eq;

    #[test]
    fn pass_blits_three_times_in_order() {
        let mut rec = Recorder::new();
        let image = RecordedImage::new("photo.jpg", 128, 128);
        render_pass(&mut rec, &image);

        let blits: Vec<ImageBlit> = rec
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawImage { blit, .. } => Some(*blit),
                _ => None,
            })
            .collect();
        assert_eq!(blits, RENDER_PASS.to_vec());
        assert_eq!(rec.commands().len(), 3);
    }

    #[test]
    fn pass_leaves_styles_alone() {
        let mut rec = Recorder::new();
        render_pass(&mut rec, &RecordedImage::new("photo.jpg", 64, 64));
        assert_eq!(rec.fill_style(), "#000000");
        assert_eq!(rec.stroke_style(), "#000000");
    }

    #[test]
    fn blit_geometry() {
        match SCALED_BLIT {
            ImageBlit::Scaled { dest } => {
                assert_eq!(dest.width(), 200.0);
                assert_eq!(dest.height(), 200.0);
            }
            other => panic!("expected Scaled, got {other:?}"),
        }
        match CROPPED_BLIT {
            ImageBlit::Cropped { src, dest } => {
                assert_eq!((src.width(), src.height()), (96.0, 96.0));
                assert_eq!((dest.width(), dest.height()), (50.0, 50.0));
            }
            other => panic!("expected Cropped, got {other:?}"),
        }
    }
}

//! WASM bridge for the Canvas2D demo.
//!
//! Compiled via `wasm-pack build --target web`. The page calls `boot()` once
//! the module is initialized; the image is loaded, the canvas sized to the
//! window and the render pass drawn. `ShapeCanvas` exposes the shape
//! primitives to JavaScript.

mod host;
mod loader;
mod logger;
mod web_context;

use c2d_core::shapes;
use c2d_core::{DemoConfig, ImageLoader, Point, RecordedImage, Rect, Scene, Surface, Viewport};
use host::BrowserHost;
use loader::HtmlImageLoader;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_context::WebContext;
use web_sys::HtmlImageElement;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook_setup();
    logger::init(DemoConfig::default().level_filter());
}

/// Run the demo once the page has loaded.
///
/// `config_json` optionally overrides `DemoConfig` fields, e.g.
/// `{"imagePath":"./image/other.jpg","logLevel":"debug"}`.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => DemoConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => DemoConfig::default(),
    };
    logger::init(config.level_filter());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    // `load` has already fired if the module finished initializing late.
    let loaded = window
        .document()
        .is_some_and(|document| document.ready_state() == "complete");
    if loaded {
        on_page_load(config);
        return Ok(());
    }

    let listener = Closure::once_into_js(move || on_page_load(config));
    window.add_event_listener_with_callback("load", listener.unchecked_ref())
}

fn on_page_load(config: DemoConfig) {
    let DemoConfig {
        canvas_selector,
        image_path,
        ..
    } = config;
    HtmlImageLoader.load(
        &image_path,
        Some(Box::new(move |image: HtmlImageElement| {
            if let Err(err) = draw_demo(&canvas_selector, image) {
                log::error!("demo render failed: {err:?}");
            }
        })),
    );
}

fn draw_demo(selector: &str, image: HtmlImageElement) -> Result<(), JsValue> {
    let mut host = BrowserHost::find(selector)?;
    let surface = Surface::initialize(&mut host)?;
    let rendered = Scene::new(surface, image).render();
    log::info!(
        "rendered {} at {}x{}",
        rendered.image().src(),
        rendered.surface().width(),
        rendered.surface().height()
    );
    Ok(())
}

/// A canvas sized to the window, with the shape primitives on top.
///
/// Colors are CSS color strings; omitting one keeps the current style.
/// Angles are radians.
#[wasm_bindgen]
pub struct ShapeCanvas {
    surface: Surface<WebContext>,
}

#[wasm_bindgen]
impl ShapeCanvas {
    /// Initialize the canvas matching `selector` (e.g. `"#main_canvas"`).
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<ShapeCanvas, JsValue> {
        console_error_panic_hook_setup();
        let mut host = BrowserHost::find(selector)?;
        let surface = Surface::initialize(&mut host)?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Option<String>) {
        let rect = Rect::new(x, y, x + width, y + height);
        shapes::draw_rect(self.surface.context_mut(), rect, color.as_deref());
    }

    pub fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<String>,
        width: Option<f64>,
    ) {
        shapes::draw_line(
            self.surface.context_mut(),
            Point::new(x1, y1),
            Point::new(x2, y2),
            color.as_deref(),
            width,
        );
    }

    /// `points` is a flat `[x0, y0, x1, y1, ...]` list of at least three
    /// vertices; shorter or odd-length lists draw nothing.
    pub fn draw_polygon(&mut self, points: &[f64], color: Option<String>) {
        shapes::draw_polygon(self.surface.context_mut(), points, color.as_deref());
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Option<String>) {
        shapes::draw_circle(self.surface.context_mut(), Point::new(x, y), radius, color.as_deref());
    }

    pub fn draw_fan(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_radian: f64,
        end_radian: f64,
        color: Option<String>,
    ) {
        shapes::draw_fan(
            self.surface.context_mut(),
            Point::new(x, y),
            radius,
            start_radian,
            end_radian,
            color.as_deref(),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_quadratic_bezier(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        cx: f64,
        cy: f64,
        color: Option<String>,
        width: Option<f64>,
    ) {
        shapes::draw_quadratic_bezier(
            self.surface.context_mut(),
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(cx, cy),
            color.as_deref(),
            width,
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_cubic_bezier(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        color: Option<String>,
        width: Option<f64>,
    ) {
        shapes::draw_cubic_bezier(
            self.surface.context_mut(),
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(cx1, cy1),
            Point::new(cx2, cy2),
            color.as_deref(),
            width,
        );
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("c2d WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// The render pass as a display list, recorded against a placeholder image
/// on a `width`×`height` viewport.
/// Returns JSON `{"ok":true,"width":..,"height":..,"commands":[...]}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn render_plan_json(width: f64, height: f64) -> String {
    let image = RecordedImage::new(DemoConfig::default().image_path, 0, 0);
    let rendered = c2d_core::record_demo(Viewport::new(width, height), image);
    let surface = rendered.surface();
    match surface.context().to_json() {
        Ok(commands) => format!(
            r#"{{"ok":true,"width":{},"height":{},"commands":{commands}}}"#,
            surface.width(),
            surface.height()
        ),
        Err(e) => serde_json::json!({ "ok": false, "error": e }).to_string(),
    }
}

/// Uniform random integer in `[0, range)`.
#[wasm_bindgen]
pub fn random_int(range: u32) -> u32 {
    c2d_core::random::random_int(range)
}

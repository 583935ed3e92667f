//! The page's `<canvas>` as a surface host.

use crate::web_context::WebContext;
use c2d_core::{SurfaceHost, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub struct BrowserHost {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl BrowserHost {
    /// Look up the canvas matching `selector` inside `<body>`.
    pub fn find(selector: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let canvas = body
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("canvas {selector} not found")))?
            .dyn_into::<HtmlCanvasElement>()?;
        Ok(Self { window, canvas })
    }
}

impl SurfaceHost for BrowserHost {
    type Context = WebContext;
    type Error = JsValue;

    fn viewport(&self) -> Result<Viewport, JsValue> {
        let width = self.window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport::new(width, height))
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn context_2d(&self) -> Result<WebContext, JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(WebContext::new(ctx))
    }
}

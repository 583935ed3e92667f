//! Image loading through `HtmlImageElement`.

use c2d_core::{ImageLoader, LoadCallback, PendingLoad};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// Loads images by pointing a fresh `<img>` at the path and waiting for its
/// `load` or `error` event, whichever comes first.
pub struct HtmlImageLoader;

impl ImageLoader for HtmlImageLoader {
    type Image = HtmlImageElement;

    fn load(&self, path: &str, on_load: Option<LoadCallback<HtmlImageElement>>) {
        let target = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                log::error!("cannot create image element for {path}: {err:?}");
                return;
            }
        };
        let pending = Rc::new(RefCell::new(PendingLoad::new(path, on_load)));

        let on_decoded = {
            let pending = Rc::clone(&pending);
            let image = target.clone();
            Closure::once_into_js(move || {
                pending.borrow_mut().complete(image);
            })
        };
        let on_error = {
            let pending = Rc::clone(&pending);
            Closure::once_into_js(move || pending.borrow_mut().fail())
        };

        // Listeners go on before `src` so a cached image can't decode first.
        for (event, listener) in [("load", &on_decoded), ("error", &on_error)] {
            if let Err(err) = target.add_event_listener_with_callback(event, listener.unchecked_ref::<Function>()) {
                log::error!("cannot listen for {event} on {path}: {err:?}");
                return;
            }
        }
        target.set_src(path);
    }
}

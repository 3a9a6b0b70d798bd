//! Viewport provider backed by `window.innerWidth` / `window.innerHeight`.

use platform_host::{ViewportService, ViewportSize};

#[derive(Debug, Clone, Copy, Default)]
/// Browser viewport service; every call reads the live window size.
pub struct WebViewportService;

impl ViewportService for WebViewportService {
    fn viewport_size(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                    value.ok().and_then(|value| value.as_f64()).map(|px| px as i32)
                };
                let fallback = ViewportSize::default();
                return ViewportSize {
                    width: read(window.inner_width()).unwrap_or(fallback.width),
                    height: read(window.inner_height()).unwrap_or(fallback.height),
                };
            }
        }

        ViewportSize::default()
    }
}

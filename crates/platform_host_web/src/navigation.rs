//! Outbound navigation backed by `window.open`, `window.confirm` and `location.reload`.

use platform_host::{NavigationFuture, NavigationService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation service.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn open_url<'a>(&'a self, url: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .open_with_url_and_target(url, "_blank")
                    .map(|_| ())
                    .map_err(|e| format!("window.open failed for `{url}`: {e:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(())
            }
        })
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            true
        }
    }

    fn reload(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            return window
                .location()
                .reload()
                .map_err(|e| format!("location.reload failed: {e:?}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }
}

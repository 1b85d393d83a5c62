//! Heart greeting page: an animated heart drawing, a counter of the time
//! elapsed since a fixed date, and a click-triggered heart rain.
//!
//! The effects themselves live in [`core`] and run on any target against a
//! [`core::Surface`]; the remaining modules wire them to the browser DOM.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{App, AppConfig, LocalClock};
    use crate::{dom, frame, surface};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("valentine-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

        let surface = surface::DomSurface::new(document.clone());
        let app = App::new(AppConfig::default(), surface, LocalClock);
        let ctx = Rc::new(RefCell::new(frame::FrameContext::new(app)));
        {
            let mut c = ctx.borrow_mut();
            let now = c.now_ms();
            c.app.start(now);
        }

        let ctx_click = ctx.clone();
        let wired = dom::add_click_listener(&document, ".text-container", move || {
            let mut c = ctx_click.borrow_mut();
            let now = c.now_ms();
            c.app.trigger_rain(now);
        });
        if !wired {
            log::warn!("missing .text-container; heart rain has no trigger");
        }

        let ctx_resize = ctx.clone();
        dom::add_resize_listener(move || {
            ctx_resize.borrow_mut().app.on_resize();
        });

        frame::start_loop(ctx);
        Ok(())
    }
}

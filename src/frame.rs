use crate::core::{App, LocalClock};
use crate::surface::DomSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageApp = App<DomSurface, LocalClock>;

/// Shared state between the animation loop and the DOM event handlers.
pub struct FrameContext {
    pub app: PageApp,
    pub origin: Instant,
}

impl FrameContext {
    pub fn new(app: PageApp) -> Self {
        Self {
            app,
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the page effects started.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now = self.now_ms();
        self.app.tick(now);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

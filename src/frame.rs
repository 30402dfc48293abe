use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop. `cancel` (or drop) stops it synchronously:
/// the pending frame is cancelled and the callback is never run again.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// Run `on_frame(dt_sec)` every animation frame until the loop is cancelled.
pub fn start_loop(mut on_frame: impl FnMut(f32) + 'static) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        let now = Instant::now();
        let dt = (now - last_instant).as_secs_f32();
        last_instant = now;
        on_frame(dt);
        if running_tick.get() {
            pending_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop {
        running,
        pending,
        tick,
    }
}

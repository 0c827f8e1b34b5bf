//! A repeating per-frame callback with an owner.
//!
//! [`FrameLoop`] runs its frame closure once immediately and then once per
//! scheduled frame until it is dropped. Dropping cancels the pending frame;
//! the scheduled callback only holds a weak reference back to the loop, so a
//! callback that still fires after the drop finds nothing to run.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub trait FrameScheduler: 'static {
    type Pending;

    /// Arms `callback` for the next frame. `None` means nothing was scheduled.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Pending>;

    fn cancel(&self, pending: Self::Pending);
}

struct Shared<S: FrameScheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Pending>>,
    stopped: Cell<bool>,
    frame: RefCell<Box<dyn FnMut()>>,
}

pub struct FrameLoop<S: FrameScheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start(scheduler: S, frame: impl FnMut() + 'static) -> Self {
        let shared = Rc::new(Shared {
            scheduler,
            pending: RefCell::new(None),
            stopped: Cell::new(false),
            frame: RefCell::new(Box::new(frame)),
        });
        tick(&shared);
        Self { shared }
    }

    pub fn is_running(&self) -> bool {
        !self.shared.stopped.get() && self.shared.pending.borrow().is_some()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.shared.stopped.set(true);
        let pending = self.shared.pending.borrow_mut().take();
        if let Some(pending) = pending {
            self.shared.scheduler.cancel(pending);
        }
    }
}

fn tick<S: FrameScheduler>(shared: &Rc<Shared<S>>) {
    if shared.stopped.get() {
        return;
    }
    // The frame that got us here has fired; keep it alive until we return.
    let _fired = shared.pending.borrow_mut().take();

    (shared.frame.borrow_mut())();

    let weak: Weak<Shared<S>> = Rc::downgrade(shared);
    let next = shared.scheduler.request(Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            tick(&shared);
        }
    }));
    *shared.pending.borrow_mut() = next;
}

/// `requestAnimationFrame` on the current window.
pub struct BrowserFrames {
    window: Window,
}

pub struct PendingFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl BrowserFrames {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl FrameScheduler for BrowserFrames {
    type Pending = PendingFrame;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<PendingFrame> {
        let callback: Closure<dyn FnMut()> = Closure::once(move || callback());
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;
        Some(PendingFrame { id, _callback: callback })
    }

    fn cancel(&self, pending: PendingFrame) {
        let _ = self.window.cancel_animation_frame(pending.id);
    }
}

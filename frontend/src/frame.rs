use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::counter::Tick;

/// Entry point a scheduler calls with the frame timestamp.
pub type FrameWake = Rc<dyn Fn(f64)>;

/// Something that can run a callback on the next display refresh.
pub trait FrameScheduler {
    type Error: Debug;

    fn request(&self, wake: &FrameWake) -> Result<i32, Self::Error>;
    fn cancel(&self, id: i32) -> Result<(), Self::Error>;
}

/// `requestAnimationFrame` on the global window.
pub struct AnimationFrames {
    window: Option<Window>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl AnimationFrames {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
            callback: RefCell::new(None),
        }
    }

    fn window(&self) -> Result<&Window, JsValue> {
        self.window
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no global window"))
    }
}

impl Default for AnimationFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for AnimationFrames {
    type Error = JsValue;

    fn request(&self, wake: &FrameWake) -> Result<i32, JsValue> {
        let window = self.window()?;
        let mut callback = self.callback.borrow_mut();
        // One JS closure per loop, reused for every frame
        let callback = callback.get_or_insert_with(|| {
            let wake = wake.clone();
            Closure::wrap(Box::new(move |timestamp: f64| wake(timestamp)) as Box<dyn FnMut(f64)>)
        });
        window.request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn cancel(&self, id: i32) -> Result<(), JsValue> {
        self.window()?.cancel_animation_frame(id)
    }
}

struct Driver<S: FrameScheduler> {
    scheduler: S,
    wake: FrameWake,
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Box<dyn FnMut(f64) -> Tick>>,
}

impl<S: FrameScheduler> Driver<S> {
    fn run_frame(&self, timestamp: f64) {
        self.pending.set(None);
        let tick = (self.on_frame.borrow_mut())(timestamp);
        if tick == Tick::Done {
            return;
        }
        match self.scheduler.request(&self.wake) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::error!("could not request next frame: {:?}", err),
        }
    }
}

/// A chain of frame callbacks. Keeps asking for frames while the callback
/// returns `Tick::Continue`. Dropping it cancels the pending frame, so nothing
/// runs after the owner is gone.
pub struct FrameLoop<S: FrameScheduler + 'static = AnimationFrames> {
    driver: Rc<Driver<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn with_scheduler<F>(scheduler: S, on_frame: F) -> Result<Self, S::Error>
    where
        F: FnMut(f64) -> Tick + 'static,
    {
        let driver = Rc::new_cyclic(|me: &Weak<Driver<S>>| {
            // Weak so a stale frame can't keep a dropped loop alive
            let me = me.clone();
            Driver {
                scheduler,
                wake: Rc::new(move |timestamp: f64| {
                    if let Some(driver) = me.upgrade() {
                        driver.run_frame(timestamp);
                    }
                }),
                pending: Cell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
            }
        });

        let id = driver.scheduler.request(&driver.wake)?;
        driver.pending.set(Some(id));
        Ok(Self { driver })
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.driver.pending.get().is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        if let Some(id) = self.driver.pending.take() {
            if let Err(err) = self.driver.scheduler.cancel(id) {
                log::warn!("could not cancel frame {}: {:?}", id, err);
            }
        }
    }
}

/// Scheduler driven by hand, for exercising frame loops without a browser.
#[cfg(test)]
pub mod manual {
    use super::*;

    #[derive(Default)]
    struct State {
        next_id: i32,
        pending: Option<(i32, FrameWake)>,
        requested: Vec<i32>,
        cancelled: Vec<i32>,
        fail: bool,
        refuse_cancel: bool,
    }

    #[derive(Clone, Default)]
    pub struct ManualFrames {
        state: Rc<RefCell<State>>,
    }

    impl ManualFrames {
        pub fn failing() -> Self {
            let frames = Self::default();
            frames.state.borrow_mut().fail = true;
            frames
        }

        pub fn refusing_cancel() -> Self {
            let frames = Self::default();
            frames.state.borrow_mut().refuse_cancel = true;
            frames
        }

        /// Hands out the callback of the pending frame, as if the browser
        /// had queued it.
        pub fn take_wake(&self) -> Option<FrameWake> {
            self.state.borrow_mut().pending.take().map(|(_, wake)| wake)
        }

        /// Runs the pending frame. Returns false if none was requested.
        pub fn fire(&self, timestamp: f64) -> bool {
            match self.take_wake() {
                Some(wake) => {
                    wake(timestamp);
                    true
                }
                None => false,
            }
        }

        pub fn requested(&self) -> Vec<i32> {
            self.state.borrow().requested.clone()
        }

        pub fn cancelled(&self) -> Vec<i32> {
            self.state.borrow().cancelled.clone()
        }
    }

    impl FrameScheduler for ManualFrames {
        type Error = &'static str;

        fn request(&self, wake: &FrameWake) -> Result<i32, Self::Error> {
            let mut state = self.state.borrow_mut();
            if state.fail {
                return Err("frames unavailable");
            }
            state.next_id += 1;
            let id = state.next_id;
            state.requested.push(id);
            state.pending = Some((id, wake.clone()));
            Ok(id)
        }

        fn cancel(&self, id: i32) -> Result<(), Self::Error> {
            let mut state = self.state.borrow_mut();
            state.cancelled.push(id);
            if state.refuse_cancel {
                return Err("cancel refused");
            }
            if matches!(state.pending, Some((pending, _)) if pending == id) {
                state.pending = None;
            }
            Ok(())
        }
    }
}

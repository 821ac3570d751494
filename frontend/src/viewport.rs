use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One-shot viewport watch on a single element. Fires `on_enter` the first
/// time the element intersects the viewport and stops observing. Dropping the
/// watch disconnects the observer.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportWatch {
    pub fn once<F>(element: &Element, threshold: f64, on_enter: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut on_enter = Some(on_enter);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !entered {
                return;
            }
            observer.disconnect();
            if let Some(on_enter) = on_enter.take() {
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `false` until the node behind `node` has been on screen once, `true` from
/// then on. Never flips back.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node| {
                let mut watch = None;
                if !*seen {
                    match node.cast::<Element>() {
                        Some(element) => {
                            let setter = seen.setter();
                            match ViewportWatch::once(&element, config::VIEW_THRESHOLD, move || {
                                setter.set(true)
                            }) {
                                Ok(w) => watch = Some(w),
                                Err(err) => {
                                    // No observer support, just show the content
                                    log::warn!("IntersectionObserver unavailable: {:?}", err);
                                    seen.set(true);
                                }
                            }
                        }
                        None => log::warn!("use_in_view: node is not mounted"),
                    }
                }
                move || drop(watch)
            },
            node,
        );
    }

    *seen
}

/// How far down the page the user has scrolled, from 0.0 to 1.0.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    scroll_progress(scroll_y, scrollable_height().unwrap_or(0.0))
}

fn scrollable_height() -> Option<f64> {
    let window = web_sys::window()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(document_height - viewport_height)
}

pub fn scroll_progress(scroll_y: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0), 0.25);
        assert_eq!(scroll_progress(2600.0, 2000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0), 0.0);
    }

    #[test]
    fn test_short_page_has_no_progress() {
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(10.0, -300.0), 0.0);
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::counter::CountUp;
use crate::frame::{AnimationFrames, FrameLoop, FrameScheduler};
use crate::viewport::use_in_view;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: u32,
}

/// Triggers `counter` and drives it on `scheduler`, reporting every new
/// display string to `on_change`. Jumps to the final value if no frame can
/// be scheduled. Returns the running loop, if any.
fn start_counting<S, C>(
    counter: &Rc<RefCell<CountUp>>,
    scheduler: S,
    on_change: C,
) -> Option<FrameLoop<S>>
where
    S: FrameScheduler + 'static,
    C: Fn(String) + 'static,
{
    if !counter.borrow_mut().trigger() {
        log::debug!("counter not started ({:?})", counter.borrow().phase());
        return None;
    }

    let on_frame = {
        let counter = counter.clone();
        move |timestamp: f64| {
            let (tick, text) = {
                let mut counter = counter.borrow_mut();
                let tick = counter.advance(timestamp);
                if counter.is_settled() {
                    log::debug!("counter settled at {}", counter.value());
                }
                (tick, counter.display())
            };
            on_change(text);
            tick
        }
    };

    match FrameLoop::with_scheduler(scheduler, on_frame) {
        Ok(frame_loop) => Some(frame_loop),
        Err(err) => {
            log::error!("could not schedule counter frames: {:?}", err);
            counter.borrow_mut().settle();
            None
        }
    }
}

/// Counts from 0 up to `end` the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let counter = {
        let (end, suffix, duration) = (props.end, props.suffix.to_string(), props.duration_ms);
        use_mut_ref(move || CountUp::new(end, suffix, duration))
    };
    let shown = use_state_eq(|| counter.borrow().display());

    {
        let counter = counter.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |in_view| {
                let mut frames = None;
                if *in_view {
                    let setter = shown.setter();
                    frames = start_counting(&counter, AnimationFrames::new(), move |text| {
                        setter.set(text)
                    });
                    let text = counter.borrow().display();
                    shown.set(text);
                }
                // Cancels a run that is still in flight
                move || drop(frames)
            },
            in_view,
        );
    }

    html! {
        <span ref={node} class="tabular-nums">
            { (*shown).clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::manual::ManualFrames;

    fn shown_log() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let log = log.clone();
            move |text: String| log.borrow_mut().push(text)
        };
        (log, sink)
    }

    #[test]
    fn test_counts_up_frame_by_frame() {
        let counter = Rc::new(RefCell::new(CountUp::new(100, "+", 2000)));
        let frames = ManualFrames::default();
        let (shown, sink) = shown_log();

        let running = start_counting(&counter, frames.clone(), sink);
        assert!(running.is_some());

        frames.fire(0.0);
        frames.fire(1000.0);
        frames.fire(2000.0);

        assert_eq!(*shown.borrow(), vec!["0+", "50+", "100+"]);
        assert!(!frames.fire(3000.0));
        assert!(counter.borrow().is_settled());
    }

    #[test]
    fn test_unmount_mid_run_stops_counting() {
        let counter = Rc::new(RefCell::new(CountUp::new(100, "", 2000)));
        let frames = ManualFrames::default();
        let (shown, sink) = shown_log();

        let running = start_counting(&counter, frames.clone(), sink);
        frames.fire(0.0);
        frames.fire(500.0);
        drop(running);

        assert_eq!(frames.cancelled(), vec![3]);
        assert!(!frames.fire(2000.0));
        assert_eq!(counter.borrow().value(), 25);
        assert_eq!(shown.borrow().len(), 2);
    }

    #[test]
    fn test_settles_when_frames_are_unavailable() {
        let counter = Rc::new(RefCell::new(CountUp::new(5000, "+", 2000)));
        let (shown, sink) = shown_log();

        let running = start_counting(&counter, ManualFrames::failing(), sink);

        assert!(running.is_none());
        assert!(counter.borrow().is_settled());
        assert_eq!(counter.borrow().display(), "5000+");
        assert!(shown.borrow().is_empty());
    }

    #[test]
    fn test_second_visibility_does_not_restart() {
        let counter = Rc::new(RefCell::new(CountUp::new(10, "", 1000)));
        let frames = ManualFrames::default();
        let (_, sink) = shown_log();
        let (_, again) = shown_log();

        let _running = start_counting(&counter, frames.clone(), sink);
        assert!(start_counting(&counter, frames.clone(), again).is_none());
        assert_eq!(frames.requested(), vec![1]);
    }

    #[test]
    fn test_zero_target_needs_no_frames() {
        let counter = Rc::new(RefCell::new(CountUp::new(0, " M+", 2000)));
        let frames = ManualFrames::default();
        let (_, sink) = shown_log();

        assert!(start_counting(&counter, frames.clone(), sink).is_none());
        assert!(frames.requested().is_empty());
        assert_eq!(counter.borrow().display(), "0 M+");
    }
}

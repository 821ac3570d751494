use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::{reveal_style, Hover, Preset};
use crate::viewport::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub preset: Preset,
    #[prop_or(800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Play on first paint instead of waiting to be scrolled into view.
    #[prop_or_default]
    pub on_mount: bool,
    /// Feedback under the pointer once revealed.
    #[prop_or_default]
    pub hover: Hover,
    #[prop_or_default]
    pub class: Classes,
}

/// Holds its children in a hidden state until they are first seen, then
/// eases them into place. Plays once per mount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let shown = use_state_eq(|| false);

    let ready = props.on_mount || in_view;
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(ready, delay_ms)| {
                let mut timeout = None;
                if *ready && !*shown {
                    let setter = shown.setter();
                    // Also defers past first paint so the transition has a start state
                    timeout = Some(Timeout::new(*delay_ms, move || setter.set(true)));
                }
                move || drop(timeout)
            },
            (ready, props.delay_ms),
        );
    }

    let class = classes!(
        "reveal",
        (*shown).then(|| "is-visible"),
        props.hover.class(),
        props.class.clone()
    );

    html! {
        <div ref={node} {class} style={reveal_style(props.preset, props.duration_ms)}>
            { for props.children.iter() }
        </div>
    }
}

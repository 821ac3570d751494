use crate::config;

/// Linear map of `input` from the `from` range onto the `to` range, clamped
/// to the ends of `to`.
pub fn map_range(input: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return if input < from.0 { to.0 } else { to.1 };
    }
    let t = ((input - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// Entrance animation: the hidden state an element starts from before it
/// eases into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    Fade,
    FadeUp(f64),
    /// Comes in from the left, travelling the given number of px.
    SlideLeft(f64),
    /// Comes in from the right.
    SlideRight(f64),
    ZoomIn(f64),
}

impl Default for Preset {
    fn default() -> Self {
        Preset::FadeUp(30.0)
    }
}

impl Preset {
    pub fn initial_transform(&self) -> String {
        match *self {
            Preset::Fade => "none".to_string(),
            Preset::FadeUp(px) => format!("translateY({}px)", px),
            Preset::SlideLeft(px) => format!("translateX({}px)", -px),
            Preset::SlideRight(px) => format!("translateX({}px)", px),
            Preset::ZoomIn(scale) => format!("scale({})", scale),
        }
    }
}

/// Pointer feedback on a revealed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Hover {
    #[default]
    None,
    /// Rise a few px and grow slightly.
    Lift,
    /// Grow in place.
    Grow,
}

impl Hover {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Hover::None => None,
            Hover::Lift => Some("hover-lift"),
            Hover::Grow => Some("hover-grow"),
        }
    }
}

/// Inline style for a reveal wrapper.
pub fn reveal_style(preset: Preset, duration_ms: u32) -> String {
    format!(
        "--reveal-from: {}; --reveal-duration: {}ms;",
        preset.initial_transform(),
        duration_ms
    )
}

/// Scroll-linked offset and opacity of the hero section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub offset_px: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub fn at(progress: f64) -> Self {
        let range = (0.0, config::HERO_FADE_UNTIL);
        Self {
            offset_px: map_range(progress, range, (0.0, config::HERO_TRAVEL_PX)),
            opacity: map_range(progress, range, (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}px); opacity: {:.3};",
            self.offset_px, self.opacity
        )
    }
}

use log::Level;

/// How long a counter takes to go from 0 to its target.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Delay between consecutive cards in a grid reveal.
pub const STAGGER_STEP_MS: u32 = 100;

/// Delay between consecutive hero elements on first paint.
pub const HERO_STEP_MS: u32 = 200;

pub const PARTICLE_COUNT: usize = 40;

// Drift duration is picked per particle from this range (seconds)
pub const PARTICLE_MIN_SECS: f64 = 10.0;
pub const PARTICLE_SPREAD_SECS: f64 = 20.0;

/// Fraction of the element that must be on screen before it counts as seen.
pub const VIEW_THRESHOLD: f64 = 0.0;

// The hero fades out over the first 30% of page scroll
pub const HERO_FADE_UNTIL: f64 = 0.3;
pub const HERO_TRAVEL_PX: f64 = 100.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose in local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

use std::rc::Rc;

use yew::prelude::*;

use crate::config;

/// One drifting dot. Positions are percentages of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub duration_secs: f64,
}

impl Particle {
    /// Lay out `count` particles using `random`, which must yield values in
    /// `[0, 1)`.
    pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
        (0..count)
            .map(|_| Particle {
                from: (random() * 100.0, random() * 100.0),
                to: (random() * 100.0, random() * 100.0),
                duration_secs: config::PARTICLE_MIN_SECS + random() * config::PARTICLE_SPREAD_SECS,
            })
            .collect()
    }

    pub fn style(&self) -> String {
        format!(
            "--x0: {:.2}vw; --y0: {:.2}vh; --x1: {:.2}vw; --y1: {:.2}vh; animation-duration: {:.2}s;",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_secs
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingParticlesProps {
    #[prop_or(config::PARTICLE_COUNT)]
    pub count: usize,
}

#[function_component(FloatingParticles)]
pub fn floating_particles(props: &FloatingParticlesProps) -> Html {
    // Laid out once per mount
    let particles: Rc<Vec<Particle>> = use_memo(
        |count| Particle::scatter(*count, web_sys::js_sys::Math::random),
        props.count,
    );

    html! {
        <div class="particles" aria-hidden="true">
            {
                particles.iter().map(|p| html! {
                    <div class="particle" style={p.style()}></div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut values = values.into_iter().cycle();
        move || values.next().unwrap_or(0.0)
    }

    #[test]
    fn test_scatter_uses_viewport_percentages() {
        let particles = Particle::scatter(1, sequence(vec![0.1, 0.2, 0.5, 0.75, 0.5]));
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].from, (10.0, 20.0));
        assert_eq!(particles[0].to, (50.0, 75.0));
        assert_eq!(particles[0].duration_secs, 20.0);
    }

    #[test]
    fn test_durations_stay_in_range() {
        let particles = Particle::scatter(30, sequence(vec![0.0, 0.33, 0.66, 0.999]));
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert!(p.duration_secs >= 10.0 && p.duration_secs < 30.0);
        }
    }

    #[test]
    fn test_style_sets_drift_endpoints() {
        let p = Particle { from: (1.0, 2.0), to: (3.5, 4.25), duration_secs: 12.5 };
        assert_eq!(
            p.style(),
            "--x0: 1.00vw; --y0: 2.00vh; --x1: 3.50vw; --y1: 4.25vh; animation-duration: 12.50s;"
        );
    }
}

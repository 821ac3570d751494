use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::particles::FloatingParticles;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{MENTOR_NAME, OFFERINGS, STATS, VALUES};
use crate::motion::{stagger, HeroParallax, Hover, Preset};
use crate::viewport::use_scroll_progress;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let scroll_progress = use_scroll_progress();
    let hero = HeroParallax::at(scroll_progress);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="about-page">
            <style>{ STYLES }</style>

            <FloatingParticles count={config::PARTICLE_COUNT} />

            // Hero
            <section class="hero" style={hero.style()}>
                <div class="glow glow-cyan"></div>
                <div class="glow glow-violet"></div>
                <div class="container hero-content">
                    <Reveal on_mount={true} preset={Preset::SlideLeft(50.0)} delay_ms={config::HERO_STEP_MS}>
                        <h1 class="gradient-text hero-title">{"Hey Future-Builder 👋"}</h1>
                    </Reveal>
                    <Reveal on_mount={true} preset={Preset::SlideRight(50.0)} delay_ms={2 * config::HERO_STEP_MS}>
                        <h2 class="hero-name">{format!("I'm {}.", MENTOR_NAME)}</h2>
                    </Reveal>
                    <Reveal on_mount={true} preset={Preset::FadeUp(20.0)} delay_ms={3 * config::HERO_STEP_MS}>
                        <p class="hero-subtitle">
                            {"I turn ideas into impact and help students become "}
                            <span class="accent-warm">{"creators, not followers"}</span>
                            {"."}
                        </p>
                    </Reveal>
                    <Reveal on_mount={true} preset={Preset::ZoomIn(0.9)} delay_ms={4 * config::HERO_STEP_MS}>
                        <div class="cta-row">
                            <button class="cta-primary">
                                {"🚀 Join My Mentorship Space"}
                                <span class="nudge">{"→"}</span>
                            </button>
                            <button class="cta-outline">{"💡 Explore Your Growth Path"}</button>
                        </div>
                    </Reveal>
                </div>
            </section>

            // Split section
            <section class="section">
                <div class="container split">
                    <Reveal preset={Preset::SlideLeft(50.0)} class={classes!("portrait-wrap")}>
                        <div class="portrait-glow"></div>
                        <img class="portrait" src="/assets/portrait.jpg" alt={format!("{} - Innovation Mentor", MENTOR_NAME)} />
                    </Reveal>
                    <Reveal preset={Preset::SlideRight(50.0)} class={classes!("split-text")}>
                        <h2 class="section-title">{"Why This Isn't Your Regular About Page"}</h2>
                        <p class="lead">
                            {"This space is for "}
                            <span class="accent-purple">{"dreamers who want to do"}</span>
                            {". For students who want to build startups, solve problems, and make the world a little smarter."}
                        </p>
                        <p class="lead">
                            {"I've spent "}
                            <span class="accent-cyan">{"25+ years"}</span>
                            {" figuring out what works, so you don't have to."}
                        </p>
                    </Reveal>
                </div>
            </section>

            // Impact metrics
            <section class="section tinted">
                <div class="container">
                    <Reveal class={classes!("section-head")}>
                        <h2 class="section-title gradient-text">{"Impact by Numbers"}</h2>
                        <p class="muted">{"Real results, real transformation"}</p>
                    </Reveal>
                    <div class="grid grid-stats">
                        {
                            STATS.iter().enumerate().map(|(idx, stat)| html! {
                                <Reveal
                                    key={stat.label}
                                    preset={Preset::ZoomIn(0.8)}
                                    duration_ms={500}
                                    delay_ms={stagger(idx, config::STAGGER_STEP_MS)}
                                >
                                    <div class="card stat-card">
                                        <div class="card-emoji">{stat.emoji}</div>
                                        <div class="stat-value">
                                            <AnimatedCounter end={stat.value} suffix={stat.suffix} />
                                        </div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Offerings
            <section class="section">
                <div class="container">
                    <Reveal class={classes!("section-head")}>
                        <h2 class="section-title">{"What You'll Get Here"}</h2>
                    </Reveal>
                    <div class="grid grid-offerings">
                        {
                            OFFERINGS.iter().enumerate().map(|(idx, item)| html! {
                                <Reveal
                                    key={item.title}
                                    duration_ms={500}
                                    delay_ms={stagger(idx, config::STAGGER_STEP_MS)}
                                    hover={Hover::Lift}
                                >
                                    <div class="card offering-card">
                                        <div class="card-emoji">{item.emoji}</div>
                                        <h3>{item.title}</h3>
                                        <p class="muted">{item.description}</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Values
            <section class="section values">
                <div class="container">
                    <Reveal class={classes!("section-head")}>
                        <h2 class="section-title">{"The Energy That Drives It All"}</h2>
                    </Reveal>
                    <div class="grid grid-values">
                        {
                            VALUES.iter().enumerate().map(|(idx, value)| html! {
                                <Reveal
                                    key={value.text}
                                    preset={Preset::ZoomIn(0.8)}
                                    duration_ms={500}
                                    delay_ms={stagger(idx, config::STAGGER_STEP_MS)}
                                    hover={Hover::Grow}
                                >
                                    <div class="card value-card">
                                        <div class="card-emoji">{value.emoji}</div>
                                        <div class="value-text">{value.text}</div>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Mission & vision
            <section class="section mission">
                <div class="container narrow">
                    <Reveal preset={Preset::FadeUp(50.0)}>
                        <h2 class="section-title gradient-text">{"The Bigger Picture"}</h2>
                    </Reveal>
                    <Reveal preset={Preset::Fade} duration_ms={1000} delay_ms={300}>
                        <p class="statement">
                            {"My mission is to make "}
                            <span class="accent-purple">{"innovation and mentorship accessible"}</span>
                            {" to every student who's ready to build."}
                        </p>
                    </Reveal>
                    <Reveal preset={Preset::Fade} duration_ms={1000} delay_ms={500}>
                        <p class="statement">
                            {"My vision is a future where "}
                            <span class="accent-cyan">{"education meets technology"}</span>
                            {", and students become "}
                            <span class="accent-violet">{"change-makers"}</span>
                            {"."}
                        </p>
                    </Reveal>
                </div>
            </section>

            // Closing call to action
            <section class="section closing">
                <div class="container narrow">
                    <Reveal preset={Preset::ZoomIn(0.9)}>
                        <div class="sparkle">{"✨"}</div>
                        <h2 class="gradient-text closing-title">{"Let's Build Something Real"}</h2>
                    </Reveal>
                    <Reveal preset={Preset::Fade} duration_ms={1000} delay_ms={300}>
                        <blockquote class="quote">
                            {"\"Innovation happens where curiosity meets courage.\""}
                        </blockquote>
                        <p class="quote-author">{format!("— {}", MENTOR_NAME)}</p>
                    </Reveal>
                    <Reveal preset={Preset::FadeUp(20.0)} delay_ms={500}>
                        <div class="cta-row">
                            <button class="cta-primary cta-large press">{"✨ Start My Mentorship Journey"}</button>
                            <button class="cta-outline cta-large press">{"📩 Connect with Ravi"}</button>
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

const STYLES: &str = r#"
    .about-page {
        min-height: 100vh;
        overflow: hidden;
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        background: linear-gradient(135deg, #ecfeff 0%, #faf5ff 50%, #ede9fe 100%);
        color: #1f2937;
    }
    @media (prefers-color-scheme: dark) {
        .about-page {
            background: linear-gradient(135deg, #111827 0%, #3b0764 50%, #2e1065 100%);
            color: #f3f4f6;
        }
        .card { background: rgba(31, 41, 55, 0.6); }
        .muted, .stat-label { color: #9ca3af; }
    }
    .container { max-width: 80rem; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 1; }
    .narrow { max-width: 56rem; text-align: center; }

    .reveal {
        opacity: 0;
        transform: var(--reveal-from);
        transition: opacity var(--reveal-duration) ease-out, transform var(--reveal-duration) ease-out;
    }
    .reveal.is-visible { opacity: 1; transform: none; }
    .reveal.is-visible.hover-lift:hover { transform: translateY(-5px) scale(1.05); transition-duration: 200ms; }
    .reveal.is-visible.hover-grow:hover { transform: scale(1.1); transition-duration: 200ms; }

    .particles { position: fixed; inset: 0; overflow: hidden; pointer-events: none; }
    .particle {
        position: absolute;
        width: 4px;
        height: 4px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        filter: blur(1px);
        animation-name: drift;
        animation-timing-function: linear;
        animation-iteration-count: infinite;
        animation-direction: alternate;
    }
    @keyframes drift {
        from { transform: translate(var(--x0), var(--y0)); }
        to { transform: translate(var(--x1), var(--y1)); }
    }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding-top: 5rem;
        text-align: center;
        will-change: transform, opacity;
    }
    .hero-content { max-width: 64rem; }
    .glow { position: absolute; width: 24rem; height: 24rem; border-radius: 50%; filter: blur(64px); animation: pulse 2s ease-in-out infinite; }
    .glow-cyan { top: 5rem; left: 2.5rem; background: rgba(34, 211, 238, 0.2); }
    .glow-violet { bottom: 5rem; right: 2.5rem; background: rgba(167, 139, 250, 0.2); animation-delay: 1s; }
    @keyframes pulse { 50% { opacity: 0.5; } }

    .gradient-text {
        background: linear-gradient(90deg, #0891b2, #9333ea, #7c3aed);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-title { font-size: clamp(3rem, 8vw, 6rem); font-weight: 800; line-height: 1.1; margin: 0 0 2rem; }
    .hero-name { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin: 0 0 2rem; }
    .hero-subtitle { font-size: clamp(1.25rem, 2.5vw, 1.5rem); max-width: 48rem; margin: 0 auto; line-height: 1.6; }
    .accent-warm { font-weight: 700; background: linear-gradient(90deg, #ec4899, #f97316); -webkit-background-clip: text; background-clip: text; color: transparent; }
    .accent-purple { font-weight: 700; color: #9333ea; }
    .accent-cyan { font-weight: 700; color: #0891b2; }
    .accent-violet { font-weight: 700; color: #7c3aed; }

    .cta-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; padding-top: 2rem; }
    .cta-primary, .cta-outline {
        font-size: 1.125rem;
        padding: 1.25rem 2rem;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: all 300ms;
    }
    .cta-primary { color: white; border: 0; background: linear-gradient(90deg, #0891b2, #9333ea); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
    .cta-primary:hover { box-shadow: 0 25px 50px -12px rgba(168, 85, 247, 0.5); }
    .cta-outline { color: #9333ea; background: transparent; border: 2px solid #9333ea; }
    .cta-outline:hover { background: #9333ea; color: white; }
    .cta-large { font-size: 1.25rem; padding: 1.5rem 2.5rem; }
    .press:hover { transform: scale(1.05); }
    .press:active { transform: scale(0.95); }
    .nudge { display: inline-block; margin-left: 0.5rem; animation: nudge 1.5s ease-in-out infinite; }
    @keyframes nudge { 50% { transform: translateX(5px); } }

    .section { position: relative; padding: 6rem 0; }
    .section-head { text-align: center; margin-bottom: 4rem; }
    .section-title { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 700; margin: 0 0 1rem; }
    .lead { font-size: 1.25rem; line-height: 1.6; }
    .muted { color: #4b5563; line-height: 1.6; }
    .tinted { background: linear-gradient(180deg, transparent, rgba(243, 232, 255, 0.5), transparent); }
    .values { background: linear-gradient(135deg, rgba(6, 182, 212, 0.1), rgba(168, 85, 247, 0.1), rgba(139, 92, 246, 0.1)); }
    .mission { padding: 8rem 0; background-image: radial-gradient(circle at 30% 50%, rgba(6, 182, 212, 0.1) 0%, transparent 50%), radial-gradient(circle at 70% 50%, rgba(139, 92, 246, 0.1) 0%, transparent 50%); }

    .split { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem; align-items: center; }
    .portrait-wrap { position: relative; }
    .portrait-glow { position: absolute; inset: -1rem; border-radius: 1.5rem; filter: blur(40px); opacity: 0.3; background: linear-gradient(90deg, #06b6d4, #8b5cf6); transition: opacity 300ms; }
    .portrait-wrap:hover .portrait-glow { opacity: 0.5; }
    .portrait { position: relative; width: 100%; height: auto; border-radius: 1.5rem; border: 4px solid rgba(255, 255, 255, 0.2); }

    .grid { display: grid; gap: 1.5rem; margin: 0 auto; }
    .grid-stats { grid-template-columns: repeat(auto-fit, minmax(11rem, 1fr)); }
    .grid-offerings { grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); max-width: 64rem; }
    .grid-values { grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); max-width: 64rem; }
    .card {
        height: 100%;
        box-sizing: border-box;
        padding: 1.5rem;
        border-radius: 0.75rem;
        text-align: center;
        backdrop-filter: blur(16px);
        background: rgba(255, 255, 255, 0.6);
        border: 2px solid rgba(255, 255, 255, 0.2);
        transition: all 300ms;
    }
    .card:hover { border-color: #c084fc; box-shadow: 0 25px 50px -12px rgba(168, 85, 247, 0.2); }
    .offering-card { padding: 2rem; text-align: left; }
    .offering-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
    .card-emoji { font-size: 3rem; margin-bottom: 0.75rem; }
    .stat-card:hover { transform: scale(1.05); }
    .stat-value { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 800; margin-bottom: 0.5rem; color: #9333ea; }
    .stat-label { font-size: 0.875rem; font-weight: 500; color: #4b5563; }
    .tabular-nums { font-variant-numeric: tabular-nums; }
    .value-text { font-size: 1.125rem; font-weight: 700; }

    .statement { font-size: clamp(1.5rem, 3vw, 1.875rem); font-weight: 300; line-height: 1.6; }
    .closing { padding: 8rem 0; background: linear-gradient(135deg, #cffafe, #f3e8ff, #ddd6fe); }
    .sparkle { display: inline-block; font-size: 6rem; animation: bob 3s ease-in-out infinite; }
    @keyframes bob {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        33% { transform: translateY(-10px) rotate(5deg); }
        66% { transform: translateY(-5px) rotate(-5deg); }
    }
    .closing-title { font-size: clamp(3rem, 6vw, 4.5rem); font-weight: 800; line-height: 1.1; margin: 2rem 0 3rem; }
    .quote { font-size: clamp(1.5rem, 3vw, 1.875rem); font-style: italic; font-weight: 300; margin: 0; }
    .quote-author { font-size: 1.25rem; font-weight: 600; color: #4b5563; }
"#;

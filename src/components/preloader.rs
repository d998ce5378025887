use yew::prelude::*;

pub const PARTICLE_COUNT: usize = 55;
const SCATTER_PX: f64 = 260.0;
const MAX_DELAY_S: f64 = 0.6;

/// A star that flies from its scatter point into the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub delay: f64,
}

/// Lays out `count` particles from a source of uniform values in `0.0..1.0`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: (random() - 0.5) * SCATTER_PX,
            y: (random() - 0.5) * SCATTER_PX,
            delay: random() * MAX_DELAY_S,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    /// Set once the splash delay has run out; the overlay fades and then unmounts.
    pub leaving: bool,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let particles = use_memo(
        |_| scatter(PARTICLE_COUNT, web_sys::js_sys::Math::random),
        (),
    );
    let gone = use_state(|| false);

    {
        let gone = gone.clone();
        use_effect_with_deps(
            move |leaving| {
                // Matches the 0.8s opacity transition on .preloader.leaving
                let timeout = (*leaving).then(|| {
                    gloo_timers::callback::Timeout::new(800, move || gone.set(true))
                });
                move || drop(timeout)
            },
            props.leaving,
        );
    }

    if *gone {
        return html! {};
    }

    html! {
        <div class={classes!("preloader", props.leaving.then(|| "leaving"))}>
            <style>
                {r#"
                    .preloader {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #020617;
                        color: #f8fafc;
                        opacity: 1;
                        transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .preloader.leaving {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .preloader-glow {
                        position: absolute;
                        width: 20rem;
                        height: 20rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .preloader-glow.indigo { top: -10rem; left: 0; background: rgba(99, 102, 241, 0.25); }
                    .preloader-glow.emerald { bottom: 0; right: 0; background: rgba(52, 211, 153, 0.2); }
                    .preloader-stage {
                        position: relative;
                        width: 12rem;
                        height: 12rem;
                    }
                    .particle {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 4px;
                        height: 4px;
                        border-radius: 9999px;
                        background: #f1f5f9;
                        box-shadow: 0 0 10px rgba(248, 250, 252, 0.9);
                        opacity: 0;
                        animation: converge 1.6s ease-out forwards;
                    }
                    @keyframes converge {
                        0% { transform: translate(var(--x), var(--y)) scale(0.4); opacity: 0.2; }
                        50% { opacity: 1; transform: translate(calc(var(--x) / 2), calc(var(--y) / 2)) scale(1); }
                        100% { transform: translate(0, 0) scale(0.2); opacity: 0; }
                    }
                    .star {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        animation: star-in 0.9s cubic-bezier(0.16, 1, 0.3, 1) 0.9s forwards;
                    }
                    @keyframes star-in {
                        from { opacity: 0; transform: scale(0.4); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .star-frame {
                        position: relative;
                        width: 5rem;
                        height: 5rem;
                    }
                    .star-frame::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        transform: rotate(45deg);
                        border-radius: 1.4rem;
                        background: linear-gradient(45deg, #f8fafc, #e2e8f0, #f1f5f9);
                        box-shadow: 0 0 40px rgba(248, 250, 252, 0.8);
                    }
                    .star-frame::after {
                        content: '';
                        position: absolute;
                        inset: 0.5rem;
                        border-radius: 1.1rem;
                        background: #020617;
                    }
                    .star-rays {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .star-rays span {
                        position: absolute;
                        width: 1px;
                        height: 2rem;
                        background: linear-gradient(to bottom, #f8fafc, #e2e8f0, transparent);
                    }
                    .star-rays span:nth-child(2) { transform: rotate(90deg); }
                    .star-rays span:nth-child(3) { transform: rotate(45deg); }
                    .star-rays span:nth-child(4) { transform: rotate(-45deg); }
                    .preloader-caption {
                        margin-top: 1.5rem;
                        text-align: center;
                        opacity: 0;
                        animation: caption-in 0.6s ease 1.1s forwards;
                    }
                    @keyframes caption-in {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .preloader-caption .lead { font-size: 0.9rem; color: rgba(241, 245, 249, 0.9); }
                    .preloader-caption .hint { font-size: 0.75rem; color: #94a3b8; }
                    .progress {
                        margin: 0.5rem auto 0;
                        width: 10rem;
                        height: 6px;
                        border-radius: 9999px;
                        overflow: hidden;
                        background: rgba(30, 41, 59, 0.8);
                    }
                    .progress-fill {
                        height: 100%;
                        width: 0;
                        background: linear-gradient(to right, #f8fafc, #cbd5e1, #f1f5f9);
                        animation: fill 1.9s ease-in-out forwards;
                    }
                    @keyframes fill { to { width: 100%; } }
                "#}
            </style>
            <div class="preloader-glow indigo"></div>
            <div class="preloader-glow emerald"></div>
            <div>
                <div class="preloader-stage">
                    {
                        particles.iter().map(|p| {
                            let style = format!(
                                "--x: {:.1}px; --y: {:.1}px; animation-delay: {:.2}s;",
                                p.x, p.y, 0.2 + p.delay
                            );
                            html! { <div class="particle" style={style}></div> }
                        }).collect::<Html>()
                    }
                    <div class="star">
                        <div class="star-frame">
                            <div class="star-rays">
                                <span></span>
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="preloader-caption">
                    <p class="lead">{"Космос идей собирается в одну точку"}</p>
                    <p class="hint">{"сайт загружается… "}<span>{"готовы к полёту?"}</span></p>
                    <div class="progress"><div class="progress-fill"></div></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_within_bounds() {
        let mut seed = 0.0_f64;
        let particles = scatter(PARTICLE_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!(p.x.abs() <= SCATTER_PX / 2.0);
            assert!(p.y.abs() <= SCATTER_PX / 2.0);
            assert!((0.0..MAX_DELAY_S).contains(&p.delay));
        }
    }

    #[test]
    fn midpoint_source_collapses_to_centre() {
        let particles = scatter(3, || 0.5);
        assert!(particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
        assert!(particles.iter().all(|p| (p.delay - 0.3).abs() < 1e-12));
    }
}

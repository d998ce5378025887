use chrono::Datelike;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::Header;
use crate::components::observer::{use_reveal_on_view, use_section_observer};
use crate::components::preloader::Preloader;
use crate::config::{self, Timings};
use crate::contact::{self, Field, SubmitStatus};
use crate::content::{
    mailto, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, HERO_STATS, PILLARS, SERVICE_GROUPS,
};
use crate::state::{PageAction, PageState};
use crate::tracker::Section;

fn default_endpoint() -> AttrValue {
    AttrValue::from(config::contact_endpoint())
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub timings: Timings,
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
}

/// Fraction of the scrollable height already scrolled, in `0.0..=1.0`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

fn page_progress(scroll_y: f64) -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, height, viewport)
}

fn reveal_delay(seconds: f64) -> String {
    format!("transition-delay: {:.2}s;", seconds)
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let timings = props.timings.clone();
    let state = {
        let threshold = timings.visibility_threshold;
        use_reducer(move || PageState::new(threshold))
    };

    // Splash: one timer per mount; dropping it on unmount cancels it.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |splash_ms| {
                let timeout = Timeout::new(*splash_ms, move || {
                    state.dispatch(PageAction::SplashElapsed);
                });
                move || drop(timeout)
            },
            timings.splash_ms,
        );
    }

    {
        let state = state.clone();
        use_section_observer(
            timings.visibility_threshold,
            Callback::from(move |batch: Vec<_>| state.dispatch(PageAction::Visibility(batch))),
        );
    }
    use_reveal_on_view(timings.reveal_threshold);

    // One request per attempt number.
    {
        let attempt = state.contact.attempt;
        let state = state.clone();
        let endpoint = props.endpoint.clone();
        use_effect_with_deps(
            move |attempt| {
                let attempt = *attempt;
                if let Some(payload) = state.pending_request(attempt) {
                    log::info!("Submitting contact request #{}", attempt);
                    spawn_local(async move {
                        let result = contact::send(&endpoint, &payload).await;
                        state.dispatch(PageAction::Finished { attempt, result });
                    });
                }
                || ()
            },
            attempt,
        );
    }

    // Status auto-clear. A new submission drops the pending timer.
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    {
        let deps = (state.contact.status, state.contact.attempt);
        let state = state.clone();
        let reset_ms = timings.status_reset_ms;
        use_effect_with_deps(
            move |(status, attempt)| {
                match status {
                    SubmitStatus::Success | SubmitStatus::Error => {
                        let attempt = *attempt;
                        *reset_timer.borrow_mut() = Some(Timeout::new(reset_ms, move || {
                            state.dispatch(PageAction::ClearStatus { attempt });
                        }));
                    }
                    SubmitStatus::Sending => {
                        reset_timer.borrow_mut().take();
                    }
                    SubmitStatus::Idle => {}
                }
                || ()
            },
            deps,
        );
    }

    let (_, scroll_y) = use_window_scroll();
    let hero_offset = timings.parallax_at(page_progress(scroll_y));

    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::ToggleTheme))
    };
    let on_edit = {
        let state = state.clone();
        Callback::from(move |(field, value): (Field, String)| {
            state.dispatch(PageAction::Edit(field, value))
        })
    };
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Submit))
    };

    let loading = state.is_loading();
    let year = chrono::Local::now().year();

    html! {
        <div class={classes!("landing-root", state.theme.class())}>
            <style>
                {r#"
                    .landing-root {
                        --shell: #f5f3ef;
                        --text: #0f172a;
                        --muted: #475569;
                        --soft: #64748b;
                        --card-text: #334155;
                        --glass-bg: rgba(255, 255, 255, 0.7);
                        --glass-border: rgba(226, 232, 240, 0.8);
                        --nav-inactive: #475569;
                        --nav-active: #0f172a;
                        --blob-a: rgba(165, 180, 252, 0.25);
                        --blob-b: rgba(253, 230, 138, 0.4);
                        min-height: 100vh;
                        background: var(--shell);
                        color: var(--text);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        transition: background 0.3s, color 0.3s;
                    }
                    .landing-root.theme-dark {
                        --shell: #020617;
                        --text: #f8fafc;
                        --muted: #94a3b8;
                        --soft: #94a3b8;
                        --card-text: #cbd5e1;
                        --glass-bg: rgba(15, 23, 42, 0.6);
                        --glass-border: rgba(51, 65, 85, 0.6);
                        --nav-inactive: #94a3b8;
                        --nav-active: #f8fafc;
                        --blob-a: rgba(99, 102, 241, 0.35);
                        --blob-b: rgba(52, 211, 153, 0.3);
                    }
                    html { scroll-behavior: smooth; }
                    body { margin: 0; }
                    .page-content {
                        transition: opacity 0.7s cubic-bezier(0.16, 1, 0.3, 1),
                                    transform 0.7s cubic-bezier(0.16, 1, 0.3, 1),
                                    filter 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .page-content.content-hidden { opacity: 0; transform: translateY(10px); filter: blur(10px); }
                    .page-content.content-ready { opacity: 1; transform: none; filter: none; }
                    .backdrop { pointer-events: none; position: fixed; inset: 0; opacity: 0.7; overflow: hidden; }
                    .blob { position: absolute; border-radius: 9999px; filter: blur(64px); }
                    .blob.a { right: -10rem; top: -10rem; width: 20rem; height: 20rem; background: var(--blob-a); }
                    .blob.b { left: -8rem; bottom: 0; width: 18rem; height: 18rem; background: var(--blob-b); }
                    .shell {
                        position: relative;
                        max-width: 72rem;
                        min-height: 100vh;
                        margin: 0 auto;
                        padding: 1.25rem 1rem;
                        display: flex;
                        flex-direction: column;
                    }
                    main { flex: 1; display: flex; flex-direction: column; gap: 4rem; padding-bottom: 3rem; }
                    section { scroll-margin-top: 2rem; }
                    .reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s cubic-bezier(0.22, 0.61, 0.36, 1), transform 0.6s cubic-bezier(0.22, 0.61, 0.36, 1); }
                    .reveal.is-visible { opacity: 1; transform: none; }
                    .hero { display: grid; gap: 2.5rem; align-items: center; }
                    @media (min-width: 768px) { .hero { grid-template-columns: minmax(0, 1.2fr) minmax(0, 1fr); } }
                    .hero-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid var(--glass-border);
                        background: var(--glass-bg);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.7rem;
                        color: var(--muted);
                    }
                    .hero h1 { margin-top: 1.25rem; font-size: clamp(1.9rem, 4vw, 3rem); font-weight: 600; line-height: 1.15; letter-spacing: -0.02em; }
                    .hero h1 .accent { color: var(--muted); }
                    .lead { margin-top: 1rem; max-width: 36rem; font-size: 0.95rem; line-height: 1.6; color: var(--muted); }
                    .cta-row { margin-top: 1.5rem; display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
                    .pill-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #0f172a;
                        padding: 0.6rem 1.25rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #f5f5f4;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .pill-button:hover { background: #1e293b; }
                    .pill-button:disabled { opacity: 0.6; cursor: default; }
                    .text-link { font-size: 0.75rem; font-weight: 500; color: var(--card-text); text-underline-offset: 4px; }
                    .stats { margin-top: 2rem; display: grid; max-width: 28rem; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
                    .stat-value { font-size: 0.9rem; font-weight: 600; }
                    .stat-caption { font-size: 0.7rem; color: var(--soft); }
                    .hero-card {
                        position: relative;
                        height: 16rem;
                        border-radius: 1.5rem;
                        padding: 0.75rem;
                        background: var(--glass-bg);
                        box-shadow: 0 18px 50px rgba(15, 23, 42, 0.08);
                        overflow: hidden;
                    }
                    .hero-card-inner {
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0 1.5rem;
                        text-align: center;
                        border-radius: 1rem;
                        background: radial-gradient(circle at 0% 0%, #e5e7eb33, transparent 55%),
                                    radial-gradient(circle at 100% 100%, #facc1533, transparent 55%),
                                    linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                    }
                    .hero-card-inner .kicker { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.3em; color: #cbd5e1; }
                    .hero-card-inner .title { font-size: 0.9rem; font-weight: 500; color: #f8fafc; }
                    .hero-card-inner .note { font-size: 0.7rem; color: rgba(203, 213, 225, 0.8); }
                    .section-label { font-size: 0.7rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.25em; color: var(--soft); margin: 0; }
                    h2 { margin-top: 0.5rem; font-size: clamp(1.25rem, 2.5vw, 1.5rem); font-weight: 600; }
                    .section-text { margin-top: 0.5rem; max-width: 42rem; font-size: 0.95rem; color: var(--muted); }
                    .grid-3, .grid-2 { display: grid; gap: 1rem; margin-top: 1.5rem; }
                    @media (min-width: 768px) {
                        .grid-3 { grid-template-columns: repeat(3, 1fr); }
                        .grid-2 { grid-template-columns: repeat(2, 1fr); }
                    }
                    .glass {
                        border-radius: 1rem;
                        padding: 1rem;
                        border: 1px solid var(--glass-border);
                        background: var(--glass-bg);
                        backdrop-filter: blur(12px);
                    }
                    .pillar { transition: transform 0.2s; }
                    .pillar:hover { transform: translateY(-4px); }
                    .card-title { font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.2em; color: var(--soft); }
                    .card-text { margin-top: 0.5rem; font-size: 0.9rem; color: var(--card-text); }
                    .service-list { margin: 0.75rem 0 0; padding: 0; list-style: none; font-size: 0.75rem; color: var(--card-text); }
                    .service-list li { display: flex; gap: 0.5rem; margin-bottom: 0.4rem; }
                    .service-list .dash { margin-top: 5px; width: 0.75rem; height: 0.25rem; border-radius: 9999px; background: var(--nav-active); opacity: 0.7; flex-shrink: 0; }
                    .cases-card { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 0.75rem; margin-top: 1rem; }
                    .contacts-grid { display: grid; gap: 1rem; margin-top: 1rem; }
                    @media (min-width: 640px) { .contacts-grid { grid-template-columns: minmax(0, 1.2fr) minmax(0, 0.9fr); } }
                    .contact-line { display: flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; margin-bottom: 0.75rem; color: var(--card-text); }
                    .contact-line a { color: inherit; font-weight: 500; text-underline-offset: 4px; }
                    .contact-note { padding-top: 0.5rem; font-size: 0.7rem; color: var(--soft); }
                    .contact-form { display: flex; flex-direction: column; gap: 0.75rem; font-size: 0.75rem; color: var(--card-text); }
                    .contact-form .form-row { display: grid; gap: 0.5rem; }
                    @media (min-width: 640px) { .contact-form .form-row { grid-template-columns: 1fr 1fr; } }
                    .contact-form label { display: block; margin-bottom: 0.25rem; font-size: 0.7rem; font-weight: 500; color: var(--muted); }
                    .contact-form input, .contact-form textarea {
                        box-sizing: border-box;
                        width: 100%;
                        border-radius: 0.75rem;
                        border: 1px solid #e2e8f0;
                        background: rgba(255, 255, 255, 0.8);
                        padding: 0.5rem 0.75rem;
                        font: inherit;
                        outline: none;
                        resize: none;
                    }
                    .contact-form input:focus, .contact-form textarea:focus { border-color: #0f172a; }
                    .form-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
                    .form-notice { font-size: 0.7rem; }
                    .form-notice.success { color: #059669; }
                    .form-notice.error { color: #ef4444; }
                    .form-footnote { font-size: 0.7rem; color: var(--soft); margin: 0; }
                    .site-footer {
                        margin-top: 2rem;
                        padding: 1rem 0 0.5rem;
                        border-top: 1px solid var(--glass-border);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 0.5rem;
                        font-size: 0.7rem;
                        color: var(--soft);
                    }
                "#}
            </style>

            <Preloader leaving={!loading} />

            <div class={classes!("page-content", if loading { "content-hidden" } else { "content-ready" })}>
                <div class="backdrop">
                    <div class="blob a"></div>
                    <div class="blob b"></div>
                </div>

                <div class="shell">
                    <Header
                        theme={state.theme}
                        active={state.active_section()}
                        on_toggle_theme={on_toggle_theme}
                    />

                    <main>
                        <section
                            id={Section::Hero.id()}
                            class="hero"
                            style={format!("transform: translateY({:.1}px);", hero_offset)}
                        >
                            <div class="reveal">
                                <div class="hero-badge">
                                    <span>{"✦"}</span>
                                    <span>{"Агентство полного цикла, которое не заставляет скучать"}</span>
                                </div>
                                <h1>
                                    {"Мы помогаем брендам"}
                                    <span class="accent">{" выглядеть честно, умно и живо."}</span>
                                </h1>
                                <p class="lead">
                                    {"Делаем понемногу всё: от фирменного стиля и сайта до рекламных кампаний \
                                      и продуктовой стратегии. Без лишнего пафоса, но с вниманием к деталям и результату."}
                                </p>
                                <div class="cta-row">
                                    <a href={Section::Contacts.href()} class="pill-button">{"Обсудить задачу →"}</a>
                                    <a href={Section::Services.href()} class="text-link">
                                        {"Посмотреть, чем именно мы помогаем"}
                                    </a>
                                </div>
                                <div class="stats">
                                    {
                                        HERO_STATS.iter().map(|stat| html! {
                                            <div>
                                                <div class="stat-value">{stat.value}</div>
                                                <div class="stat-caption">{stat.caption}</div>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>

                            <div class="hero-card reveal" style={reveal_delay(0.1)}>
                                <div class="hero-card-inner">
                                    <p class="kicker">{"full cycle"}</p>
                                    <p class="title">
                                        {"Дизайн, маркетинг и консалтинг в одном месте, а не в трёх разных подрядчиках."}
                                    </p>
                                    <p class="note">{"Стратегия, визуал и запуск говорят на одном языке."}</p>
                                </div>
                            </div>
                        </section>

                        <section id={Section::About.id()}>
                            <div class="reveal">
                                <p class="section-label">{"о нас"}</p>
                                <h2>{"Небольшая команда, которая делает проекты как для себя."}</h2>
                                <p class="section-text">
                                    {"Full Cycle это компактное агентство, где дизайнеры, маркетологи и консультанты \
                                      сидят не по разным башням, а за одним столом. Так решения не теряются по дороге, \
                                      а проекты получаются цельными."}
                                </p>
                            </div>
                            <div class="grid-3 reveal" style={reveal_delay(0.05)}>
                                {
                                    PILLARS.iter().map(|pillar| html! {
                                        <div class="glass pillar">
                                            <div class="card-title">{pillar.title}</div>
                                            <p class="card-text">{pillar.text}</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </section>

                        <section id={Section::Services.id()}>
                            <div class="reveal">
                                <p class="section-label">{"услуги"}</p>
                                <h2>{"Не пытаемся уместить всё в один пакет. Собираем под вас."}</h2>
                                <p class="section-text">
                                    {"Ниже базовый список того, чем мы занимаемся. На практике мы смешиваем форматы \
                                      так, чтобы это решало именно вашу задачу."}
                                </p>
                            </div>
                            <div class="grid-2 reveal" style={reveal_delay(0.05)}>
                                {
                                    SERVICE_GROUPS.iter().map(|block| html! {
                                        <div class="glass">
                                            <div class="card-title">{block.group}</div>
                                            <ul class="service-list">
                                                {
                                                    block.items.iter().map(|item| html! {
                                                        <li><span class="dash"></span><span>{*item}</span></li>
                                                    }).collect::<Html>()
                                                }
                                            </ul>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </section>

                        <section id={Section::Cases.id()}>
                            <div class="reveal">
                                <p class="section-label">{"кейсы"}</p>
                                <h2>{"Кейсы в процессе упаковки."}</h2>
                                <p class="section-text">
                                    {"Мы сейчас аккуратно собираем и оформляем проекты, чтобы не превратить портфолио \
                                      в музей. Если хотите, пришлём подборку живых примеров под вашу сферу."}
                                </p>
                            </div>
                            <div class="glass cases-card reveal" style={reveal_delay(0.05)}>
                                <p class="card-text">
                                    {"Расскажите пару слов о задаче, мы в ответ отправим 2–3 проекта, \
                                      которые ближе всего по масштабу и духу."}
                                </p>
                                <a href={Section::Contacts.href()} class="pill-button">{"Запросить примеры →"}</a>
                            </div>
                        </section>

                        <section id={Section::Contacts.id()}>
                            <div class="reveal">
                                <p class="section-label">{"контакты"}</p>
                                <h2>{"Давайте посмотрим, чем можем быть полезны."}</h2>
                                <p class="section-text">
                                    {"Напишите пару строк о бизнесе и задаче, мы предложим формат работы, срок и вилку \
                                      бюджета. Можно начать с малого и постепенно наращивать."}
                                </p>
                            </div>
                            <div class="glass contacts-grid reveal" style={reveal_delay(0.05)}>
                                <div>
                                    <div class="contact-line">
                                        <span>{"✉"}</span>
                                        <a href={mailto()}>{CONTACT_EMAIL}</a>
                                    </div>
                                    <div class="contact-line">
                                        <span>{"☎"}</span>
                                        <span>{CONTACT_PHONE}</span>
                                    </div>
                                    <div class="contact-line">
                                        <span>{"⌖"}</span>
                                        <span>{CONTACT_LOCATION}</span>
                                    </div>
                                    <p class="contact-note">
                                        {"Хостинг и домен у вас уже есть? Отлично, подскажем, как всё аккуратно \
                                          развернуть, чтобы ничего не сломать."}
                                    </p>
                                </div>
                                <ContactForm
                                    form={state.contact.clone()}
                                    on_edit={on_edit}
                                    on_submit={on_submit}
                                />
                            </div>
                        </section>
                    </main>

                    <footer class="site-footer">
                        <span>{format!("© {} Full Cycle Agency. Всё понемногу, но по делу.", year)}</span>
                        <span>{"Сделано так, чтобы можно было развивать дальше."}</span>
                    </footer>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_fraction() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }
}

use yew::prelude::*;

use crate::content::{AGENCY_BADGE, AGENCY_NAME, AGENCY_TAGLINE};
use crate::state::Theme;
use crate::tracker::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub active: Section,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, active, on_toggle_theme } = props;
    let menu_open = use_state(|| false);

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the mobile menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = [Section::Hero, Section::About, Section::Services, Section::Cases]
        .into_iter()
        .map(|section| {
            html! {
                <a
                    href={section.href()}
                    class={classes!("nav-link", (section == *active).then(|| "active"))}
                    onclick={close_menu.clone()}
                >
                    {section.nav_label()}
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        margin-bottom: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        position: relative;
                    }
                    .brand { display: flex; align-items: center; gap: 0.75rem; text-decoration: none; color: inherit; }
                    .brand-badge {
                        position: relative;
                        width: 2.25rem;
                        height: 2.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                        color: #f5f5f4;
                        font-size: 0.7rem;
                        font-weight: 600;
                        letter-spacing: 0.28em;
                        box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                    }
                    .brand-name { font-size: 0.75rem; font-weight: 600; letter-spacing: 0.18em; text-transform: uppercase; margin: 0; }
                    .brand-tagline { font-size: 0.75rem; color: #64748b; margin: 0; }
                    .header-actions { display: flex; align-items: center; gap: 1rem; }
                    .theme-toggle {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(203, 213, 225, 0.6);
                        background: rgba(255, 255, 255, 0.7);
                        color: #334155;
                        cursor: pointer;
                    }
                    .theme-toggle:hover { background: #f1f5f9; }
                    .site-nav { display: flex; align-items: center; gap: 1.25rem; }
                    .nav-link {
                        font-size: 0.75rem;
                        font-weight: 500;
                        text-decoration: none;
                        color: var(--nav-inactive);
                        transition: color 0.2s;
                    }
                    .nav-link:hover, .nav-link.active { color: var(--nav-active); }
                    .nav-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        border-radius: 9999px;
                        background: #0f172a;
                        padding: 0.375rem 0.75rem;
                        font-size: 0.7rem;
                        font-weight: 600;
                        color: #f5f5f4;
                        text-decoration: none;
                    }
                    .nav-cta:hover { background: #1e293b; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; padding: 0.25rem; }
                    .burger-menu span { display: block; width: 18px; height: 2px; margin: 3px 0; background: var(--nav-active); }
                    @media (max-width: 640px) {
                        .burger-menu { display: block; }
                        .site-nav { display: none; }
                        .site-nav.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-end;
                            position: absolute;
                            right: 0;
                            top: 3rem;
                            z-index: 20;
                            padding: 1rem;
                            border-radius: 1rem;
                            background: var(--glass-bg);
                            backdrop-filter: blur(12px);
                        }
                    }
                "#}
            </style>
            <a href={Section::Hero.href()} class="brand">
                <div class="brand-badge">{AGENCY_BADGE}</div>
                <div>
                    <p class="brand-name">{AGENCY_NAME}</p>
                    <p class="brand-tagline">{AGENCY_TAGLINE}</p>
                </div>
            </a>

            <div class="header-actions">
                <button type="button" class="theme-toggle" onclick={toggle_theme} aria-label="Сменить тему">
                    { if theme.is_dark() { "☀" } else { "☾" } }
                </button>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("site-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    {links}
                    <a href={Section::Contacts.href()} class="nav-cta" onclick={close_menu.clone()}>
                        {Section::Contacts.nav_label()}
                        {" →"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

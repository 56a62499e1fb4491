use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::Route;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Agentic Operations", "#workflows"),
    ("AI Transitions", "#transitions"),
    ("Client Stories", "#stories"),
];

/// Smooth-scrolls to the first element matching `selector`. A no-op when
/// the anchor is not on the current page.
pub fn scroll_to_section(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                is_scrolled.set(scroll_top > 50.0);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |label: &'static str, href: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(href);
        });
        html! {
            <button class="nav-link" onclick={onclick}>{label}</button>
        }
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let contact_cta = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section("#contact");
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(250, 250, 250, 0.85);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 72px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        padding: 0;
                        font-size: 0.875rem;
                        font-family: inherit;
                        color: #6b7280;
                        cursor: pointer;
                        transition: color 0.15s;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #111827;
                    }
                    .nav-cta {
                        display: none;
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #111827;
                        color: #ffffff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        white-space: nowrap;
                        cursor: pointer;
                    }
                    @media (min-width: 768px) {
                        .nav-cta { display: inline-flex; }
                    }
                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 20px;
                        height: 2px;
                        background: #111827;
                    }
                    @media (min-width: 768px) {
                        .burger-menu { display: none; }
                    }
                    .mobile-drawer {
                        position: fixed;
                        top: 72px;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        display: none;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: rgba(250, 250, 250, 0.97);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #e5e7eb;
                    }
                    .mobile-drawer.open {
                        display: flex;
                    }
                    .mobile-drawer .nav-link {
                        text-align: left;
                        font-size: 1rem;
                        padding: 0.5rem 0;
                    }
                    .mobile-drawer .nav-cta {
                        display: inline-flex;
                        justify-content: center;
                    }
                "#}
            </style>
            <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Brookwell"}
                    </Link<Route>>

                    <nav class="nav-links">
                        { for NAV_ITEMS.iter().map(|&(label, href)| nav_link(label, href)) }
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::About} classes="nav-link">
                                {"About Us"}
                            </Link<Route>>
                        </div>
                    </nav>

                    <div style="display: flex; align-items: center; gap: 1rem;">
                        <button class="nav-cta" onclick={contact_cta.clone()}>
                            {"Talk to an Expert"}
                        </button>
                        <button class="burger-menu" onclick={toggle_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </header>
            <div class={classes!("mobile-drawer", (*menu_open).then(|| "open"))}>
                { for NAV_ITEMS.iter().map(|&(label, href)| nav_link(label, href)) }
                <div onclick={close_menu}>
                    <Link<Route> to={Route::About} classes="nav-link">
                        {"About Us"}
                    </Link<Route>>
                </div>
                <button class="nav-cta" onclick={contact_cta}>
                    {"Talk to an Expert"}
                </button>
            </div>
        </>
    }
}

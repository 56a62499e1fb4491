use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod footer;
    pub mod hero;
    pub mod logo_carousel;
    pub mod nav;
    pub mod service_toggle;
}
mod contact {
    pub mod form;
    pub mod model;
}
mod sections {
    pub mod about_us;
    pub mod agentic_operations;
    pub mod ai_transitions;
    pub mod ai_workflows;
    pub mod client_stories;
    pub mod pain_points;
    pub mod process_timeline;
    pub mod testimonials;
    pub mod transition_results;
    pub mod who_we_serve;
}
mod pages {
    pub mod about;
    pub mod home;
}

use components::nav::Nav;
use pages::{about::About, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                        color: #111827;
                        background: #fafafa;
                        -webkit-font-smoothing: antialiased;
                    }
                    .dot-overlay {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 1;
                        background-image: radial-gradient(circle, hsl(0 0% 50% / 0.25) 1.5px, transparent 1.5px);
                        background-size: 24px 24px;
                    }
                "#}
            </style>
            <div class="dot-overlay"></div>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

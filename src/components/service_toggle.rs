use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::nav::scroll_to_section;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "AI Workflows",
        "Automate complex processes and amplify your team's capabilities with intelligent automation.",
        "#workflows",
    ),
    (
        "AI Transitions",
        "Navigate advisor transitions seamlessly with AI-powered planning and execution.",
        "#transitions",
    ),
];

#[function_component(ServiceToggle)]
pub fn service_toggle() -> Html {
    let service_card = |title: &'static str, description: &'static str, href: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
        });
        html! {
            <div class="service-card" onclick={onclick}>
                <h3>{title}</h3>
                <p>{description}</p>
                <span class="service-more">{"Learn more →"}</span>
            </div>
        }
    };

    html! {
        <>
            <style>
                {r#"
                    .service-toggle {
                        padding: 5rem 1.5rem;
                    }
                    .service-toggle .service-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .service-toggle .service-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .service-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                        cursor: pointer;
                        transition: box-shadow 0.3s, transform 0.3s;
                    }
                    .service-card:hover {
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                        transform: translateY(-2px);
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.75rem;
                    }
                    .service-card p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0 0 1.5rem;
                    }
                    .service-more {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #111827;
                    }
                "#}
            </style>
            <section class="service-toggle">
                <div class="service-grid">
                    { for SERVICES.iter().map(|&(title, description, href)| service_card(title, description, href)) }
                </div>
            </section>
        </>
    }
}

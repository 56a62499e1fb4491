use yew::prelude::*;

const RIA_CHALLENGES: &[&str] = &[
    "Disconnected systems create manual work and unreliable data",
    "Client onboarding and account maintenance don't scale with growth",
    "Reporting and performance analysis require time-consuming reconciliation",
    "Compliance oversight depends too heavily on people and spreadsheets",
];

const BD_CHALLENGES: &[&str] = &[
    "AI-powered trade surveillance and compliance automation",
    "Intelligent supervision workflows and exception handling",
    "Automated regulatory reporting and filing preparation",
    "Rep transition support and book movement tracking",
];

fn audience_card(title: &'static str, features: &'static [&'static str]) -> Html {
    html! {
        <div class="audience-card">
            <h3>{title}</h3>
            <p class="audience-lead">{"Unique Challenges"}</p>
            <ul>
                {
                    features.iter().map(|&feature| html! {
                        <li key={feature}>{feature}</li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}

#[function_component(WhoWeServe)]
pub fn who_we_serve() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .who-we-serve {
                        padding: 8rem 1.5rem;
                        background: #f4f4f5;
                    }
                    .who-we-serve .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .who-we-serve .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .who-we-serve .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .who-we-serve h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .who-we-serve .section-header p {
                        color: #6b7280;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .audience-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        align-items: stretch;
                    }
                    @media (min-width: 768px) {
                        .audience-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .audience-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                        height: 100%;
                        box-sizing: border-box;
                    }
                    .audience-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .audience-lead {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(17, 24, 39, 0.8);
                        margin-bottom: 1rem;
                    }
                    .audience-card ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .audience-card li {
                        position: relative;
                        padding-left: 1.25rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                    }
                    .audience-card li::before {
                        content: '';
                        position: absolute;
                        left: 0;
                        top: 9px;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: rgba(17, 24, 39, 0.4);
                    }
                "#}
            </style>
            <section id="who-we-serve" class="who-we-serve">
                <div class="section-inner">
                    <div class="section-header">
                        <p class="eyebrow">{"Who We Serve"}</p>
                        <h2>{"Built for Financial Services"}</h2>
                        <p>{"We specialize in serving RIAs and Broker-Dealers with tailored solutions."}</p>
                    </div>
                    <div class="audience-grid">
                        { audience_card("Registered Investment Advisors", RIA_CHALLENGES) }
                        { audience_card("Broker-Dealers", BD_CHALLENGES) }
                    </div>
                </div>
            </section>
        </>
    }
}

use yew::prelude::*;

const COMPANY_STATS: &[(&str, &str)] = &[
    ("25+", "Years Combined Experience"),
    ("150+", "Firms Served"),
    ("$50B+", "AUM Impacted"),
    ("99%", "Client Satisfaction"),
];

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .about-us {
                        padding: 8rem 1.5rem;
                    }
                    .about-us .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-us .section-inner { grid-template-columns: 1fr 1fr; }
                    }
                    .about-us .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .about-us h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .about-copy p {
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0 0 1rem;
                    }
                    .about-stats {
                        background: rgba(244, 244, 245, 0.5);
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .about-stat .stat-value {
                        font-size: 1.875rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 0.25rem;
                    }
                    .about-stat .stat-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0;
                    }
                "#}
            </style>
            <section id="about" class="about-us">
                <div class="section-inner">
                    <div class="about-copy">
                        <p class="eyebrow">{"About Us"}</p>
                        <h2>{"Built by practitioners"}</h2>
                        <p>{"Brookwell was founded by a team of financial services veterans and AI experts who saw an opportunity to bridge the gap between cutting-edge technology and the practical needs of RIAs and broker-dealers."}</p>
                        <p>{"With decades of combined experience in wealth management, compliance, and enterprise software, we understand the challenges you face. We've lived them ourselves."}</p>
                        <p>{"Our mission is simple: to help financial services firms work smarter by leveraging AI in ways that are practical, compliant, and genuinely transformative."}</p>
                    </div>
                    <div class="about-stats">
                        {
                            COMPANY_STATS.iter().map(|&(value, label)| html! {
                                <div class="about-stat" key={label}>
                                    <p class="stat-value">{value}</p>
                                    <p class="stat-label">{label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
        </>
    }
}

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::contact::form::Contact;
use crate::sections::about_us::AboutUs;

struct TeamMember {
    name: &'static str,
    title: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Chen",
        title: "CEO & Founder",
        bio: "Former Goldman Sachs VP with 15 years in financial technology. Passionate about bringing AI innovation to wealth management.",
    },
    TeamMember {
        name: "Alex Thibault",
        title: "Co-Founder",
        bio: "Previously led engineering at a top fintech unicorn. Expert in AI/ML systems and enterprise architecture.",
    },
    TeamMember {
        name: "Jen Menard",
        title: "Head of Transitions",
        bio: "10+ years helping financial advisors navigate technology transitions. Dedicated to seamless client experiences.",
    },
    TeamMember {
        name: "David Kim",
        title: "VP of Product",
        bio: "Former product leader at major custodians. Deep expertise in advisor workflows and operational efficiency.",
    },
];

const VALUES: &[&str] = &[
    "Client outcomes drive every decision we make",
    "Technology should simplify, not complicate",
    "Transparency builds lasting partnerships",
    "Innovation with purpose, not for its own sake",
    "Excellence in execution, always",
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(About)]
pub fn about() -> Html {
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
        <>
            <style>
                {r#"
                    .about-page {
                        min-height: 100vh;
                        background-color: #fafafa;
                        background-image: radial-gradient(circle at 1px 1px, rgba(0, 0, 0, 0.06) 1px, transparent 1px);
                        background-size: 24px 24px;
                    }
                    .about-page main {
                        padding-top: 72px;
                    }
                    .about-hero {
                        padding: 8rem 1.5rem 6rem;
                    }
                    .about-hero .copy {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .about-hero .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .about-hero h1 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .about-hero p.lead {
                        font-size: 1.125rem;
                        color: #6b7280;
                        line-height: 1.7;
                    }
                    .about-team {
                        padding: 5rem 1.5rem;
                        background: #f4f4f5;
                    }
                    .about-team .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .about-team .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .about-team h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .about-team .section-header p {
                        color: #6b7280;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .team-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .team-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .team-portrait {
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        border-radius: 12px;
                        background: #e5e7eb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.25rem;
                        font-size: 2.5rem;
                        font-weight: 500;
                        color: #6b7280;
                    }
                    .team-card h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.25rem;
                    }
                    .team-card .team-title {
                        font-size: 0.875rem;
                        color: rgba(107, 114, 128, 0.7);
                        margin: 0 0 0.75rem;
                    }
                    .team-card .team-bio {
                        font-size: 0.8rem;
                        color: #6b7280;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .about-values {
                        padding: 5rem 1.5rem;
                    }
                    .about-values .section-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .about-values .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .about-values h2 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .about-values .section-header p {
                        color: #6b7280;
                        margin: 0;
                    }
                    .values-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .values-list li {
                        position: relative;
                        padding-left: 1.25rem;
                        color: #6b7280;
                        line-height: 1.7;
                    }
                    .values-list li::before {
                        content: '';
                        position: absolute;
                        left: 0;
                        top: 10px;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: rgba(17, 24, 39, 0.4);
                    }
                "#}
            </style>
            <div class="about-page">
                <main>
                    <section class="about-hero">
                        <div class="copy">
                            <p class="eyebrow">{"About Us"}</p>
                            <h1>{"Transforming Financial Services Through Intelligent Automation"}</h1>
                            <p class="lead">
                                {"Brookwell was founded on a simple belief: financial advisors should spend their time serving clients, not wrestling with operational complexity. We combine deep industry expertise with cutting-edge AI to make that vision a reality for firms of all sizes."}
                            </p>
                        </div>
                    </section>
                    <AboutUs />
                    <section class="about-team">
                        <div class="section-inner">
                            <div class="section-header">
                                <h2>{"Our Team"}</h2>
                                <p>{"Industry veterans and technologists united by a shared mission to modernize financial services operations."}</p>
                            </div>
                            <div class="team-grid">
                                {
                                    TEAM.iter().map(|member| html! {
                                        <div class="team-card" key={member.name}>
                                            <div class="team-portrait">{initials(member.name)}</div>
                                            <h3>{member.name}</h3>
                                            <p class="team-title">{member.title}</p>
                                            <p class="team-bio">{member.bio}</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </section>
                    <section class="about-values">
                        <div class="section-inner">
                            <div class="section-header">
                                <h2>{"What We Believe"}</h2>
                                <p>{"Our values guide every product decision, client interaction, and team collaboration."}</p>
                            </div>
                            <ul class="values-list">
                                {
                                    VALUES.iter().map(|&value| html! {
                                        <li key={value}>{value}</li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    </section>
                    <Contact show_ticker={false} />
                </main>
                <Footer />
            </div>
        </>
    }
}

use yew::prelude::*;
use web_sys::MouseEvent;

struct Story {
    company: &'static str,
    title: &'static str,
    problem: &'static str,
    solution: &'static str,
    metrics: &'static [(&'static str, &'static str)],
    quote: Option<&'static str>,
}

const STORIES: &[Story] = &[
    Story {
        company: "Regional RIA",
        title: "Manual client reporting consumed 40+ hours weekly",
        problem: "A growing RIA firm was spending 40+ hours weekly on manual client reporting, leading to delays and errors that frustrated both advisors and clients.",
        solution: "We implemented an AI-powered reporting workflow that automatically aggregated data from multiple custodians and generated personalized client reports.",
        metrics: &[
            ("85%", "Time Saved"),
            ("99.9%", "Accuracy Rate"),
            ("3x", "Client Growth"),
        ],
        quote: Some("Brookwell transformed our operations. What took days now takes minutes."),
    },
    Story {
        company: "Mid-Size Broker-Dealer",
        title: "Compliance reviews creating bottlenecks",
        problem: "Compliance reviews were creating significant bottlenecks, with each trade requiring manual oversight and documentation.",
        solution: "We deployed intelligent compliance workflows that pre-screened trades against regulations and automatically flagged only high-risk transactions for human review.",
        metrics: &[
            ("70%", "Faster Reviews"),
            ("50%", "Cost Reduction"),
            ("Zero", "Violations"),
        ],
        quote: None,
    },
    Story {
        company: "Private Wealth Manager",
        title: "Client onboarding taking weeks",
        problem: "Client onboarding was taking 2-3 weeks due to scattered paperwork and manual data entry across multiple systems.",
        solution: "We created a unified AI-driven onboarding workflow that automated document collection, verification, and system population.",
        metrics: &[
            ("2 Days", "Onboarding"),
            ("95%", "Satisfaction"),
            ("60%", "Time Saved"),
        ],
        quote: None,
    },
];

#[function_component(ClientStories)]
pub fn client_stories() -> Html {
    let active = use_state(|| 0usize);
    let story = &STORIES[(*active).min(STORIES.len() - 1)];

    html! {
        <>
            <style>
                {r#"
                    .client-stories {
                        padding: 8rem 1.5rem;
                    }
                    .client-stories .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .client-stories .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .client-stories .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .client-stories h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .client-stories .section-header p {
                        color: #6b7280;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .story-tabs {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    @media (min-width: 1024px) {
                        .story-tabs { grid-template-columns: repeat(3, 1fr); }
                    }
                    .story-tab {
                        text-align: left;
                        padding: 1.5rem;
                        border: none;
                        border-radius: 12px;
                        background: #f4f4f5;
                        font-family: inherit;
                        cursor: pointer;
                        transition: background 0.2s, color 0.2s;
                    }
                    .story-tab.active {
                        background: #111827;
                        color: #fafafa;
                    }
                    .story-tab .tab-company {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        opacity: 0.7;
                        margin-bottom: 0.5rem;
                    }
                    .story-tab .tab-title {
                        font-size: 0.875rem;
                        font-weight: 500;
                        line-height: 1.4;
                    }
                    .story-panel {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 3rem;
                    }
                    .story-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                    @media (min-width: 768px) {
                        .story-columns { grid-template-columns: repeat(3, 1fr); }
                    }
                    .story-columns h3 {
                        font-size: 1rem;
                        font-weight: 500;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .story-columns p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0;
                    }
                    .story-metrics {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .story-metric {
                        text-align: center;
                    }
                    .story-metric .metric-value {
                        font-size: 1.5rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0;
                    }
                    .story-metric .metric-label {
                        font-size: 0.75rem;
                        color: #6b7280;
                        margin: 0;
                    }
                    .story-quote {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .story-quote p {
                        font-size: 1.125rem;
                        font-style: italic;
                        color: #6b7280;
                        margin: 0;
                    }
                "#}
            </style>
            <section id="stories" class="client-stories">
                <div class="section-inner">
                    <div class="section-header">
                        <p class="eyebrow">{"Client Stories"}</p>
                        <h2>{"Real results for real firms"}</h2>
                        <p>{"See how we've helped financial services firms transform their operations with AI-powered workflows."}</p>
                    </div>
                    <div class="story-tabs">
                        {
                            STORIES.iter().enumerate().map(|(i, s)| {
                                let active_handle = active.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    active_handle.set(i);
                                });
                                html! {
                                    <button
                                        class={classes!("story-tab", (*active == i).then(|| "active"))}
                                        onclick={onclick}
                                        key={s.company}
                                    >
                                        <p class="tab-company">{s.company}</p>
                                        <p class="tab-title">{s.title}</p>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="story-panel" key={story.company}>
                        <div class="story-columns">
                            <div>
                                <h3>{"The Challenge"}</h3>
                                <p>{story.problem}</p>
                            </div>
                            <div>
                                <h3>{"Our Approach"}</h3>
                                <p>{story.solution}</p>
                            </div>
                            <div>
                                <h3>{"The Results"}</h3>
                                <div class="story-metrics">
                                    {
                                        story.metrics.iter().map(|&(value, label)| html! {
                                            <div class="story-metric" key={label}>
                                                <p class="metric-value">{value}</p>
                                                <p class="metric-label">{label}</p>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                        {
                            if let Some(quote) = story.quote {
                                html! {
                                    <div class="story-quote">
                                        <p>{format!("\"{}\"", quote)}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </section>
        </>
    }
}

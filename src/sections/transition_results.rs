use yew::prelude::*;
use yew_hooks::use_interval;

const METRICS: &[(u32, &str, &str)] = &[
    (75, "%", "Faster Transitions"),
    (99, "%", "Data Accuracy"),
    (95, "%", "Client Retention"),
];

#[derive(Properties, PartialEq)]
struct CounterProps {
    end: u32,
    #[prop_or_default]
    suffix: AttrValue,
}

// Counts from zero up to `end` over roughly two seconds, then stops.
#[function_component(AnimatedCounter)]
fn animated_counter(props: &CounterProps) -> Html {
    let count = use_state(|| 0u32);
    let end = props.end;

    {
        let count = count.clone();
        let millis = if *count >= end { 0 } else { 30 };
        use_interval(
            move || {
                let step = (end / 60).max(1);
                count.set((*count + step).min(end));
            },
            millis,
        );
    }

    html! {
        <span>{*count}{props.suffix.to_string()}</span>
    }
}

#[function_component(TransitionResults)]
pub fn transition_results() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .transition-results {
                        padding: 5rem 1.5rem;
                    }
                    .transition-results .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .transition-results .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .transition-results h3 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .transition-results .section-header p {
                        color: #6b7280;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .results-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .results-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .result-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: center;
                    }
                    .result-value {
                        font-size: 3rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 0.5rem;
                    }
                    .result-card p.result-label {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0;
                    }
                "#}
            </style>
            <section class="transition-results">
                <div class="section-inner">
                    <div class="section-header">
                        <h3>{"The Result: Transitions That Work"}</h3>
                        <p>{"Our AI-powered approach delivers measurable improvements across every aspect of the transition process."}</p>
                    </div>
                    <div class="results-grid">
                        {
                            METRICS.iter().map(|&(end, suffix, label)| html! {
                                <div class="result-card" key={label}>
                                    <p class="result-value">
                                        <AnimatedCounter end={end} suffix={suffix} />
                                    </p>
                                    <p class="result-label">{label}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
        </>
    }
}

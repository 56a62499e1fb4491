use yew::prelude::*;

const PAIN_POINTS: &[(&str, &str)] = &[
    (
        "Data Fragmentation",
        "Client data scattered across multiple systems, custodians, and platforms makes transitions chaotic and error-prone.",
    ),
    (
        "Restricted Interaction",
        "Compliance rules prevent firms from working directly with advisors post-break, leading to delays and operational blind spots.",
    ),
    (
        "Time-Consuming Processes",
        "Manual data mapping, paperwork, and coordination consume weeks of valuable time and resources.",
    ),
];

#[function_component(PainPoints)]
pub fn pain_points() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .pain-points {
                        padding: 5rem 1.5rem;
                    }
                    .pain-points .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .pain-points .section-header {
                        margin-bottom: 3rem;
                    }
                    .pain-points h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.5rem;
                    }
                    .pain-points .section-header p {
                        color: #6b7280;
                        margin: 0;
                    }
                    .pain-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        align-items: stretch;
                    }
                    @media (min-width: 768px) {
                        .pain-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .pain-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 1.5rem;
                        height: 100%;
                        box-sizing: border-box;
                        display: flex;
                        flex-direction: column;
                    }
                    .pain-card h4 {
                        font-size: 1rem;
                        font-weight: 500;
                        color: #111827;
                        margin: 0 0 0.75rem;
                    }
                    .pain-card p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0;
                        flex-grow: 1;
                    }
                "#}
            </style>
            <section class="pain-points">
                <div class="section-inner">
                    <div class="section-header">
                        <h3>{"The Pain Points"}</h3>
                        <p>{"Transitions are difficult. Here's what firms typically struggle with."}</p>
                    </div>
                    <div class="pain-grid">
                        {
                            PAIN_POINTS.iter().map(|&(title, description)| html! {
                                <div class="pain-card" key={title}>
                                    <h4>{title}</h4>
                                    <p>{description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
        </>
    }
}

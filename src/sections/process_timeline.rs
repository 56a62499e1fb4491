use yew::prelude::*;

const STEPS: &[(&str, &str)] = &[
    (
        "Analysis",
        "We analyze your current systems, data structures, and client portfolio to create a comprehensive transition plan.",
    ),
    (
        "Planning",
        "AI generates detailed migration scripts, client communication templates, and timeline milestones.",
    ),
    (
        "Execution",
        "Automated data migration with real-time monitoring, exception handling, and progress tracking.",
    ),
    (
        "Validation",
        "Comprehensive quality assurance checks ensure data integrity and account accuracy post-transition.",
    ),
];

#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .process-timeline {
                        padding: 5rem 1.5rem;
                        background: #f4f4f5;
                    }
                    .process-timeline .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .process-timeline .section-header {
                        margin-bottom: 3rem;
                    }
                    .process-timeline h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.5rem;
                    }
                    .process-timeline .section-header p {
                        color: #6b7280;
                        margin: 0;
                    }
                    .timeline-steps {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .timeline-steps { grid-template-columns: repeat(4, 1fr); }
                        .timeline-steps::before {
                            content: '';
                            position: absolute;
                            top: 24px;
                            left: calc(12.5% + 24px);
                            right: calc(12.5% + 24px);
                            height: 1px;
                            background: #e5e7eb;
                        }
                    }
                    .timeline-step {
                        position: relative;
                        text-align: center;
                    }
                    .step-marker {
                        position: relative;
                        z-index: 10;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #fafafa;
                        border: 1px solid #e5e7eb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .timeline-step h4 {
                        font-size: 1rem;
                        font-weight: 500;
                        color: #111827;
                        margin: 0 0 0.5rem;
                    }
                    .timeline-step p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0;
                    }
                "#}
            </style>
            <section class="process-timeline">
                <div class="section-inner">
                    <div class="section-header">
                        <h3>{"How we make it better"}</h3>
                        <p>{"Our proven four-step process transforms complex transitions into smooth operations."}</p>
                    </div>
                    <div class="timeline-steps">
                        {
                            STEPS.iter().enumerate().map(|(i, &(title, description))| html! {
                                <div class="timeline-step" key={title}>
                                    <div class="step-marker">{i + 1}</div>
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

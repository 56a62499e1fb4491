use yew::prelude::*;

const OPERATIONS: &[(&str, &str)] = &[
    (
        "Account Opening",
        "Automated new account processing with intelligent document verification and compliance checks.",
    ),
    (
        "Advisor Transitions",
        "Seamless book transfers with AI-powered data migration and client communication workflows.",
    ),
    (
        "Cashiering",
        "Intelligent cash movement automation with real-time reconciliation and exception handling.",
    ),
    (
        "Cheque Blotters",
        "Automated cheque processing with AI-driven fraud detection and regulatory compliance.",
    ),
    (
        "Client Onboarding",
        "Streamlined onboarding workflows with intelligent document collection and verification.",
    ),
    (
        "Compliance Monitoring",
        "Proactive compliance surveillance with AI-powered risk assessment and alerting.",
    ),
];

#[function_component(AgenticOperations)]
pub fn agentic_operations() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .agentic-operations {
                        padding: 0 1.5rem 8rem;
                    }
                    .agentic-operations .section-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .agentic-operations .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .agentic-operations h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .agentic-operations .section-header p {
                        color: #6b7280;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .operations-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .operations-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 1024px) {
                        .operations-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .operation-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 1.5rem;
                        height: 100%;
                        box-sizing: border-box;
                    }
                    .operation-card h3 {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #111827;
                        margin: 0 0 0.5rem;
                    }
                    .operation-card p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin: 0;
                    }
                "#}
            </style>
            <section id="agentic-operations" class="agentic-operations">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"AI-Powered Workflows"}</h2>
                        <p>{"Our intelligent agents automate complex operational tasks, reducing manual effort and eliminating errors."}</p>
                    </div>
                    <div class="operations-grid">
                        {
                            OPERATIONS.iter().map(|&(title, description)| html! {
                                <div class="operation-card" key={title}>
                                    <h3>{title}</h3>
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

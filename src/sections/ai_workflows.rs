use yew::prelude::*;

#[function_component(AiWorkflows)]
pub fn ai_workflows() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .ai-workflows {
                        padding: 8rem 1.5rem;
                    }
                    .ai-workflows .copy {
                        max-width: 42rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .ai-workflows .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .ai-workflows h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        line-height: 1.2;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .ai-workflows p.body {
                        color: #6b7280;
                        line-height: 1.7;
                    }
                "#}
            </style>
            <section id="workflows" class="ai-workflows">
                <div class="copy">
                    <p class="eyebrow">{"Agentic Operations"}</p>
                    <h2>
                        {"Turn complexity into clarity."}
                        <br />
                        {"Automatically."}
                    </h2>
                    <p class="body">
                        {"Our AI-powered solutions transform manual, time-consuming processes into integrated, automated systems that scale with your business. From client reporting to compliance monitoring, we help you work smarter, not harder."}
                    </p>
                </div>
            </section>
        </>
    }
}

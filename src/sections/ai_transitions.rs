use yew::prelude::*;

#[function_component(AiTransitions)]
pub fn ai_transitions() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .ai-transitions {
                        padding: 8rem 1.5rem;
                        background: #f4f4f5;
                    }
                    .ai-transitions .copy {
                        max-width: 42rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .ai-transitions .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .ai-transitions h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        line-height: 1.2;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .ai-transitions p.body {
                        color: #6b7280;
                        line-height: 1.7;
                    }
                "#}
            </style>
            <section id="transitions" class="ai-transitions">
                <div class="copy">
                    <p class="eyebrow">{"AI-Powered Transitions"}</p>
                    <h2>
                        {"Move books."}
                        <br />
                        {"Not mountains."}
                    </h2>
                    <p class="body">
                        {"Advisor transitions are notoriously complex and stressful. Our AI-powered transition platform streamlines the entire process, from initial planning to final validation, ensuring a smooth experience for everyone involved."}
                    </p>
                </div>
            </section>
        </>
    }
}

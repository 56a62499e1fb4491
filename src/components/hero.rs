use yew::prelude::*;
use gloo_timers::callback::Interval;
use web_sys::MouseEvent;

use crate::components::nav::scroll_to_section;

const ROTATING_WORDS: &[&str] = &[
    "Account Opening",
    "Advisor Transitions",
    "Cashiering Indexing",
    "Check Blotters",
    "Data Aggregation",
];

// Widest entry, rendered invisibly to reserve the headline width.
const WIDEST_WORD: &str = "Cashiering Indexing";

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[function_component(RotatingWord)]
fn rotating_word() -> Html {
    let index = use_state(|| 0usize);
    let reduced_motion = use_state(prefers_reduced_motion);

    {
        let index = index.clone();
        let animate = !*reduced_motion;
        use_effect_with_deps(
            move |_| {
                let interval = animate.then(|| {
                    let mut current = 0usize;
                    Interval::new(2000, move || {
                        current = (current + 1) % ROTATING_WORDS.len();
                        index.set(current);
                    })
                });
                move || drop(interval)
            },
            (),
        );
    }

    if *reduced_motion {
        return html! { <span class="rotating-word-static">{"workflows"}</span> };
    }

    html! {
        <span class="rotating-word-slot">
            <span class="rotating-word-placeholder">{WIDEST_WORD}</span>
            <span class="rotating-word" key={*index}>{ROTATING_WORDS[*index]}</span>
        </span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_learn_more = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#workflows");
    });

    html! {
        <>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1.5rem;
                        overflow: hidden;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .hero-eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1.5rem;
                    }
                    .hero-headline {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.25rem;
                        font-size: clamp(1.875rem, 6vw, 3.75rem);
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        line-height: 1.15;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .rotating-word-slot {
                        position: relative;
                        display: inline-block;
                    }
                    .rotating-word-placeholder {
                        visibility: hidden;
                    }
                    .rotating-word {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        white-space: nowrap;
                        background: linear-gradient(90deg, #2A34E5 0%, #8B5CF6 25%, #EC4899 50%, #F43F5E 75%, #F97316 100%);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: word-in 0.25s ease-in-out;
                    }
                    @keyframes word-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-subheadline {
                        font-size: 1.125rem;
                        color: #6b7280;
                        max-width: 28rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .hero-learn-more {
                        background: none;
                        border: none;
                        padding: 0.5rem 1rem;
                        font-size: 0.95rem;
                        font-family: inherit;
                        color: #6b7280;
                        cursor: pointer;
                        transition: color 0.15s;
                    }
                    .hero-learn-more:hover {
                        color: #111827;
                    }
                    .hero-scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: rgba(107, 114, 128, 0.5);
                        font-size: 1.5rem;
                        animation: cue-bob 2s ease-in-out infinite;
                    }
                    @keyframes cue-bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 8px); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .rotating-word { animation: none; }
                        .hero-scroll-cue { animation: none; }
                    }
                "#}
            </style>
            <section class="hero">
                <div class="hero-content">
                    <p class="hero-eyebrow">{"AI-Powered Financial Consulting"}</p>
                    <h1 class="hero-headline">
                        <span>{"Agentic"}</span>
                        <RotatingWord />
                    </h1>
                    <p class="hero-subheadline">
                        {"We help financial services firms harness AI to automate complex processes and navigate advisor transitions with confidence."}
                    </p>
                    <button class="hero-learn-more" onclick={on_learn_more}>
                        {"Learn More"}
                    </button>
                </div>
                <div class="hero-scroll-cue">{"⌄"}</div>
            </section>
        </>
    }
}

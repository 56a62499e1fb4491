use yew::prelude::*;
use web_sys::MouseEvent;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    title: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Brookwell transformed how we operate. Their AI workflows eliminated 80% of our manual reporting work, allowing our team to focus on what matters most—serving our clients.",
        author: "Sarah Chen",
        title: "Managing Partner",
        company: "Westfield Wealth Advisors",
    },
    Testimonial {
        quote: "The transition support from Brookwell was exceptional. They made moving our book of business seamless and kept our clients informed every step of the way.",
        author: "Michael Torres",
        title: "Senior Financial Advisor",
        company: "Pacific Investment Group",
    },
    Testimonial {
        quote: "We were skeptical about AI in financial services, but Brookwell proved us wrong. Their solutions are thoughtful, compliant, and genuinely improve our operations.",
        author: "Jennifer Walsh",
        title: "Chief Compliance Officer",
        company: "Harbor Securities",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let current = use_state(|| 0usize);

    let go_previous = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(if *current == 0 {
                TESTIMONIALS.len() - 1
            } else {
                *current - 1
            });
        })
    };

    let go_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + 1) % TESTIMONIALS.len());
        })
    };

    let testimonial = &TESTIMONIALS[(*current).min(TESTIMONIALS.len() - 1)];

    html! {
        <>
            <style>
                {r#"
                    .testimonials {
                        padding: 8rem 1.5rem;
                    }
                    .testimonials .section-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        position: relative;
                    }
                    .testimonial-mark {
                        position: absolute;
                        top: -2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 120px;
                        line-height: 1;
                        font-family: Georgia, serif;
                        color: rgba(17, 24, 39, 0.05);
                        user-select: none;
                        pointer-events: none;
                    }
                    .testimonial-body {
                        position: relative;
                        z-index: 10;
                    }
                    .testimonial-quote {
                        font-size: 1.375rem;
                        line-height: 1.7;
                        color: #111827;
                        margin: 0 0 2rem;
                    }
                    .testimonial-author {
                        font-weight: 500;
                        color: #111827;
                        margin: 0;
                    }
                    .testimonial-role {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0.25rem 0 0;
                    }
                    .testimonial-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2.5rem;
                    }
                    .testimonial-arrow {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: 1px solid #e5e7eb;
                        background: #ffffff;
                        color: #111827;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .testimonial-arrow:hover {
                        background: #f4f4f5;
                    }
                    .testimonial-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .testimonial-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        border: none;
                        padding: 0;
                        background: rgba(17, 24, 39, 0.2);
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .testimonial-dot.active {
                        background: #111827;
                    }
                "#}
            </style>
            <section class="testimonials">
                <div class="section-inner">
                    <div class="testimonial-mark">{"\u{201C}"}</div>
                    <div class="testimonial-body" key={testimonial.author}>
                        <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                        <p class="testimonial-author">{testimonial.author}</p>
                        <p class="testimonial-role">
                            {format!("{}, {}", testimonial.title, testimonial.company)}
                        </p>
                    </div>
                    <div class="testimonial-controls">
                        <button class="testimonial-arrow" onclick={go_previous}>{"‹"}</button>
                        <div class="testimonial-dots">
                            {
                                (0..TESTIMONIALS.len()).map(|i| {
                                    let current_handle = current.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        current_handle.set(i);
                                    });
                                    html! {
                                        <button
                                            class={classes!("testimonial-dot", (*current == i).then(|| "active"))}
                                            onclick={onclick}
                                            key={i}
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <button class="testimonial-arrow" onclick={go_next}>{"›"}</button>
                    </div>
                </div>
            </section>
        </>
    }
}

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::contact::model::{validate, ContactFields, Field, FieldErrors, SubmissionState};

const INTEGRATIONS: &[&str] = &[
    "Fidelity",
    "Broadridge",
    "Charles Schwab",
    "BNY Pershing",
    "Envestnet",
    "RightBridge",
    "Redtail",
    "Salesforce",
    "Wealthbox",
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or(true)]
    pub show_ticker: bool,
}

fn apply_edit(
    field: Field,
    value: String,
    fields: &UseStateHandle<ContactFields>,
    errors: &UseStateHandle<FieldErrors>,
) {
    let mut next = (**fields).clone();
    next.set(field, value);
    fields.set(next);

    if (**errors).get(field).is_some() {
        let mut next = (**errors).clone();
        next.clear(field);
        errors.set(next);
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let fields = use_state(ContactFields::default);
    let errors = use_state(FieldErrors::default);
    let submission = use_state(|| SubmissionState::Idle);

    let on_name = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit(Field::Name, input.value(), &fields, &errors);
        })
    };

    let on_email = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit(Field::Email, input.value(), &fields, &errors);
        })
    };

    let on_company = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit(Field::Company, input.value(), &fields, &errors);
        })
    };

    let on_message = {
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            apply_edit(Field::Message, input.value(), &fields, &errors);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let errors = errors.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !submission.accepts_submit() {
                return;
            }

            let found = validate(&fields);
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            submission.set(SubmissionState::Submitting);
            let payload = (*fields).clone();
            let submission = submission.clone();
            spawn_local(async move {
                match Request::post(config::get_intake_url())
                    .json(&payload)
                    .expect("failed to serialize contact payload")
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        submission.set(SubmissionState::Succeeded);
                    }
                    Ok(response) => {
                        log!("contact submission rejected, status:", response.status());
                        submission.set(SubmissionState::Failed);
                    }
                    Err(e) => {
                        log!("contact submission error:", e.to_string());
                        submission.set(SubmissionState::Failed);
                    }
                }
            });
        })
    };

    let submitting = *submission == SubmissionState::Submitting;

    html! {
        <>
            <style>
                {r#"
                    .integration-ticker {
                        padding: 5rem 1.5rem;
                        overflow: hidden;
                    }
                    .integration-ticker .ticker-label {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .ticker-viewport {
                        position: relative;
                        overflow: hidden;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .ticker-viewport::before,
                    .ticker-viewport::after {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 6rem;
                        z-index: 1;
                        pointer-events: none;
                    }
                    .ticker-viewport::before {
                        left: 0;
                        background: linear-gradient(to right, #fafafa, transparent);
                    }
                    .ticker-viewport::after {
                        right: 0;
                        background: linear-gradient(to left, #fafafa, transparent);
                    }
                    .ticker-track {
                        display: flex;
                        align-items: center;
                        width: max-content;
                        animation: ticker-scroll 45s linear infinite;
                    }
                    .ticker-item {
                        padding: 0 3rem;
                        font-size: 1.1rem;
                        font-weight: 500;
                        color: rgba(17, 24, 39, 0.4);
                        white-space: nowrap;
                        transition: color 0.3s;
                    }
                    .ticker-item:hover {
                        color: rgba(17, 24, 39, 0.8);
                    }
                    @keyframes ticker-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-33.333%); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .ticker-track { animation: none; }
                    }

                    .contact-section {
                        padding: 8rem 1.5rem;
                        background: #f4f4f5;
                    }
                    .contact-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-intro .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .contact-intro h2 {
                        font-size: 2.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        margin-bottom: 1.5rem;
                        color: #111827;
                    }
                    .contact-intro p {
                        color: #6b7280;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .contact-intro .contact-email a {
                        color: #6b7280;
                        text-decoration: none;
                    }
                    .contact-intro .contact-email a:hover {
                        color: #111827;
                    }
                    .contact-card {
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .contact-form .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #111827;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.65rem 0.9rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        font-size: 0.95rem;
                        font-family: inherit;
                        color: #111827;
                        background: #ffffff;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #111827;
                    }
                    .contact-form input.invalid,
                    .contact-form textarea.invalid {
                        border-color: #dc2626;
                    }
                    .contact-form .field-error {
                        font-size: 0.75rem;
                        color: #dc2626;
                        margin-top: 0.4rem;
                    }
                    .contact-form button {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #111827;
                        color: #ffffff;
                        font-size: 0.95rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .contact-form button:hover {
                        background: #1f2937;
                    }
                    .contact-form button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .contact-success {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .contact-success .success-badge {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #f4f4f5;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1rem;
                        font-size: 1.4rem;
                    }
                    .contact-success h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                        color: #111827;
                    }
                    .contact-success p {
                        color: #6b7280;
                    }
                "#}
            </style>
            {
                if props.show_ticker {
                    html! {
                        <section class="integration-ticker">
                            <p class="ticker-label">{"Technologies We Work With"}</p>
                            <div class="ticker-viewport">
                                <div class="ticker-track">
                                    {
                                        INTEGRATIONS.iter().cycle().take(INTEGRATIONS.len() * 3).enumerate().map(|(i, name)| html! {
                                            <div class="ticker-item" key={i}>{*name}</div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </section>
                    }
                } else {
                    html! {}
                }
            }
            <section id="contact" class="contact-section">
                <div class="contact-grid">
                    <div class="contact-intro">
                        <p class="eyebrow">{"Get in Touch"}</p>
                        <h2>{"Talk with an expert"}</h2>
                        <p>{"Ready to simplify your operations or manage a high-stakes transition? Let's talk about how we can help."}</p>
                        <p class="contact-email">
                            {"✉ "}
                            <a href="mailto:contact@brookwellgroup.com">{"contact@brookwellgroup.com"}</a>
                        </p>
                    </div>
                    <div class="contact-card">
                        {
                            if *submission == SubmissionState::Succeeded {
                                html! {
                                    <div class="contact-success">
                                        <div class="success-badge">{"✓"}</div>
                                        <h3>{"Thank you!"}</h3>
                                        <p>{"We'll be in touch within 24 hours."}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="contact-form" onsubmit={onsubmit}>
                                        <div class="form-field">
                                            <label for="name">{"Name"}</label>
                                            <input
                                                id="name"
                                                type="text"
                                                placeholder="Your name"
                                                value={fields.name.clone()}
                                                class={classes!(errors.get(Field::Name).map(|_| "invalid"))}
                                                oninput={on_name}
                                            />
                                            {
                                                if let Some(message) = errors.get(Field::Name) {
                                                    html! { <p class="field-error">{message}</p> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                        <div class="form-field">
                                            <label for="email">{"Email"}</label>
                                            <input
                                                id="email"
                                                type="email"
                                                placeholder="you@company.com"
                                                value={fields.email.clone()}
                                                class={classes!(errors.get(Field::Email).map(|_| "invalid"))}
                                                oninput={on_email}
                                            />
                                            {
                                                if let Some(message) = errors.get(Field::Email) {
                                                    html! { <p class="field-error">{message}</p> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                        <div class="form-field">
                                            <label for="company">{"Company (optional)"}</label>
                                            <input
                                                id="company"
                                                type="text"
                                                placeholder="Your company"
                                                value={fields.company.clone()}
                                                oninput={on_company}
                                            />
                                        </div>
                                        <div class="form-field">
                                            <label for="message">{"Message"}</label>
                                            <textarea
                                                id="message"
                                                rows="4"
                                                placeholder="Tell us about your needs..."
                                                value={fields.message.clone()}
                                                class={classes!(errors.get(Field::Message).map(|_| "invalid"))}
                                                oninput={on_message}
                                            />
                                            {
                                                if let Some(message) = errors.get(Field::Message) {
                                                    html! { <p class="field-error">{message}</p> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                        <button type="submit" disabled={submitting}>
                                            { if submitting { "Sending..." } else { "Send Message" } }
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>
                </div>
            </section>
        </>
    }
}

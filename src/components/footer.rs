use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use chrono::{Datelike, Utc};

use crate::components::nav::scroll_to_section;
use crate::Route;

const SERVICE_LINKS: &[(&str, &str)] = &[
    ("Agentic Operations", "#workflows"),
    ("AI Transitions", "#transitions"),
    ("Client Stories", "#stories"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let anchor_link = |label: &'static str, href: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(href);
        });
        html! {
            <li><button class="footer-link" onclick={onclick}>{label}</button></li>
        }
    };

    let year = Utc::now().year();

    html! {
        <>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 1.5rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .footer-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    @media (min-width: 768px) {
                        .footer-columns { grid-template-columns: repeat(4, 1fr); }
                    }
                    .footer-brand .footer-logo {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #111827;
                        text-decoration: none;
                    }
                    .footer-brand p {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-top: 1rem;
                        line-height: 1.7;
                    }
                    .footer-columns h4 {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .footer-columns ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        font-size: 0.875rem;
                        font-family: inherit;
                        color: #6b7280;
                        cursor: pointer;
                        transition: color 0.15s;
                        text-decoration: none;
                    }
                    .footer-link:hover {
                        color: #111827;
                    }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid #e5e7eb;
                        text-align: center;
                    }
                    .footer-bottom p {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
            <footer class="site-footer">
                <div class="footer-inner">
                    <div class="footer-columns">
                        <div class="footer-brand">
                            <Link<Route> to={Route::Home} classes="footer-logo">
                                {"Brookwell"}
                            </Link<Route>>
                            <p>{"AI-powered solutions for financial services firms."}</p>
                        </div>
                        <div>
                            <h4>{"Services"}</h4>
                            <ul>
                                { for SERVICE_LINKS.iter().map(|&(label, href)| anchor_link(label, href)) }
                            </ul>
                        </div>
                        <div>
                            <h4>{"Company"}</h4>
                            <ul>
                                <li>
                                    <Link<Route> to={Route::About} classes="footer-link">
                                        {"About"}
                                    </Link<Route>>
                                </li>
                                { anchor_link("Contact", "#contact") }
                            </ul>
                        </div>
                        <div>
                            <h4>{"Legal"}</h4>
                            <ul>
                                <li><a class="footer-link" href="#">{"Privacy Policy"}</a></li>
                                <li><a class="footer-link" href="#">{"Terms of Service"}</a></li>
                            </ul>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{format!("{} Brookwell. All rights reserved.", year)}</p>
                    </div>
                </div>
            </footer>
        </>
    }
}

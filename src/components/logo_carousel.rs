use yew::prelude::*;

const LOGOS: &[&str] = &[
    "Albridge",
    "RightBridge",
    "Broadridge",
    "Docupace",
    "Pershing",
    "NFS",
];

#[function_component(LogoCarousel)]
pub fn logo_carousel() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .logo-carousel {
                        padding: 4rem 0;
                        overflow: hidden;
                        position: relative;
                    }
                    .logo-carousel::before,
                    .logo-carousel::after {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 8rem;
                        z-index: 10;
                        pointer-events: none;
                    }
                    .logo-carousel::before {
                        left: 0;
                        background: linear-gradient(to right, #fafafa, transparent);
                    }
                    .logo-carousel::after {
                        right: 0;
                        background: linear-gradient(to left, #fafafa, transparent);
                    }
                    .logo-track {
                        display: flex;
                        align-items: center;
                        gap: 5rem;
                        width: max-content;
                        animation: logo-scroll 60s linear infinite;
                    }
                    .logo-item {
                        flex-shrink: 0;
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: rgba(17, 24, 39, 0.4);
                        cursor: default;
                        user-select: none;
                        transition: color 0.3s;
                        white-space: nowrap;
                    }
                    .logo-item:hover {
                        color: #111827;
                    }
                    @keyframes logo-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-33.333%); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .logo-track { animation: none; }
                    }
                "#}
            </style>
            <section class="logo-carousel">
                <div class="logo-track">
                    {
                        LOGOS.iter().cycle().take(LOGOS.len() * 3).enumerate().map(|(i, logo)| html! {
                            <div class="logo-item" key={i}>{*logo}</div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </>
    }
}

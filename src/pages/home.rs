use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::logo_carousel::LogoCarousel;
use crate::components::service_toggle::ServiceToggle;
use crate::contact::form::Contact;
use crate::sections::agentic_operations::AgenticOperations;
use crate::sections::ai_transitions::AiTransitions;
use crate::sections::ai_workflows::AiWorkflows;
use crate::sections::client_stories::ClientStories;
use crate::sections::pain_points::PainPoints;
use crate::sections::process_timeline::ProcessTimeline;
use crate::sections::testimonials::Testimonials;
use crate::sections::transition_results::TransitionResults;
use crate::sections::who_we_serve::WhoWeServe;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background-color: #fafafa;
                        background-image: radial-gradient(circle at 1px 1px, rgba(0, 0, 0, 0.06) 1px, transparent 1px);
                        background-size: 24px 24px;
                    }
                "#}
            </style>
            <div class="home-page">
                <main>
                    <Hero />
                    <LogoCarousel />
                    <ServiceToggle />
                    <WhoWeServe />
                    <AiWorkflows />
                    <AgenticOperations />
                    <ClientStories />
                    <Testimonials />
                    <AiTransitions />
                    <PainPoints />
                    <ProcessTimeline />
                    <TransitionResults />
                    <Contact />
                </main>
                <Footer />
            </div>
        </>
    }
}

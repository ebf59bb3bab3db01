use yew::prelude::*;
use yew_router::prelude::*;

use crate::gallery::recent::RecentProjects;
use crate::request::form::RequestFormHandle;
use crate::request::services::ServicesGrid;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let request_form = use_context::<RequestFormHandle>();

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

    let open_request = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(form) = &request_form {
            form.open(None);
        }
    });

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Roofing, building & renovations done right"}</h1>
                    <p class="hero-subtitle">
                        {"Tell us what you need, attach a few photos and we'll get back to you on WhatsApp."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta open-quote-modal" onclick={open_request}>
                            {"Request a Service"}
                        </button>
                        <Link<Route> to={Route::Gallery} classes="forward-link">
                            {"See our work"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section id="services" class="page-section">
                <h2>{"Services"}</h2>
                <ServicesGrid />
            </section>

            <section id="recent-projects" class="page-section">
                <h2>{"Recent Projects"}</h2>
                <p class="section-hint">{"Tap a project to browse every photo."}</p>
                <RecentProjects />
            </section>
        </div>
    }
}

//! Marketing hero for the landing route.
//!
//! DESIGN
//! ======
//! The primary action is the only wired affordance; everything else is
//! static copy so the landing page stays renderable without any session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Route of the creation area the primary action opens.
pub const START_CREATING_ROUTE: &str = "/ai";

/// Top-of-page marketing section with the start-creating call to action.
#[component]
pub fn Hero() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="hero">
            <div class="hero__copy">
                <h1 class="hero__headline">
                    "Create amazing content" <br/>
                    <span class="hero__headline-accent">"with AI tools in one place"</span>
                </h1>
                <p class="hero__subtitle">
                    "Generate articles and images, then publish your best work to the community."
                </p>
            </div>
            <div class="hero__actions">
                <button
                    class="btn btn--primary hero__start"
                    on:click=move |_| navigate(START_CREATING_ROUTE, NavigateOptions::default())
                >
                    "Start creating now"
                </button>
                // Demo playback is not wired to anything yet.
                <button class="btn hero__demo">"Watch demo"</button>
            </div>
            <div class="hero__proof">
                <span class="hero__proof-avatars" aria-hidden="true"></span>
                <span class="hero__proof-caption">"Trusted by 10k+ people"</span>
            </div>
        </section>
    }
}

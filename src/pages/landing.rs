//! Public landing route.

use leptos::prelude::*;

use crate::components::hero::Hero;

/// Marketing landing page. Renders without any session; its only wired
/// affordance is the hero's start-creating navigation.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <Hero/>
        </main>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_tray::ToastTray;
use crate::net::identity;
use crate::pages::{community::CommunityPage, landing::LandingPage};
use crate::state::{auth::AuthState, creations::CreationsState, toasts::ToastsState};

/// Root application component.
///
/// Provides all shared state contexts, sets up client-side routing, and
/// starts the one-shot identity session lookup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let creations = RwSignal::new(CreationsState::default());
    let toasts = RwSignal::new(ToastsState::default());

    provide_context(auth);
    provide_context(creations);
    provide_context(toasts);

    // Resolve the session exactly once per tab; `AuthState::loading` holds
    // guards open until this lands.
    leptos::task::spawn_local(async move {
        let user = identity::fetch_session_user().await;
        match &user {
            Some(user) => log::info!("session resolved for user {}", user.id),
            None => log::info!("no active session"),
        }
        auth.update(|state| {
            state.user = user;
            state.loading = false;
        });
    });

    view! {
        <Title text="Atelier"/>

        <Router>
            <ToastTray/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("ai") view=CommunityPage/>
            </Routes>
        </Router>
    }
}

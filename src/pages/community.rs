//! Community gallery page listing published creations.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. Every visit starts the gallery from
//! its pre-fetch state, then fetches the published-creations list for the
//! signed-in identity (minting a fresh bearer token per attempt) and
//! renders the loading, empty, and populated states. Fetch responses
//! settle through the generation protocol in `state::creations`, so an
//! attempt superseded by an identity change or by a later visit can
//! neither replace the list nor raise a toast.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;

use crate::components::creation_card::CreationCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::identity;
use crate::net::types::{Creation, CreationsEnvelope};
use crate::state::auth::AuthState;
use crate::state::creations::CreationsState;
use crate::state::toasts::{ToastKind, ToastsState};
use crate::util::auth::{browser_redirect, install_signed_out_redirect};

/// Toast text when a failure carries no message of its own.
const FETCH_FAILED_FALLBACK: &str = "Failed to fetch creations";

/// Community page showing every published creation as a gallery tile.
/// Visitors without a session are sent to the hosted sign-in page.
#[component]
pub fn CommunityPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let creations = expect_context::<RwSignal<CreationsState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    // Each visit starts from the pre-fetch state; a failed earlier visit
    // retries by mounting again.
    creations.update(|s| s.reset());

    install_signed_out_redirect(auth, browser_redirect);

    // Start a fetch when a signed-in identity appears or changes. The
    // gallery state is read untracked; only auth drives this effect.
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(user) = state.user else {
            return;
        };
        if !creations.get_untracked().needs_fetch(&user.id) {
            return;
        }
        let mut seq = 0;
        creations.update(|s| seq = s.begin_fetch(&user.id));
        leptos::task::spawn_local(async move {
            let resolution = resolve_fetch(load_published_creations().await);
            apply_fetch(creations, toasts, seq, resolution);
        });
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <main class="community-page">
                        <p class="community-page__status">
                            {move || if auth.get().loading { "Loading..." } else { "Redirecting to sign-in..." }}
                        </p>
                    </main>
                }
            }
        >
            <main class="community-page">
                <h1 class="community-page__heading">"Creations"</h1>
                <section class="community-page__panel">
                    <Show
                        when=move || !creations.get().loading
                        fallback=|| view! { <p class="community-page__status">"Loading creations..."</p> }
                    >
                        <Show
                            when=move || !creations.get().items.is_empty()
                            fallback=|| {
                                view! {
                                    <p class="community-page__status">"No published creations yet."</p>
                                }
                            }
                        >
                            <div class="community-page__grid">
                                {move || {
                                    let viewer = auth.get().user.map(|user| user.id);
                                    visible_creations(creations.get().items)
                                        .into_iter()
                                        .map(|creation| {
                                            view! {
                                                <CreationCard creation=creation viewer_id=viewer.clone()/>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </section>
            </main>
        </Show>
    }
}

/// Mint a bearer token, then fetch the published creations with it.
async fn load_published_creations() -> Result<CreationsEnvelope, ApiError> {
    let token = identity::mint_session_token().await?;
    api::fetch_published_creations(&token).await
}

/// What a finished fetch attempt wants to do to the gallery.
enum FetchResolution {
    /// Replace the list wholesale with the server's rows.
    Replace(Vec<Option<Creation>>),
    /// Keep the list and surface this message.
    Reject(String),
}

/// Collapse transport, status, decode, and envelope-level failures into a
/// single resolution. An envelope with `success: false` prefers the
/// server's own message.
fn resolve_fetch(outcome: Result<CreationsEnvelope, ApiError>) -> FetchResolution {
    match outcome {
        Ok(envelope) if envelope.success => {
            FetchResolution::Replace(envelope.creations.unwrap_or_default())
        }
        Ok(envelope) => FetchResolution::Reject(
            envelope.message.unwrap_or_else(|| FETCH_FAILED_FALLBACK.to_owned()),
        ),
        Err(err) => FetchResolution::Reject(err.to_string()),
    }
}

/// Land a resolution for attempt `seq`. A rejection raises its toast only
/// if the attempt was still current; a superseded attempt changes nothing.
fn apply_fetch(
    creations: RwSignal<CreationsState>,
    toasts: RwSignal<ToastsState>,
    seq: u64,
    resolution: FetchResolution,
) {
    match resolution {
        FetchResolution::Replace(items) => {
            creations.update(|s| {
                s.settle(seq, Some(items));
            });
        }
        FetchResolution::Reject(message) => {
            let mut applied = false;
            creations.update(|s| applied = s.settle(seq, None));
            if applied {
                log::error!("creations fetch failed: {message}");
                toasts.update(|t| {
                    t.push(ToastKind::Error, message);
                });
            }
        }
    }
}

/// Rows the grid actually renders: `null` holes are skipped, order kept.
fn visible_creations(items: Vec<Option<Creation>>) -> Vec<Creation> {
    items.into_iter().flatten().collect()
}

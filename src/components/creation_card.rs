//! Gallery tile for one published creation.
//!
//! DESIGN
//! ======
//! The grid stays media-first: prompt and like metadata live in a hover
//! overlay. The heart is display-only; it reports whether the viewer is in
//! the like list and writes nothing back.

#[cfg(test)]
#[path = "creation_card_test.rs"]
mod creation_card_test;

use leptos::prelude::*;

use crate::net::types::Creation;

/// Alt text for media whose author did not keep a prompt.
const DEFAULT_MEDIA_ALT: &str = "Generated content";

/// One creation tile: media, hover prompt, like count, heart state.
#[component]
pub fn CreationCard(creation: Creation, viewer_id: Option<String>) -> impl IntoView {
    let likes = like_count(&creation);
    let liked = is_liked_by(&creation, viewer_id.as_deref());
    let alt = media_alt(creation.prompt.as_deref());
    let prompt = creation.prompt.unwrap_or_default();

    view! {
        <figure class="creation-card">
            <img class="creation-card__media" src=creation.content alt=alt/>
            <figcaption class="creation-card__overlay">
                <p class="creation-card__prompt">{prompt}</p>
                <span class="creation-card__likes">
                    <span class="creation-card__like-count">{likes}</span>
                    <svg
                        class="creation-card__heart"
                        class:creation-card__heart--liked=liked
                        viewBox="0 0 24 24"
                        aria-hidden="true"
                    >
                        <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>
                    </svg>
                </span>
            </figcaption>
        </figure>
    }
}

fn like_count(creation: &Creation) -> usize {
    creation.likes.as_ref().map_or(0, Vec::len)
}

fn is_liked_by(creation: &Creation, viewer_id: Option<&str>) -> bool {
    match (creation.likes.as_ref(), viewer_id) {
        (Some(likes), Some(viewer)) => likes.iter().any(|id| id == viewer),
        _ => false,
    }
}

fn media_alt(prompt: Option<&str>) -> String {
    prompt.unwrap_or(DEFAULT_MEDIA_ALT).to_owned()
}

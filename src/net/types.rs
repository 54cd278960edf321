//! Wire schema shared by the HTTP clients.
//!
//! These are response-only DTOs; nothing in this client writes them back,
//! so they derive `Deserialize` alone. Unknown server fields are ignored
//! rather than rejected, which keeps the client tolerant of API additions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One published piece of generated content.
///
/// Server rows carry more columns than the gallery renders; only the
/// rendered fields are modeled here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Creation {
    /// URI of the generated media, used as the tile's image source.
    pub content: String,
    /// Text of the generation request, when the author kept one.
    pub prompt: Option<String>,
    /// Ids of users who liked this creation.
    pub likes: Option<Vec<String>>,
}

/// Envelope for `GET /api/user/get-published-creations`.
///
/// The list may be absent entirely, and a present list may contain `null`
/// holes. Both shapes are preserved as-is so rendering can apply its own
/// skip rules instead of the decoder guessing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreationsEnvelope {
    pub success: bool,
    pub creations: Option<Vec<Option<Creation>>>,
    pub message: Option<String>,
}

/// The signed-in user as reported by the identity provider.
///
/// The provider shares a fuller profile; only the stable id is consumed
/// here, matched against [`Creation::likes`] entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: String,
}

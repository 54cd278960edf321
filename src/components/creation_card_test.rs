use super::*;

fn creation_with_likes(likes: Option<Vec<&str>>) -> Creation {
    Creation {
        content: "https://cdn.example.com/a.png".to_owned(),
        prompt: None,
        likes: likes.map(|ids| ids.into_iter().map(ToOwned::to_owned).collect()),
    }
}

#[test]
fn like_count_is_zero_without_a_like_list() {
    assert_eq!(like_count(&creation_with_likes(None)), 0);
}

#[test]
fn like_count_counts_entries() {
    assert_eq!(like_count(&creation_with_likes(Some(vec!["u1", "u2", "u3"]))), 3);
}

#[test]
fn heart_fills_when_viewer_is_in_like_list() {
    let creation = creation_with_likes(Some(vec!["u1", "u2"]));
    assert!(is_liked_by(&creation, Some("u2")));
}

#[test]
fn heart_stays_empty_for_other_viewers() {
    let creation = creation_with_likes(Some(vec!["u1", "u2"]));
    assert!(!is_liked_by(&creation, Some("u3")));
}

#[test]
fn heart_stays_empty_without_a_viewer() {
    let creation = creation_with_likes(Some(vec!["u1"]));
    assert!(!is_liked_by(&creation, None));
}

#[test]
fn heart_stays_empty_without_a_like_list() {
    assert!(!is_liked_by(&creation_with_likes(None), Some("u1")));
}

#[test]
fn media_alt_prefers_the_prompt() {
    assert_eq!(media_alt(Some("a watercolor fox")), "a watercolor fox");
}

#[test]
fn media_alt_falls_back_when_prompt_is_missing() {
    assert_eq!(media_alt(None), "Generated content");
}

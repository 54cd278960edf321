use super::*;

fn creation(content: &str) -> Creation {
    Creation { content: content.to_owned(), prompt: None, likes: None }
}

fn success_envelope(creations: Option<Vec<Option<Creation>>>) -> CreationsEnvelope {
    CreationsEnvelope { success: true, creations, message: None }
}

fn failure_envelope(message: Option<&str>) -> CreationsEnvelope {
    CreationsEnvelope { success: false, creations: None, message: message.map(ToOwned::to_owned) }
}

#[test]
fn resolve_success_replaces_with_server_rows() {
    let outcome = Ok(success_envelope(Some(vec![Some(creation("a.png")), None])));
    let FetchResolution::Replace(items) = resolve_fetch(outcome) else {
        panic!("expected a replace resolution");
    };
    assert_eq!(items.len(), 2);
}

#[test]
fn resolve_success_without_rows_key_replaces_with_empty_list() {
    let FetchResolution::Replace(items) = resolve_fetch(Ok(success_envelope(None))) else {
        panic!("expected a replace resolution");
    };
    assert!(items.is_empty());
}

#[test]
fn resolve_failure_prefers_the_server_message() {
    let outcome = Ok(failure_envelope(Some("no creations")));
    let FetchResolution::Reject(message) = resolve_fetch(outcome) else {
        panic!("expected a rejection");
    };
    assert_eq!(message, "no creations");
}

#[test]
fn resolve_failure_without_message_uses_the_fallback_text() {
    let FetchResolution::Reject(message) = resolve_fetch(Ok(failure_envelope(None))) else {
        panic!("expected a rejection");
    };
    assert_eq!(message, FETCH_FAILED_FALLBACK);
}

#[test]
fn resolve_transport_error_surfaces_its_display_text() {
    let outcome = Err(ApiError::Transport("Network request failed".to_owned()));
    let FetchResolution::Reject(message) = resolve_fetch(outcome) else {
        panic!("expected a rejection");
    };
    assert_eq!(message, "Network request failed");
}

#[test]
fn apply_replace_lands_rows_and_ends_loading() {
    let creations = RwSignal::new(CreationsState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let mut seq = 0;
    creations.update(|s| seq = s.begin_fetch("u1"));

    apply_fetch(creations, toasts, seq, FetchResolution::Replace(vec![Some(creation("a.png"))]));

    assert_eq!(creations.get_untracked().items.len(), 1);
    assert!(!creations.get_untracked().loading);
    assert!(toasts.get_untracked().items.is_empty());
}

#[test]
fn apply_reject_keeps_rows_and_raises_exactly_one_error_toast() {
    let creations = RwSignal::new(CreationsState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let mut seq = 0;
    creations.update(|s| seq = s.begin_fetch("u1"));
    apply_fetch(creations, toasts, seq, FetchResolution::Replace(vec![Some(creation("a.png"))]));

    creations.update(|s| seq = s.begin_fetch("u2"));
    apply_fetch(creations, toasts, seq, FetchResolution::Reject("boom".to_owned()));

    let state = creations.get_untracked();
    assert_eq!(state.items.len(), 1, "a failed fetch must not clear the gallery");
    assert!(!state.loading);

    let raised = toasts.get_untracked();
    assert_eq!(raised.items.len(), 1);
    assert_eq!(raised.items[0].kind, ToastKind::Error);
    assert_eq!(raised.items[0].message, "boom");
}

#[test]
fn superseded_attempt_changes_nothing_and_stays_silent() {
    let creations = RwSignal::new(CreationsState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let mut stale = 0;
    creations.update(|s| stale = s.begin_fetch("u1"));
    let mut current = 0;
    creations.update(|s| current = s.begin_fetch("u2"));

    apply_fetch(creations, toasts, stale, FetchResolution::Replace(vec![Some(creation("stale.png"))]));
    assert!(creations.get_untracked().items.is_empty());
    assert!(creations.get_untracked().loading, "the newer attempt is still in flight");

    apply_fetch(creations, toasts, stale, FetchResolution::Reject("stale failure".to_owned()));
    assert!(toasts.get_untracked().items.is_empty(), "a superseded attempt must not toast");

    apply_fetch(creations, toasts, current, FetchResolution::Replace(vec![Some(creation("current.png"))]));
    let state = creations.get_untracked();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].as_ref().unwrap().content, "current.png");
}

#[test]
fn attempt_from_an_earlier_visit_cannot_land_after_reset() {
    let creations = RwSignal::new(CreationsState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let mut seq = 0;
    creations.update(|s| seq = s.begin_fetch("u1"));

    creations.update(|s| s.reset());
    apply_fetch(creations, toasts, seq, FetchResolution::Replace(vec![Some(creation("late.png"))]));
    assert!(creations.get_untracked().items.is_empty());
    assert!(creations.get_untracked().loading, "the fresh visit's own fetch is still pending");

    apply_fetch(creations, toasts, seq, FetchResolution::Reject("late failure".to_owned()));
    assert!(toasts.get_untracked().items.is_empty(), "an orphaned attempt must not toast");
}

#[test]
fn visible_creations_skips_null_holes_and_keeps_order() {
    let rows = vec![Some(creation("a.png")), None, Some(creation("b.png"))];
    let visible = visible_creations(rows);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].content, "a.png");
    assert_eq!(visible[1].content, "b.png");
}

#[test]
fn all_null_rows_render_zero_tiles_but_count_as_populated() {
    let rows: Vec<Option<Creation>> = vec![None, None];
    assert!(!rows.is_empty(), "the empty-state check runs on raw rows");
    assert!(visible_creations(rows).is_empty());
}

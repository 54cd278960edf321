use super::*;

#[test]
fn published_creations_endpoint_is_same_origin_without_base() {
    assert_eq!(published_creations_endpoint(""), "/api/user/get-published-creations");
}

#[test]
fn published_creations_endpoint_prefixes_configured_base() {
    assert_eq!(
        published_creations_endpoint("https://api.example.com"),
        "https://api.example.com/api/user/get-published-creations"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok_123"), "Bearer tok_123");
}

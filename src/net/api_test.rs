use super::*;
use crate::net::types::ContentPackStatus;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn list_path_without_filters() {
    assert_eq!(list_packs_path(&QueueFilter::default()), "/content-packs");
}

#[test]
fn list_path_with_status_filter() {
    let filter = QueueFilter {
        status: Some(ContentPackStatus::DraftReady),
        breaking_only: false,
    };
    assert_eq!(
        list_packs_path(&filter),
        "/content-packs?status=DRAFT_READY"
    );
}

#[test]
fn list_path_with_breaking_filter() {
    let filter = QueueFilter {
        status: None,
        breaking_only: true,
    };
    assert_eq!(list_packs_path(&filter), "/content-packs?breaking=true");
}

#[test]
fn list_path_with_both_filters() {
    let filter = QueueFilter {
        status: Some(ContentPackStatus::Approved),
        breaking_only: true,
    };
    assert_eq!(
        list_packs_path(&filter),
        "/content-packs?status=APPROVED&breaking=true"
    );
}

#[test]
fn pack_paths_format_expected_routes() {
    assert_eq!(pack_path(12), "/content-packs/12");
    assert_eq!(approve_path(12), "/content-packs/12/approve");
    assert_eq!(reject_path(12), "/content-packs/12/reject");
    assert_eq!(export_path(12), "/content-packs/12/export");
    assert_eq!(LOGIN_PATH, "/auth/login");
}

// =============================================================
// URL assembly
// =============================================================

#[test]
fn client_strips_trailing_slash_from_the_base_url() {
    let client = ApiClient::new(&ApiConfig {
        base_url: "http://localhost:8000/".to_owned(),
    });
    assert_eq!(
        client.url("/content-packs"),
        "http://localhost:8000/content-packs"
    );
}

#[test]
fn client_keeps_a_clean_base_url_as_is() {
    let client = ApiClient::new(&ApiConfig {
        base_url: "https://api.getsendy.example".to_owned(),
    });
    assert_eq!(client.url(LOGIN_PATH), "https://api.getsendy.example/auth/login");
}

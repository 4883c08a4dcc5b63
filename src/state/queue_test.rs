use super::*;

// =============================================================
// Query construction
// =============================================================

#[test]
fn no_filters_yield_an_empty_query() {
    assert_eq!(QueueFilter::default().to_query(), "");
}

#[test]
fn status_filter_alone() {
    let filter = QueueFilter {
        status: Some(ContentPackStatus::DraftReady),
        breaking_only: false,
    };
    assert_eq!(filter.to_query(), "status=DRAFT_READY");
}

#[test]
fn breaking_filter_alone() {
    let filter = QueueFilter {
        status: None,
        breaking_only: true,
    };
    assert_eq!(filter.to_query(), "breaking=true");
}

#[test]
fn both_filters_combine_in_order() {
    let filter = QueueFilter {
        status: Some(ContentPackStatus::InReview),
        breaking_only: true,
    };
    assert_eq!(filter.to_query(), "status=IN_REVIEW&breaking=true");
}

#[test]
fn breaking_false_is_never_emitted() {
    for status in STATUS_FILTER_OPTIONS.into_iter().map(Some).chain([None]) {
        let filter = QueueFilter {
            status,
            breaking_only: false,
        };
        assert!(!filter.to_query().contains("breaking"));
    }
}

#[test]
fn every_dropdown_status_serializes_exactly() {
    for status in STATUS_FILTER_OPTIONS {
        let filter = QueueFilter {
            status: Some(status),
            breaking_only: false,
        };
        assert_eq!(filter.to_query(), format!("status={}", status.as_str()));
    }
}

// =============================================================
// Dropdown parsing
// =============================================================

#[test]
fn empty_selection_means_all_statuses() {
    assert_eq!(parse_status_filter(""), None);
}

#[test]
fn dropdown_values_parse_back_to_statuses() {
    assert_eq!(
        parse_status_filter("APPROVED"),
        Some(ContentPackStatus::Approved)
    );
    assert_eq!(parse_status_filter("nonsense"), None);
}

// =============================================================
// Queue state
// =============================================================

#[test]
fn queue_state_defaults() {
    let state = QueueState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

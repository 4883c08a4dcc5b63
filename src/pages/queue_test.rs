use super::*;
use crate::net::types::ContentPackStatus;

#[test]
fn empty_filter_selects_the_all_option() {
    assert_eq!(status_filter_value(&QueueFilter::default()), "");
}

#[test]
fn status_filter_selects_its_wire_spelling() {
    let filter = QueueFilter {
        status: Some(ContentPackStatus::InReview),
        breaking_only: false,
    };
    assert_eq!(status_filter_value(&filter), "IN_REVIEW");
}

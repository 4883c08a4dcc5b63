use super::*;

#[test]
fn detail_href_points_at_the_pack_route() {
    assert_eq!(detail_href(9), "/content-packs/9");
}

#[test]
fn only_breaking_packs_get_the_marker() {
    assert_eq!(breaking_marker(true), " 🔥");
    assert_eq!(breaking_marker(false), "");
}

use super::*;

#[test]
fn filename_embeds_the_pack_id() {
    assert_eq!(handoff_filename(7), "content-pack-7-handoff.json");
    assert_eq!(handoff_filename(1203), "content-pack-1203-handoff.json");
}

#[test]
fn body_is_two_space_pretty_printed_json() {
    let document = serde_json::json!({"handoff_package": {"id": 7}});
    assert_eq!(
        handoff_body(&document),
        "{\n  \"handoff_package\": {\n    \"id\": 7\n  }\n}"
    );
}

#[test]
fn body_mirrors_the_response_exactly() {
    let document = serde_json::json!({
        "handoff_package": {"id": 7, "title": "Local crag reopens"},
        "units": {"distance": "km", "ui_toggle_supported": "miles"}
    });
    assert_eq!(
        handoff_body(&document),
        serde_json::to_string_pretty(&document).expect("pretty print")
    );
}

#[test]
fn saving_outside_a_browser_is_a_no_op() {
    save_json_file("content-pack-7-handoff.json", "{}");
}

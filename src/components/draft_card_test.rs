use super::*;

#[test]
fn specs_render_pretty_printed() {
    let value = serde_json::json!({"layout": "hero"});
    assert_eq!(pretty_block(&value), "{\n  \"layout\": \"hero\"\n}");
}

#[test]
fn null_spec_renders_as_null_text() {
    assert_eq!(pretty_block(&serde_json::Value::Null), "null");
}

use serde_json::Number;
use wgsl_dump::fixture::merge_text;
use wgsl_dump::{BindingKey, CaptureError, Fixture};

#[test]
fn single_fragment_matches_textual_layout() {
    let fixture = Fixture::from_bytes(BindingKey::new(0, 0), &[1, 2]);
    assert_eq!(fixture.to_json().unwrap(), r#"{"0:0": [1, 2]}"#);
}

#[test]
fn merge_appends_in_call_order() {
    let merged = merge_text(r#"{"0:0": [1, 2]}"#, r#"{"0:1": [3, 4]}"#).unwrap();
    assert_eq!(merged, r#"{"0:0": [1, 2], "0:1": [3, 4]}"#);

    let merged = merge_text(&merged, r#"{"1:0": [5]}"#).unwrap();
    assert_eq!(merged, r#"{"0:0": [1, 2], "0:1": [3, 4], "1:0": [5]}"#);
}

#[test]
fn merge_keeps_order_for_many_keys() {
    let mut text = Fixture::from_bytes(BindingKey::new(0, 7), &[7]).to_json().unwrap();
    for binding in [3, 9, 1, 4] {
        let fragment = Fixture::from_bytes(BindingKey::new(0, binding), &[binding as u8])
            .to_json()
            .unwrap();
        text = merge_text(&text, &fragment).unwrap();
    }
    let fixture = Fixture::parse(&text).unwrap();
    let keys: Vec<u32> = fixture.keys().map(|k| k.binding).collect();
    assert_eq!(keys, [7, 3, 9, 1, 4]);
}

#[test]
fn duplicate_key_replaces_in_place() {
    let merged = merge_text(r#"{"0:0": [1], "0:1": [2]}"#, r#"{"0:0": [9, 9]}"#).unwrap();
    assert_eq!(merged, r#"{"0:0": [9, 9], "0:1": [2]}"#);
}

#[test]
fn parse_reads_compact_and_spaced_json() {
    let fixture = Fixture::parse("{\"2:3\":[1,2.5,-4]}").unwrap();
    assert_eq!(fixture.len(), 1);
    let values = fixture.get(BindingKey::new(2, 3)).unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], Number::from(1u8));
    assert_eq!(fixture.to_json().unwrap(), r#"{"2:3": [1, 2.5, -4]}"#);
}

#[test]
fn empty_object_parses() {
    let fixture = Fixture::parse("{}").unwrap();
    assert!(fixture.is_empty());
    assert_eq!(merge_text("{}", r#"{"0:0": [1]}"#).unwrap(), r#"{"0:0": [1]}"#);
}

#[test]
fn malformed_existing_content_is_an_error() {
    for bad in [
        "",
        "[1, 2]",
        r#"{"0:0": [1, 2]"#,
        r#"{"abc": [1]}"#,
        r#"{"0:0": {"nested": [1]}}"#,
        r#"{"0:0": ["one"]}"#,
    ] {
        assert!(
            matches!(
                merge_text(bad, r#"{"0:1": [3]}"#),
                Err(CaptureError::MalformedFixture { .. })
            ),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn binding_key_text_form() {
    let key = BindingKey::new(1, 12);
    assert_eq!(key.to_string(), "1:12");
    assert_eq!(BindingKey::parse("1:12"), Some(key));
    assert_eq!(BindingKey::parse("1"), None);
    assert_eq!(BindingKey::parse("x:1"), None);
}

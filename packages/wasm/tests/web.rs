#![cfg(target_arch = "wasm32")]

use sigforge_wasm::{
    generate_signature_html_js, list_templates_js, strip_html_tags_js, validate_signature_js,
};
use wasm_bindgen_test::*;

const SIGNATURE: &str = r#"{
    "id": "6f1c2a52-3f7e-4d8e-9a35-2b1f1d1f0a11",
    "name": "Work",
    "fullName": "Jane Artist",
    "branding": { "colorPresetId": "navy", "layoutPresetId": "compact" },
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z"
}"#;

#[wasm_bindgen_test]
fn generates_html() {
    let html = generate_signature_html_js(SIGNATURE).unwrap();
    assert!(html.contains("color: #1a365d;"));
    assert!(!html.contains("<img"));
}

#[wasm_bindgen_test]
fn bad_json_is_an_error() {
    assert!(generate_signature_html_js("nope").is_err());
    assert!(validate_signature_js("nope").is_err());
}

#[wasm_bindgen_test]
fn validates() {
    assert_eq!(
        validate_signature_js(SIGNATURE).unwrap(),
        r#"{"valid":true,"errors":[]}"#
    );
}

#[wasm_bindgen_test]
fn lists_templates_and_strips_tags() {
    assert!(list_templates_js().unwrap().contains("freelancer"));
    assert_eq!(strip_html_tags_js("<td>Jane</td>"), "Jane");
}

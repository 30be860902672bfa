use serde::Serialize;
use sigforge_schema::{validate_signature, FieldError, Signature, SIGNATURE_TEMPLATES};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Outcome of `validateSignature`, serialized for JS.
#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    errors: Vec<FieldError>,
}

fn parse_signature(json: &str) -> Result<Signature, String> {
    serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))
}

fn generate_html(json: &str) -> Result<String, String> {
    let signature = parse_signature(json)?;
    Ok(sigforge_compiler_html::generate_signature_html(&signature))
}

fn validation_report(json: &str) -> Result<String, String> {
    let signature = parse_signature(json)?;
    let report = match validate_signature(&signature) {
        Ok(()) => ValidationReport {
            valid: true,
            errors: Vec::new(),
        },
        Err(err) => ValidationReport {
            valid: false,
            errors: err.errors,
        },
    };
    serde_json::to_string(&report).map_err(|e| format!("Serialization error: {}", e))
}

fn templates_json() -> Result<String, String> {
    serde_json::to_string(&SIGNATURE_TEMPLATES)
        .map_err(|e| format!("Serialization error: {}", e))
}

/// Render a signature record (JSON) to its HTML fragment
#[wasm_bindgen(js_name = generateSignatureHtml)]
pub fn generate_signature_html_js(signature_json: &str) -> Result<String, JsValue> {
    generate_html(signature_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a signature record, returning `{"valid": bool, "errors": [{path, message}]}`
#[wasm_bindgen(js_name = validateSignature)]
pub fn validate_signature_js(signature_json: &str) -> Result<String, JsValue> {
    validation_report(signature_json).map_err(|e| JsValue::from_str(&e))
}

/// The built-in templates as JSON
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates_js() -> Result<String, JsValue> {
    templates_json().map_err(|e| JsValue::from_str(&e))
}

/// Plain-text version of generated HTML, for the `text/plain` clipboard entry
#[wasm_bindgen(js_name = stripHtmlTags)]
pub fn strip_html_tags_js(html: &str) -> String {
    sigforge_clipboard::strip_html_tags(html)
}

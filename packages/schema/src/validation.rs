//! Field-level validation for signature records.
//!
//! Every violated rule yields one [`FieldError`]; validation never stops at
//! the first problem. Paths use the stored (camelCase) field names, with list
//! indices as segments: `socialLinks.2.url`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use crate::preset::{ColorPreset, LayoutPreset, CUSTOM_COLOR_PRESET_ID};
use crate::signature::{
    Branding, CreateSignatureInput, CustomLink, Signature, SocialLink, MAX_CUSTOM_LINKS,
    MAX_SOCIAL_LINKS,
};

const MAX_NAME_LEN: usize = 100;
const MAX_TEXT_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 30;
const MAX_LABEL_LEN: usize = 50;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").expect("url pattern")
});

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern")
});

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path to the offending field
    pub path: String,

    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// A record failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// One `path: message` line per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether any violation concerns `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ValidationResult = Result<(), ValidationError>;

/// Validates a stored signature.
pub fn validate_signature(signature: &Signature) -> ValidationResult {
    let mut validator = Validator::default();
    validator.check(&Fields {
        name: &signature.name,
        full_name: &signature.full_name,
        job_title: signature.job_title.as_deref(),
        company: signature.company.as_deref(),
        email: signature.email.as_deref(),
        phone: signature.phone.as_deref(),
        website: signature.website.as_deref(),
        social_links: &signature.social_links,
        custom_links: &signature.custom_links,
        branding: &signature.branding,
    });
    validator.finish()
}

/// Validates input for a signature that has not been created yet.
pub fn validate_create_input(input: &CreateSignatureInput) -> ValidationResult {
    let mut validator = Validator::default();
    validator.check(&Fields {
        name: &input.name,
        full_name: &input.full_name,
        job_title: input.job_title.as_deref(),
        company: input.company.as_deref(),
        email: input.email.as_deref(),
        phone: input.phone.as_deref(),
        website: input.website.as_deref(),
        social_links: &input.social_links,
        custom_links: &input.custom_links,
        branding: &input.branding,
    });
    validator.finish()
}

/// The validated subset shared by [`Signature`] and [`CreateSignatureInput`].
struct Fields<'a> {
    name: &'a str,
    full_name: &'a str,
    job_title: Option<&'a str>,
    company: Option<&'a str>,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    website: Option<&'a str>,
    social_links: &'a [SocialLink],
    custom_links: &'a [CustomLink],
    branding: &'a Branding,
}

#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn check(&mut self, fields: &Fields<'_>) {
        self.required("name", fields.name, MAX_NAME_LEN, "Name is required");
        self.required(
            "fullName",
            fields.full_name,
            MAX_NAME_LEN,
            "Full name is required",
        );
        self.optional("jobTitle", fields.job_title, MAX_TEXT_LEN);
        self.optional("company", fields.company, MAX_TEXT_LEN);
        self.optional("phone", fields.phone, MAX_PHONE_LEN);

        if let Some(email) = non_empty(fields.email) {
            if !EMAIL_RE.is_match(email) {
                self.push("email", "Invalid email address");
            }
        }

        if let Some(website) = non_empty(fields.website) {
            self.url("website", website);
        }

        if fields.social_links.len() > MAX_SOCIAL_LINKS {
            self.push(
                "socialLinks",
                format!("Too many social links (max {MAX_SOCIAL_LINKS})"),
            );
        }
        for (index, link) in fields.social_links.iter().enumerate() {
            self.url(&format!("socialLinks.{index}.url"), &link.url);
        }

        if fields.custom_links.len() > MAX_CUSTOM_LINKS {
            self.push(
                "customLinks",
                format!("Too many custom links (max {MAX_CUSTOM_LINKS})"),
            );
        }
        for (index, link) in fields.custom_links.iter().enumerate() {
            self.required(
                &format!("customLinks.{index}.label"),
                &link.label,
                MAX_LABEL_LEN,
                "Label is required",
            );
            self.url(&format!("customLinks.{index}.url"), &link.url);
        }

        self.branding(fields.branding);
    }

    fn branding(&mut self, branding: &Branding) {
        let preset_id = branding.color_preset_id.as_str();
        if preset_id != CUSTOM_COLOR_PRESET_ID && ColorPreset::find(preset_id).is_none() {
            self.push("branding.colorPresetId", "Unknown color preset");
        }

        if LayoutPreset::from_id(&branding.layout_preset_id).is_none() {
            self.push("branding.layoutPresetId", "Unknown layout");
        }

        for (path, color) in [
            ("branding.customPrimary", &branding.custom_primary),
            ("branding.customAccent", &branding.custom_accent),
        ] {
            if let Some(color) = color {
                if !HEX_COLOR_RE.is_match(color) {
                    self.push(path, "Invalid color");
                }
            }
        }
    }

    fn required(&mut self, path: &str, value: &str, max: usize, missing: &str) {
        if value.is_empty() {
            self.push(path, missing);
        } else {
            self.max_len(path, value, max);
        }
    }

    fn optional(&mut self, path: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.max_len(path, value, max);
        }
    }

    fn max_len(&mut self, path: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(path, format!("Must be at most {max} characters"));
        }
    }

    fn url(&mut self, path: &str, value: &str) {
        if !URL_RE.is_match(value) {
            self.push(path, "Invalid URL");
        }
    }

    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    fn finish(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

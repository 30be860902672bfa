//! # Sigforge Schema
//!
//! The signature record and everything needed to check one before it is
//! handed to the HTML compiler.
//!
//! - [`Signature`] and its parts ([`SocialLink`], [`CustomLink`], [`Branding`])
//! - Static tables: [`COLOR_PRESETS`], [`LayoutPreset`], [`SocialPlatform`]
//! - [`validate_signature`] producing one [`FieldError`] per violated rule
//! - Curated [`SIGNATURE_TEMPLATES`]
//!
//! Records read from disk tolerate missing `branding`, `socialLinks` and
//! `customLinks`; they are filled in with defaults.

mod platform;
mod preset;
mod signature;
mod templates;
mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use platform::SocialPlatform;
pub use preset::{ColorPreset, LayoutPreset, COLOR_PRESETS, CUSTOM_COLOR_PRESET_ID};
pub use signature::{
    Branding, CreateSignatureInput, CustomLink, Signature, SocialLink, MAX_CUSTOM_LINKS,
    MAX_SOCIAL_LINKS,
};
pub use templates::{find_template, SignatureTemplate, TemplateData, SIGNATURE_TEMPLATES};
pub use validation::{
    validate_create_input, validate_signature, FieldError, ValidationError, ValidationResult,
};

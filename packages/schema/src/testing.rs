//! Factories for tests in this and downstream crates.
//!
//! Enabled with the `testing` feature.

use crate::signature::{CreateSignatureInput, Signature};

/// A fully populated signature for "Jane Artist": charcoal/horizontal
/// branding, no photo and no links.
pub fn mock_signature() -> Signature {
    CreateSignatureInput {
        job_title: Some("Illustrator".to_string()),
        company: Some("Creative Studio".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some("555-0100".to_string()),
        website: Some("https://janeartist.com".to_string()),
        ..CreateSignatureInput::new("My Signature", "Jane Artist")
    }
    .into_signature()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_signature_defaults() {
        let signature = mock_signature();
        assert_eq!(signature.full_name, "Jane Artist");
        assert_eq!(signature.branding.color_preset_id, "charcoal");
        assert!(signature.image_url.is_none());
        assert!(signature.social_links.is_empty());
    }

    #[test]
    fn mock_signatures_get_distinct_ids() {
        assert_ne!(mock_signature().id, mock_signature().id);
    }
}

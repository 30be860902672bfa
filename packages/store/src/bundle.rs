use serde::{Deserialize, Serialize};
use serde_json::Value;
use sigforge_schema::Signature;

use crate::StoreError;

/// File name offered for exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "email-signatures.json";

/// The `{"signatures": [...]}` document used both for exports and for the
/// store file on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub signatures: Vec<Signature>,
}

impl ExportBundle {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an exported document.
    ///
    /// Text that is not JSON fails with [`StoreError::Parse`]. JSON without a
    /// `signatures` array, or whose entries are not signature records, fails
    /// with [`StoreError::InvalidFormat`]. Records missing `branding` or link
    /// arrays load with defaults.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let value: Value = serde_json::from_str(text).map_err(StoreError::Parse)?;

        let Some(entries) = value.get("signatures").filter(|v| v.is_array()) else {
            return Err(StoreError::InvalidFormat);
        };

        let signatures = Vec::<Signature>::deserialize(entries).map_err(|err| {
            tracing::warn!(error = %err, "rejecting import with malformed signature");
            StoreError::InvalidFormat
        })?;

        Ok(Self { signatures })
    }
}

//! Storage for signatures.
//!
//! [`SignatureRepository`] is the CRUD surface callers program against.
//! [`InMemoryRepository`] keeps everything in a `Vec`; [`JsonFileRepository`]
//! wraps one and writes the whole collection to disk after each mutation.

mod bundle;
mod error;
mod file;
mod memory;
mod patch;

pub use bundle::{ExportBundle, DEFAULT_EXPORT_FILE_NAME};
pub use error::StoreError;
pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use patch::SignaturePatch;

use sigforge_schema::Signature;
use uuid::Uuid;

/// CRUD operations over a collection of signatures.
///
/// Signatures are validated on the way in; `list` preserves insertion order.
pub trait SignatureRepository {
    fn list(&self) -> &[Signature];

    fn get(&self, id: Uuid) -> Option<&Signature>;

    /// Fails with [`StoreError::DuplicateId`] if the id is already stored.
    fn add(&mut self, signature: Signature) -> Result<(), StoreError>;

    /// Merge `patch` into the stored signature and refresh `updatedAt`.
    /// Returns the updated signature.
    fn update(&mut self, id: Uuid, patch: SignaturePatch) -> Result<Signature, StoreError>;

    /// Remove and return the signature.
    fn remove(&mut self, id: Uuid) -> Result<Signature, StoreError>;

    /// Replace the whole collection, as an import does.
    fn replace_all(&mut self, signatures: Vec<Signature>) -> Result<(), StoreError>;
}

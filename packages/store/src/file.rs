use std::fs;
use std::path::{Path, PathBuf};

use sigforge_schema::Signature;
use uuid::Uuid;

use crate::{ExportBundle, InMemoryRepository, SignaturePatch, SignatureRepository, StoreError};

/// Repository persisted as a single JSON document.
///
/// The file holds an [`ExportBundle`] and is rewritten after every
/// successful mutation. A missing file is an empty collection. A mutation
/// whose write fails leaves the in-memory collection unchanged.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    inner: InMemoryRepository,
}

impl JsonFileRepository {
    /// Load the collection at `path`, or start empty if the file does not
    /// exist yet. Nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let inner = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let bundle: ExportBundle = serde_json::from_str(&text)?;
            tracing::debug!(path = %path.display(), count = bundle.signatures.len(), "loaded store");
            InMemoryRepository::from_signatures(bundle.signatures)
        } else {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            InMemoryRepository::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, signatures: &[Signature]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = ExportBundle::new(signatures.to_vec()).to_json_pretty()?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = signatures.len(), "saved store");
        Ok(())
    }

    /// Run `change` against a copy of the collection and keep the copy only
    /// once it is on disk.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut InMemoryRepository) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut staged = self.inner.clone();
        let value = change(&mut staged)?;
        self.persist(staged.list())?;
        self.inner = staged;
        Ok(value)
    }
}

impl SignatureRepository for JsonFileRepository {
    fn list(&self) -> &[Signature] {
        self.inner.list()
    }

    fn get(&self, id: Uuid) -> Option<&Signature> {
        self.inner.get(id)
    }

    fn add(&mut self, signature: Signature) -> Result<(), StoreError> {
        self.commit(|repo| repo.add(signature))
    }

    fn update(&mut self, id: Uuid, patch: SignaturePatch) -> Result<Signature, StoreError> {
        self.commit(|repo| repo.update(id, patch))
    }

    fn remove(&mut self, id: Uuid) -> Result<Signature, StoreError> {
        self.commit(|repo| repo.remove(id))
    }

    fn replace_all(&mut self, signatures: Vec<Signature>) -> Result<(), StoreError> {
        self.commit(|repo| repo.replace_all(signatures))
    }
}

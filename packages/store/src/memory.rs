use sigforge_schema::{validate_signature, Signature};
use uuid::Uuid;

use crate::{SignaturePatch, SignatureRepository, StoreError};

/// Repository backed by a `Vec`, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    signatures: Vec<Signature>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding `signatures` as-is, without validation.
    pub fn from_signatures(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn into_signatures(self) -> Vec<Signature> {
        self.signatures
    }

    fn position(&self, id: Uuid) -> Result<usize, StoreError> {
        self.signatures
            .iter()
            .position(|signature| signature.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl SignatureRepository for InMemoryRepository {
    fn list(&self) -> &[Signature] {
        &self.signatures
    }

    fn get(&self, id: Uuid) -> Option<&Signature> {
        self.signatures.iter().find(|signature| signature.id == id)
    }

    fn add(&mut self, signature: Signature) -> Result<(), StoreError> {
        if self.get(signature.id).is_some() {
            return Err(StoreError::DuplicateId(signature.id));
        }
        validate_signature(&signature)?;

        tracing::debug!(id = %signature.id, name = %signature.name, "adding signature");
        self.signatures.push(signature);
        Ok(())
    }

    fn update(&mut self, id: Uuid, patch: SignaturePatch) -> Result<Signature, StoreError> {
        let index = self.position(id)?;

        let mut updated = self.signatures[index].clone();
        patch.apply_to(&mut updated);
        validate_signature(&updated)?;
        updated.touch();

        tracing::debug!(%id, "updated signature");
        self.signatures[index] = updated.clone();
        Ok(updated)
    }

    fn remove(&mut self, id: Uuid) -> Result<Signature, StoreError> {
        let index = self.position(id)?;
        tracing::debug!(%id, "removing signature");
        Ok(self.signatures.remove(index))
    }

    fn replace_all(&mut self, signatures: Vec<Signature>) -> Result<(), StoreError> {
        for (index, signature) in signatures.iter().enumerate() {
            validate_signature(signature)?;
            if signatures[..index].iter().any(|other| other.id == signature.id) {
                return Err(StoreError::DuplicateId(signature.id));
            }
        }

        tracing::info!(count = signatures.len(), "replacing signature collection");
        self.signatures = signatures;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigforge_schema::testing::mock_signature;

    #[test]
    fn add_then_list_preserves_order() {
        let mut repo = InMemoryRepository::new();
        let first = mock_signature();
        let second = Signature::new("Personal", "Jane");

        repo.add(first.clone()).unwrap();
        repo.add(second.clone()).unwrap();

        let ids: Vec<Uuid> = repo.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(repo.get(second.id), Some(&second));
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut repo = InMemoryRepository::new();
        let signature = mock_signature();
        repo.add(signature.clone()).unwrap();

        let err = repo.add(signature).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_signatures() {
        let mut repo = InMemoryRepository::new();
        let mut signature = mock_signature();
        signature.email = Some("not-an-email".into());

        let err = repo.add(signature).unwrap_err();
        match err {
            StoreError::Validation(validation) => assert!(validation.has_path("email")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(repo.is_empty());
    }

    #[test]
    fn update_merges_and_touches() {
        let mut repo = InMemoryRepository::new();
        let signature = mock_signature();
        let id = signature.id;
        let created = signature.created_at;
        repo.add(signature).unwrap();

        let updated = repo
            .update(
                id,
                SignaturePatch {
                    job_title: Some("Painter".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.job_title.as_deref(), Some("Painter"));
        assert_eq!(updated.created_at, created);
        assert!(updated.updated_at >= created);
        assert_eq!(repo.get(id), Some(&updated));
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let mut repo = InMemoryRepository::new();
        let signature = mock_signature();
        let id = signature.id;
        repo.add(signature.clone()).unwrap();

        let result = repo.update(
            id,
            SignaturePatch {
                full_name: Some(String::new()),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(repo.get(id), Some(&signature));
    }

    #[test]
    fn update_and_remove_unknown_id() {
        let mut repo = InMemoryRepository::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            repo.update(id, SignaturePatch::default()),
            Err(StoreError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(repo.remove(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn remove_returns_the_signature() {
        let mut repo = InMemoryRepository::new();
        let signature = mock_signature();
        repo.add(signature.clone()).unwrap();

        assert_eq!(repo.remove(signature.id).unwrap(), signature);
        assert!(repo.list().is_empty());
    }

    #[test]
    fn replace_all_swaps_the_collection() {
        let mut repo = InMemoryRepository::from_signatures(vec![mock_signature()]);
        let incoming = vec![Signature::new("A", "Ann"), Signature::new("B", "Bob")];

        repo.replace_all(incoming.clone()).unwrap();
        assert_eq!(repo.list(), incoming.as_slice());
    }

    #[test]
    fn replace_all_rejects_duplicates_and_keeps_old_data() {
        let original = mock_signature();
        let mut repo = InMemoryRepository::from_signatures(vec![original.clone()]);
        let dup = Signature::new("A", "Ann");

        let result = repo.replace_all(vec![dup.clone(), dup]);
        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
        assert_eq!(repo.list(), &[original]);
    }
}

use async_trait::async_trait;
use core_types::{PetRecord, PetUpdate};
use database::{DbError, PetRepository};

/// The session's seam to persistent storage.
///
/// The interactive loop only needs "fetch the pets" and "save these edits",
/// so it talks to this trait instead of the repository directly. Tests drive
/// the loop against an in-memory implementation.
#[async_trait]
pub trait PetStore {
    /// Returns every pet, in display order.
    async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DbError>;

    /// Persists the staged edits for the pet with the given id.
    async fn apply_update(&self, pet_id: i32, update: &PetUpdate) -> Result<(), DbError>;
}

#[async_trait]
impl PetStore for PetRepository {
    async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DbError> {
        PetRepository::fetch_pets(self).await
    }

    async fn apply_update(&self, pet_id: i32, update: &PetUpdate) -> Result<(), DbError> {
        PetRepository::apply_update(self, pet_id, update).await
    }
}

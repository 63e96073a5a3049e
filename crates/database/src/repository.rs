use crate::DbError;
use core_types::{PetRecord, PetUpdate};
use sqlx::MySqlPool;

/// The `PetRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct PetRepository {
    pool: MySqlPool,
}

impl PetRepository {
    /// Creates a new `PetRepository` with a shared database connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetches every pet, with its species and owner resolved by the join.
    pub async fn fetch_pets(&self) -> Result<Vec<PetRecord>, DbError> {
        let pets = sqlx::query_as::<_, PetRecord>(
            r#"
            SELECT
                pets.id,
                pets.name,
                pets.age,
                types.animal_type AS species,
                owners.name AS owner
            FROM
                pets
            JOIN
                types ON pets.animal_type_id = types.id
            JOIN
                owners ON pets.owner_id = owners.id
            ORDER BY
                pets.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pets)
    }

    /// Persists the staged edits for one pet: one UPDATE statement per
    /// changed field, all inside a single committed transaction.
    pub async fn apply_update(&self, pet_id: i32, update: &PetUpdate) -> Result<(), DbError> {
        if update.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        if let Some(name) = &update.name {
            sqlx::query("UPDATE pets SET name = ? WHERE id = ?")
                .bind(name)
                .bind(pet_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(age) = update.age {
            sqlx::query("UPDATE pets SET age = ? WHERE id = ?")
                .bind(age)
                .bind(pet_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

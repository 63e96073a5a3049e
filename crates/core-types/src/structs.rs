use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One pet as returned by the joined fetch query. `species` and `owner` are
/// display strings resolved by the join; only `name` and `age` are editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PetRecord {
    /// Database-assigned primary key.
    pub id: i32,
    pub name: String,
    pub species: String,
    pub age: i32,
    pub owner: String,
}

impl PetRecord {
    /// Applies the staged edits to the in-memory record.
    pub fn apply(&mut self, update: &PetUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
    }
}

impl fmt::Display for PetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, the {}. {} is {} years old. {}'s owner is {}.",
            self.name, self.species, self.name, self.age, self.name, self.owner
        )
    }
}

/// The editor's pending field changes for one pet. A `None` field means
/// "leave it alone", so an edit session that only touches the name produces
/// exactly one UPDATE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl PetUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

/// Parses user input into a valid pet age. Ages are non-negative integers;
/// anything else is rejected so the caller can warn and keep the old value.
pub fn parse_age(input: &str) -> Result<i32, CoreError> {
    let age: i32 = input.trim().parse().map_err(|_| {
        CoreError::InvalidInput("age".to_string(), format!("'{}' is not a number", input))
    })?;
    if age < 0 {
        return Err(CoreError::InvalidInput(
            "age".to_string(),
            "age must be non-negative".to_string(),
        ));
    }
    Ok(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reads_like_a_sentence() {
        let pet = PetRecord {
            id: 1,
            name: "Rex".to_string(),
            species: "dog".to_string(),
            age: 3,
            owner: "Sam".to_string(),
        };
        assert_eq!(
            pet.to_string(),
            "Rex, the dog. Rex is 3 years old. Rex's owner is Sam."
        );
    }

    #[test]
    fn apply_only_touches_staged_fields() {
        let mut pet = PetRecord {
            id: 7,
            name: "Milo".to_string(),
            species: "cat".to_string(),
            age: 2,
            owner: "Ana".to_string(),
        };
        pet.apply(&PetUpdate {
            name: Some("Rex".to_string()),
            age: None,
        });
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.age, 2);
        assert_eq!(pet.species, "cat");
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(PetUpdate::default().is_empty());
        assert!(
            !PetUpdate {
                name: None,
                age: Some(4)
            }
            .is_empty()
        );
    }

    #[test]
    fn parse_age_accepts_non_negative_integers() {
        assert_eq!(parse_age("12").unwrap(), 12);
        assert_eq!(parse_age(" 0 ").unwrap(), 0);
        assert!(parse_age("twelve").is_err());
        assert!(parse_age("-3").is_err());
        assert!(parse_age("").is_err());
    }
}

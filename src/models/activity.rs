use super::require_non_empty;
use crate::error::ValidationError;
use serde::Serialize;

/// A camp-offered event. Serializes as `{id, name, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

/// Activity not yet persisted. Only the seeder creates these.
#[derive(Debug, Clone)]
pub struct NewActivity {
    name: String,
    difficulty: i64,
}

impl NewActivity {
    pub fn new(name: impl Into<String>, difficulty: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("name", &name)?;
        Ok(Self { name, difficulty })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }
}

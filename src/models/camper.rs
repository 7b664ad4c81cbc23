use super::{require_non_empty, require_range, SignupView};
use crate::error::ValidationError;
use serde::Serialize;
use serde_json::{Map, Value};

pub const CAMPER_MIN_AGE: i64 = 8;
pub const CAMPER_MAX_AGE: i64 = 18;

/// A stored camper. Serializes as `{id, name, age}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Camper {
    /// Apply a patch. Every present field is checked first; on error the camper is untouched.
    pub fn apply(&mut self, patch: CamperPatch) -> Result<(), ValidationError> {
        if let Some(name) = &patch.name {
            require_non_empty("name", name)?;
        }
        if let Some(age) = patch.age {
            require_range("age", age, CAMPER_MIN_AGE, CAMPER_MAX_AGE)?;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        Ok(())
    }
}

/// Camper with its signups. Each signup omits the embedded camper.
#[derive(Debug, Serialize)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: Camper,
    pub signups: Vec<SignupView>,
}

/// Camper not yet persisted; holding one means name and age passed validation.
#[derive(Debug, Clone)]
pub struct NewCamper {
    name: String,
    age: i64,
}

impl NewCamper {
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("name", &name)?;
        require_range("age", age, CAMPER_MIN_AGE, CAMPER_MAX_AGE)?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

/// Partial update restricted to `name` and `age`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CamperPatch {
    /// Read a patch from a JSON object.
    /// Unknown keys (including `id`) and mistyped values are rejected.
    pub fn from_json(body: Map<String, Value>) -> Result<Self, ValidationError> {
        let mut patch = CamperPatch::default();
        for (key, value) in body {
            match key.as_str() {
                "name" => {
                    let name = value
                        .as_str()
                        .ok_or(ValidationError::InvalidType { field: "name" })?;
                    patch.name = Some(name.to_string());
                }
                "age" => {
                    let age = value
                        .as_i64()
                        .ok_or(ValidationError::InvalidType { field: "age" })?;
                    patch.age = Some(age);
                }
                _ => return Err(ValidationError::UnknownField(key)),
            }
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

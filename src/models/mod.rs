//! Camp entities: stored rows, validated constructors, and JSON views.

mod activity;
mod camper;
mod signup;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, CamperDetail, CamperPatch, NewCamper, CAMPER_MAX_AGE, CAMPER_MIN_AGE};
pub use signup::{NewSignup, Signup, SignupView, SIGNUP_MAX_TIME, SIGNUP_MIN_TIME};

use crate::error::ValidationError;

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub(crate) fn require_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange { field, min, max, value });
    }
    Ok(())
}

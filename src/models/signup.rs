use super::{require_range, Activity, Camper};
use crate::error::ValidationError;
use serde::Serialize;

pub const SIGNUP_MIN_TIME: i64 = 0;
pub const SIGNUP_MAX_TIME: i64 = 23;

/// Join row linking one camper to one activity at an hour slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

/// Signup not yet persisted. Foreign keys are checked by the repository, the slot here.
#[derive(Debug, Clone)]
pub struct NewSignup {
    camper_id: i64,
    activity_id: i64,
    time: i64,
}

impl NewSignup {
    pub fn new(camper_id: i64, activity_id: i64, time: i64) -> Result<Self, ValidationError> {
        require_range("time", time, SIGNUP_MIN_TIME, SIGNUP_MAX_TIME)?;
        Ok(Self {
            camper_id,
            activity_id,
            time,
        })
    }

    pub fn camper_id(&self) -> i64 {
        self.camper_id
    }

    pub fn activity_id(&self) -> i64 {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }
}

/// `{id, camper_id, activity_id, time, camper, activity}`; `camper` is left out when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupView {
    #[serde(flatten)]
    pub signup: Signup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camper: Option<Camper>,
    pub activity: Activity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_signup_checks_slot_range() {
        assert!(NewSignup::new(1, 1, 0).is_ok());
        assert!(NewSignup::new(1, 1, 23).is_ok());
        assert!(NewSignup::new(1, 1, -1).is_err());
        assert_eq!(
            NewSignup::new(1, 1, 24).unwrap_err(),
            ValidationError::OutOfRange {
                field: "time",
                min: 0,
                max: 23,
                value: 24
            }
        );
    }

    #[test]
    fn view_nests_relations_and_drops_missing_camper() {
        let signup = Signup {
            id: 3,
            camper_id: 1,
            activity_id: 2,
            time: 9,
        };
        let activity = Activity {
            id: 2,
            name: "Archery".into(),
            difficulty: 2,
        };
        let camper = Camper {
            id: 1,
            name: "Alex".into(),
            age: 10,
        };

        let full = SignupView {
            signup: signup.clone(),
            camper: Some(camper),
            activity: activity.clone(),
        };
        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            json!({
                "id": 3, "camper_id": 1, "activity_id": 2, "time": 9,
                "camper": {"id": 1, "name": "Alex", "age": 10},
                "activity": {"id": 2, "name": "Archery", "difficulty": 2}
            })
        );

        let bare = SignupView {
            signup,
            camper: None,
            activity,
        };
        let value = serde_json::to_value(&bare).unwrap();
        assert!(value.get("camper").is_none());
        assert_eq!(value["activity"]["name"], "Archery");
    }
}

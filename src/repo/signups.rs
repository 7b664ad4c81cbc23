use crate::models::{Activity, NewSignup, Signup, SignupView};
use sqlx::SqliteConnection;

#[derive(sqlx::FromRow)]
struct SignupActivityRow {
    id: i64,
    camper_id: i64,
    activity_id: i64,
    time: i64,
    activity_name: String,
    activity_difficulty: i64,
}

impl From<SignupActivityRow> for SignupView {
    fn from(row: SignupActivityRow) -> Self {
        SignupView {
            signup: Signup {
                id: row.id,
                camper_id: row.camper_id,
                activity_id: row.activity_id,
                time: row.time,
            },
            camper: None,
            activity: Activity {
                id: row.activity_id,
                name: row.activity_name,
                difficulty: row.activity_difficulty,
            },
        }
    }
}

pub struct SignupRepo;

impl SignupRepo {
    pub async fn insert(conn: &mut SqliteConnection, new: &NewSignup) -> sqlx::Result<Signup> {
        sqlx::query_as(
            "INSERT INTO signups (camper_id, activity_id, time) VALUES (?, ?, ?) \
             RETURNING id, camper_id, activity_id, time",
        )
        .bind(new.camper_id())
        .bind(new.activity_id())
        .bind(new.time())
        .fetch_one(conn)
        .await
    }

    /// Signups of one camper with their activities, `camper` left unset.
    pub async fn for_camper(
        conn: &mut SqliteConnection,
        camper_id: i64,
    ) -> sqlx::Result<Vec<SignupView>> {
        let rows: Vec<SignupActivityRow> = sqlx::query_as(
            "SELECT s.id, s.camper_id, s.activity_id, s.time, \
                    a.name AS activity_name, a.difficulty AS activity_difficulty \
             FROM signups s JOIN activities a ON a.id = s.activity_id \
             WHERE s.camper_id = ? ORDER BY s.id",
        )
        .bind(camper_id)
        .fetch_all(conn)
        .await?;
        Ok(rows.into_iter().map(SignupView::from).collect())
    }
}

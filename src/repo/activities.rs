use crate::models::{Activity, NewActivity};
use sqlx::SqliteConnection;

pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Activity>> {
        sqlx::query_as("SELECT id, name, difficulty FROM activities ORDER BY id")
            .fetch_all(conn)
            .await
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Activity>> {
        sqlx::query_as("SELECT id, name, difficulty FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn insert(conn: &mut SqliteConnection, new: &NewActivity) -> sqlx::Result<Activity> {
        sqlx::query_as(
            "INSERT INTO activities (name, difficulty) VALUES (?, ?) \
             RETURNING id, name, difficulty",
        )
        .bind(new.name())
        .bind(new.difficulty())
        .fetch_one(conn)
        .await
    }

    /// Delete an activity and its signups. Returns false when no activity had that id.
    pub async fn delete_cascade(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
        let signups = sqlx::query("DELETE FROM signups WHERE activity_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        if deleted > 0 {
            tracing::debug!(activity_id = id, signups, "activity removed with signups");
        }
        Ok(deleted > 0)
    }
}

use crate::models::{Camper, NewCamper};
use sqlx::SqliteConnection;

pub struct CamperRepo;

impl CamperRepo {
    pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Camper>> {
        sqlx::query_as("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(conn)
            .await
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Camper>> {
        sqlx::query_as("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn insert(conn: &mut SqliteConnection, new: &NewCamper) -> sqlx::Result<Camper> {
        sqlx::query_as("INSERT INTO campers (name, age) VALUES (?, ?) RETURNING id, name, age")
            .bind(new.name())
            .bind(new.age())
            .fetch_one(conn)
            .await
    }

    /// Write name and age back; the id is the match key and is never changed.
    pub async fn update(conn: &mut SqliteConnection, camper: &Camper) -> sqlx::Result<Camper> {
        sqlx::query_as("UPDATE campers SET name = ?, age = ? WHERE id = ? RETURNING id, name, age")
            .bind(&camper.name)
            .bind(camper.age)
            .bind(camper.id)
            .fetch_one(conn)
            .await
    }
}

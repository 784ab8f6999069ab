use crate::{Info, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{query_as, types::Json, Executor, FromRow};
use tracing::instrument;
use uuid::Uuid;

/// An event that is put on
#[derive(Clone, Debug, FromRow, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// A unique ID
    pub id: Uuid,
    /// The unique slug
    pub slug: String,
    /// Everything else describing the event
    pub info: Json<Info>,
    /// When the event was first created
    pub created_at: DateTime<Utc>,
    /// When the event was last updated
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Get all the registered events
    #[instrument(name = "Event::all", skip_all)]
    pub async fn all<'c, 'e, E>(db: E) -> Result<Vec<Event>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let events = query_as::<_, Event>("SELECT * FROM events ORDER BY created_at")
            .fetch_all(db)
            .await?;

        Ok(events)
    }

    /// Get an event by it's ID
    #[instrument(name = "Event::find", skip(db))]
    pub async fn find<'c, 'e, E>(id: Uuid, db: E) -> Result<Option<Event>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let event = query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(event)
    }

    /// Get an event by it's slug
    #[instrument(name = "Event::find_by_slug", skip(db))]
    pub async fn find_by_slug<'c, 'e, E>(slug: &str, db: E) -> Result<Option<Event>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let event = query_as::<_, Event>("SELECT * FROM events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(db)
            .await?;

        Ok(event)
    }

    /// Create a new event
    #[instrument(name = "Event::create", skip_all, fields(%info.slug))]
    pub async fn create<'c, 'e, E>(info: &Info, db: E) -> Result<Event>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let event = query_as::<_, Event>(
            "INSERT INTO events (slug, info) VALUES ($1, $2) RETURNING *",
        )
        .bind(&info.slug)
        .bind(Json(info))
        .fetch_one(db)
        .await?;

        Ok(event)
    }

    /// Overwrite the details of an event, returning the new version if it exists
    #[instrument(name = "Event::replace", skip(info, db), fields(%info.slug))]
    pub async fn replace<'c, 'e, E>(id: Uuid, info: &Info, db: E) -> Result<Option<Event>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let event = query_as::<_, Event>(
            "UPDATE events SET slug = $1, info = $2, updated_at = now() WHERE id = $3 RETURNING *",
        )
        .bind(&info.slug)
        .bind(Json(info))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(event)
    }

    /// Delete an event, returning it if it existed
    #[instrument(name = "Event::delete", skip(db))]
    pub async fn delete<'c, 'e, E>(id: Uuid, db: E) -> Result<Option<Event>>
    where
        'c: 'e,
        E: 'e + Executor<'c, Database = sqlx::Postgres>,
    {
        let event = query_as::<_, Event>("DELETE FROM events WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(event)
    }
}

use crate::{Info, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{query_as, types::Json, FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

/// A non-governmental organization that is listed
#[derive(Clone, Debug, FromRow, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    /// A unique ID
    pub id: Uuid,
    /// The unique slug
    pub slug: String,
    /// Everything else describing the organization
    pub info: Json<Info>,
    /// When the organization was first listed
    pub created_at: DateTime<Utc>,
    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,
}

impl Ngo {
    /// Get all the listed organizations
    #[instrument(name = "Ngo::all", skip_all)]
    pub async fn all(db: &PgPool) -> Result<Vec<Ngo>> {
        let ngos = query_as::<_, Ngo>("SELECT * FROM ngos ORDER BY created_at")
            .fetch_all(db)
            .await?;

        Ok(ngos)
    }

    /// Get an organization by it's ID
    #[instrument(name = "Ngo::find", skip(db))]
    pub async fn find(id: Uuid, db: &PgPool) -> Result<Option<Ngo>> {
        let ngo = query_as::<_, Ngo>("SELECT * FROM ngos WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(ngo)
    }

    /// Get an organization by it's slug
    #[instrument(name = "Ngo::find_by_slug", skip(db))]
    pub async fn find_by_slug(slug: &str, db: &PgPool) -> Result<Option<Ngo>> {
        let ngo = query_as::<_, Ngo>("SELECT * FROM ngos WHERE slug = $1")
            .bind(slug)
            .fetch_optional(db)
            .await?;

        Ok(ngo)
    }

    /// List a new organization
    #[instrument(name = "Ngo::create", skip_all, fields(%info.slug))]
    pub async fn create(info: &Info, db: &PgPool) -> Result<Ngo> {
        let ngo = query_as::<_, Ngo>("INSERT INTO ngos (slug, info) VALUES ($1, $2) RETURNING *")
            .bind(&info.slug)
            .bind(Json(info))
            .fetch_one(db)
            .await?;

        Ok(ngo)
    }

    /// Overwrite the details of an organization
    #[instrument(name = "Ngo::replace", skip(info, db), fields(%info.slug))]
    pub async fn replace(id: Uuid, info: &Info, db: &PgPool) -> Result<Option<Ngo>> {
        let ngo = query_as::<_, Ngo>(
            "UPDATE ngos SET slug = $1, info = $2, updated_at = now() WHERE id = $3 RETURNING *",
        )
        .bind(&info.slug)
        .bind(Json(info))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(ngo)
    }

    /// Remove an organization from the listing
    #[instrument(name = "Ngo::delete", skip(db))]
    pub async fn delete(id: Uuid, db: &PgPool) -> Result<Option<Ngo>> {
        let ngo = query_as::<_, Ngo>("DELETE FROM ngos WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(ngo)
    }
}

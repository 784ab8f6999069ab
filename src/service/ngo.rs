use super::{parse_id, Error, Result, Service};
use async_trait::async_trait;
use database::{Info, Ngo, PgPool};
use serde::Deserialize;

/// The body accepted when creating or updating an NGO
#[derive(Debug, Deserialize)]
pub struct NgoInput {
    #[serde(rename = "ngoInfo")]
    pub info: Info,
}

impl From<NgoInput> for Info {
    fn from(input: NgoInput) -> Self {
        input.info
    }
}

/// NGOs stored in Postgres
#[derive(Clone)]
pub struct NgoService {
    db: PgPool,
}

impl NgoService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Service for NgoService {
    type Input = NgoInput;
    type Resource = Ngo;

    async fn all(&self) -> Result<Vec<Ngo>> {
        Ok(Ngo::all(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Ngo>> {
        let id = parse_id(id)?;
        Ok(Ngo::find(id, &self.db).await?)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Ngo>> {
        Ok(Ngo::find_by_slug(slug, &self.db).await?)
    }

    async fn create(&self, input: NgoInput) -> Result<Ngo> {
        Ngo::create(&input.info, &self.db)
            .await
            .map_err(|e| Error::from_database(e, &input.info.slug))
    }

    async fn update(&self, id: &str, input: NgoInput) -> Result<Option<Ngo>> {
        let id = parse_id(id)?;
        Ngo::replace(id, &input.info, &self.db)
            .await
            .map_err(|e| Error::from_database(e, &input.info.slug))
    }

    async fn delete(&self, id: &str) -> Result<Option<Ngo>> {
        let id = parse_id(id)?;
        Ok(Ngo::delete(id, &self.db).await?)
    }
}

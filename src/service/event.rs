use super::{parse_id, Error, Result, Service};
use async_trait::async_trait;
use database::{Event, Info, PgPool};
use serde::Deserialize;

/// The body accepted when creating or updating an event
#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(rename = "eventInfo")]
    pub info: Info,
}

impl From<EventInput> for Info {
    fn from(input: EventInput) -> Self {
        input.info
    }
}

/// Events stored in Postgres
#[derive(Clone)]
pub struct EventService {
    db: PgPool,
}

impl EventService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Service for EventService {
    type Input = EventInput;
    type Resource = Event;

    async fn all(&self) -> Result<Vec<Event>> {
        Ok(Event::all(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        let id = parse_id(id)?;
        Ok(Event::find(id, &self.db).await?)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        Ok(Event::find_by_slug(slug, &self.db).await?)
    }

    async fn create(&self, input: EventInput) -> Result<Event> {
        Event::create(&input.info, &self.db)
            .await
            .map_err(|e| Error::from_database(e, &input.info.slug))
    }

    async fn update(&self, id: &str, input: EventInput) -> Result<Option<Event>> {
        let id = parse_id(id)?;
        Event::replace(id, &input.info, &self.db)
            .await
            .map_err(|e| Error::from_database(e, &input.info.slug))
    }

    async fn delete(&self, id: &str) -> Result<Option<Event>> {
        let id = parse_id(id)?;
        Ok(Event::delete(id, &self.db).await?)
    }
}

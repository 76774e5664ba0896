//! Event form

use chrono::{DateTime, Utc};
use shared::Bilingual;
use shared::models::{Event, EventPayload};
use shared::response::extract_record;
use validator::Validate;

use super::{FormMode, StagedImage};
use crate::api;
use crate::error::{ClientError, ClientResult, FieldErrors, field_errors};
use crate::guard::routes;
use crate::http::{ApiClient, MultipartFields};

/// Draft state for the event create/edit form
#[derive(Debug, Clone)]
pub struct EventForm {
    mode: FormMode,
    pub title: Bilingual,
    pub description: Bilingual,
    pub location: Bilingual,
    pub date: Option<DateTime<Utc>>,
    staged_image: Option<StagedImage>,
}

impl EventForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: Bilingual::default(),
            description: Bilingual::default(),
            location: Bilingual::default(),
            date: None,
            staged_image: None,
        }
    }

    pub fn edit(record: &Event) -> Self {
        Self {
            mode: FormMode::Edit(record.id.clone()),
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            date: record.date,
            staged_image: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn payload(&self) -> EventPayload {
        EventPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date: self.date,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.payload().validate().map_err(|e| field_errors(&e))
    }

    fn fields(&self) -> MultipartFields {
        let mut fields = MultipartFields::new();
        fields.bilingual("title", &self.title);
        fields.bilingual("description", &self.description);
        fields.bilingual("location", &self.location);
        if let Some(date) = self.date {
            fields.text("date", date.to_rfc3339());
        }
        if let Some(image) = self.staged_image.clone() {
            fields.file(image.into_part("image"));
        }
        fields
    }

    pub async fn submit(&self, client: &ApiClient) -> ClientResult<Event> {
        self.validate().map_err(ClientError::Validation)?;
        let fields = self.fields();

        let body = match &self.mode {
            FormMode::Create => client.post_multipart(api::events::EVENTS, &fields).await?,
            FormMode::Edit(id) => {
                client
                    .put_multipart(&format!("{}/{id}", api::events::EVENTS), &fields)
                    .await?
            }
        };

        let saved = extract_record(&body.value, api::events::record_keys())?;
        Ok(saved)
    }

    pub fn list_route(&self) -> &'static str {
        routes::EVENTS_LIST
    }
}

//! News form

use shared::Bilingual;
use shared::models::{ImageRef, News, NewsPayload};
use shared::response::extract_record;
use validator::Validate;

use super::{FormMode, StagedImage};
use crate::api;
use crate::error::{ClientError, ClientResult, FieldErrors, field_errors};
use crate::guard::routes;
use crate::http::{ApiClient, MultipartFields};

/// Draft state for the news create/edit form
#[derive(Debug, Clone)]
pub struct NewsForm {
    mode: FormMode,
    pub title: Bilingual,
    pub content: Bilingual,
    pub category: String,
    /// Images already stored on the record; preserved when nothing is staged
    existing_images: Vec<ImageRef>,
    staged_image: Option<StagedImage>,
}

impl NewsForm {
    /// Blank draft for a new article
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: Bilingual::default(),
            content: Bilingual::default(),
            category: String::new(),
            existing_images: Vec::new(),
            staged_image: None,
        }
    }

    /// Draft seeded from an existing article
    pub fn edit(record: &News) -> Self {
        Self {
            mode: FormMode::Edit(record.id.clone()),
            title: record.title.clone(),
            content: record.content.clone(),
            category: record.category.clone(),
            existing_images: record.images.clone(),
            staged_image: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Stage a replacement image. Leaving this unset on edit keeps the
    /// stored images.
    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn existing_images(&self) -> &[ImageRef] {
        &self.existing_images
    }

    /// The outgoing payload fields
    pub fn payload(&self) -> NewsPayload {
        NewsPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
        }
    }

    /// Field-level validation; inline messages, no network
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.payload().validate().map_err(|e| field_errors(&e))
    }

    fn fields(&self) -> MultipartFields {
        let mut fields = MultipartFields::new();
        fields.bilingual("title", &self.title);
        fields.bilingual("content", &self.content);
        fields.text("category", self.category.clone());
        if let Some(image) = self.staged_image.clone() {
            fields.file(image.into_part("image"));
        }
        fields
    }

    /// Validate, serialize, send. POST on create, PUT on update.
    pub async fn submit(&self, client: &ApiClient) -> ClientResult<News> {
        self.validate().map_err(ClientError::Validation)?;
        let fields = self.fields();

        let body = match &self.mode {
            FormMode::Create => client.post_multipart(api::news::NEWS, &fields).await?,
            FormMode::Edit(id) => {
                client
                    .put_multipart(&format!("{}/{id}", api::news::NEWS), &fields)
                    .await?
            }
        };

        let saved = extract_record(&body.value, api::news::record_keys())?;
        Ok(saved)
    }

    /// Where the form navigates back to on success
    pub fn list_route(&self) -> &'static str {
        routes::NEWS_LIST
    }
}

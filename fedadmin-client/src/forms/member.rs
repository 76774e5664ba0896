//! Member form

use shared::Bilingual;
use shared::models::{Member, MemberCategory, MemberPayload};
use shared::response::extract_record;
use validator::Validate;

use super::{FormMode, StagedImage};
use crate::api;
use crate::error::{ClientError, ClientResult, FieldErrors, field_errors};
use crate::guard::routes;
use crate::http::{ApiClient, MultipartFields};

/// Draft state for the member create/edit form
#[derive(Debug, Clone)]
pub struct MemberForm {
    mode: FormMode,
    pub name: Bilingual,
    pub position: Bilingual,
    pub category: MemberCategory,
    pub order: i64,
    staged_image: Option<StagedImage>,
}

impl MemberForm {
    pub fn create(category: MemberCategory) -> Self {
        Self {
            mode: FormMode::Create,
            name: Bilingual::default(),
            position: Bilingual::default(),
            category,
            order: 0,
            staged_image: None,
        }
    }

    pub fn edit(record: &Member) -> Self {
        Self {
            mode: FormMode::Edit(record.id.clone()),
            name: record.name.clone(),
            position: record.position.clone(),
            category: record.category,
            order: record.order,
            staged_image: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Stage a replacement portrait. Leaving this unset on edit keeps the
    /// stored image.
    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn payload(&self) -> MemberPayload {
        MemberPayload {
            name: self.name.clone(),
            position: self.position.clone(),
            category: self.category,
            order: self.order,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.payload().validate().map_err(|e| field_errors(&e))
    }

    fn fields(&self) -> MultipartFields {
        let mut fields = MultipartFields::new();
        fields.bilingual("name", &self.name);
        fields.bilingual("position", &self.position);
        fields.text("category", self.category.as_str());
        fields.text("order", self.order.to_string());
        if let Some(image) = self.staged_image.clone() {
            fields.file(image.into_part("image"));
        }
        fields
    }

    pub async fn submit(&self, client: &ApiClient) -> ClientResult<Member> {
        self.validate().map_err(ClientError::Validation)?;
        let fields = self.fields();

        let body = match &self.mode {
            FormMode::Create => {
                client
                    .post_multipart(api::members::MEMBERS, &fields)
                    .await?
            }
            FormMode::Edit(id) => {
                client
                    .put_multipart(&format!("{}/{id}", api::members::MEMBERS), &fields)
                    .await?
            }
        };

        let saved = extract_record(&body.value, api::members::record_keys())?;
        Ok(saved)
    }

    pub fn list_route(&self) -> &'static str {
        routes::MEMBERS_LIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draft_round_trips() {
        let record = Member {
            id: "m1".to_string(),
            name: Bilingual::new("أحمد سالم", "Ahmed Salem"),
            position: Bilingual::new("رئيس الاتحاد", "Federation president"),
            category: MemberCategory::Board,
            order: 1,
            image: None,
            created_at: None,
            updated_at: None,
        };

        let form = MemberForm::edit(&record);
        assert!(form.validate().is_ok());

        let payload = form.payload();
        assert_eq!(payload.name, record.name);
        assert_eq!(payload.position, record.position);
        assert_eq!(payload.category, MemberCategory::Board);
        assert_eq!(payload.order, 1);
    }

    #[test]
    fn category_and_order_travel_as_text_fields() {
        let mut form = MemberForm::create(MemberCategory::Staff);
        form.name = Bilingual::new("سارة علي", "Sara Ali");
        form.position = Bilingual::new("مدربة", "Coach");
        form.order = 3;

        let fields = form.fields();
        assert!(
            fields
                .texts()
                .iter()
                .any(|(n, v)| n == "category" && v == "staff")
        );
        assert!(fields.texts().iter().any(|(n, v)| n == "order" && v == "3"));
    }
}

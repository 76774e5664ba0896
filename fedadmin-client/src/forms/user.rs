//! User account form
//!
//! Accounts are JSON records with no image attachment, so this form submits
//! JSON rather than multipart. The password field exists only in create mode;
//! password changes go through the reset flow.

use shared::models::{UserCreate, UserInfo, UserRole, UserUpdate};
use validator::Validate;

use super::FormMode;
use crate::api;
use crate::error::{ClientError, ClientResult, FieldErrors, field_errors};
use crate::guard::routes;
use crate::http::ApiClient;

/// Draft state for the account create/edit form
#[derive(Debug, Clone)]
pub struct UserForm {
    mode: FormMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Editor,
            is_active: true,
        }
    }

    pub fn edit(record: &UserInfo) -> Self {
        Self {
            mode: FormMode::Edit(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            password: String::new(),
            role: record.role,
            is_active: record.is_active,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        match &self.mode {
            FormMode::Create => self
                .create_payload()
                .validate()
                .map_err(|e| field_errors(&e)),
            FormMode::Edit(_) => self
                .update_payload()
                .validate()
                .map_err(|e| field_errors(&e)),
        }
    }

    fn create_payload(&self) -> UserCreate {
        UserCreate {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }

    fn update_payload(&self) -> UserUpdate {
        UserUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            is_active: self.is_active,
        }
    }

    pub async fn submit(&self, client: &ApiClient) -> ClientResult<UserInfo> {
        self.validate().map_err(ClientError::Validation)?;

        match &self.mode {
            FormMode::Create => api::users::add(client, &self.create_payload()).await,
            FormMode::Edit(id) => api::users::update(client, id, &self.update_payload()).await,
        }
    }

    pub fn list_route(&self) -> &'static str {
        routes::USERS_LIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_mode_requires_password() {
        let mut form = UserForm::create();
        form.name = "New Editor".to_string();
        form.email = "editor@federation.example".to_string();

        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("password"));

        form.password = "s3cret-pass".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn edit_mode_skips_password() {
        let record = UserInfo {
            id: "u2".to_string(),
            name: "Editor".to_string(),
            email: "editor@federation.example".to_string(),
            role: UserRole::Editor,
            is_active: true,
        };

        let form = UserForm::edit(&record);
        assert!(form.validate().is_ok());
        assert!(form.password.is_empty());
    }

    #[test]
    fn invalid_email_is_caught_inline() {
        let mut form = UserForm::create();
        form.name = "New Editor".to_string();
        form.email = "not-an-email".to_string();
        form.password = "s3cret-pass".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email").map(String::as_str), Some("invalid email"));
    }
}

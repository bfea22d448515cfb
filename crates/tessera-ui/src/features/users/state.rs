//! User list columns and edit-dialog form state.
//!
//! # Design
//! - Form inputs stay strings for lossless editing; conversion to the shared
//!   API types happens only on save.
//! - Validation mirrors what the backend enforces so most rejections are
//!   caught before a round trip.

use crate::core::grid::{GridColumn, TextAlign};
use crate::features::parse_list;
use tessera_api_models::{UpsertUserInput, UserDto};
use uuid::Uuid;

/// Columns for the users grid.
#[must_use]
pub fn columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("firstName", "First name"),
        GridColumn::new("lastName", "Last name"),
        GridColumn::new("email", "Email"),
        GridColumn::new("isActive", "Active")
            .without_filter()
            .aligned(TextAlign::Center),
        GridColumn::new("actions", "")
            .without_sort()
            .without_filter()
            .aligned(TextAlign::Right),
    ]
}

/// Editable state behind the create/update user dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    /// Existing user id when editing.
    pub id: Option<Uuid>,
    /// Given name input.
    pub first_name: String,
    /// Family name input.
    pub last_name: String,
    /// Email input.
    pub email: String,
    /// Phone number input (optional).
    pub phone_number: String,
    /// Active toggle.
    pub is_active: bool,
    /// Comma-separated role names.
    pub roles: String,
}

impl UserForm {
    /// Fresh form for the "Add user" dialog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Pre-filled form for the "Update user" dialog.
    #[must_use]
    pub fn from_dto(user: &UserDto) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            is_active: user.is_active,
            roles: user.roles.join(", "),
        }
    }

    /// Validate the form and build the API payload.
    ///
    /// # Errors
    /// Returns a display-ready message naming the first invalid field.
    pub fn to_input(&self) -> Result<UpsertUserInput, String> {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err("First name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') {
            return Err("Email must be a valid address".to_string());
        }
        let phone = self.phone_number.trim();
        Ok(UpsertUserInput {
            id: self.id,
            first_name: first_name.to_string(),
            last_name: self.last_name.trim().to_string(),
            email: email.to_string(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
            is_active: self.is_active,
            roles: parse_list(&self.roles),
        })
    }

    /// Dialog title for this form.
    #[must_use]
    pub fn title(&self) -> String {
        self.id.map_or_else(
            || "Add New User".to_string(),
            |_| format!("Update User {}", self.first_name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_mark_actions_inert() {
        let columns = columns();
        let actions = columns.last().unwrap();
        assert!(!actions.sortable);
        assert!(!actions.filterable);
        assert!(columns[0].sortable);
    }

    #[test]
    fn new_form_defaults_to_active() {
        let form = UserForm::new();
        assert!(form.is_active);
        assert!(form.id.is_none());
    }

    #[test]
    fn dto_round_trips_through_the_form() {
        let dto = UserDto {
            id: Uuid::from_u128(3),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: Some("555-0100".into()),
            is_active: true,
            roles: vec!["admin".into(), "auditor".into()],
            ..UserDto::default()
        };
        let form = UserForm::from_dto(&dto);
        assert_eq!(form.roles, "admin, auditor");
        let input = form.to_input().unwrap();
        assert_eq!(input.id, Some(dto.id));
        assert_eq!(input.roles, dto.roles);
        assert_eq!(input.phone_number.as_deref(), Some("555-0100"));
    }

    #[test]
    fn validation_names_the_first_bad_field() {
        let mut form = UserForm::new();
        assert_eq!(form.to_input().unwrap_err(), "First name is required");
        form.first_name = "Ada".into();
        assert_eq!(form.to_input().unwrap_err(), "Email is required");
        form.email = "not-an-address".into();
        assert_eq!(form.to_input().unwrap_err(), "Email must be a valid address");
    }

    #[test]
    fn titles_distinguish_add_from_update() {
        assert_eq!(UserForm::new().title(), "Add New User");
        let form = UserForm {
            id: Some(Uuid::from_u128(1)),
            first_name: "Ada".into(),
            ..UserForm::default()
        };
        assert_eq!(form.title(), "Update User Ada");
    }
}

//! Role list columns and edit-dialog form state.

use crate::core::grid::{GridColumn, TextAlign};
use crate::features::parse_list;
use tessera_api_models::{RoleDto, UpsertRoleInput};
use uuid::Uuid;

/// Columns for the roles grid.
#[must_use]
pub fn columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("name", "Name"),
        GridColumn::new("description", "Description").without_sort(),
        GridColumn::new("permissions", "Permissions")
            .without_sort()
            .without_filter(),
        GridColumn::new("actions", "")
            .without_sort()
            .without_filter()
            .aligned(TextAlign::Right),
    ]
}

/// Editable state behind the create/update role dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleForm {
    /// Existing role id when editing.
    pub id: Option<Uuid>,
    /// Role name input.
    pub name: String,
    /// Description input.
    pub description: String,
    /// Comma-separated permission identifiers.
    pub permissions: String,
}

impl RoleForm {
    /// Pre-filled form for the "Update role" dialog.
    #[must_use]
    pub fn from_dto(role: &RoleDto) -> Self {
        Self {
            id: Some(role.id),
            name: role.name.clone(),
            description: role.description.clone().unwrap_or_default(),
            permissions: role.permissions.join(", "),
        }
    }

    /// Validate the form and build the API payload.
    ///
    /// # Errors
    /// Returns a display-ready message naming the first invalid field.
    pub fn to_input(&self) -> Result<UpsertRoleInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Role name is required".to_string());
        }
        let description = self.description.trim();
        Ok(UpsertRoleInput {
            id: self.id,
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            permissions: parse_list(&self.permissions),
        })
    }

    /// Dialog title for this form.
    #[must_use]
    pub fn title(&self) -> String {
        self.id.map_or_else(
            || "Add New Role".to_string(),
            |_| format!("Update Role {}", self.name),
        )
    }
}

/// Badge caption summarising a role row.
#[must_use]
pub fn permission_summary(role: &RoleDto) -> String {
    match role.permissions.len() {
        0 => "no permissions".to_string(),
        1 => "1 permission".to_string(),
        count => format!("{count} permissions"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let form = RoleForm::default();
        assert_eq!(form.to_input().unwrap_err(), "Role name is required");
    }

    #[test]
    fn permissions_parse_from_csv_input() {
        let form = RoleForm {
            name: "auditor".into(),
            permissions: "users.read, roles.read".into(),
            ..RoleForm::default()
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.permissions, ["users.read", "roles.read"]);
        assert!(input.description.is_none());
    }

    #[test]
    fn summary_counts_permissions() {
        let mut role = RoleDto {
            name: "auditor".into(),
            ..RoleDto::default()
        };
        assert_eq!(permission_summary(&role), "no permissions");
        role.permissions = vec!["users.read".into()];
        assert_eq!(permission_summary(&role), "1 permission");
        role.permissions.push("roles.read".into());
        assert_eq!(permission_summary(&role), "2 permissions");
    }
}

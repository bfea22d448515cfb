//! Tenant list columns and edit-dialog form state.

use crate::core::grid::{GridColumn, TextAlign};
use chrono::{DateTime, NaiveDate, Utc};
use tessera_api_models::{TenantDto, UpsertTenantInput};
use uuid::Uuid;

/// Columns for the tenants grid.
#[must_use]
pub fn columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("name", "Name"),
        GridColumn::new("identifier", "Identifier"),
        GridColumn::new("adminEmail", "Admin email").without_sort(),
        GridColumn::new("validUntil", "Valid until").without_filter(),
        GridColumn::new("isActive", "Active")
            .without_filter()
            .aligned(TextAlign::Center),
        GridColumn::new("actions", "")
            .without_sort()
            .without_filter()
            .aligned(TextAlign::Right),
    ]
}

/// Editable state behind the create/update tenant dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TenantForm {
    /// Existing tenant id when editing.
    pub id: Option<Uuid>,
    /// Tenant name input.
    pub name: String,
    /// URL identifier input.
    pub identifier: String,
    /// Administrative contact email input (optional).
    pub admin_email: String,
    /// Active toggle.
    pub is_active: bool,
    /// Subscription expiry as `YYYY-MM-DD`, empty for unlimited.
    pub valid_until: String,
}

impl TenantForm {
    /// Fresh form for the "Add tenant" dialog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Pre-filled form for the "Update tenant" dialog.
    #[must_use]
    pub fn from_dto(tenant: &TenantDto) -> Self {
        Self {
            id: Some(tenant.id),
            name: tenant.name.clone(),
            identifier: tenant.identifier.clone(),
            admin_email: tenant.admin_email.clone().unwrap_or_default(),
            is_active: tenant.is_active,
            valid_until: tenant
                .valid_until
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate the form and build the API payload.
    ///
    /// # Errors
    /// Returns a display-ready message naming the first invalid field.
    pub fn to_input(&self) -> Result<UpsertTenantInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Tenant name is required".to_string());
        }
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err("Identifier is required".to_string());
        }
        if !identifier
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            return Err(
                "Identifier may only contain lowercase letters, digits, and hyphens".to_string(),
            );
        }
        let admin_email = self.admin_email.trim();
        if !admin_email.is_empty() && !admin_email.contains('@') {
            return Err("Admin email must be a valid address".to_string());
        }
        Ok(UpsertTenantInput {
            id: self.id,
            name: name.to_string(),
            identifier: identifier.to_string(),
            admin_email: (!admin_email.is_empty()).then(|| admin_email.to_string()),
            is_active: self.is_active,
            valid_until: parse_valid_until(&self.valid_until)?,
        })
    }

    /// Dialog title for this form.
    #[must_use]
    pub fn title(&self) -> String {
        self.id.map_or_else(
            || "Add New Tenant".to_string(),
            |_| format!("Update Tenant {}", self.name),
        )
    }
}

/// Parse the expiry input; blank means unlimited.
///
/// # Errors
/// Returns a display-ready message when the value is not a `YYYY-MM-DD` date.
pub fn parse_valid_until(value: &str) -> Result<Option<DateTime<Utc>>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| "Valid until must be a date in YYYY-MM-DD form".to_string())?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| "Valid until must be a date in YYYY-MM-DD form".to_string())?;
    Ok(Some(midnight.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_charset_is_enforced() {
        let mut form = TenantForm::new();
        form.name = "Acme".into();
        form.identifier = "Acme Corp".into();
        assert!(form.to_input().unwrap_err().contains("Identifier"));
        form.identifier = "acme-corp".into();
        assert!(form.to_input().is_ok());
    }

    #[test]
    fn blank_expiry_means_unlimited() {
        assert_eq!(parse_valid_until("   "), Ok(None));
        assert!(parse_valid_until("2026-13-40").is_err());
        let parsed = parse_valid_until("2026-08-31").unwrap().unwrap();
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2026-08-31");
    }

    #[test]
    fn dto_round_trips_through_the_form() {
        let dto = TenantDto {
            id: Uuid::from_u128(9),
            name: "Acme".into(),
            identifier: "acme".into(),
            admin_email: Some("ops@acme.test".into()),
            is_active: true,
            valid_until: parse_valid_until("2027-01-01").unwrap(),
            ..TenantDto::default()
        };
        let form = TenantForm::from_dto(&dto);
        assert_eq!(form.valid_until, "2027-01-01");
        let input = form.to_input().unwrap();
        assert_eq!(input.identifier, "acme");
        assert_eq!(input.valid_until, dto.valid_until);
    }
}

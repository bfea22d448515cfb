#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Tessera admin API.
//!
//! These types are the wire contract between the UI and the backend. The UI
//! never invents fields of its own; paged listing, soft deletion, and audit
//! timestamps are expressed here once so list pages and edit dialogs agree on
//! the shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paged listing parameters accepted by every admin collection endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Number of leading items to skip.
    pub skip_count: u64,
    /// Maximum number of items to return.
    pub max_result_count: u64,
    /// Server-side filter expression (`field eq 'value'` clauses).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Ordering expression (`field` or `field desc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Free-text search across the collection's display fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Include soft-deleted records when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

/// One page of results plus the total count across all pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Items on this page, in server order.
    pub items: Vec<T>,
    /// Total matching items across all pages.
    pub total_count: u64,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Audit fields shared by every admin record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStamp {
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    /// Soft-deletion flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// A user account as listed and edited in the admin console.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Stable user identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address, also the login name.
    pub email: String,
    /// Optional phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Names of roles assigned to the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Audit metadata.
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Payload for creating or updating a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserInput {
    /// Existing id for updates; `None` creates a new user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Optional phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Role names to assign.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A role grouping a set of permissions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    /// Stable role identifier.
    pub id: Uuid,
    /// Unique role name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Permission identifiers granted by the role.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Built-in roles cannot be deleted.
    #[serde(default)]
    pub is_default: bool,
    /// Audit metadata.
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Payload for creating or updating a role.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRoleInput {
    /// Existing id for updates; `None` creates a new role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Unique role name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Permission identifiers granted by the role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A tenant (isolated customer workspace).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    /// Stable tenant identifier.
    pub id: Uuid,
    /// Unique tenant name.
    pub name: String,
    /// Subdomain or URL identifier for the tenant.
    pub identifier: String,
    /// Email of the tenant's administrative contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    /// Whether the tenant is currently enabled.
    pub is_active: bool,
    /// Subscription expiry, if the tenant is time-limited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    /// Audit metadata.
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Payload for creating or updating a tenant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTenantInput {
    /// Existing id for updates; `None` creates a new tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Unique tenant name.
    pub name: String,
    /// Subdomain or URL identifier for the tenant.
    pub identifier: String,
    /// Email of the tenant's administrative contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    /// Whether the tenant is currently enabled.
    pub is_active: bool,
    /// Subscription expiry, if the tenant is time-limited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// Request body for soft-deleting an admin record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    /// Identifier of the record to delete.
    pub id: Uuid,
    /// Operator-supplied reason recorded in the audit trail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_omits_unset_fields() {
        let query = PageQuery {
            skip_count: 20,
            max_result_count: 10,
            ..PageQuery::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["skipCount"], 20);
        assert_eq!(json["maxResultCount"], 10);
        assert!(json.get("filter").is_none());
        assert!(json.get("orderBy").is_none());
    }

    #[test]
    fn paged_response_defaults_to_empty() {
        let page = PagedResponse::<UserDto>::default();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn user_round_trips_with_flattened_audit() {
        let user = UserDto {
            id: Uuid::from_u128(7),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            is_active: true,
            roles: vec!["admin".into()],
            ..UserDto::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: UserDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(json.contains("\"isDeleted\":false"));
    }

    #[test]
    fn tenant_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Acme",
            "identifier": "acme",
            "isActive": true
        }"#;
        let tenant: TenantDto = serde_json::from_str(json).unwrap();
        assert_eq!(tenant.identifier, "acme");
        assert!(tenant.valid_until.is_none());
        assert!(!tenant.audit.is_deleted);
    }
}

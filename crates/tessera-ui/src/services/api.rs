//! HTTP client for the admin REST endpoints.

use crate::core::grid::LoadRequest;
use crate::core::query::{to_page_query, to_query_string};
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tessera_api_models::{
    DeleteRequest, PagedResponse, RoleDto, TenantDto, UpsertRoleInput, UpsertTenantInput,
    UpsertUserInput, UserDto,
};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let response = Request::post(&format!("{}{}", self.base_url, path))
            .json(body)?
            .send()
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let response = Request::put(&format!("{}{}", self.base_url, path))
            .json(body)?
            .send()
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn delete(&self, path: &str, body: &DeleteRequest) -> anyhow::Result<()> {
        Request::delete(&format!("{}{}", self.base_url, path))
            .json(body)?
            .send()
            .await?;
        Ok(())
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        request: &LoadRequest,
    ) -> anyhow::Result<PagedResponse<T>> {
        let query = to_query_string(&to_page_query(request));
        self.get_json(&format!("/v1/{resource}?{query}")).await
    }

    pub(crate) async fn list_users(
        &self,
        request: &LoadRequest,
    ) -> anyhow::Result<PagedResponse<UserDto>> {
        self.list("users", request).await
    }

    pub(crate) async fn create_user(&self, input: &UpsertUserInput) -> anyhow::Result<UserDto> {
        self.post_json("/v1/users", input).await
    }

    pub(crate) async fn update_user(
        &self,
        id: Uuid,
        input: &UpsertUserInput,
    ) -> anyhow::Result<UserDto> {
        self.put_json(&format!("/v1/users/{id}"), input).await
    }

    pub(crate) async fn delete_user(&self, id: Uuid) -> anyhow::Result<()> {
        self.delete(&format!("/v1/users/{id}"), &DeleteRequest { id, delete_reason: None })
            .await
    }

    pub(crate) async fn list_roles(
        &self,
        request: &LoadRequest,
    ) -> anyhow::Result<PagedResponse<RoleDto>> {
        self.list("roles", request).await
    }

    pub(crate) async fn create_role(&self, input: &UpsertRoleInput) -> anyhow::Result<RoleDto> {
        self.post_json("/v1/roles", input).await
    }

    pub(crate) async fn update_role(
        &self,
        id: Uuid,
        input: &UpsertRoleInput,
    ) -> anyhow::Result<RoleDto> {
        self.put_json(&format!("/v1/roles/{id}"), input).await
    }

    pub(crate) async fn delete_role(&self, id: Uuid) -> anyhow::Result<()> {
        self.delete(&format!("/v1/roles/{id}"), &DeleteRequest { id, delete_reason: None })
            .await
    }

    pub(crate) async fn list_tenants(
        &self,
        request: &LoadRequest,
    ) -> anyhow::Result<PagedResponse<TenantDto>> {
        self.list("tenants", request).await
    }

    pub(crate) async fn create_tenant(
        &self,
        input: &UpsertTenantInput,
    ) -> anyhow::Result<TenantDto> {
        self.post_json("/v1/tenants", input).await
    }

    pub(crate) async fn update_tenant(
        &self,
        id: Uuid,
        input: &UpsertTenantInput,
    ) -> anyhow::Result<TenantDto> {
        self.put_json(&format!("/v1/tenants/{id}"), input).await
    }

    pub(crate) async fn delete_tenant(&self, id: Uuid) -> anyhow::Result<()> {
        self.delete(&format!("/v1/tenants/{id}"), &DeleteRequest { id, delete_reason: None })
            .await
    }
}

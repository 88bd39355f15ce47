//! REST API client for tenants and maintenance requests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! pages only fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! the page (error line, toast) without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{MaintenanceRequest, RequestPayload, Tenant};

/// Operations the dashboard pages perform against the backend.
///
/// Pages depend on this trait rather than [`RestApi`] so the request
/// lifecycle can be driven by a recording fake in tests.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// `GET /tenants`
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError>;
    /// `GET /tenants/email/{email}`
    async fn tenant_by_email(&self, email: &str) -> Result<Tenant, ApiError>;
    /// `GET /request`
    async fn list_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError>;
    /// `POST /request`
    async fn create_request(&self, payload: &RequestPayload) -> Result<(), ApiError>;
    /// `PUT /request/{id}`
    async fn update_request(&self, id: &str, payload: &RequestPayload) -> Result<(), ApiError>;
    /// `DELETE /request/{id}`
    async fn delete_request(&self, id: &str) -> Result<(), ApiError>;
}

fn tenants_endpoint(base: &str) -> String {
    format!("{base}/tenants")
}

fn tenant_by_email_endpoint(base: &str, email: &str) -> String {
    format!("{base}/tenants/email/{}", urlencoding::encode(email))
}

fn requests_endpoint(base: &str) -> String {
    format!("{base}/request")
}

fn request_endpoint(base: &str, id: &str) -> String {
    format!("{base}/request/{}", urlencoding::encode(id))
}

/// HTTP implementation of [`DashboardApi`] rooted at an API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestApi {
    base_url: String,
}

impl RestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }
}

impl DashboardApi for RestApi {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        get_json(&tenants_endpoint(&self.base_url)).await
    }

    async fn tenant_by_email(&self, email: &str) -> Result<Tenant, ApiError> {
        get_json(&tenant_by_email_endpoint(&self.base_url, email)).await
    }

    async fn list_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError> {
        get_json(&requests_endpoint(&self.base_url)).await
    }

    async fn create_request(&self, payload: &RequestPayload) -> Result<(), ApiError> {
        send_json(Method::Post, &requests_endpoint(&self.base_url), payload).await
    }

    async fn update_request(&self, id: &str, payload: &RequestPayload) -> Result<(), ApiError> {
        send_json(Method::Put, &request_endpoint(&self.base_url, id), payload).await
    }

    async fn delete_request(&self, id: &str) -> Result<(), ApiError> {
        let url = request_endpoint(&self.base_url, id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(&resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Post,
    Put,
}

/// GET `url` and decode the JSON body.
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// POST/PUT `body` as JSON to `url`; the response body is ignored.
pub(crate) async fn send_json<B: serde::Serialize>(method: Method, url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status: resp.status(), body })
}

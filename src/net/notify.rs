//! Email notifications for request create/update via the EmailJS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! After a request is written, the requester receives a confirmation (create)
//! or status update (update) email. Delivery is best-effort: the lifecycle
//! reports a failed notification but never rolls back the write.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use serde::Serialize;

use super::error::ApiError;
use super::types::RequestPayload;
use crate::config::NotifyConfig;

/// Which template a notification uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyEvent {
    Created,
    Updated,
}

/// Variables substituted into the EmailJS templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub request_title: String,
    pub property: String,
    pub room_number: String,
    pub priority: String,
    pub service: String,
    pub status: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn from_payload(payload: &RequestPayload) -> Self {
        Self {
            user_name: payload.tenant_name.clone(),
            request_title: payload.request_title.clone(),
            property: payload.property.clone(),
            room_number: payload.room_number.clone(),
            priority: payload.priority.as_str().to_owned(),
            service: payload.preferred_date.clone(),
            status: payload.status.as_str().to_owned(),
            message: payload.description.clone(),
            to_email: payload.tenant_name.clone(),
        }
    }
}

/// Sends request notifications.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Whether a call to [`Notifier::notify`] will actually send anything.
    fn enabled(&self) -> bool;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the notification service rejects the call.
    async fn notify(&self, event: NotifyEvent, params: &TemplateParams) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct EmailJsSend<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

fn send_endpoint(base: &str) -> String {
    format!("{base}/email/send")
}

/// EmailJS-backed notifier; a no-op when not configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailJsNotifier {
    config: Option<NotifyConfig>,
}

impl EmailJsNotifier {
    pub fn new(config: Option<NotifyConfig>) -> Self {
        Self { config }
    }

    fn template_for(config: &NotifyConfig, event: NotifyEvent) -> &str {
        match event {
            NotifyEvent::Created => &config.create_template_id,
            NotifyEvent::Updated => &config.update_template_id,
        }
    }
}

impl Notifier for EmailJsNotifier {
    fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn notify(&self, event: NotifyEvent, params: &TemplateParams) -> Result<(), ApiError> {
        let Some(config) = &self.config else {
            return Ok(());
        };
        let body = EmailJsSend {
            service_id: &config.service_id,
            template_id: Self::template_for(config, event),
            user_id: &config.public_key,
            template_params: params,
        };
        super::api::send_json(super::api::Method::Post, &send_endpoint(&config.base_url), &body).await
    }
}

//! Wire DTOs for the property-management REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's camelCase JSON (and Mongo-style `_id`).
//! Everything except the identifier is defaulted on decode so partially
//! filled records from older clients still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Title choices offered by the request form.
pub const REQUEST_TITLES: [&str; 5] = [
    "Repair Request",
    "Routine Checkup",
    "Damage Report",
    "Replacement Needed",
    "Other",
];

/// Title preselected when the form opens in create mode.
pub const DEFAULT_REQUEST_TITLE: &str = "Repair Request";

/// Urgency assigned by an administrator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Lifecycle status of a maintenance request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl RequestStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// A maintenance request as returned by `GET /request`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub request_title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    /// Requester email. The API kept the historical field name.
    #[serde(default)]
    pub tenant_name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub room_number: String,
    /// Service date chosen by an administrator.
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /request` and `PUT /request/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub request_title: String,
    pub priority: Priority,
    pub property: String,
    pub room_number: String,
    pub description: String,
    pub tenant_name: String,
    pub contact: String,
    pub preferred_date: String,
    pub status: RequestStatus,
}

impl RequestPayload {
    /// Blank create-mode form for `requester`.
    pub fn for_requester(requester: &str) -> Self {
        Self {
            request_title: DEFAULT_REQUEST_TITLE.to_owned(),
            tenant_name: requester.to_owned(),
            ..Self::default()
        }
    }

    /// Edit-mode form populated from an existing request.
    pub fn from_request(request: &MaintenanceRequest) -> Self {
        Self {
            request_title: request.request_title.clone(),
            priority: request.priority,
            property: request.property.clone(),
            room_number: request.room_number.clone(),
            description: request.description.clone(),
            tenant_name: request.tenant_name.clone(),
            contact: request.contact.clone(),
            preferred_date: crate::util::date::input_date_value(request.preferred_date.as_deref()),
            status: request.status,
        }
    }
}

/// A tenant record (`GET /tenants`, `GET /tenants/email/{email}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub room_number: String,
}

/// Role of the signed-in dashboard user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Tenant,
}

/// The signed-in user as stored by the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

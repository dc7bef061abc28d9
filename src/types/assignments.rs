//! Assignment request and response types.

use serde::{Deserialize, Serialize};

/// Body of an assign request: hand `data_ids` of a dataset to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDataRequest {
    /// Dataset the data items belong to.
    pub dataset_id: u64,
    /// User receiving the assignment.
    pub user_id: u64,
    /// Data items to assign.
    pub data_ids: Vec<u64>,
}

impl AssignDataRequest {
    /// Creates a new assign request.
    pub fn new(dataset_id: u64, user_id: u64, data_ids: impl Into<Vec<u64>>) -> Self {
        Self {
            dataset_id,
            user_id,
            data_ids: data_ids.into(),
        }
    }
}

/// Filters for listing assignments.
///
/// Every field is optional; unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentQuery {
    /// Only assignments in this dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<u64>,
    /// Only assignments held by this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Only assignments in this status. Values are server-defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u64>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl AssignmentQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by dataset.
    pub fn dataset_id(mut self, dataset_id: u64) -> Self {
        self.dataset_id = Some(dataset_id);
        self
    }

    /// Filters by user.
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Filters by status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the page number.
    pub fn page_no(mut self, page_no: u64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Query parameters of an access check.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessQuery {
    pub(crate) user_id: u64,
}

/// An assignment as returned by the server.
///
/// Only `id` is required; the rest of the record is kept if present.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assignment ID, used by remove.
    pub id: u64,
    /// Dataset ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<u64>,
    /// Data item ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_id: Option<u64>,
    /// Assigned user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Assignment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any fields not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

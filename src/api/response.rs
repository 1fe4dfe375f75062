//! # Response Envelope
//!
//! Every response, success or failure, carries the same envelope:
//! `{"success": true, "data": ...}` or
//! `{"success": false, "error": {"code": ..., "message": ...}}`.

use serde::Serialize;

use crate::model::PartnerRecord;
use crate::query::Page;

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Machine-readable error detail
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Failure envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: ErrorDetail,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// List payload with pagination metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerListData {
    pub partners: Vec<PartnerRecord>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl From<Page<PartnerRecord>> for PartnerListData {
    fn from(page: Page<PartnerRecord>) -> Self {
        Self {
            partners: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Delete confirmation payload
#[derive(Debug, Clone, Serialize)]
pub struct DeletedData {
    pub deleted: bool,
}

impl DeletedData {
    pub fn confirmed() -> Self {
        Self { deleted: true }
    }
}

/// Liveness payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub partners: usize,
}

impl HealthData {
    pub fn ok(partners: usize) -> Self {
        Self {
            status: "ok",
            partners,
        }
    }
}

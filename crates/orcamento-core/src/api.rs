//! Request contract of the budget endpoints.
//!
//! Both endpoints take `{ "entrada": "<cart text>" }`. The functions here are
//! transport agnostic: they validate the body, run the parser and reporter,
//! and classify failures with an HTTP-like status the server layer applies.

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::cart::parse_cart;
use crate::models::line_item::LineItem;
use crate::report::{internal_codes, render_report};

/// Message for a missing or non-string `entrada`.
pub const INVALID_INPUT_MESSAGE: &str = "Dados de entrada inválidos!";

/// Message for input without any recognizable record.
pub const NO_ITEMS_MESSAGE: &str = "Nenhum medicamento encontrado nos dados!";

/// Operation label of the report endpoint, used in failure messages.
pub const PROCESS_BUDGET: &str = "Erro ao processar orçamento";

/// Operation label of the codes endpoint, used in failure messages.
pub const GENERATE_CODES: &str = "Erro ao gerar código interno";

/// Failure of a budget request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// `entrada` is absent, not a string, or empty.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// The parser found no records.
    #[error("{}", NO_ITEMS_MESSAGE)]
    NoItems,

    /// Unexpected failure inside the pipeline.
    #[error("{operation}: {message}")]
    Unexpected {
        operation: &'static str,
        message: String,
    },
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidInput | ApiError::NoItems => 400,
            ApiError::Unexpected { .. } => 500,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            message: self.to_string(),
        }
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    /// Error body with a fixed message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body of a successful report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub success: bool,
    /// Rendered budget report.
    pub relatorio: String,
    /// Parsed line items.
    pub medicamentos: Vec<LineItem>,
}

/// Body of a successful codes request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodesResponse {
    pub success: bool,
    /// Space separated internal codes.
    pub codigos: String,
    /// Number of line items.
    pub quantidade: usize,
}

/// Handle a report request body.
pub fn process_budget(body: &Value) -> Result<ReportResponse, ApiError> {
    let entrada = entrada(body)?;

    guarded(PROCESS_BUDGET, || {
        let items = parse_cart(entrada);
        if items.is_empty() {
            return Err(ApiError::NoItems);
        }

        let relatorio = render_report(&items);
        info!("Rendered budget report for {} line items", items.len());

        Ok(ReportResponse {
            success: true,
            relatorio,
            medicamentos: items,
        })
    })
}

/// Handle a codes request body.
pub fn generate_codes(body: &Value) -> Result<CodesResponse, ApiError> {
    let entrada = entrada(body)?;

    guarded(GENERATE_CODES, || {
        let items = parse_cart(entrada);
        if items.is_empty() {
            return Err(ApiError::NoItems);
        }

        info!("Generated internal codes for {} line items", items.len());

        Ok(CodesResponse {
            success: true,
            codigos: internal_codes(&items),
            quantidade: items.len(),
        })
    })
}

fn entrada(body: &Value) -> Result<&str, ApiError> {
    match body.get("entrada") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::InvalidInput),
    }
}

/// Run `f`, turning a panic into [`ApiError::Unexpected`].
fn guarded<T>(
    operation: &'static str,
    f: impl FnOnce() -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown error".to_string());
        error!("{}: {}", operation, message);
        Err(ApiError::Unexpected { operation, message })
    })
}

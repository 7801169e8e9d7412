//! Core library for pharmacy cart budgets.
//!
//! This crate provides:
//! - Cart printout parsing into medication line items
//! - Budget report and internal code rendering
//! - The request contract of the budget endpoints
//! - Configuration shared by the CLI and the HTTP server

pub mod api;
pub mod cart;
pub mod error;
pub mod models;
pub mod report;

pub use api::{generate_codes, process_budget, ApiError, CodesResponse, ErrorResponse, ReportResponse};
pub use cart::{parse_cart, CartParser, LineScanParser, ParseOutcome, RecordError};
pub use error::{OrcamentoError, Result};
pub use models::config::{OrcamentoConfig, ReportFormat};
pub use models::line_item::LineItem;
pub use report::{internal_codes, render_report, BudgetSummary};

//! Markdown report slice.
//!
//! Each report is read → template → write: inputs are collected into a plain
//! struct, rendered to a string and written atomically. Unusable inputs
//! degrade to placeholder rows except where noted.
mod credit;
mod error;
mod integration;
mod markdown;
mod status;

pub use crate::credit::{AdapterRow, CreditReport, generate_credit_report};
pub use crate::error::{ReportsError, ReportsErrorExt};
pub use crate::integration::{CommercialLogs, IntegrationReport, generate_integration_report};
pub use crate::status::{
    GLOBAL_REGIONS, StatusEdition, StatusReport, generate_status_report, subdomain,
    subdomain_prefix,
};

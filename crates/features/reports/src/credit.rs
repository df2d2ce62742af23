//! `Vault_Credit_Report.md`: adapter status per catalog region.

use crate::error::ReportsError;
use crate::markdown::Table;
use crate::status::subdomain;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use vgen_adapters::descriptor_file_name;
use vgen_catalog::load_or_log;
use vgen_kernel::clock::Clock;
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::constants::{CREDIT_REPORT_FILE, NOT_AVAILABLE, TIMESTAMP_FORMAT};
use vgen_kernel::fs::{self, FsError};

const COLUMNS: &[(&str, usize)] =
    &[("Region", 6), ("Adapter Name", 25), ("Status", 8), ("Compliance Note", 60)];

/// What the report could learn about one region's descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterRow {
    Found { adapter_name: String, status: String, compliance_note: String },
    Missing,
    Unreadable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DescriptorSummary {
    adapter_name: Option<String>,
    status: Option<String>,
    compliance_note: Option<String>,
}

impl From<DescriptorSummary> for AdapterRow {
    fn from(d: DescriptorSummary) -> Self {
        Self::Found {
            adapter_name: d.adapter_name.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            status: d.status.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            compliance_note: d
                .compliance_note
                .unwrap_or_else(|| "No specific note provided.".to_owned()),
        }
    }
}

/// Inputs of the credit report, gathered before rendering.
#[derive(Debug, Clone)]
pub struct CreditReport {
    /// Uppercase region code → descriptor row, in code order.
    pub rows: Vec<(String, AdapterRow)>,
    /// Host of the live reporting node (`usa.crypdawgs.com`).
    pub live_node: String,
    pub generated_at: NaiveDateTime,
}

impl CreditReport {
    /// Reads the catalog and each region's descriptor.
    ///
    /// An unusable catalog is logged and yields a report without rows.
    pub fn collect(cfg: &WorkspaceConfig, clock: &dyn Clock) -> Self {
        let adapters = cfg.paths.adapters_path();
        let rows = load_or_log(cfg.paths.catalog_path())
            .map(|catalog| {
                catalog
                    .codes()
                    .map(|code| {
                        let path = adapters.join(descriptor_file_name(code));
                        (code.to_uppercase(), read_row(&path))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            rows,
            live_node: subdomain(&cfg.adapters.live_region.to_lowercase(), &cfg.deployment.domain),
            generated_at: clock.now(),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut table = Table::new(COLUMNS);
        for (region, row) in &self.rows {
            match row {
                AdapterRow::Found { adapter_name, status, compliance_note } => {
                    table.row(&[region, adapter_name, status, compliance_note]);
                },
                AdapterRow::Missing => table.row(&[
                    region.as_str(),
                    "Adapter file missing",
                    "Missing",
                    "Adapter file not found in directory.",
                ]),
                AdapterRow::Unreadable => table.row(&[
                    region.as_str(),
                    "Error reading adapter file",
                    "Error",
                    "Could not decode adapter JSON.",
                ]),
            }
        }
        if self.rows.is_empty() {
            table.row(&[NOT_AVAILABLE, "No regions available", NOT_AVAILABLE, "Region catalog is missing or empty."]);
        }

        let mut out = String::with_capacity(4096);
        out.push_str("# CrypDNA Vault Credit Report\n\n");
        out.push_str("This report summarizes the status of credit adapters across the CrypDNA Global Vault Network, detailing active and locked adapters, along with relevant compliance notes.\n\n");

        out.push_str("## 1. Credit Adapter Status Overview\n\n");
        out.push_str("The CrypDNA Credit Genesis Protocol (v5.0) has successfully brought the U.S. Dun & Bradstreet tradeline online and scaffolded global adapters. The U.S. adapter is live, while all other regional adapters are currently locked, awaiting local authorization and compliance approval.\n\n");
        out.push_str(&table.finish());
        out.push('\n');

        out.push_str("## 2. U.S. Dun & Bradstreet (D&B) Tradeline Details\n\n");
        out.push_str("The U.S. Vault is configured to report to Dun & Bradstreet, leveraging its comprehensive business credit reporting services. This integration allows for real-time tradeline reporting and credit score generation for U.S.-based entities.\n\n");
        let _ = writeln!(out, "- **Active Reporting Node:** `{}`", self.live_node);
        out.push_str("- **Provider:** Dun & Bradstreet (D&B)\n");
        out.push_str("- **Status:** Live\n");
        out.push_str("- **Key Features:** Business credit scores, payment history, financial risk assessment.\n");
        out.push_str("- **Compliance:** Fully compliant with U.S. financial regulations, including the Fair Credit Reporting Act (FCRA).\n\n");

        out.push_str("## 3. Global Adapter Framework\n\n");
        out.push_str("A standardized framework has been established for all other regional credit adapters. Each adapter is currently in a 'locked' state, signifying that it is scaffolded and ready for integration but requires specific local regulatory approval and technical configuration before activation. This phased approach ensures adherence to diverse international financial regulations and data privacy laws.\n\n");
        out.push_str("- **Framework Status:** Ready for Authorization\n");
        out.push_str("- **Activation Requirement:** Local regulatory approval and technical setup.\n");
        out.push_str("- **Benefit:** Ensures compliance and tailored credit reporting per region.\n\n");

        out.push_str("## Conclusion\n\n");
        out.push_str("The CrypDNA Credit Genesis Protocol has successfully laid the foundation for global credit reporting. The U.S. D&B tradeline is operational, and a robust framework for international expansion is in place, awaiting regional activations.\n\n");
        let _ = writeln!(out, "**Report Generated:** {}", self.generated_at.format(TIMESTAMP_FORMAT));
        out
    }
}

/// Collects, renders and writes the credit report.
///
/// # Errors
/// Returns [`ReportsError::Fs`] if the report cannot be written.
pub fn generate_credit_report(cfg: &WorkspaceConfig, clock: &dyn Clock) -> Result<PathBuf, ReportsError> {
    let report = CreditReport::collect(cfg, clock);
    let path = cfg.paths.report_path(CREDIT_REPORT_FILE);
    fs::write_text(&path, &report.render())?;
    info!(regions = report.rows.len(), "Vault Credit Report generated at {}", path.display());
    Ok(path)
}

fn read_row(path: &Path) -> AdapterRow {
    match fs::read_json::<DescriptorSummary>(path) {
        Ok(descriptor) => descriptor.into(),
        Err(FsError::NotFound { .. }) => AdapterRow::Missing,
        Err(err) => {
            error!("Error: Could not read adapter file {} ({err})", path.display());
            AdapterRow::Unreadable
        },
    }
}

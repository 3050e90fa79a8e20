// src/presentation.rs
use std::io::Write;

use mailtally_domain::{DomainCount, SkippedValue};
use mailtally_shared_kernel::{InfrastructureError, Result};
use mailtally_usecase::DomainReport;
use serde::Serialize;

use crate::options::OutputFormat;

const EMPTY_DOMAIN_LABEL: &str = "(empty)";

#[derive(Serialize)]
struct ReportDocument<'a> {
    domains: &'a [DomainCount],
    total: u64,
    rows: usize,
    skipped: &'a [SkippedValue],
}

pub fn write_report<W: Write>(out: &mut W, report: &DomainReport, format: OutputFormat, top: Option<usize>) -> Result<()> {
    let shown = top.map_or(report.domains.len(), |n| n.min(report.domains.len()));
    let domains = &report.domains[..shown];

    match format {
        OutputFormat::Table => write_table(out, domains, report)?,
        OutputFormat::Csv => write_csv(out, domains)?,
        OutputFormat::Json => write_json(out, domains, report)?,
        OutputFormat::Jsonl => write_jsonl(out, domains, report)?,
        OutputFormat::Yaml => write_yaml(out, domains, report)?,
    }
    out.flush()?;
    Ok(())
}

fn document<'a>(domains: &'a [DomainCount], report: &'a DomainReport) -> ReportDocument<'a> {
    ReportDocument { domains, total: report.total(), rows: report.rows, skipped: &report.skipped }
}

fn write_table<W: Write>(out: &mut W, domains: &[DomainCount], report: &DomainReport) -> Result<()> {
    writeln!(out, "    COUNT     DOMAIN")?;
    writeln!(out, "----------------------------------------------")?;
    for d in domains {
        let label = if d.domain.is_empty() { EMPTY_DOMAIN_LABEL } else { d.domain.as_str() };
        writeln!(out, "{:>9}     {label}", d.count)?;
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "{:>9}     TOTAL ({} domains, {} rows, {} skipped)",
        report.total(),
        report.domains.len(),
        report.rows,
        report.skipped.len()
    )?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, domains: &[DomainCount]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["domain", "count"]).map_err(csv_error)?;
    for d in domains {
        let count = d.count.to_string();
        writer.write_record([d.domain.as_str(), count.as_str()]).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::SerializationError { format: "CSV".to_string(), details: err.to_string() }
}

fn write_json<W: Write>(out: &mut W, domains: &[DomainCount], report: &DomainReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &document(domains, report))?;
    writeln!(out)?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, domains: &[DomainCount], report: &DomainReport) -> Result<()> {
    for d in domains {
        let line = serde_json::json!({ "type": "domain", "domain": d.domain, "count": d.count });
        writeln!(out, "{line}")?;
    }
    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "domains": report.domains.len(),
        "total": report.total(),
        "rows": report.rows,
        "skipped": report.skipped.len(),
    });
    writeln!(out, "{total}")?;
    Ok(())
}

#[cfg(feature = "yaml")]
fn write_yaml<W: Write>(out: &mut W, domains: &[DomainCount], report: &DomainReport) -> Result<()> {
    serde_yaml::to_writer(&mut *out, &document(domains, report))?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<W: Write>(_out: &mut W, _domains: &[DomainCount], _report: &DomainReport) -> Result<()> {
    Err(mailtally_shared_kernel::PresentationError::InvalidValue {
        flag: "--format".into(),
        value: "yaml".into(),
        reason: "built without the `yaml` feature".into(),
    }
    .into())
}

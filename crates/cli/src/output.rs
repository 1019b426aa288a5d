//! Console report

use clouddns_core::application::DeletionReport;
use clouddns_core::domain::{Domain, RecordDetail, RecordType};
use colored::Colorize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    id: String,
    name: String,
    #[tabled(rename = "type")]
    record_type: String,
    data: String,
}

impl From<&RecordDetail> for RecordRow {
    fn from(record: &RecordDetail) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            record_type: record.record_type.to_string(),
            data: record.data.clone(),
        }
    }
}

pub fn print_header() {
    println!("{}", "Delete Records".cyan().bold());
}

pub fn print_domain(domain: &Domain) {
    println!("  {} {} (id {})", "Domain:".bold(), domain.name, domain.id);
}

fn print_records(records: &[RecordDetail]) {
    if records.is_empty() {
        return;
    }
    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    println!();
    println!("{}", Table::new(rows));
    println!();
}

pub fn print_dry_run(record_type: RecordType, records: &[RecordDetail]) {
    print_records(records);
    println!(
        "  {} {} {} records would be deleted (dry run)",
        "○".yellow(),
        records.len(),
        record_type
    );
}

pub fn print_report(report: &DeletionReport) {
    print_records(&report.records);
    println!(
        "  {} Deleted {} {} records (job {}, {} status checks)",
        "✓".green(),
        report.deleted(),
        report.record_type,
        report.job.job_id,
        report.job.polls
    );
}

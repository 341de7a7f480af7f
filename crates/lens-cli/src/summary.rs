//! Human-readable run summary printed after a successful pipeline run.

use lens_cli::pipeline::PipelineSummary;

pub fn print_summary(summary: &PipelineSummary) {
    if !summary.curated.is_empty() {
        println!("curated: {}", summary.curated.join(", "));
    }
    if !summary.data_products.is_empty() {
        println!("data products: {}", summary.data_products.join(", "));
    }
    for report in &summary.reports {
        if report.is_empty() {
            println!("  {}: no checks configured", report.dataset);
        } else {
            println!("  {}: {report}", report.dataset);
        }
    }
    if let Some(path) = &summary.report_path {
        println!("validation report: {}", path.display());
    }
}

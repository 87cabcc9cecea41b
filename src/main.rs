use clap::Parser;

use employee_report::{diagnostics, ReportConfig};

#[derive(Parser)]
#[command(name = "employee-report")]
#[command(
    version,
    about = "Employee performance HTML report generator",
    long_about = "Loads employee_data.csv (generating a seeded synthetic dataset when it is \
                  missing), counts HR employees, renders department_hist.png and writes a \
                  self-contained employee_report.html into the current directory."
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = ReportConfig::default();
    employee_report::run(&config)
        .map_err(|e| anyhow::anyhow!(diagnostics::error_message(e.to_string())))?;

    Ok(())
}

//! GradeCalc — GPA and CGPA calculator.

use std::process::ExitCode;

use gradecalc_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            gradecalc_cli::ui::print_error(&format!("{err:#}"));
            let code = errors::exit_code_for(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

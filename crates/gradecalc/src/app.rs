//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use gradecalc_cli::output::write_to_file;
use gradecalc_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use gradecalc_core::calculator::{CalculationResult, Calculator, ResultPresenter};
use gradecalc_core::mode::Mode;
use gradecalc_tui::TuiApp;

use crate::config::{AppConfig, OutputFormat};
use crate::errors::ConfigError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        gradecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    info!(version = %full_version(), "starting");
    let calculator = Calculator::new(config.grade_scale()?);
    let precision = config.checked_precision()?;

    if config.tui {
        return run_tui(config, calculator, precision);
    }
    run_cli(config, &calculator, precision)
}

/// Compute every list given on the command line.
pub fn calculate_all(config: &AppConfig, calculator: &Calculator) -> Vec<CalculationResult> {
    config
        .lists()
        .iter()
        .map(|(mode, list)| calculator.calculate(*mode, list))
        .collect()
}

fn run_cli(config: &AppConfig, calculator: &Calculator, precision: usize) -> Result<()> {
    let results = calculate_all(config, calculator);
    if results.is_empty() {
        return Err(ConfigError::NoRows.into());
    }

    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(
            config.verbose,
            config.quiet,
            precision,
        )),
        OutputFormat::Json => Box::new(JsonResultPresenter::new(precision)),
    };
    for result in &results {
        presenter.present_result(result);
    }

    if let Some(ref path) = config.output {
        // The file gets exactly what stdout shows, minus ANSI styling.
        let lines = match config.format {
            OutputFormat::Text => {
                let text = CLIResultPresenter::new(config.verbose, config.quiet, precision)
                    .without_color();
                results.iter().flat_map(|r| text.render(r)).collect()
            }
            OutputFormat::Json => {
                let json = JsonResultPresenter::new(precision);
                results
                    .iter()
                    .map(|r| json.render(r))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        write_to_file(path, &lines).with_context(|| format!("writing {path}"))?;
        info!(path, "result written");
    }

    Ok(())
}

fn run_tui(config: &AppConfig, calculator: Calculator, precision: usize) -> Result<()> {
    let mut app = TuiApp::new(calculator, precision);
    for (mode, list) in config.lists() {
        match mode {
            Mode::Gpa => app.courses = list,
            Mode::Cgpa => app.semesters = list,
        }
    }
    app.run().context("terminal error")?;
    Ok(())
}

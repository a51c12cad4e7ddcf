//! Command implementation.

use tracecmp::Error;

use crate::cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{self, Spinner};

/// Compare the two traces named on the command line.
pub fn run_command(cli: &Cli) -> i32 {
    let config = cli.compare_config();
    let spinner = (!cli.silent).then(|| {
        Spinner::new(format!(
            "Comparing {} against {}",
            cli.emulator.display(),
            cli.reference.display()
        ))
    });

    match tracecmp::compare_files(&cli.emulator, &cli.reference, &config) {
        Ok(summary) => {
            if let Some(spinner) = &spinner {
                spinner.finish_with_success(&format!("{} lines matched", summary.lines));
                let suppressed = summary.suppressed();
                if suppressed > 0 {
                    let column = config.truncate.unwrap_or_default();
                    terminal::dim(&format!(
                        "{suppressed} lines differed only after column {column}"
                    ));
                }
            }
            println!("All checks completed successfully.");
            EXIT_SUCCESS
        }
        Err(err) => {
            let message = failure_message(&err);
            spinner.as_ref().map_or_else(
                || terminal::error(&message),
                |spinner| spinner.finish_with_failure(&message),
            );
            if err.line().is_some() && !cli.silent {
                terminal::path_output("emulator: ", &cli.emulator);
                terminal::path_output("reference:", &cli.reference);
            }
            EXIT_FAILURE
        }
    }
}

/// Mismatches are prefixed so they read apart from failures to read a trace.
fn failure_message(err: &Error) -> String {
    if err.is_mismatch() {
        format!("Traces diverged. {err}")
    } else {
        err.to_string()
    }
}

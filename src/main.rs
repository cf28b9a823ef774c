use clap::Parser;
use json_merger::app::{App, MergeOutcome};
use json_merger::cli::Cli;
use json_merger::constants::process::{BIN_NAME, EXIT_FAILURE};
use json_merger::errors::{MergeError, MergeErrorKind};
use json_merger::services::logger::Logger;

fn report(err: &MergeError) {
    if err.kind == MergeErrorKind::Usage {
        eprint!("{}", err);
        return;
    }
    eprintln!("{}: {}", BIN_NAME, err);
    if let Some(hint) = &err.hint {
        eprintln!("hint: {}", hint);
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            report(&MergeError::from(err));
            std::process::exit(EXIT_FAILURE);
        }
    };

    let app = App::new(Logger::with_level(BIN_NAME, cli.log_level()), cli.merge_options());
    match app.run(&cli.request()) {
        Ok(outcome @ MergeOutcome::DryRun { .. }) => println!("{}", outcome.summary()),
        Ok(outcome) => {
            if !cli.quiet {
                println!("{}", outcome.summary());
            }
        }
        Err(err) => {
            app.logger.debug("merge failed", serde_json::to_value(&err).ok().as_ref());
            report(&err);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

extern crate clap;
extern crate colored;
extern crate log;
extern crate log_panics;
extern crate simple_logging;

mod reporting;
use self::reporting::*;

use log::LevelFilter;
use reify::declarations::*;
use reify::typing::explain_subtype;
use reify::DeclarationError;
use std::process::exit;

fn log_to_stderr() {
    log_panics::init();
    #[cfg(debug_assertions)]
    simple_logging::log_to_stderr(LevelFilter::Debug);
    #[cfg(not(debug_assertions))]
    simple_logging::log_to_stderr(LevelFilter::Error);
}

fn main() -> Result<(), clap::Error> {
    let mut app = clap::App::new("reify").subcommands(vec![
        clap::SubCommand::with_name("check").arg(
            clap::Arg::with_name("files")
                .takes_value(true)
                .multiple(true)
                .value_name("FILES"),
        ),
        clap::SubCommand::with_name("explain")
            .arg(
                clap::Arg::with_name("file")
                    .takes_value(true)
                    .required(true)
                    .value_name("FILE"),
            )
            .arg(
                clap::Arg::with_name("candidate")
                    .takes_value(true)
                    .required(true)
                    .value_name("CANDIDATE"),
            )
            .arg(
                clap::Arg::with_name("reference")
                    .takes_value(true)
                    .required(true)
                    .value_name("REFERENCE"),
            ),
    ]);
    let cli = app.clone().get_matches();

    if let None = cli.subcommand_name() {
        app.print_help()?;
        println!();
        return Ok(());
    }

    match cli.subcommand() {
        ("check", Some(matches)) => {
            log_to_stderr();
            let patterns = matches
                .values_of("files")
                .map(|f| f.collect())
                .unwrap_or(vec!["**/*.yml"]);

            if !check(patterns.as_slice()) {
                exit(1);
            }
        }

        ("explain", Some(matches)) => {
            log_to_stderr();
            let file = matches.value_of("file").unwrap_or_default();
            let candidate = matches.value_of("candidate").unwrap_or_default();
            let reference = matches.value_of("reference").unwrap_or_default();

            if let Err(e) = explain(file, candidate, reference) {
                PrettyReporter::report_error(file, &e);
                exit(1);
            }
        }

        _ => eprintln!("{}", cli.usage()),
    }

    Ok(())
}

/// Runs every check in every matching file, reporting as it goes.
fn check(patterns: &[&str]) -> bool {
    let paths = match check_files(patterns) {
        Ok(paths) => paths,
        Err(e) => {
            PrettyReporter::report_error(&patterns.join(" "), &e);
            return false;
        }
    };

    let mut summary = Summary::default();
    for path in paths {
        let file_name = path.display().to_string();
        match CheckFile::load(&path).and_then(|file| file.verify()) {
            Ok(outcomes) => {
                PrettyReporter::report_file(&file_name);
                for outcome in outcomes {
                    summary.record(&outcome);
                    PrettyReporter::report_outcome(&outcome);
                }
            }
            Err(e) => {
                summary.broken_files += 1;
                PrettyReporter::report_error(&file_name, &e);
            }
        }
    }

    PrettyReporter::report_summary(&summary);
    summary.succeeded()
}

fn explain(file: &str, candidate: &str, reference: &str) -> Result<(), DeclarationError> {
    let mut scope = Scope::new();
    scope.declare(&CheckFile::load(std::path::Path::new(file))?.declarations)?;

    let candidate = scope.evaluate_generic(candidate)?;
    let reference = scope.evaluate_generic(reference)?;

    PrettyReporter::report_assignability(&explain_subtype(&candidate, &reference)?);
    Ok(())
}

//!
//! The benchmark comparator binary.
//!

pub(crate) mod arguments;

use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => benchmark_comparator::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_comparator::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = arguments.validate()?;

    match arguments.command {
        Command::Show {
            file,
            compare,
            ignore_missing,
        } => show(file.as_path(), compare.as_deref(), ignore_missing),
        Command::Ingest {
            input,
            toolchain_version,
            binary_size,
            desc,
            platform,
            test,
            compare,
            save,
        } => {
            let base = compare.as_deref().map(load_base).transpose()?;
            let run = benchmark_comparator::BenchmarkRun::new(
                toolchain_version,
                benchmark_comparator::BenchmarkRun::timestamp_now(),
                binary_size,
                desc,
            );
            let text = read_input(input)?;
            ingest(
                &mut std::io::stdout(),
                run,
                text.as_str(),
                platform,
                test.as_ref(),
                base.as_ref(),
                save.as_deref(),
            )
        }
        Command::Groups { input } => {
            let text = read_input(input)?;
            let listing = benchmark_comparator::Listing::parse(text.lines());
            for warning in listing.warnings.iter() {
                eprintln!("{} {warning}", "warning:".bright_yellow());
            }
            for (group_name, test_names) in listing.groups.iter() {
                println!("{}:", group_name.bright_white());
                for test_name in test_names.iter() {
                    println!(
                        "  {test_name:32} {}",
                        benchmark_comparator::Listing::filter(group_name, test_name)
                    );
                }
            }
            Ok(())
        }
    }
}

///
/// Fills the run with the harness output, printing each result or its comparison
/// against the base run, and saves the run if requested.
///
/// With a requested test, output of any other test aborts the ingestion before saving.
///
fn ingest<W: Write>(
    output: &mut W,
    mut run: benchmark_comparator::BenchmarkRun,
    text: &str,
    platform: benchmark_comparator::Platform,
    test: Option<&benchmark_comparator::RequestedTest>,
    base: Option<&benchmark_comparator::BenchmarkRun>,
    save: Option<&Path>,
) -> anyhow::Result<()> {
    write!(output, "{}", run.header())?;
    writeln!(output, "NEW | BASE")?;

    let parser = benchmark_comparator::HarnessParser::new(platform);
    let results = match test {
        Some(test) => parser.parse_requested(
            text.lines(),
            test.group_name.as_str(),
            test.test_name.as_str(),
        )?,
        None => parser.parse_all(text.lines())?,
    };

    let mut comparator = benchmark_comparator::Comparator::new(false);
    for result in results.into_iter() {
        let base_result = base
            .and_then(|base| base.group(result.group_name()))
            .and_then(|group| group.get(result.test_name()));
        match base_result {
            Some(base_result) => writeln!(
                output,
                "{}",
                comparator.compare(&result, base_result)?.to_colored_string()
            )?,
            None => writeln!(output, "{result}")?,
        }
        run.new_result(result);
    }

    if base.is_some() {
        writeln!(output, "{}", comparator.finish())?;
    }
    if let Some(path) = save {
        run.write_to_file(path)?;
    }
    Ok(())
}

///
/// Prints a saved run, or its comparison against a base run.
///
fn show(path: &Path, compare: Option<&Path>, ignore_missing: bool) -> anyhow::Result<()> {
    let run = benchmark_comparator::BenchmarkRun::try_from(path)?;
    let base_path = match compare {
        Some(base_path) => base_path,
        None => {
            print!("{run}");
            return Ok(());
        }
    };

    let base = load_base(base_path)?;
    println!();
    println!("{} {}", "NEW:".bright_white(), path.display());
    print!("{}", run.header());
    println!("NEW | BASE");

    let report = benchmark_comparator::Comparator::new(ignore_missing).compare_runs(&run, &base)?;
    report.write_all(&mut std::io::stdout())?;
    Ok(())
}

///
/// Loads the base run and prints its header.
///
fn load_base(path: &Path) -> anyhow::Result<benchmark_comparator::BenchmarkRun> {
    let base = benchmark_comparator::BenchmarkRun::try_from(path)?;
    println!("{} {}", "BASE:".bright_white(), path.display());
    print!("{}", base.header());
    Ok(base)
}

///
/// Reads the harness output from a file, or from `stdin` if no path is given.
///
fn read_input(path: Option<PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Harness output file {path:?} reading: {error}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|error| anyhow::anyhow!("Harness output reading from stdin: {error}"))?;
            Ok(text)
        }
    }
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bacon_number::tracing_setup::init_tracing;
use bacon_number::{data_cleaning, Connection, GraphConfig, QueryFacade, SearchError};

const USAGE: &str = "usage: bacon-number [--config FILE] [DATASET]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    config: Option<PathBuf>,
    dataset: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => parsed.help = true,
            _ if parsed.dataset.is_none() && !arg.starts_with('-') => {
                parsed.dataset = Some(PathBuf::from(arg));
            }
            _ => bail!("unexpected argument {arg:?}\n{USAGE}"),
        }
    }
    Ok(parsed)
}

/// Next input line without its line ending, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    writeln!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

fn report(out: &mut impl Write, label: &str, result: &Result<Connection, SearchError>) -> Result<()> {
    match result {
        Ok(connection) => {
            for hop in &connection.hops {
                writeln!(out, "{hop}")?;
            }
            writeln!(out, "{label}: {}", connection.distance)?;
        }
        Err(e) => writeln!(out, "No result: {e}")?,
    }
    Ok(())
}

fn run_menu(queries: &QueryFacade, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        writeln!(out, "Please enter your operation type:")?;
        writeln!(
            out,
            "1. Find Bacon Number (distance of an actor to {})",
            queries.reference_actor()
        )?;
        writeln!(out, "2. Find Distance (distance of two actors)")?;
        let Some(choice) = prompt(input, out, "q. Quit")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(actor) = prompt(input, out, "Please enter an actor name (example: Bacon, Kevin):")? else {
                    break;
                };
                report(out, "Bacon Number", &queries.bacon_number(&actor))?;
            }
            "2" => {
                let Some(first) = prompt(input, out, "Please enter first actor name:")? else {
                    break;
                };
                let Some(second) = prompt(input, out, "Please enter second actor name:")? else {
                    break;
                };
                report(out, "Distance", &queries.pairwise_distance(&first, &second))?;
            }
            "q" | "Q" | "quit" => break,
            _ => writeln!(out, "Invalid choice")?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GraphConfig::default(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let dataset = match args.dataset {
        Some(path) => path,
        None => prompt(&mut input, &mut out, "Please enter file path:")?
            .map(PathBuf::from)
            .context("no dataset path given")?,
    };

    let records = data_cleaning::parse_file(&dataset, config.delimiter_byte())
        .with_context(|| format!("loading dataset {}", dataset.display()))?;
    let queries = QueryFacade::from_records(records, &config);

    run_menu(&queries, &mut input, &mut out)
}

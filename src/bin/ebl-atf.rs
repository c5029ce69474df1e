//! Command-line interface for ebl-atf
//! Parses, cleans and maps ATF transliterations to signs.
//!
//! Usage:
//!   ebl-atf parse `<path>` [--format json|summary]     - Parse and print the lines
//!   ebl-atf clean `<path>`                             - Print the cleaned transliteration
//!   ebl-atf signs `<path>` [--catalog `<json>`]          - Print the signs of each line
//!   ebl-atf search `<path>` --query `<atf>` [--catalog `<json>`] - Find lines by their signs
//!
//! Configuration is read from `./ebl-atf.toml` if present, then from `--config`.

use std::error::Error;
use std::fs;

use clap::{Arg, ArgAction, ArgMatches, Command};
use ebl_atf::atf::ast::records::text_to_records;
use ebl_atf::atf::config::{AtfConfig, Loader};
use ebl_atf::atf::signs::{MemorySignRepository, SignList, SignQuery};
use ebl_atf::atf::{clean_transliteration, parse_atf};

const LOCAL_CONFIG: &str = "ebl-atf.toml";

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the ATF file")
        .required(true)
        .index(1)
}

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .help("Path to a JSON sign catalog (overrides signs.catalog)")
}

fn cli() -> Command {
    Command::new("ebl-atf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing ATF transliterations")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an ATF document and print its lines")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["json", "summary"])
                        .default_value("json")
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("clean")
                .about("Print the cleaned transliteration, one line per text line")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("signs")
                .about("Print the signs of each text line")
                .arg(path_arg())
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Print the line windows whose signs match a query")
                .arg(path_arg())
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .required(true)
                        .help("Query transliteration, lines separated by newlines"),
                )
                .arg(catalog_arg()),
        )
}

fn main() {
    let matches = cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    if let Err(e) = run(&matches, &config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<AtfConfig, Box<dyn Error>> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let catalog = matches
        .subcommand()
        .and_then(|(_, sub)| sub.try_get_one::<String>("catalog").ok().flatten());
    if let Some(catalog) = catalog {
        loader = loader.with_catalog(catalog)?;
    }
    match matches.get_count("verbose") {
        0 => {}
        1 => loader = loader.with_log_level("debug")?,
        _ => loader = loader.with_log_level("trace")?,
    }
    Ok(loader.build()?)
}

fn init_logging(config: &AtfConfig) {
    let level = config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, config: &AtfConfig) -> Result<(), Box<dyn Error>> {
    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub, config),
        Some(("clean", sub)) => handle_clean_command(sub),
        Some(("signs", sub)) => handle_signs_command(sub, config),
        Some(("search", sub)) => handle_search_command(sub, config),
        _ => Err("a subcommand is required".into()),
    }
}

fn read_source(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("path is required")?;
    fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e).into())
}

fn load_sign_list(config: &AtfConfig) -> Result<SignList<MemorySignRepository>, Box<dyn Error>> {
    let repository = match config.signs.catalog_path() {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| format!("Cannot read catalog {}: {}", path.display(), e))?;
            MemorySignRepository::from_json(&json)?
        }
        None => {
            tracing::warn!("no sign catalog configured, every reading is unknown");
            MemorySignRepository::default()
        }
    };
    tracing::debug!(signs = repository.signs().len(), "sign catalog loaded");
    Ok(SignList::new(repository))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &AtfConfig) -> Result<(), Box<dyn Error>> {
    let text = parse_atf(&read_source(matches)?)?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");

    let formatted = match format {
        "summary" => text
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| format!("{:>4} {:<20} {}", index + 1, line.type_name(), line.atf()))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => {
            let records = text_to_records(&text);
            if config.output.pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            }
        }
    };
    println!("{}", formatted);
    Ok(())
}

/// Handle the clean command
fn handle_clean_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for line in clean_transliteration(&read_source(matches)?) {
        println!("{}", line);
    }
    Ok(())
}

/// Handle the signs command
fn handle_signs_command(matches: &ArgMatches, config: &AtfConfig) -> Result<(), Box<dyn Error>> {
    let sign_list = load_sign_list(config)?;
    let cleaned = clean_transliteration(&read_source(matches)?);
    println!("{}", sign_list.signs_of(&cleaned));
    Ok(())
}

/// Handle the search command. Prints each matching window of cleaned lines, windows
/// separated by a blank line.
fn handle_search_command(matches: &ArgMatches, config: &AtfConfig) -> Result<(), Box<dyn Error>> {
    let sign_list = load_sign_list(config)?;
    let cleaned = clean_transliteration(&read_source(matches)?);
    let query = matches
        .get_one::<String>("query")
        .ok_or("query is required")?;
    let query = SignQuery::from_transliteration(query, &sign_list);

    let windows = query
        .matching_lines(&sign_list.signs_of(&cleaned))
        .into_iter()
        .map(|range| cleaned[range].join("\n"))
        .collect::<Vec<_>>();
    tracing::debug!(matches = windows.len(), "search finished");
    if !windows.is_empty() {
        println!("{}", windows.join("\n\n"));
    }
    Ok(())
}

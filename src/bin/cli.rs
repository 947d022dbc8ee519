use anyhow::{Context, Result, bail};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;
use trashcal::classify::Classifier;
use trashcal::config::Config;
use trashcal::model::{CalendarEvent, SummaryMatcher};

fn main() -> Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;
    let mut entity = "calendar".to_string();
    let mut as_json = false;
    let mut events_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            "--config" => {
                i += 1;
                config_path = Some(
                    args.get(i)
                        .context("--config requires a file path")?
                        .clone(),
                );
            }
            "--entity" => {
                i += 1;
                entity = args
                    .get(i)
                    .context("--entity requires an entity id")?
                    .clone();
            }
            "--json" => as_json = true,
            other if other.starts_with('-') => bail!("unknown option '{}'", other),
            other => events_file = Some(other.to_string()),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };

    let raw = match &events_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read events file '{}'", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read events from stdin")?;
            buf
        }
    };

    let events = parse_events(&raw, &events_file, &entity)?;

    let matcher = SummaryMatcher;
    let classifier = Classifier::new(
        &config.rules,
        &config.overrides,
        config.use_summary,
        &matcher,
    );
    let items = classifier.classify_all(&events)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            let date = item
                .start
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<12} {:<24} {:<30} {}",
                date,
                item.item_type,
                item.label,
                item.icon.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

/// Events arrive either as an ICS export or as a JSON array of events.
/// The format is taken from the file extension, falling back to sniffing
/// the ICS preamble for stdin input.
fn parse_events(
    raw: &str,
    events_file: &Option<String>,
    entity: &str,
) -> Result<Vec<CalendarEvent>> {
    let looks_like_ics = match events_file {
        Some(path) => path.to_lowercase().ends_with(".ics"),
        None => raw.trim_start().starts_with("BEGIN:VCALENDAR"),
    };

    if looks_like_ics {
        CalendarEvent::events_from_ics(raw, entity)
    } else {
        serde_json::from_str(raw).context("Failed to parse events JSON")
    }
}

fn print_help() {
    println!(
        "trashcal v{} - Classifies waste-collection calendar events into pickup items",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    trashcal [OPTIONS] [EVENTS_FILE]");
    println!();
    println!("Events are read from EVENTS_FILE or stdin, either as an ICS export");
    println!("(.ics) or as a JSON array of events.");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>     TOML configuration (default: built-in rules)");
    println!("    --entity <id>       Entity id attached to ICS events (default: calendar)");
    println!("    --json              Print items as JSON instead of a table");
    println!("    --help              Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    trashcal --config trashcal.toml schedule.ics");
    println!("    curl ... | trashcal --json");
}

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use rpt_core::{SuburbStatus, Tracker, TrackerConfig};
use rpt_roster::{EditorName, SuburbName};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("rpt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Road editing progress tracker")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .default_value("rpt.toml")
                .help("Deployment configuration file"),
        )
        .subcommand(Command::new("editors").about("List editors"))
        .subcommand(Command::new("status").about("Per-suburb status table"))
        .subcommand(Command::new("summary").about("Per-editor progress summary"))
        .subcommand(
            Command::new("complete")
                .about("Persist an editor's completed selection")
                .arg(
                    Arg::new("editor")
                        .long("editor")
                        .required(true)
                        .help("Editor saving the selection"),
                )
                .arg(
                    Arg::new("suburbs")
                        .action(ArgAction::Append)
                        .help("Completed suburb names (the full selection)"),
                ),
        )
        .subcommand(
            Command::new("reassign")
                .about("Reassign a suburb to another editor")
                .arg(Arg::new("suburb").required(true).help("Suburb to reassign"))
                .arg(Arg::new("editor").required(true).help("New responsible editor")),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let config_path = PathBuf::from(matches.get_one::<String>("config").unwrap());
    let config = if config_path.exists() {
        TrackerConfig::from_path(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
    } else {
        tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
        TrackerConfig::default()
    };
    let tracker = Tracker::from_config(&config);

    match matches.subcommand() {
        Some(("editors", _)) => {
            for editor in tracker.editors()? {
                println!("{editor}");
            }
        }
        Some(("status", _)) => {
            println!("{:<24} {:<12} {:<12} {}", "Suburb", "Assigned", "Status", "Completed by");
            for row in tracker.status_table()? {
                let assigned = row
                    .assigned
                    .as_ref()
                    .map_or("-", EditorName::as_str);
                let (status, by) = match &row.status {
                    SuburbStatus::Complete { by } => ("Complete", by.as_str()),
                    SuburbStatus::NotStarted => ("Not Started", "-"),
                };
                println!("{:<24} {:<12} {:<12} {}", row.name.as_str(), assigned, status, by);
            }
        }
        Some(("summary", _)) => {
            println!("{:<12} {:>9} {:>6} {:>10}", "Editor", "Completed", "Total", "Progress");
            for row in tracker.summary()? {
                println!(
                    "{:<12} {:>9} {:>6} {:>9.1}%",
                    row.editor.as_str(),
                    row.completed,
                    row.total,
                    row.percent
                );
            }
            let overall = tracker.overall()?;
            println!();
            println!(
                "{} / {} suburbs completed ({:.1}%)",
                overall.completed, overall.total, overall.percent
            );
        }
        Some(("complete", args)) => {
            let editor = EditorName::new(args.get_one::<String>("editor").unwrap())
                .context("invalid editor name")?;
            let selected: BTreeSet<SuburbName> = match args.get_many::<String>("suburbs") {
                Some(values) => values
                    .map(|s| SuburbName::new(s).context("invalid suburb name"))
                    .collect::<anyhow::Result<_>>()?,
                None => BTreeSet::new(),
            };

            let receipt = tracker.mark_completed(&editor, &selected)?;
            println!("{} suburbs on record for {editor}:", receipt.persisted.len());
            for suburb in &receipt.persisted {
                println!("  {suburb}");
            }
            if let Some(notice) = receipt.sync.notice() {
                println!("note: {notice}");
            }
        }
        Some(("reassign", args)) => {
            let suburb = SuburbName::new(args.get_one::<String>("suburb").unwrap())
                .context("invalid suburb name")?;
            let editor = EditorName::new(args.get_one::<String>("editor").unwrap())
                .context("invalid editor name")?;

            let outcome = tracker.reassign(suburb.clone(), editor.clone())?;
            println!("{suburb} is now assigned to {editor}");
            if let Some(notice) = outcome.notice() {
                println!("note: {notice}");
            }
        }
        _ => {}
    }
    Ok(())
}

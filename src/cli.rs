use crate::config::PipelineConfig;
use crate::data::validate::validate_catalogs;
use crate::data::{load_crew, load_items, ItemIndex};
use crate::pipeline;

pub const USAGE: &str = "usage: datacore <run|precalculate|botcrew|validate> [static_dir]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Precalculate,
    BotCrew,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("run") => Some(Command::Run),
        Some("precalculate") => Some(Command::Precalculate),
        Some("botcrew") => Some(Command::BotCrew),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

/// Environment config, re-rooted at the positional static directory when given.
pub fn config_from_args(args: &[String]) -> PipelineConfig {
    let config = PipelineConfig::from_env();
    match args.get(2) {
        Some(static_dir) => PipelineConfig {
            bot_mirror_path: config.bot_mirror_path,
            ..PipelineConfig::rooted_at(static_dir)
        },
        None => config,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };
    let config = config_from_args(args);
    match command {
        Command::Run => handle_run(&config),
        Command::Precalculate => handle_precalculate(&config),
        Command::BotCrew => handle_botcrew(&config),
        Command::Validate => handle_validate(&config),
    }
}

fn print_summary<T: serde::Serialize>(summary: &T) -> i32 {
    match serde_json::to_string_pretty(summary) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize summary: {err}");
            1
        }
    }
}

fn handle_run(config: &PipelineConfig) -> i32 {
    match pipeline::run(config) {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            eprintln!("run failed: {err}");
            1
        }
    }
}

fn handle_precalculate(config: &PipelineConfig) -> i32 {
    match pipeline::precalculate(config) {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            eprintln!("precalculate failed: {err}");
            1
        }
    }
}

fn handle_botcrew(config: &PipelineConfig) -> i32 {
    match pipeline::export_bot_crew(config) {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            eprintln!("bot export failed: {err}");
            1
        }
    }
}

fn handle_validate(config: &PipelineConfig) -> i32 {
    let catalogs = load_crew(config.crew_path())
        .and_then(|crew| Ok((crew, load_items(config.items_path())?)));
    let (crew, items) = match catalogs {
        Ok(catalogs) => catalogs,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    let report = validate_catalogs(&crew, &ItemIndex::new(items));
    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {report}");
        1
    } else {
        println!("validation passed: {} crew ({report})", crew.len());
        0
    }
}

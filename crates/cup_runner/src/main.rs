//! Cup CLI
//!
//! Generate cup schedules and show cup standings from the league's files.

use anyhow::{bail, Context, Result};
use chrono::Local;
use cup_core::{Cup, CupEngine, CupView, ScheduleGenerator};
use cup_runner::{
    cup_report, current_cutoff, merge_live, read_live, read_schedule, read_teams, read_weeks,
    schedule_path, standings_report, write_schedule, LeagueConfig, DEFAULT_CONFIG_PATH,
};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

fn print_usage() {
    println!("Mini-league Cup Runner");
    println!();
    println!("Usage:");
    println!("  cup generate [--cups N] [--seed S]");
    println!("  cup standings <cup> [--json] [--live FILE]");
    println!("  cup view <cup> [--json] [--live FILE]");
    println!();
    println!("Options:");
    println!("  --config FILE   League config (default: {DEFAULT_CONFIG_PATH})");
    println!("  --live FILE     JSON live scores merged into the current week");
    println!("  --json          Print JSON instead of a text report");
    println!();
    println!("Examples:");
    println!("  cup generate --cups 5 --seed 2025");
    println!("  cup view 2 --live live.json");
}

/// Options shared by the `standings` and `view` commands
#[derive(Debug, Default)]
struct ViewArgs {
    cup: u32,
    json: bool,
    live: Option<PathBuf>,
}

fn parse_view_args(args: &[String]) -> Result<ViewArgs> {
    let Some(cup) = args.first() else {
        bail!("a cup number is required");
    };
    let mut parsed = ViewArgs {
        cup: cup
            .parse()
            .with_context(|| format!("Invalid cup number: {cup}"))?,
        ..Default::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => parsed.json = true,
            "--live" | "-l" => {
                if i + 1 < args.len() {
                    parsed.live = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn load_view(config: &LeagueConfig, args: &ViewArgs) -> Result<CupView> {
    let cutoff = current_cutoff(&config.deadlines_file, Local::now().naive_local());
    info!(
        week = cutoff.current_week,
        deadline_passed = cutoff.deadline_passed,
        "current gameweek"
    );

    let mut scores = read_weeks(&config.weeks_file)?;
    if let Some(path) = &args.live {
        if cutoff.deadline_passed {
            let entries = read_live(path)?;
            let report = merge_live(&mut scores, &entries, cutoff.current_week);
            info!(matched = report.matched.len(), "merged live scores");
        } else {
            info!("deadline not passed yet, ignoring live scores");
        }
    }

    let schedule = read_schedule(&schedule_path(&config.schedule_dir, args.cup))?;
    let view = CupEngine::new()
        .with_cutoff(cutoff)
        .build_cup_view(args.cup, &schedule, &scores)
        .with_context(|| format!("Failed to build cup {}", args.cup))?;
    Ok(view)
}

fn run_generate(config: &LeagueConfig, args: &[String]) -> Result<()> {
    let mut cups = config.cups;
    let mut seed: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cups" | "-c" => {
                if i + 1 < args.len() {
                    cups = args[i + 1]
                        .parse()
                        .with_context(|| format!("Invalid cup count: {}", args[i + 1]))?;
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = Some(
                        args[i + 1]
                            .parse()
                            .with_context(|| format!("Invalid seed: {}", args[i + 1]))?,
                    );
                    i += 1;
                }
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 1;
    }

    let teams = read_teams(&config.teams_file)?;
    let seed = seed.unwrap_or_else(rand::random);
    info!(teams = teams.len(), cups, seed, "generating cup schedules");

    let generator = ScheduleGenerator::new(config.schedule);
    let schedules = generator.generate_many(&teams, cups, seed)?;

    for (number, schedule) in (1..).zip(schedules) {
        let cup = Cup::from_generated(number, schedule)?;
        let path = schedule_path(&config.schedule_dir, number);
        write_schedule(&path, cup.schedule())?;

        println!("Cup {} saved to {}", number, path.display());
        println!(
            "  - weeks {}-{}, {} rounds, {} fixtures",
            cup.weeks().start_week,
            cup.weeks().end_week,
            cup.schedule().rounds().len(),
            cup.schedule().fixtures().count()
        );
    }
    Ok(())
}

fn run_standings(config: &LeagueConfig, args: &[String]) -> Result<()> {
    let args = parse_view_args(args)?;
    let view = load_view(config, &args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.standings)?);
    } else {
        print!("{}", standings_report(&view.standings));
    }
    Ok(())
}

fn run_view(config: &LeagueConfig, args: &[String]) -> Result<()> {
    let args = parse_view_args(args)?;
    let view = load_view(config, &args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", cup_report(&config.name, &view));
    }
    Ok(())
}

/// Pull `--config FILE` out of the arguments
fn take_config_path(args: &mut Vec<String>) -> PathBuf {
    match args.iter().position(|arg| arg == "--config") {
        Some(i) if i + 1 < args.len() => {
            let path = PathBuf::from(args.remove(i + 1));
            args.remove(i);
            path
        }
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().collect();
    let config_path = take_config_path(&mut args);

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let base = config_path.parent().unwrap_or(Path::new("."));
    let config = LeagueConfig::load(&config_path)?.resolve_paths(base);

    match args[1].as_str() {
        "generate" | "gen" => run_generate(&config, &args[2..]),
        "standings" | "table" => run_standings(&config, &args[2..]),
        "view" | "cup" => run_view(&config, &args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            Ok(())
        }
    }
}

//! Tournament CLI
//!
//! Draw groups, resolve single matches, or run a full tournament from the
//! embedded 48-team roster.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use wc_core::engine::rng::{self, SimRng};
use wc_core::{
    generate_draw, generate_draw_seeded, lookup_team, resolve_decisive, simulate_tournament,
    GroupResult, Round, TournamentReport,
};

#[derive(Parser)]
#[command(name = "wc_cli")]
#[command(about = "World Cup draw and tournament simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the 48 teams into 12 groups
    Draw {
        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Resolve a single match between two team ids (e.g. ESP BRA)
    Match {
        team1: String,
        team2: String,

        /// RNG seed for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the full pipeline: draw, group stage, knockout bracket
    Tournament {
        /// RNG seed for a reproducible tournament
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of a report
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Draw { seed, json } => run_draw(seed, json),
        Commands::Match { team1, team2, seed } => run_match(&team1, &team2, seed),
        Commands::Tournament { seed, json } => run_tournament(seed, json),
    }
}

fn make_rng(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => rng::seeded(seed),
        None => rng::unseeded(),
    }
}

fn run_draw(seed: Option<u64>, json: bool) -> Result<()> {
    let groups = match seed {
        Some(seed) => generate_draw_seeded(seed)?,
        None => generate_draw()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }
    print_groups(&groups);
    Ok(())
}

fn run_match(team1: &str, team2: &str, seed: Option<u64>) -> Result<()> {
    let team1 = lookup_team(team1).ok_or_else(|| anyhow!("unknown team id: {}", team1))?;
    let team2 = lookup_team(team2).ok_or_else(|| anyhow!("unknown team id: {}", team2))?;

    let mut rng = make_rng(seed);
    let resolved = resolve_decisive(team1, team2, &mut rng);
    println!("{} {} {}", team1.name, resolved.score, team2.name);
    println!("Winner: {}", resolved.winner.name);
    Ok(())
}

fn run_tournament(seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = make_rng(seed);
    let report = simulate_tournament(&mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_report(&report);
    Ok(())
}

fn print_groups(groups: &[GroupResult]) {
    for group in groups {
        println!("Group {}", group.group);
        for team in &group.teams {
            println!(
                "  {:<24} {:<9} pot {}  rank {}",
                team.name,
                team.confederation.code(),
                team.pot,
                team.rank
            );
        }
        println!();
    }
}

fn print_report(report: &TournamentReport) {
    print_groups(&report.groups);

    for table in &report.standings {
        println!("Group {} table", table.group);
        println!("  {:<10} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}", "team", "P", "W", "D", "L", "GD", "Pts");
        for line in &table.standings {
            println!(
                "  {:<10} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
                line.team,
                line.played,
                line.won,
                line.drawn,
                line.lost,
                line.goal_difference,
                line.points
            );
        }
        println!();
    }

    for round in Round::ALL {
        println!("{}", round.code());
        for m in report.matches.iter().filter(|m| m.round == round) {
            let team1 = m.team1.as_ref().map(|t| t.name.as_str()).unwrap_or("?");
            let team2 = m.team2.as_ref().map(|t| t.name.as_str()).unwrap_or("?");
            let score = m.score.map(|s| s.to_string()).unwrap_or_default();
            println!("  {:>2}. {} {} {}", m.number, team1, score, team2);
        }
        println!();
    }

    println!("Champion: {}", report.champion);
}

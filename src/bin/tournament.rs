//! Command line front end: runs one tournament operation against a JSON store file.
//! Run with: cargo run --bin tournament -- <command>
//! The store file is `tournament.json` by default.
//! Override with --store or env: TOURNAMENT_STORE (e.g. /var/lib/swiss/club.json).

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use swiss_pairings::{
    interchange, JsonFileStore, Pairing, StandingsRow, StoreError, Tournament, TournamentError,
};

#[derive(Parser)]
#[command(name = "tournament", version, about = "Swiss-system tournament standings and pairings")]
struct Cli {
    /// Tournament file (default: $TOURNAMENT_STORE or tournament.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a player
    Register { name: String },
    /// Register every entry of the `name` column of a CSV file
    Import { csv: PathBuf },
    /// Print the number of registered players
    Count,
    /// Print the standings, best first
    Standings {
        /// Output CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Record a match result
    Report { winner: u32, loser: u32 },
    /// Print the pairings for the next round
    Pairings {
        /// Output CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Delete all match records
    DeleteMatches,
    /// Delete all players and match records
    DeletePlayers,
}

fn default_store() -> PathBuf {
    PathBuf::from("tournament.json")
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let path = cli
        .store
        .or_else(|| std::env::var_os("TOURNAMENT_STORE").map(PathBuf::from))
        .unwrap_or_else(default_store);
    let mut tournament = Tournament::new(JsonFileStore::new(path));
    log::debug!("Using store at {}", tournament.store().path().display());
    if let Err(e) = run(&mut tournament, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(
    tournament: &mut Tournament<JsonFileStore>,
    command: Command,
) -> Result<(), TournamentError> {
    match command {
        Command::Register { name } => {
            let id = tournament.register_player(&name)?;
            println!("{id}");
        }
        Command::Import { csv } => {
            let file = File::open(&csv).map_err(|source| StoreError::Io {
                path: csv.clone(),
                source,
            })?;
            let names = interchange::read_roster(BufReader::new(file))?;
            for name in &names {
                tournament.register_player(name)?;
            }
            log::info!("Imported {} player(s) from {}", names.len(), csv.display());
        }
        Command::Count => println!("{}", tournament.count_players()?),
        Command::Standings { csv } => {
            let rows = tournament.player_standings()?;
            if csv {
                interchange::write_standings(&rows, io::stdout().lock())?;
            } else {
                print_standings(&rows);
            }
        }
        Command::Report { winner, loser } => tournament.report_match(winner, loser)?,
        Command::Pairings { csv } => {
            let pairings = tournament.swiss_pairings()?;
            if csv {
                interchange::write_pairings(&pairings, io::stdout().lock())?;
            } else {
                print_pairings(&pairings);
            }
        }
        Command::DeleteMatches => tournament.delete_matches()?,
        Command::DeletePlayers => tournament.delete_players()?,
    }
    Ok(())
}

fn print_standings(rows: &[StandingsRow]) {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    println!("  # |   Id | {:<name_width$} | Wins | Matches", "Name");
    println!("----|------|-{}-|------|--------", "-".repeat(name_width));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:>4} | {:<name_width$} | {:>4} | {:>7}",
            i + 1,
            r.id,
            r.name,
            r.wins,
            r.matches,
        );
    }
}

fn print_pairings(pairings: &[Pairing]) {
    for (i, p) in pairings.iter().enumerate() {
        println!(
            "Table {}: #{} {} vs #{} {}",
            i + 1,
            p.id_1,
            p.name_1,
            p.id_2,
            p.name_2
        );
    }
}

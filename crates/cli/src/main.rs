mod config;
mod render;

use anyhow::{Context, Result};
use candidate_model::{Candidate, CandidateId};
use clap::{Parser, Subcommand};
use config::{GlobalArgs, ViewArgs};
use render::{print_candidates, print_message};
use sources::{GithubClient, SearchBoard};
use std::collections::HashSet;
use storage::{FileStore, SaveOutcome, SavedCandidates};
use tracing::info;

/// Candidate Search - find GitHub users and keep a shortlist
#[derive(Parser)]
#[command(name = "candidate-search")]
#[command(about = "Search GitHub users and save candidates for later review", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a random batch of GitHub users
    Random {
        #[command(flatten)]
        view: ViewArgs,

        /// Save every candidate shown
        #[arg(long)]
        save_all: bool,
    },

    /// Look up one GitHub user by login
    User {
        /// GitHub login to look up
        login: String,
    },

    /// Look up a GitHub user and save them
    Save {
        /// GitHub login to save
        login: String,
    },

    /// Show saved candidates
    Saved {
        #[command(flatten)]
        view: ViewArgs,

        /// Fail instead of showing an empty list when the store is corrupt
        #[arg(long)]
        strict: bool,
    },

    /// Remove a saved candidate by id
    Remove {
        /// Candidate id (GitHub account id)
        id: CandidateId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let saved = cli.global.saved_candidates();
    info!("Using candidate store {}", cli.global.store.display());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Random { view, save_all } => {
            let client = build_client(&cli.global)?;
            handle_random(&client, &saved, &view, save_all).await?
        }
        Commands::User { login } => {
            let client = build_client(&cli.global)?;
            handle_user(&client, &saved, &login, false).await?
        }
        Commands::Save { login } => {
            let client = build_client(&cli.global)?;
            handle_user(&client, &saved, &login, true).await?
        }
        Commands::Saved { view, strict } => handle_saved(&saved, &view, strict)?,
        Commands::Remove { id } => handle_remove(&saved, id)?,
    }

    Ok(())
}

fn build_client(global: &GlobalArgs) -> Result<GithubClient> {
    GithubClient::new(global.client_config()).context("Failed to configure GitHub client")
}

/// Handle the 'random' command
async fn handle_random(
    client: &GithubClient,
    saved: &SavedCandidates<FileStore>,
    view: &ViewArgs,
    save_all: bool,
) -> Result<()> {
    let mut board = SearchBoard::new();
    board.load_random(client).await;
    if let Some(message) = board.message() {
        print_message(message, false);
    }

    let rows = pipeline::process(board.candidates(), &view.criteria(), view.directive());

    if save_all {
        let mut added = 0;
        for candidate in &rows {
            if saved.save(candidate)? == SaveOutcome::Saved {
                added += 1;
            }
        }
        print_message(
            &format!("Saved {} new candidate(s) of {}", added, rows.len()),
            true,
        );
    }

    print_candidates(
        "GitHub Candidate Search",
        &rows,
        &saved_ids(saved)?,
        "No candidates found",
    );
    Ok(())
}

/// Handle the 'user' and 'save' commands
async fn handle_user(
    client: &GithubClient,
    saved: &SavedCandidates<FileStore>,
    login: &str,
    save: bool,
) -> Result<()> {
    let mut board = SearchBoard::new();
    board.search_login(client, login).await;

    let mut success = false;
    if let Some(candidate) = board.candidates().first().cloned().filter(|_| save) {
        let outcome = saved
            .save(&candidate)
            .with_context(|| format!("Failed to save {}", candidate.login))?;
        board.set_message(outcome.message());
        success = outcome == SaveOutcome::Saved;
    }
    if let Some(message) = board.message() {
        print_message(message, success);
    }

    print_candidates(
        "GitHub Candidate Search",
        board.candidates(),
        &saved_ids(saved)?,
        "No candidates found",
    );
    Ok(())
}

/// Handle the 'saved' command
fn handle_saved(saved: &SavedCandidates<FileStore>, view: &ViewArgs, strict: bool) -> Result<()> {
    let candidates = if strict {
        saved.try_load_all().context("Saved candidates could not be read")?
    } else {
        saved.load_all().context("Failed to read candidate store")?
    };

    let rows = pipeline::process(&candidates, &view.criteria(), view.directive());
    print_candidates(
        "Saved Candidates",
        &rows,
        &ids_of(&candidates),
        "No saved candidates yet",
    );
    Ok(())
}

/// Handle the 'remove' command
fn handle_remove(saved: &SavedCandidates<FileStore>, id: CandidateId) -> Result<()> {
    let before = saved
        .try_load_all()
        .context("Saved candidates could not be read")?;
    let remaining = saved
        .remove(id)
        .with_context(|| format!("Failed to remove candidate {}", id))?;

    if remaining.len() < before.len() {
        print_message(&format!("Removed candidate {}", id), true);
    } else {
        print_message(&format!("Candidate {} was not saved", id), false);
    }

    print_candidates(
        "Saved Candidates",
        &remaining,
        &ids_of(&remaining),
        "No saved candidates yet",
    );
    Ok(())
}

fn saved_ids(saved: &SavedCandidates<FileStore>) -> Result<HashSet<CandidateId>> {
    let candidates = saved.load_all().context("Failed to read candidate store")?;
    Ok(ids_of(&candidates))
}

fn ids_of(candidates: &[Candidate]) -> HashSet<CandidateId> {
    candidates.iter().map(|c| c.id).collect()
}

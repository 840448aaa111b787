use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::{
    chat::{ChatAssistant, HttpChatBackend, ReplySource},
    config::Config,
    github::{GithubClient, RepoSource},
    logging,
    models::ProfileSummary,
    projects::{ListRow, ProjectList},
    tagger,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio project list builder — fetches repositories and tags every card")]
#[command(version)]
struct Cli {
    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the project list
    Projects {
        /// Show every project instead of the collapsed view
        #[arg(long)]
        all: bool,
        /// Print list-item markup instead of text
        #[arg(long)]
        html: bool,
        /// GitHub account (overrides config)
        #[arg(long)]
        username: Option<String>,
    },
    /// Extract skill tags from a local README
    Tags {
        /// README-like file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Ask the portfolio assistant a question
    Chat {
        /// Message to send
        #[arg(value_name = "MESSAGE")]
        message: String,
    },
    /// Summarize the account's repositories
    Profile {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// GitHub account (overrides config)
        #[arg(long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load configuration (falls back to defaults if not found)
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Projects {
            all,
            html,
            username,
        } => {
            let mut github = config.github.clone();
            if let Some(username) = username {
                github.username = username;
            }
            let client = Arc::new(GithubClient::new(github)?);
            let mut list = ProjectList::new(Arc::clone(&client), config.projects.visible);

            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .context("Invalid progress template")?,
            );
            pb.set_message(format!("Fetching projects for {}...", client.username()));
            pb.enable_steady_tick(Duration::from_millis(100));

            // A failed listing still renders its error row below
            if list.load().await.is_ok() && all {
                if let Some(job) = list.toggle() {
                    pb.set_message("Expanding project list...");
                    job.run().await;
                }
            }
            pb.finish_and_clear();

            for row in list.rows() {
                match row {
                    ListRow::Card(card) if html => println!("{}", card.to_html()),
                    ListRow::Card(card) => println!("{}\n", card),
                    ListRow::Error(message) => println!("⚠️  {}", message),
                }
            }

            if let Some(label) = list.toggle_label() {
                println!(
                    "[{}] ({} of {} projects shown)",
                    label,
                    list.view().len(),
                    list.collection().len()
                );
            }
        }
        Commands::Tags { file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()))?;

            let labels = tagger::extract(&content);
            if labels.is_empty() {
                println!("No tags found in {}", file.display());
            } else {
                println!("Tags: {}", labels.as_slice().join(", "));
            }
        }
        Commands::Chat { message } => {
            let backend = HttpChatBackend::new(&config.chat)?;
            let assistant = ChatAssistant::new(backend);

            match assistant.reply(&message).await {
                Some(reply) => {
                    if reply.source == ReplySource::Canned {
                        println!("ℹ️  Assistant offline, answering from saved replies");
                    }
                    println!("{}", reply.text);
                }
                None => println!("Nothing to send."),
            }
        }
        Commands::Profile { json, username } => {
            let mut github = config.github.clone();
            if let Some(username) = username {
                github.username = username;
            }
            let client = GithubClient::new(github)?;
            let repos = client
                .list_repositories()
                .await
                .context("Failed to fetch repositories")?;
            let summary = ProfileSummary::from_repos(client.username(), &repos);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("GitHub: {}", summary.username);
                println!("Repositories: {}", summary.total_repos);
                println!("Stars: {}", summary.total_stars);
                println!("\nTop projects:");
                for (i, repo) in summary.top_projects.iter().enumerate() {
                    println!(
                        "{}. {} ({}★, {} forks) — {}",
                        i + 1,
                        repo.name,
                        repo.stars,
                        repo.forks,
                        repo.language.as_deref().unwrap_or("n/a")
                    );
                    if let Some(description) = repo.description.as_deref() {
                        println!("   {}", description);
                    }
                }
            }
        }
    }

    Ok(())
}

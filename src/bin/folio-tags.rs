use anyhow::{Context, Result};
use clap::Parser;
use folio::{
    config::Config,
    github::{GithubClient, RepoSource},
    logging,
    projects::enrich,
    tagger,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-tags")]
#[command(about = "Tag a README file, or build the card of one repository")]
#[command(version)]
struct Cli {
    /// README-like file to tag
    #[arg(value_name = "FILE", required_unless_present = "repo")]
    file: Option<PathBuf>,

    /// Repository of the configured account to fetch and tag instead
    #[arg(long, conflicts_with = "file")]
    repo: Option<String>,

    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load().unwrap_or_default();

    if let Some(name) = cli.repo {
        let client = GithubClient::new(config.github.clone())?;
        let repos = client
            .list_repositories()
            .await
            .context("Failed to fetch repositories")?;
        let repo = repos
            .iter()
            .find(|repo| repo.name == name)
            .with_context(|| format!("No repository named {} for {}", name, client.username()))?;

        println!("{}", enrich(&client, repo).await);
        return Ok(());
    }

    let file = cli.file.context("No file given")?;
    println!("Tagging file: {}", file.display());

    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    println!("Read {} bytes of text", content.len());

    let labels = tagger::extract(&content);
    println!("Tags: {:?}", labels.as_slice());

    Ok(())
}

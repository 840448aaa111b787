use crate::config::GithubConfig;
use crate::constants::{README_CANDIDATES, USER_AGENT};
use crate::error::{FolioError, Result};
use crate::models::RepositoryRecord;
use anyhow::Context;
use std::time::Duration;
use tracing::debug;

/// Where repository listings and README-like documents come from
#[async_trait::async_trait]
pub trait RepoSource: Send + Sync {
    /// Every repository of the account, most recently updated first
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>>;

    /// Raw text of `document` on the default branch of `repo`
    async fn fetch_document(&self, repo: &str, document: &str) -> Result<String>;
}

/// Read the first README-like document that exists for `repo`.
///
/// Candidates are tried in order; the last failure is returned when none
/// can be read.
pub async fn fetch_readme<S: RepoSource + ?Sized>(source: &S, repo: &str) -> Result<String> {
    let mut last_error = None;

    for document in README_CANDIDATES {
        match source.fetch_document(repo, document).await {
            Ok(text) => return Ok(text),
            Err(e) => {
                debug!(repo, document, error = %e, "document not available");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| FolioError::EnrichmentUnavailable {
        repo: repo.to_string(),
        reason: "no candidate documents".to_string(),
    }))
}

/// Turn a listing response into records; any non-2xx status or a body that is
/// not an array of repositories makes the listing unavailable
fn parse_listing(
    url: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Vec<RepositoryRecord>> {
    if !status.is_success() {
        return Err(FolioError::ListingUnavailable(format!("{} returned {}", url, status)));
    }

    serde_json::from_str(body)
        .map_err(|e| FolioError::ListingUnavailable(format!("unexpected listing body: {}", e)))
}

/// GitHub REST API + raw content host
pub struct GithubClient {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn username(&self) -> &str {
        &self.config.username
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.username,
            self.config.per_page
        )
    }

    fn document_url(&self, repo: &str, document: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.config.raw_url.trim_end_matches('/'),
            self.config.username,
            repo,
            self.config.branch,
            document
        )
    }
}

#[async_trait::async_trait]
impl RepoSource for GithubClient {
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        let url = self.listing_url();
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FolioError::ListingUnavailable(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FolioError::ListingUnavailable(format!("reading {} failed: {}", url, e)))?;

        let repos = parse_listing(&url, status, &body)?;
        debug!(count = repos.len(), "repository listing fetched");
        Ok(repos)
    }

    async fn fetch_document(&self, repo: &str, document: &str) -> Result<String> {
        let url = self.document_url(repo, document);
        let unavailable = |reason: String| FolioError::EnrichmentUnavailable {
            repo: repo.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("{} returned {}", document, response.status())));
        }

        response.text().await.map_err(|e| unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct DocumentsOnly(HashMap<&'static str, &'static str>);

    #[async_trait::async_trait]
    impl RepoSource for DocumentsOnly {
        async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
            Ok(Vec::new())
        }

        async fn fetch_document(&self, repo: &str, document: &str) -> Result<String> {
            self.0
                .get(document)
                .map(|text| text.to_string())
                .ok_or_else(|| FolioError::EnrichmentUnavailable {
                    repo: repo.to_string(),
                    reason: "404 Not Found".to_string(),
                })
        }
    }

    #[test]
    fn test_github_client_urls() {
        let client = GithubClient::new(GithubConfig::default()).unwrap();
        assert_eq!(
            client.listing_url(),
            "https://api.github.com/users/kalasuryakiran/repos?sort=updated&per_page=100"
        );
        assert_eq!(
            client.document_url("AI-Tutor", "README.md"),
            "https://raw.githubusercontent.com/kalasuryakiran/AI-Tutor/main/README.md"
        );
    }

    #[test]
    fn test_parse_listing_success() {
        let body = r#"[{"name": "AI-Tutor", "description": null, "language": "Python",
            "html_url": "https://github.com/kalasuryakiran/AI-Tutor"}]"#;
        let repos = parse_listing("listing", reqwest::StatusCode::OK, body).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "AI-Tutor");
    }

    #[test]
    fn test_parse_listing_error_status() {
        let body = r#"{"message": "API rate limit exceeded"}"#;
        let err = parse_listing("listing", reqwest::StatusCode::FORBIDDEN, body).unwrap_err();
        assert!(matches!(err, FolioError::ListingUnavailable(_)));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_parse_listing_unexpected_body() {
        let body = r#"{"message": "Not Found"}"#;
        let err = parse_listing("listing", reqwest::StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FolioError::ListingUnavailable(_)));

        let err = parse_listing("listing", reqwest::StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, FolioError::ListingUnavailable(_)));
    }

    #[tokio::test]
    async fn test_fetch_readme_prefers_readme() {
        let source = DocumentsOnly(HashMap::from([
            ("README.md", "readme text"),
            ("replit.md", "replit text"),
        ]));
        assert_eq!(fetch_readme(&source, "repo").await.unwrap(), "readme text");
    }

    #[tokio::test]
    async fn test_fetch_readme_falls_back_to_replit() {
        let source = DocumentsOnly(HashMap::from([("replit.md", "replit text")]));
        assert_eq!(fetch_readme(&source, "repo").await.unwrap(), "replit text");
    }

    #[tokio::test]
    async fn test_fetch_readme_missing_everywhere() {
        let source = DocumentsOnly(HashMap::new());
        let err = fetch_readme(&source, "repo").await.unwrap_err();
        assert!(matches!(err, FolioError::EnrichmentUnavailable { .. }));
    }

    #[tokio::test]
    #[ignore] // Requires network access to GitHub
    async fn test_github_client_lists_repositories() {
        let client = GithubClient::new(GithubConfig::default()).unwrap();
        let repos = client.list_repositories().await.unwrap();
        assert!(!repos.is_empty());
    }
}

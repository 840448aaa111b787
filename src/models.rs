use crate::constants::PROFILE_TOP_PROJECTS;
use serde::{Deserialize, Serialize};

/// One repository as delivered by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// Repository name, also used as the card title
    pub name: String,
    /// Free-form description (null on the wire when unset)
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language detected by the host
    #[serde(default)]
    pub language: Option<String>,
    /// Browser URL of the repository
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default, rename = "stargazers_count")]
    pub stars: u64,
    #[serde(default, rename = "forks_count")]
    pub forks: u64,
    /// ISO-8601 timestamp of the last update
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RepositoryRecord {
    /// Create a record with only the fields the project list needs
    pub fn new(
        name: impl Into<String>,
        description: Option<&str>,
        language: Option<&str>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            language: language.map(str::to_string),
            url: url.into(),
            stars: 0,
            forks: 0,
            updated_at: None,
        }
    }
}

/// Ordered, duplicate-free, capped list of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label unless it is already present (case-sensitive)
    pub fn push(&mut self, label: &str) -> bool {
        if self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Keep only the first `max` labels
    pub fn truncate(&mut self, max: usize) {
        self.labels.truncate(max);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.push(label);
        }
        set
    }
}

/// Aggregate view of the fetched collection
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub total_repos: usize,
    pub total_stars: u64,
    /// Most starred projects first, most recently updated breaking ties
    pub top_projects: Vec<RepositoryRecord>,
}

impl ProfileSummary {
    pub fn from_repos(username: &str, repos: &[RepositoryRecord]) -> Self {
        let mut ranked: Vec<RepositoryRecord> = repos.to_vec();
        // ISO-8601 timestamps sort lexically
        ranked.sort_by(|a, b| {
            b.stars
                .cmp(&a.stars)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        });
        ranked.truncate(PROFILE_TOP_PROJECTS);

        Self {
            username: username.to_string(),
            total_repos: repos.len(),
            total_stars: repos.iter().map(|repo| repo.stars).sum(),
            top_projects: ranked,
        }
    }
}

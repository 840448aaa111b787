pub mod card;
pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod github;
pub mod logging;
pub mod models;
pub mod projects;
pub mod tagger;

pub use card::ProjectCard;
pub use chat::{ChatAssistant, ChatBackend};
pub use error::FolioError;
pub use github::{GithubClient, RepoSource};
pub use models::{LabelSet, RepositoryRecord};
pub use projects::ProjectList;

use crate::config::ChatConfig;
use crate::constants::{
    OWNER_EMAIL, OWNER_GITHUB, OWNER_LINKEDIN, OWNER_LOCATION, OWNER_NAME, OWNER_PHONE,
    USER_AGENT,
};
use crate::error::{FolioError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Something that answers one chat message with one reply
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, message: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// The site's `/api/chat` endpoint
pub struct HttpChatBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, message: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| FolioError::BackendUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FolioError::BackendUnavailable(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| FolioError::BackendUnavailable(format!("unexpected reply body: {}", e)))?;

        Ok(body.response)
    }
}

struct CannedRule {
    keywords: &'static [&'static str],
    reply: String,
}

/// Keyword-matched replies used when the backend cannot answer
pub struct CannedResponder {
    rules: Vec<CannedRule>,
    greeting: String,
}

impl CannedResponder {
    pub fn new() -> Self {
        let rules = vec![
            CannedRule {
                keywords: &["skill", "technology"],
                reply: format!(
                    "{OWNER_NAME}'s main skills include AI/LLM Technologies (OpenAI GPT-4, Google Gemini, Claude, LangChain), \
                     Prompt Engineering, Programming (Python, JavaScript, TypeScript), Frameworks (React, Node.js, Flask, FastAPI), \
                     and Data Analysis tools."
                ),
            },
            CannedRule {
                keywords: &["project", "github"],
                reply: format!(
                    "{OWNER_NAME} has built 18+ projects on GitHub including AI-powered tools like Resume-Tailor-Assistant, \
                     AI-Video-Creator, AI-Tutor, and data analysis projects. You can view all projects at {OWNER_GITHUB}"
                ),
            },
            CannedRule {
                keywords: &["linkedin"],
                reply: format!(
                    "Here's {OWNER_NAME}'s LinkedIn profile: {OWNER_LINKEDIN} - Connect with him for professional opportunities!"
                ),
            },
            CannedRule {
                keywords: &["experience", "background"],
                reply: format!(
                    "{OWNER_NAME} is a fresh graduate with strong project experience. He has built multiple AI/ML applications, \
                     data analysis projects, and full-stack applications. His experience comes from academic projects and \
                     personal GitHub projects."
                ),
            },
            CannedRule {
                keywords: &["contact", "email"],
                reply: format!(
                    "Contact Information: Email: {OWNER_EMAIL}, Phone: {OWNER_PHONE}, Location: {OWNER_LOCATION}. \
                     LinkedIn: {OWNER_LINKEDIN}"
                ),
            },
            CannedRule {
                keywords: &["job", "hire", "opportunity"],
                reply: format!(
                    "{OWNER_NAME} is actively seeking opportunities in AI Engineering, Prompt Engineering, and Software Development. \
                     He's a fresh graduate with strong technical skills and a passion for AI/ML. Feel free to reach out for \
                     potential collaborations!"
                ),
            },
            CannedRule {
                keywords: &["link", "social"],
                reply: format!(
                    "Here are {OWNER_NAME}'s main links:\n• GitHub: {OWNER_GITHUB}\n• LinkedIn: {OWNER_LINKEDIN}\n• Email: {OWNER_EMAIL}"
                ),
            },
        ];

        Self {
            rules,
            greeting: format!(
                "Hello! I can help you learn about {OWNER_NAME}'s skills, projects, and background. \
                 Ask me about his skills, projects, experience, contact information, or social links!"
            ),
        }
    }

    /// First rule whose keyword appears in the message, else the greeting
    pub fn respond(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| message.contains(keyword)))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.greeting)
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

/// Who produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Backend,
    Canned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
}

/// Chat assistant: asks the backend, answers locally when it cannot
pub struct ChatAssistant<B> {
    backend: B,
    canned: CannedResponder,
}

impl<B: ChatBackend> ChatAssistant<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            canned: CannedResponder::new(),
        }
    }

    /// Reply to `message`; blank messages get no reply
    pub async fn reply(&self, message: &str) -> Option<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let reply = match self.backend.ask(message).await {
            Ok(text) => ChatReply {
                text,
                source: ReplySource::Backend,
            },
            Err(e) => {
                warn!(error = %e, "chat backend failed, answering locally");
                ChatReply {
                    text: self.canned.respond(message).to_string(),
                    source: ReplySource::Canned,
                }
            }
        };
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    #[async_trait::async_trait]
    impl ChatBackend for Offline {
        async fn ask(&self, _message: &str) -> Result<String> {
            Err(FolioError::BackendUnavailable("connection refused".to_string()))
        }
    }

    struct Echo;

    #[async_trait::async_trait]
    impl ChatBackend for Echo {
        async fn ask(&self, message: &str) -> Result<String> {
            Ok(format!("echo: {message}"))
        }
    }

    #[test]
    fn test_canned_matches_keywords_case_insensitively() {
        let canned = CannedResponder::new();
        assert!(canned.respond("What SKILLS does he have?").contains("main skills"));
        assert!(canned.respond("email please").starts_with("Contact Information"));
        assert!(canned.respond("how do I contact him").contains(OWNER_PHONE));
        assert!(canned.respond("Would you hire him?").contains("actively seeking"));
    }

    #[test]
    fn test_canned_rules_apply_in_order() {
        let canned = CannedResponder::new();
        // "github link" hits the project rule before the links rule
        let reply = canned.respond("github link");
        assert!(reply.contains("18+ projects"));
        assert!(reply.contains(OWNER_GITHUB));
    }

    #[test]
    fn test_canned_greeting_when_nothing_matches() {
        let canned = CannedResponder::new();
        assert!(canned.respond("hi there").starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_assistant_prefers_backend() {
        let assistant = ChatAssistant::new(Echo);
        let reply = assistant.reply("  tell me more  ").await.unwrap();
        assert_eq!(reply.text, "echo: tell me more");
        assert_eq!(reply.source, ReplySource::Backend);
    }

    #[tokio::test]
    async fn test_assistant_falls_back_when_backend_fails() {
        let assistant = ChatAssistant::new(Offline);
        let reply = assistant.reply("linkedin?").await.unwrap();
        assert_eq!(reply.source, ReplySource::Canned);
        assert!(reply.text.contains(OWNER_LINKEDIN));
    }

    #[tokio::test]
    async fn test_assistant_ignores_blank_messages() {
        let assistant = ChatAssistant::new(Echo);
        assert!(assistant.reply("   ").await.is_none());
    }
}

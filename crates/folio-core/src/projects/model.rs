//! Repository records and their display model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository record as returned by the GitHub REST API
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Where a project was listed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Github,
}

/// Project card contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    pub source: Source,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<GithubRepo> for Project {
    fn from(repo: GithubRepo) -> Self {
        Self {
            id: repo.id.to_string(),
            name: repo.name,
            description: non_empty(repo.description),
            url: repo.html_url,
            homepage: non_empty(repo.homepage),
            language: non_empty(repo.language),
            topics: repo.topics,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            source: Source::Github,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

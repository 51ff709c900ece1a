/*
 * github.rs
 * Copyright (c) 2025 awesome-claude-code maintainers
 *
 * Recognizing GitHub repository links.
 */

use std::sync::LazyLock;

use regex::Regex;

/// Owner and repository name of a GitHub-hosted resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: String,
    pub repo: String,
}

impl GithubRepo {
    fn new(owner: &str, repo: &str) -> Option<Self> {
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `owner/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

static CONTENT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/(blob|tree)/(.+)").expect("valid content URL regex")
});

static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)(?:/.*)?$").expect("valid repo URL regex")
});

static LOOSE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$",
        r"github\.com/([^/]+)/([^/]+)/(?:blob|tree|issues|pull|releases)",
        r"github\.com/([^/]+)/([^/]+)/?",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid GitHub URL regex"))
});

/// Strict parse of an `https://github.com/...` link, as used for stats cards.
///
/// Only links that start with the GitHub origin match. A trailing `.git`
/// on the repository name is dropped.
pub fn parse_github_url(url: &str) -> Option<GithubRepo> {
    let caps = CONTENT_URL.captures(url).or_else(|| REPO_URL.captures(url))?;
    let repo = &caps[2];
    GithubRepo::new(&caps[1], repo.strip_suffix(".git").unwrap_or(repo))
}

/// Loose extraction of owner and repository from any URL mentioning `github.com/`.
pub fn extract_github_owner_repo(url: &str) -> Option<GithubRepo> {
    LOOSE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(url)?;
        let repo = caps[2].split(['/', '?', '#']).next().unwrap_or_default();
        GithubRepo::new(&caps[1], repo)
    })
}

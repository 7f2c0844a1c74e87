//! Sorted, filterable project listing

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::{Project, Source};
use crate::error::Result;

/// Client-side filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    /// Provenance filter: everything listed from GitHub
    Github,
    Language(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Github => "GitHub",
            Category::Language(lang) => lang,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Github => project.source == Source::Github,
            Category::Language(lang) => project.language.as_deref() == Some(lang.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// First fetch still in flight
    Loading,
    Loaded,
    /// Last fetch failed; the listing is empty
    Failed,
}

/// Stable sort, most-starred first
pub fn sort_by_stars(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.stars.cmp(&a.stars));
}

#[derive(Debug, Clone)]
pub struct ProjectListing {
    projects: Vec<Project>,
    status: LoadStatus,
    filter: Category,
    last_updated: Option<DateTime<Utc>>,
}

impl Default for ProjectListing {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListing {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            status: LoadStatus::Loading,
            filter: Category::All,
            last_updated: None,
        }
    }

    /// Replace the listing with a fetch result
    pub fn apply(&mut self, result: Result<Vec<Project>>) {
        match result {
            Ok(mut projects) => {
                sort_by_stars(&mut projects);
                info!(count = projects.len(), "Project listing replaced");
                self.projects = projects;
                self.status = LoadStatus::Loaded;
                self.last_updated = Some(Utc::now());
            }
            Err(e) => {
                warn!(error = %e, "Failed to load projects");
                self.projects.clear();
                self.status = LoadStatus::Failed;
            }
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn has_failed(&self) -> bool {
        self.status == LoadStatus::Failed
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// All projects, most-starred first
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// `All`, `GitHub`, then each language in order of first appearance
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = vec![Category::All, Category::Github];
        for lang in self
            .projects
            .iter()
            .filter(|p| p.source == Source::Github)
            .filter_map(|p| p.language.as_deref())
        {
            let category = Category::Language(lang.to_string());
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    pub fn filter(&self) -> &Category {
        &self.filter
    }

    pub fn set_filter(&mut self, category: Category) {
        self.filter = category;
    }

    /// Step through the category bar, wrapping
    pub fn cycle_filter(&mut self, forward: bool) {
        let categories = self.categories();
        let len = categories.len();
        let current = categories
            .iter()
            .position(|c| *c == self.filter)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.filter = categories[next].clone();
    }

    /// Projects passing the current filter
    pub fn visible(&self) -> impl Iterator<Item = &Project> + '_ {
        self.projects.iter().filter(|p| self.filter.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    fn project(name: &str, stars: u32, language: Option<&str>) -> Project {
        Project {
            id: name.to_string(),
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/x/{name}"),
            homepage: None,
            language: language.map(str::to_string),
            topics: Vec::new(),
            stars,
            forks: 0,
            source: Source::Github,
            created_at: None,
            updated_at: None,
        }
    }

    fn names(listing: &ProjectListing) -> Vec<&str> {
        listing.visible().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_stars_descending() {
        let mut listing = ProjectListing::new();
        assert!(listing.is_loading());
        listing.apply(Ok(vec![
            project("a", 3, None),
            project("b", 10, None),
            project("c", 1, None),
        ]));

        let stars: Vec<u32> = listing.projects().iter().map(|p| p.stars).collect();
        assert_eq!(stars, vec![10, 3, 1]);
        assert_eq!(listing.status(), LoadStatus::Loaded);
        assert!(listing.last_updated().is_some());
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let mut listing = ProjectListing::new();
        listing.apply(Ok(vec![
            project("first", 5, None),
            project("top", 9, None),
            project("second", 5, None),
        ]));
        assert_eq!(names(&listing), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_categories_and_filtering() {
        let mut listing = ProjectListing::new();
        listing.apply(Ok(vec![
            project("web", 4, Some("TypeScript")),
            project("cli", 8, Some("Rust")),
            project("notes", 1, None),
            project("site", 2, Some("TypeScript")),
        ]));

        let labels: Vec<String> = listing.categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["All", "GitHub", "Rust", "TypeScript"]);

        listing.set_filter(Category::Language("TypeScript".to_string()));
        assert_eq!(names(&listing), vec!["web", "site"]);

        listing.set_filter(Category::Github);
        assert_eq!(names(&listing).len(), 4);
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut listing = ProjectListing::new();
        listing.apply(Ok(vec![project("cli", 8, Some("Rust"))]));

        listing.cycle_filter(false);
        assert_eq!(listing.filter(), &Category::Language("Rust".to_string()));
        listing.cycle_filter(true);
        assert_eq!(listing.filter(), &Category::All);
    }

    #[test]
    fn test_failure_empties_listing() {
        let mut listing = ProjectListing::new();
        listing.apply(Ok(vec![project("a", 1, None)]));
        listing.apply(Err(FolioError::Status {
            status: 403,
            endpoint: "github".to_string(),
        }));

        assert!(listing.has_failed());
        assert!(listing.projects().is_empty());
        assert_eq!(listing.categories().len(), 2);

        listing.apply(Ok(vec![project("b", 2, None)]));
        assert_eq!(listing.status(), LoadStatus::Loaded);
    }
}

//! Public repository listing
//!
//! Fetches the owner's GitHub repositories, keeps them sorted by stars and
//! filters them client-side by provenance or language. A background task
//! re-fetches periodically and reports over a channel.

mod github;
mod listing;
mod model;
mod refresh;

pub use github::{GithubClient, RepositorySource};
pub use listing::{sort_by_stars, Category, LoadStatus, ProjectListing};
pub use model::{GithubRepo, Project, Source};
pub use refresh::{spawn_refresh, RefreshHandle};

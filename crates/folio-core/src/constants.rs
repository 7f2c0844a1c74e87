//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Whole-request timeout; listing and email calls are small
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

    /// User agent sent with every request (GitHub rejects requests without one)
    pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
}

/// Page geometry and scroll behaviour
pub mod page {
    use super::*;

    /// Fraction of the viewport height, from the top, where the active-section line sits
    pub const REFERENCE_LINE_RATIO: f64 = 0.3;

    /// Scroll offset past which the header switches to its compact style
    pub const HEADER_SCROLLED_THRESHOLD: u32 = 20;

    /// Scroll offset past which the scroll-to-top button appears
    pub const SCROLL_TO_TOP_THRESHOLD: u32 = 500;

    /// Hero content moves at this fraction of the scroll speed
    pub const PARALLAX_FACTOR: f64 = 0.4;

    /// Duration of anchor navigation
    pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

    /// Default reveal transition length
    pub const REVEAL_DURATION: Duration = Duration::from_millis(700);

    /// Delay between staggered children (skill cards, project cards)
    pub const STAGGER_STEP: Duration = Duration::from_millis(100);
}

/// Repository listing configuration
pub mod projects {
    use super::*;

    /// GitHub REST API root
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// Page size requested from the listing endpoint
    pub const PER_PAGE: u32 = 100;

    /// Default GitHub account whose repositories are listed
    pub const DEFAULT_GITHUB_USER: &str = "octocat";

    /// Interval between background re-fetches
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);
}

/// Contact form configuration
pub mod contact {
    use super::*;

    /// EmailJS REST endpoint
    pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

    /// How long the success banner stays before the form returns to idle
    pub const SUCCESS_RESET: Duration = Duration::from_secs(3);
}

/// UI configuration
pub mod ui {
    use super::*;

    /// How long a toast stays on screen
    pub const TOAST_DURATION: Duration = Duration::from_secs(4);

    /// Toasts stacked at once; the oldest goes first
    pub const TOAST_STACK: usize = 3;

    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "folio.toml";

    /// Preferences database file name
    pub const DATABASE_FILE_NAME: &str = "folio.db";

    /// Log file name inside the logs directory
    pub const LOG_FILE_NAME: &str = "folio.log";
}

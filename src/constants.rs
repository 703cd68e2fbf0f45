//! Global constants for the landing page core.
//!
//! Tuning values are grouped by the component that reads them. Most of the
//! carousel and scroller values can be overridden at runtime through
//! [`SiteSettings`](crate::config::SiteSettings).

/// Persistent storage layout.
pub mod storage {
    /// Storage key holding the operator's image override map.
    pub const OVERRIDES_KEY: &str = "qhp_image_urls";

    /// Storage key holding serialized site settings.
    pub const SETTINGS_KEY: &str = "qhp-settings";

    /// Directory name under the platform config dir (native only).
    pub const APP_DIR: &str = "qhp-site";
}

/// Gallery carousel behavior.
pub mod carousel {
    /// Autoplay interval in milliseconds.
    pub const AUTOPLAY_INTERVAL_MS: u64 = 4000;

    /// Minimum net horizontal travel (px) for a touch sequence to count as a swipe.
    pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

    /// Horizontal travel (px) below which finger jitter is ignored.
    pub const DRAG_NOISE_PX: f64 = 10.0;

    /// Viewports narrower than this (px) use the mobile layout.
    pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

    /// Item the landing page gallery starts on.
    pub const INITIAL_INDEX: usize = 2;
}

/// Horizontal card scroller behavior.
pub mod scroller {
    /// Slack (px) before an edge counts as reachable.
    pub const EDGE_TOLERANCE_PX: f64 = 4.0;

    /// Fraction of the visible width moved by one arrow click.
    pub const STEP_FRACTION: f64 = 0.75;

    /// Smallest width (percent) the progress bar is drawn at.
    pub const MIN_PROGRESS_PERCENT: f64 = 15.0;

    /// Viewports at least this wide (px) lay cards out as a grid.
    pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;
}

/// Admin panel behavior.
pub mod admin {
    /// How long the "saved" indicator stays visible, in milliseconds.
    pub const SAVED_FLASH_MS: u64 = 3000;

    /// File name offered for the exported baseline config.
    pub const EXPORT_FILENAME: &str = "siteConfig.json";
}

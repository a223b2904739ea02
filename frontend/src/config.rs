use log::Level;

pub const AUDIENCE_STORAGE_KEY: &str = "vibe2lead_audience";

pub const FEED_HANDLE: &str = "vibe2lead.bsky.social";
pub const FEED_ENDPOINT: &str = "https://public.api.bsky.app/xrpc/app.bsky.feed.getAuthorFeed";
pub const FEED_LIMIT: u32 = 3;
pub const FEED_FILTER: &str = "posts_no_replies";
pub const POST_PERMALINK_BASE: &str = "https://bsky.app/profile";

// Scroll handling
pub const NAV_DEBOUNCE_MS: u32 = 10;
pub const STEP_DEBOUNCE_MS: u32 = 100;
pub const NAV_REVEAL_OFFSET_PX: f64 = 100.0;
pub const NAV_HEIGHT_PX: f64 = 60.0;
pub const STEP_TRIGGER_RATIO: f64 = 0.3;
pub const STEP_ROOT_MARGIN: &str = "-30% 0px -70% 0px";

// Book illustration, must match the keyframes in the stylesheet
pub const BOOK_OPEN_MS: u32 = 10_000;
pub const PAGE_CLOSE_SECS: f64 = 0.08;
pub const PAGE_STAGGER_SECS: f64 = 0.02;
pub const COVER_LEAD_SECS: f64 = 0.05;
pub const COVER_CLOSE_SECS: f64 = 0.25;
pub const CLOSE_SETTLE_SECS: f64 = 0.3;

pub fn get_feed_url() -> String {
    format!(
        "{}?actor={}&limit={}&filter={}",
        FEED_ENDPOINT,
        urlencoding::encode(FEED_HANDLE),
        FEED_LIMIT,
        FEED_FILTER
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running trunk serve locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

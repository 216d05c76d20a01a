// Data source
pub const MENU_PAGE_URL: &str = "https://www.nooncph.dk/ugens-menuer";

// Selectors
pub const DAY_LINK_SELECTOR: &str = "div.div-block-23.bred a";

// Filesystem
pub const DOWNLOAD_DIR: &str = "downloads";

// Viewer
pub const VIEWER_APP: &str = "Preview";
pub const VIEWER_TIMEOUT_SECS: u64 = 30;
pub const VIEWER_POLL_INTERVAL_MS: u64 = 1000;

// CLI
pub const DEFAULT_DAY: &str = "today";
pub const DAY_HELP_TEXT: &str =
    "Day to fetch the menu for: today, tomorrow, or a weekday name in English or Danish";

// Day tokens, indexed 0 = Monday
pub const TODAY_ALIAS: &str = "today";
pub const TOMORROW_ALIAS: &str = "tomorrow";
pub const ENGLISH_DAY_NAMES: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];
/// The menu site is in Danish, so these double as the link texts to match.
pub const DANISH_DAY_NAMES: [&str; 5] = ["mandag", "tirsdag", "onsdag", "torsdag", "fredag"];

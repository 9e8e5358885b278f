// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://bugguide.net";
pub const USER_AGENT: &str = concat!("bugguide-rs/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Endpoints (relative to BASE_URL)
pub const NODE_PATH: &str = "/node/view/";
pub const TREE_SUFFIX: &str = "/tree";
pub const TAXON_SEARCH_PATH: &str = "/adv_search/taxon.php";
pub const PHOTO_SEARCH_PATH: &str = "/adv_search/bgsearch.php";

// Selectors on the classification page
pub const ROOTS_LINKS: &str = ".bgpage-roots a";
pub const NODE_TITLE: &str = ".node-title";
pub const NODE_TITLE_HEADING: &str = ".node-title h1";
pub const NODE_TITLE_ITALIC: &str = ".node-title i";

// Selectors on the photo results page
pub const PHOTO_ROWS: &str = "body > table tr";

// DarwinCore
pub const PUBLISHER: &str = "BugGuide";
pub const HIGHER_CLASSIFICATION_SEP: &str = " | ";

// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Ranking
pub const TOP_LIMIT: usize = 20;
pub const MIN_COUNT_FLOOR: u32 = 1;
pub const MIN_COUNT_CEIL: u32 = 20;
pub const DEFAULT_MIN_COUNT: u32 = 2;

// Chart shaping
pub const RADAR_LIMIT: usize = 8;
pub const HEAT_ROWS: usize = 5;
pub const HEAT_COLS: usize = 2;
pub const CLOUD_SIZE_MIN: f32 = 15.0;
pub const CLOUD_SIZE_MAX: f32 = 60.0;

// Text preview shown in the UI / --preview
pub const PREVIEW_CHARS: usize = 600;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TABLE_STEM: &str = "wordfreq";

// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub display: DisplayOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Page holding the GPU table. Fixed in the binaries; tests point it at a local server.
    pub url: String,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(GPU_SPECS_URL),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayOptions {
    /// Rows printed in the console preview
    pub preview_rows: usize,
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            preview_rows: PREVIEW_ROWS,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

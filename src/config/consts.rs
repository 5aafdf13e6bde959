// src/config/consts.rs

// Net config
pub const GPU_SPECS_URL: &str = "https://www.techpowerup.com/gpu-specs/";
pub const USER_AGENT: &str = concat!("gpu_clocks/", env!("CARGO_PKG_VERSION"));

// Page structure
pub const WRAPPER_SELECTOR: &str = "div#list.table-wrapper";
pub const TABLE_SELECTOR: &str = "table.processors";
pub const HEADER_SECTION_SELECTOR: &str = "thead.colheader";

/// Used when the header row is present but has no `<th>` cells.
pub const DEFAULT_HEADERS: [&str; 8] = [
    "Product Name",
    "GPU Chip",
    "Released",
    "Bus",
    "Memory",
    "GPU clock",
    "Memory clock",
    "Shaders / TMUs / ROPs",
];

// Columns
pub const GPU_CLOCK_COL: &str = "GPU clock";
pub const MEMORY_CLOCK_COL: &str = "Memory clock";
pub const PRODUCT_NAME_COL: &str = "Product Name";
pub const RELEASED_COL: &str = "Released";
pub const CLOCK_UNIT: &str = " MHz";

// Console
pub const PREVIEW_ROWS: usize = 5;
pub const DEFAULT_LOG_FILTER: &str = "warn,gpu_clocks=info";

// Window
pub const WINDOW_TITLE: &str = "GPU Clock Speeds";
pub const WINDOW_W: f32 = 1400.0;
pub const WINDOW_H: f32 = 1000.0;

// Chart colours (matplotlib's named "blue" and "green")
pub const GPU_BAR_RGB: [u8; 3] = [0x00, 0x00, 0xFF];
pub const MEMORY_BAR_RGB: [u8; 3] = [0x00, 0x80, 0x00];

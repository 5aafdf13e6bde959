//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec encodes *where the
//! ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page, using `scraper` selectors.
//! - **Selector choice** (container → table → header section).
//! - **Light shaping** into header lists and text rows.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), numeric cleaning (`normalize`), or
//!   presentation (`gui`, `present`).
//!
//! ## Typical call chain
//! ```text
//! pipeline::run → core::net fetch → specs::gpu_table::{locate_table,
//!                 extract_headers, extract_rows} → normalize::normalize
//! ```
//!
//! ## Conventions & invariants
//! - Missing structure is fatal (`PipelineError::StructureNotFound` /
//!   `HeaderNotFound`); there is no fallback layout.
//! - Every returned row has exactly as many cells as there are headers.
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML fixtures.
pub mod gpu_table;

//! Shared constants for page slicing
//!
//! This module centralizes the option defaults and unit conventions used
//! throughout the slicing pipeline.

// =============================================================================
// Option Defaults
// =============================================================================

/// Default page aspect ratio (height / width) of ANSI Letter
pub const DEFAULT_RATIO: f64 = 1.294;

/// Default margin on every side, in pixels (one inch at 72 dpi)
pub const DEFAULT_MARGIN: u32 = 72;

/// Default minimum fraction of the content height a page may be cut to
pub const DEFAULT_HEIGHT_TOLERANCE: f64 = 0.65;

/// Default number of rows considered around each candidate cut row
pub const DEFAULT_LOCALITY: usize = 11;

// =============================================================================
// Rendering
// =============================================================================

/// Resolution used when embedding slices, so one pixel maps to one point
pub const PIXELS_PER_INCH: f32 = 72.0;

/// Default document title written into the PDF metadata
pub const DEFAULT_TITLE: &str = "Sliced Images";

//! PDF rendering for sliced documents
//!
//! This module handles all PDF-specific operations:
//! - Embedding slice pixels as image XObjects
//! - Converting top-left layout coordinates to PDF user space
//! - Writing the finished file without clobbering existing paths

mod pdf;

pub use pdf::{render_pdf, save_pdf};

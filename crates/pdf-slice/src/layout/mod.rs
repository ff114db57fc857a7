//! Page geometry and document compilation
//!
//! This module handles the geometric side of pagination:
//! - Resolving the shared page size from options and input sizes
//! - Mapping each planned slice onto its own page inside the margins

mod compiler;
mod page_spec;
mod types;

pub use compiler::*;
pub use page_spec::*;
pub use types::*;

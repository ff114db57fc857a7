pub mod layout;
pub mod render;
pub mod slice;
mod constants;
mod options;
mod pipeline;
mod stats;
mod types;

pub use constants::*;
pub use layout::{Document, Page, Rect, Slice, compile, resolve_page_spec};
pub use options::*;
pub use pipeline::{SliceRun, prepare_run};
pub use render::{render_pdf, save_pdf};
pub use slice::{
    CutPlan, check_output_path, expand_inputs, load_image, load_images, plan_cuts, plan_image,
    plan_images, read_dimensions, score_rows,
};
pub use stats::{SliceStatistics, calculate_statistics};
pub use types::*;

//! Run-level orchestration shared by the CLI and tests

use crate::layout::{Document, compile, resolve_page_spec};
use crate::options::SliceOptions;
use crate::slice::{
    CutPlan, check_output_path, expand_inputs, load_images, plan_images, read_dimensions,
};
use crate::types::*;
use std::path::Path;

/// Images and their cut plans for one run, ready to compile
#[derive(Debug, Clone)]
pub struct SliceRun {
    pub page_spec: PageSpec,
    pub images: Vec<RasterImage>,
    pub plans: Vec<CutPlan>,
}

impl SliceRun {
    /// Paginate the planned images
    pub fn compile(&self) -> Result<Document<'_>> {
        compile(&self.images, &self.plans, &self.page_spec)
    }
}

/// Validate, check the destination, then load and plan every input image.
///
/// Options and the output path (when given) are checked before any image
/// file is opened, so a bad configuration or an occupied destination is
/// reported without decoding anything.
pub async fn prepare_run(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    options: &SliceOptions,
) -> Result<SliceRun> {
    options.validate()?;
    if let Some(output) = output {
        check_output_path(output).await?;
    }

    let paths = expand_inputs(input).await?;
    log::info!("Found {} input image(s)", paths.len());

    let dimensions = read_dimensions(&paths).await?;
    let page_spec = resolve_page_spec(options, &dimensions)?;

    let images = load_images(&paths).await?;
    let plans = plan_images(&images, &page_spec, options).await?;

    Ok(SliceRun {
        page_spec,
        images,
        plans,
    })
}

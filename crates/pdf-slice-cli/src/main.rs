use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use pdf_slice::{Margins, SliceOptions};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(
    name = "pslice",
    about = "Crops long images into pages and compiles them to a PDF",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Show this help message and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Input image, or directory of images ordered by file name
    input: PathBuf,

    /// Path of the compiled PDF; must not exist yet
    output: PathBuf,

    /// Page width including margins [default: widest input plus left and right margins]
    #[arg(short, long)]
    width: Option<u32>,

    /// Page height including margins; takes precedence over --ratio
    #[arg(short = 'h', long)]
    height: Option<u32>,

    /// Page aspect ratio, height divided by width [default: 1.294, ANSI Letter]
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Page margins in pixels [default: 72 72 72 72]
    #[arg(short, long, num_args = 4, value_names = ["TOP", "RIGHT", "BOTTOM", "LEFT"])]
    margins: Option<Vec<u32>>,

    /// Minimum fraction of the content height a page may be cut to [default: 0.65]
    #[arg(short = 't', long)]
    height_tolerance: Option<f64>,

    /// Rows considered around each candidate cut; 1 scores each row alone [default: 11]
    #[arg(short, long)]
    locality: Option<usize>,

    /// Load base options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Title stored in the PDF metadata
    #[arg(long, default_value = pdf_slice::DEFAULT_TITLE)]
    title: String,

    /// Show statistics only, don't write the PDF
    #[arg(long)]
    stats_only: bool,

    /// Log per-image cut details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    async fn options(&self) -> Result<SliceOptions> {
        let mut options = match &self.config {
            Some(path) => SliceOptions::load(path).await?,
            None => SliceOptions::default(),
        };

        if let Some(width) = self.width {
            options.width = Some(width);
        }
        if let Some(height) = self.height {
            options.height = Some(height);
        }
        if let Some(ratio) = self.ratio {
            options.ratio = ratio;
        }
        if let Some(&[top, right, bottom, left]) = self.margins.as_deref() {
            options.margins = Margins {
                top,
                right,
                bottom,
                left,
            };
        }
        if let Some(tolerance) = self.height_tolerance {
            options.height_tolerance = tolerance;
        }
        if let Some(locality) = self.locality {
            options.locality = locality;
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.log_level()).init()?;

    // Configuration and destination are checked before any image is read
    let options = cli.options().await?;
    let output = (!cli.stats_only).then_some(cli.output.as_path());
    let run = pdf_slice::prepare_run(&cli.input, output, &options).await?;
    let page_spec = run.page_spec;
    let document = run.compile()?;

    let stats = pdf_slice::calculate_statistics(&document, run.images.len())?;
    println!("Slicing Statistics:");
    println!("  Page size: {} x {} px", page_spec.width, page_spec.height);
    println!(
        "  Content area: {} x {} px",
        page_spec.content_width(),
        page_spec.content_height()
    );
    println!("  Source images: {}", stats.source_images);
    println!("  Output pages: {}", stats.output_pages);
    println!(
        "  Slice rows: {} to {}",
        stats.shortest_page_rows, stats.tallest_page_rows
    );
    println!("  Average fill: {:.1}%", stats.average_fill * 100.0);

    if cli.stats_only {
        return Ok(());
    }

    pdf_slice::save_pdf(&document, &cli.output, &cli.title).await?;
    println!("Sliced → {}", cli.output.display());

    Ok(())
}

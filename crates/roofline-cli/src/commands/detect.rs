use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use roofline_core::io::{crop_box, load_image, save_crops};
use roofline_core::{DetectorConfig, RoofDetector};

use crate::file_config::FileConfig;

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    /// Street-level capture: light smoothing, area filter only
    Street,
    /// Satellite capture: heavy smoothing, border and watermark filters
    Satellite,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input image (PNG or JPEG)
    pub image: PathBuf,

    /// Detection preset
    #[arg(long, value_enum, default_value = "street")]
    pub preset: PresetArg,

    /// TOML config file; its [detector] table overrides the preset
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a cropped PNG per detected box into this directory
    #[arg(long)]
    pub crops_dir: Option<PathBuf>,

    /// Context pixels added around each crop
    #[arg(long, default_value = "5")]
    pub crop_buffer: usize,

    /// Print boxes as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let detector_config = match &args.config {
        Some(path) => FileConfig::load(path)?.detector,
        None => match args.preset {
            PresetArg::Street => DetectorConfig::street(),
            PresetArg::Satellite => DetectorConfig::satellite(),
        },
    };

    let image = load_image(&args.image)
        .with_context(|| format!("loading {}", args.image.display()))?;
    let detector = RoofDetector::new(detector_config);
    let boxes = detector.detect(&image)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&boxes)?);
    } else {
        let header = Style::new().cyan().bold();
        println!(
            "{}: {} box(es) in {}x{} px",
            header.apply_to("Detected"),
            boxes.len(),
            image.height(),
            image.width()
        );
        for bbox in &boxes {
            println!(
                "  rows {}..={}  cols {}..={}  ({} px^2)",
                bbox.min_row,
                bbox.max_row,
                bbox.min_col,
                bbox.max_col,
                bbox.area()
            );
        }
    }

    if let Some(dir) = &args.crops_dir {
        let base = args
            .image
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("crop");

        let bar = ProgressBar::new(boxes.len() as u64).with_style(
            ProgressStyle::with_template("{spinner} cropping {pos}/{len}")?,
        );
        let mut crops = Vec::with_capacity(boxes.len());
        for bbox in &boxes {
            crops.push(crop_box(&image, bbox, args.crop_buffer));
            bar.inc(1);
        }
        let paths = save_crops(&crops, dir, base)?;
        bar.finish_and_clear();

        for path in &paths {
            tracing::debug!(path = %path.display(), "wrote crop");
        }
        println!("Wrote {} crop(s) to {}", paths.len(), dir.display());
    }

    Ok(())
}

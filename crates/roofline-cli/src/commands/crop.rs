use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use roofline_core::io::{crop_box, load_image, save_image};
use roofline_core::BoundingBox;

#[derive(Args)]
pub struct CropArgs {
    /// Input image (PNG or JPEG)
    pub image: PathBuf,

    /// Box as min_row,min_col,max_row,max_col (inclusive)
    #[arg(long = "box")]
    pub box_spec: String,

    /// Context pixels added on every side, clamped to the frame
    #[arg(long, default_value = "5")]
    pub buffer: usize,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,
}

fn parse_box(spec: &str) -> Result<BoundingBox> {
    let parts: Vec<usize> = spec
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("parsing box spec '{spec}'"))?;

    let &[min_row, min_col, max_row, max_col] = parts.as_slice() else {
        bail!("box spec '{spec}' must have exactly four components");
    };
    if min_row > max_row || min_col > max_col {
        bail!("box spec '{spec}' has min > max");
    }
    Ok(BoundingBox::new(min_row, min_col, max_row, max_col))
}

pub fn run(args: &CropArgs) -> Result<()> {
    let bbox = parse_box(&args.box_spec)?;
    let image = load_image(&args.image)
        .with_context(|| format!("loading {}", args.image.display()))?;

    if bbox.max_row >= image.height() || bbox.max_col >= image.width() {
        bail!(
            "box {:?} exceeds image extent {}x{}",
            bbox,
            image.height(),
            image.width()
        );
    }

    let crop = crop_box(&image, &bbox, args.buffer);
    save_image(&crop, &args.output)?;
    println!(
        "Wrote {} ({}x{})",
        args.output.display(),
        crop.height(),
        crop.width()
    );
    Ok(())
}

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherlab::{
    AdjustmentParams, Coordinator, DitherAlgorithm, DitherParams, MatrixSize, PaletteKind,
    PixelBuffer,
};

#[derive(Parser)]
#[command(name = "ditherlab")]
#[command(about = "Tonal adjustment and dithering for raw RGBA pixel buffers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a raw RGBA file and write the dithered buffer
    Render {
        /// Input file of headerless RGBA bytes (width x height x 4)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the processed RGBA bytes
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        /// JSON file with adjustment and dither parameters
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Dithering algorithm: floyd-steinberg, atkinson, sierra, bayer
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Downsampling factor (1-10)
        #[arg(short, long)]
        scale: Option<u32>,

        /// Output palette: bw or grayscale
        #[arg(long)]
        palette: Option<String>,

        /// Bayer threshold matrix size: 2, 4, or 8
        #[arg(long)]
        matrix_size: Option<u8>,

        /// Contrast (0-200, 100 is neutral)
        #[arg(long)]
        contrast: Option<i32>,

        /// Highlight lift (-100 to 100)
        #[arg(long)]
        highlights: Option<i32>,

        /// Midtone gain (-100 to 100)
        #[arg(long)]
        midtones: Option<i32>,

        /// Box blur strength (0-10)
        #[arg(long)]
        blur: Option<i32>,

        /// Brightness offset (-100 to 100)
        #[arg(long)]
        luminance: Option<i32>,

        /// Invert colors
        #[arg(long)]
        invert: bool,
    },
    /// Write a synthetic horizontal gradient as raw RGBA bytes
    Gradient {
        /// Output file for the gradient bytes
        #[arg(short, long)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 256)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 64)]
        height: u32,
    },
}

/// Optional parameter file; explicit flags override its values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParamsFile {
    adjustments: AdjustmentParams,
    dither: DitherParams,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherlab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match Cli::parse().command {
        Commands::Render {
            input,
            output,
            width,
            height,
            params,
            algorithm,
            scale,
            palette,
            matrix_size,
            contrast,
            highlights,
            midtones,
            blur,
            luminance,
            invert,
        } => {
            let (mut adjustments, mut dither) = load_params(params.as_deref())?;

            if let Some(value) = contrast {
                adjustments = adjustments.contrast(value);
            }
            if let Some(value) = highlights {
                adjustments = adjustments.highlights(value);
            }
            if let Some(value) = midtones {
                adjustments = adjustments.midtones(value);
            }
            if let Some(value) = blur {
                adjustments = adjustments.blur(value);
            }
            if let Some(value) = luminance {
                adjustments = adjustments.luminance(value);
            }
            if invert {
                adjustments = adjustments.invert(true);
            }
            if let Some(key) = algorithm {
                dither = dither.algorithm(DitherAlgorithm::from_key(&key));
            }
            if let Some(value) = scale {
                dither = dither.scale(value);
            }
            if let Some(key) = palette {
                dither = dither.palette(PaletteKind::from_key(&key));
            }
            if let Some(size) = matrix_size {
                dither = dither.matrix_size(MatrixSize::from(size));
            }

            run_render(&input, &output, width, height, adjustments, dither).await
        }
        Commands::Gradient {
            output,
            width,
            height,
        } => run_gradient(&output, width, height),
    }
}

/// Read the params file if one was given; defaults otherwise.
fn load_params(path: Option<&std::path::Path>) -> anyhow::Result<(AdjustmentParams, DitherParams)> {
    match path {
        Some(path) => {
            let file: ParamsFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            Ok((file.adjustments.clamped(), file.dither.clamped()))
        }
        None => Ok(Default::default()),
    }
}

/// One-shot render through the coordinator.
async fn run_render(
    input: &PathBuf,
    output: &PathBuf,
    width: u32,
    height: u32,
    adjustments: AdjustmentParams,
    dither: DitherParams,
) -> anyhow::Result<()> {
    let data = std::fs::read(input)?;
    let source = PixelBuffer::new(width, height, data)?;

    let coordinator = Coordinator::new();
    coordinator.set_image(source).await;

    let started = Instant::now();
    let result = coordinator.process(adjustments, dither).await?;
    tracing::info!(
        algorithm = dither.algorithm.key(),
        scale = dither.scale,
        palette = dither.palette.key(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Processing finished"
    );

    std::fs::write(output, result.data())?;
    println!("Rendered {} ({} bytes)", output.display(), result.data().len());

    Ok(())
}

/// Emit a dark-to-light gradient fixture for trying the tool without an
/// external rasterizer.
fn run_gradient(output: &PathBuf, width: u32, height: u32) -> anyhow::Result<()> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    let span = width.saturating_sub(1).max(1);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / span) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let buffer = PixelBuffer::new(width, height, data)?;

    std::fs::write(output, buffer.data())?;
    println!(
        "Wrote {}x{} gradient to {} ({} bytes)",
        width,
        height,
        output.display(),
        buffer.data().len()
    );

    Ok(())
}

//! File-based filtering command: WAV in, low-passed WAV out.

use std::f32::consts::TAU;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lisse_core::{Filter, LowPass, Prototype};

use super::{CliOrder, CliTransform};
use crate::preset::FilterPreset;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (mono, 32-bit float)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Filter order
    #[arg(long, value_enum, default_value = "second")]
    order: CliOrder,

    /// Discretization method
    #[arg(long, value_enum, default_value = "bilinear")]
    transform: CliTransform,

    /// Cutoff (first order) or natural (second order) frequency in Hz
    #[arg(long, default_value = "1000.0")]
    cutoff_hz: f32,

    /// Quality factor (second order only)
    #[arg(long, default_value = "0.707")]
    q: f32,

    /// Preset file (TOML); overrides the filter flags above
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Processing block size
    #[arg(long, default_value = "4096")]
    block_size: usize,
}

/// Read a WAV file as a mono-summed f32 buffer.
fn read_mono(path: &Path) -> anyhow::Result<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / f64::from(1u32 << (spec.bits_per_sample - 1));
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| (f64::from(v) * scale) as f32))
                .collect::<Result<_, _>>()?
        }
    };

    let mono = samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();
    Ok((mono, spec.sample_rate))
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let (order, transform, cutoff_hz, q) = match &args.preset {
        Some(path) => {
            let preset = FilterPreset::load(path)?;
            println!("Loaded preset {}", path.display());
            (preset.order, preset.transform, preset.cutoff_hz, preset.q)
        }
        None => (args.order, args.transform, args.cutoff_hz, args.q),
    };
    anyhow::ensure!(cutoff_hz > 0.0, "cutoff must be positive, got {cutoff_hz}");

    println!("Reading {}...", args.input.display());
    let (mut samples, sample_rate) = read_mono(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        sample_rate,
        samples.len() as f32 / sample_rate as f32
    );

    let te = 1.0 / sample_rate as f32;
    let w = TAU * cutoff_hz;
    let prototype = match order {
        CliOrder::First => Prototype::FirstOrder { te, tau: 1.0 / w },
        CliOrder::Second => Prototype::SecondOrder { te, w0: w, q },
    };
    let mut filter = LowPass::configure(prototype, transform.into())
        .context("deriving filter coefficients")?;

    tracing::info!(
        order = filter.order(),
        transform = %lisse_core::Transform::from(transform),
        cutoff_hz,
        q,
        te,
        "filter configured"
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );
    for block in samples.chunks_mut(args.block_size.max(1)) {
        filter.step_batch_inplace(block)?;
        pb.inc(block.len() as u64);
    }
    pb.finish_and_clear();

    let out_spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&args.output, out_spec)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for &sample in &samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    println!("Wrote {}", args.output.display());
    Ok(())
}

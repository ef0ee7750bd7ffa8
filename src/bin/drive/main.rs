//! drive - listen to and measure the distortion kernels
//!
//! Run with: cargo run --bin drive -- analyze --strategy clip --drive 0.7

mod analyze;
mod app;

use clap::{Args, Parser, Subcommand, ValueEnum};
use distortion_dsp::kernel::{gain_tube, progressive};
use distortion_dsp::{DistortionKernel, GainTube, KernelConfig, ProgressiveClip, Saturator};

#[derive(Parser)]
#[command(name = "drive", about = "Distortion kernel monitor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the harmonic content of a processed sine
    Analyze {
        #[command(flatten)]
        tone: ToneArgs,
        /// Sample rate for the offline render
        #[arg(long, default_value_t = 48_000.0)]
        sample_rate: f64,
    },
    /// Play a processed sine on the default output device
    Play {
        #[command(flatten)]
        tone: ToneArgs,
        /// Playback length
        #[arg(long, default_value_t = 4.0)]
        seconds: f32,
        /// Sweep drive from zero to its maximum while playing
        #[arg(long)]
        sweep: bool,
    },
}

#[derive(Args, Clone, Copy)]
pub struct ToneArgs {
    #[arg(long, value_enum, default_value_t = Strategy::Clip)]
    strategy: Strategy,
    /// Drive (clip: 0..1, tube: 0..10)
    #[arg(long, default_value_t = 0.5)]
    drive: f32,
    /// Linear input gain (tube strategy only)
    #[arg(long, default_value_t = 1.0)]
    gain: f32,
    /// Test tone frequency in Hz
    #[arg(long, default_value_t = 220.0)]
    freq: f32,
    /// Test tone peak amplitude
    #[arg(long, default_value_t = 0.5)]
    amplitude: f32,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Progressive soft-to-hard clipping
    Clip,
    /// Gain into tube saturation
    Tube,
}

impl Strategy {
    /// Address and top of range of the control `--drive` maps to.
    fn drive_control(self) -> (u64, f32) {
        match self {
            Strategy::Clip => (progressive::DRIVE, progressive::PROGRESSIVE_PARAMS[0].max),
            Strategy::Tube => (gain_tube::TUBE_DRIVE, gain_tube::GAIN_TUBE_PARAMS[1].max),
        }
    }
}

fn build<S: Saturator>(
    saturator: S,
    tone: &ToneArgs,
    config: KernelConfig,
) -> color_eyre::Result<DistortionKernel<S>> {
    let kernel = DistortionKernel::with_config(saturator, config)?;
    let (address, _) = tone.strategy.drive_control();
    kernel.set_parameter(address, tone.drive);
    if tone.strategy == Strategy::Tube {
        kernel.set_parameter(gain_tube::GAIN, tone.gain);
    }
    Ok(kernel)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { tone, sample_rate } => {
            let config = KernelConfig {
                sample_rate,
                channels: 1,
                ..Default::default()
            };
            match tone.strategy {
                Strategy::Clip => {
                    analyze::run(build(ProgressiveClip::new(), &tone, config)?, &tone)
                }
                Strategy::Tube => analyze::run(build(GainTube::new(), &tone, config)?, &tone),
            }
        }
        Command::Play {
            tone,
            seconds,
            sweep,
        } => match tone.strategy {
            Strategy::Clip => app::play(ProgressiveClip::new(), tone, seconds, sweep),
            Strategy::Tube => app::play(GainTube::new(), tone, seconds, sweep),
        },
    }
}

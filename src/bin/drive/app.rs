//! Live playback through the default output device

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use distortion_dsp::{KernelConfig, Saturator, MAX_BLOCK_SIZE};

use super::{build, ToneArgs};

/// How often the sweep pushes a new drive value from the control thread.
const SWEEP_INTERVAL: Duration = Duration::from_millis(50);

pub fn play<S: Saturator + 'static>(
    saturator: S,
    tone: ToneArgs,
    seconds: f32,
    sweep: bool,
) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    // The kernel sees one channel; the callback copies it to every output
    let kernel_config = KernelConfig {
        sample_rate: sample_rate as f64,
        channels: 1,
        max_frames: MAX_BLOCK_SIZE as u32,
        bypassed: false,
    };
    let mut kernel = build(saturator, &tone, kernel_config)?;
    let params = kernel.parameter_handle();

    tracing::info!(
        "playing {} Hz through {} channels at {} Hz",
        tone.freq,
        channels,
        sample_rate
    );

    let phase_step = TAU * tone.freq / sample_rate;
    let amplitude = tone.amplitude;
    let mut phase = 0.0f32;
    let mut frame_clock = 0i64;
    let mut dry = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut wet = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);

                for sample in &mut dry[..frames_to_render] {
                    *sample = phase.sin() * amplitude;
                    phase = (phase + phase_step) % TAU;
                }

                kernel.process(
                    &[&dry[..frames_to_render]],
                    &mut [&mut wet[..frames_to_render]],
                    frame_clock,
                    frames_to_render,
                );
                frame_clock += frames_to_render as i64;

                let out_off = frames_written * channels;
                for (i, &s) in wet[..frames_to_render].iter().enumerate() {
                    for ch in 0..channels {
                        data[out_off + i * channels + ch] = s;
                    }
                }

                frames_written += frames_to_render;
            }
        },
        |err| tracing::error!("audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    let duration = Duration::from_secs_f32(seconds.max(0.0));
    let started = Instant::now();
    let (address, max_drive) = tone.strategy.drive_control();

    while started.elapsed() < duration {
        if sweep {
            let progress = started.elapsed().as_secs_f32() / duration.as_secs_f32();
            params.set_parameter(address, progress.min(1.0) * max_drive);
        }
        std::thread::sleep(SWEEP_INTERVAL);
    }

    tracing::info!("final drive {:.3}", params.get_parameter(address));
    Ok(())
}

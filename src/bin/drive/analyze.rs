//! Offline harmonic analysis of a processed sine

use color_eyre::eyre::{ensure, Result as EyreResult};
use rustfft::{num_complex::Complex, FftPlanner};

use distortion_dsp::io::{process_offline, sine, ChannelBuffers};
use distortion_dsp::{DistortionKernel, Saturator};

use super::ToneArgs;

/// FFT length. The tone is snapped to a bin so no window is needed.
const FFT_SIZE: usize = 8192;

/// Harmonics reported, fundamental included.
const HARMONICS: usize = 8;

pub fn run<S: Saturator>(mut kernel: DistortionKernel<S>, tone: &ToneArgs) -> EyreResult<()> {
    let sample_rate = kernel.sample_rate() as f32;
    let bin = (tone.freq * FFT_SIZE as f32 / sample_rate).round().max(1.0) as usize;
    ensure!(
        bin * HARMONICS < FFT_SIZE / 2,
        "tone of {} Hz leaves no room for {} harmonics below Nyquist",
        tone.freq,
        HARMONICS
    );
    let freq = bin as f32 * sample_rate / FFT_SIZE as f32;

    // Two windows: the first settles any filter state, the second is measured
    let tone_signal = sine(freq, sample_rate, FFT_SIZE * 2, tone.amplitude);
    let input = ChannelBuffers::from_mono(&tone_signal, 1);
    let output = process_offline(&mut kernel, &input);
    let settled = &output.channel(0)[FFT_SIZE..];

    let mut spectrum: Vec<Complex<f32>> = settled.iter().map(|&s| Complex::new(s, 0.0)).collect();
    let mut planner = FftPlanner::<f32>::new();
    planner.plan_fft_forward(FFT_SIZE).process(&mut spectrum);

    let magnitude = |k: usize| spectrum[k].norm() * 2.0 / FFT_SIZE as f32;
    let fundamental = magnitude(bin);
    let peak = settled.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));

    println!("=== drive analyze ===");
    println!("Tone: {:.1} Hz at {:.2} peak, {} Hz sample rate", freq, tone.amplitude, sample_rate);
    println!("Output peak: {:.4}", peak);
    println!();

    let mut harmonic_power = 0.0f32;
    for h in 1..=HARMONICS {
        let level = magnitude(bin * h);
        let db = 20.0 * (level / fundamental.max(f32::EPSILON)).max(1e-9).log10();
        println!("  H{}  {:8.1} Hz  {:7.4}  {:7.1} dB", h, freq * h as f32, level, db);
        if h > 1 {
            harmonic_power += level * level;
        }
    }

    let thd = harmonic_power.sqrt() / fundamental.max(f32::EPSILON);
    println!();
    println!("THD: {:.2}%", thd * 100.0);

    Ok(())
}

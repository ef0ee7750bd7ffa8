pub mod config;
pub mod dsp; // Waveshaping and tube primitives
pub mod error;
pub mod io; // Offline buffers and rendering
pub mod kernel; // Render kernel, strategies, events
pub mod params; // Host-addressable controls

pub use config::KernelConfig;
pub use error::{Error, Result};
pub use kernel::{
    DistortionKernel, GainTube, ProgressiveClip, ProgressiveKernel, RenderEvent, Saturator,
    TubeKernel,
};
pub use params::{ParamAddress, ParamSpec, ParameterHandle, BYPASS_ADDRESS};

pub const MAX_BLOCK_SIZE: usize = 2048;

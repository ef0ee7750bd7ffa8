//! Render events and their dispatch into the parameter store.

use crate::params::{ParamAddress, ParameterStore};

/// Host render event, scoped to one render call.
///
/// Only [`RenderEvent::Parameter`] changes anything in this kernel. The other
/// variants exist so hosts can hand over their full event list unfiltered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderEvent {
    /// Immediate parameter change.
    Parameter {
        sample_time: i64,
        address: ParamAddress,
        value: f32,
    },
    /// Host-requested ramp. Ignored: goal values change only through
    /// `Parameter` events.
    ParameterRamp {
        sample_time: i64,
        address: ParamAddress,
        value: f32,
        ramp_frames: u32,
    },
    /// Short MIDI message. Ignored.
    Midi {
        sample_time: i64,
        cable: u8,
        len: u8,
        data: [u8; 3],
    },
    /// System-exclusive message; payload stays with the host. Ignored.
    MidiSysEx {
        sample_time: i64,
        cable: u8,
        len: u32,
    },
}

impl RenderEvent {
    pub fn parameter(sample_time: i64, address: ParamAddress, value: f32) -> Self {
        RenderEvent::Parameter {
            sample_time,
            address,
            value,
        }
    }

    #[inline]
    pub fn sample_time(&self) -> i64 {
        match *self {
            RenderEvent::Parameter { sample_time, .. }
            | RenderEvent::ParameterRamp { sample_time, .. }
            | RenderEvent::Midi { sample_time, .. }
            | RenderEvent::MidiSysEx { sample_time, .. } => sample_time,
        }
    }
}

/// Apply one event to the store. Returns whether it changed a parameter.
#[inline]
pub fn apply_event(store: &ParameterStore, event: &RenderEvent) -> bool {
    match *event {
        RenderEvent::Parameter { address, value, .. } => {
            store.set(address, value);
            true
        }
        _ => false,
    }
}

/// Apply events in the order given. No sorting, no buffering.
#[inline]
pub fn dispatch<'a>(store: &ParameterStore, events: impl IntoIterator<Item = &'a RenderEvent>) {
    for event in events {
        apply_event(store, event);
    }
}

/// Frame offset of an event inside a buffer starting at `start_time`.
///
/// Late events land on frame 0, events past the end on `frame_count`.
#[inline]
pub fn event_offset(sample_time: i64, start_time: i64, frame_count: usize) -> usize {
    let relative = sample_time.saturating_sub(start_time);
    if relative <= 0 {
        0
    } else {
        (relative as u64).min(frame_count as u64) as usize
    }
}

//! Host-addressable controls.
//!
//! Every control has a stable integer address and static metadata
//! ([`ParamSpec`]). Current values live in a [`ParameterStore`] made of
//! independent atomics, so the render thread and a UI thread can read and
//! write without a lock. Writes are never range-checked: the metadata is for
//! display, the algorithms cope with values outside it.

mod atomic;
mod store;

pub use atomic::{AtomicFlag, AtomicParam};
pub use store::{ParameterHandle, ParameterStore};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Stable parameter address as seen by the host.
pub type ParamAddress = u64;

/// Address of the host-visible bypass switch.
///
/// Sits outside every strategy's own address range.
pub const BYPASS_ADDRESS: ParamAddress = 0xFFFF;

/// Value returned when reading an address nobody declared.
pub const UNKNOWN_PARAMETER_VALUE: f32 = 0.0;

/// Display unit of a parameter.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Normalized 0..1 shown as a percentage.
    Percent,
    /// Plain multiplier (1.0 = unity).
    LinearGain,
    /// Unitless amount.
    Generic,
    /// On/off switch; 0.0 or 1.0.
    Boolean,
}

/// Static description of one parameter.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub address: ParamAddress,
    /// Machine identifier (`"drive"`, `"tubeDrive"`).
    pub identifier: &'static str,
    /// Display name.
    pub name: &'static str,
    pub unit: ParamUnit,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ParamSpec {
    /// Clamp a value into the declared range (for display and UI widgets).
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Map a value to 0..1 across the declared range, e.g. for a knob angle.
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize`](Self::normalize).
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min)
    }
}

/// The bypass switch as it appears in a host's parameter tree.
pub const BYPASS_SPEC: ParamSpec = ParamSpec {
    address: BYPASS_ADDRESS,
    identifier: "bypass",
    name: "Bypass",
    unit: ParamUnit::Boolean,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: ParamSpec = ParamSpec {
        address: 3,
        identifier: "level",
        name: "Level",
        unit: ParamUnit::Generic,
        min: 0.0,
        max: 10.0,
        default: 5.0,
    };

    #[test]
    fn test_normalize_maps_range_to_unit_interval() {
        assert_eq!(SPEC.normalize(0.0), 0.0);
        assert_eq!(SPEC.normalize(5.0), 0.5);
        assert_eq!(SPEC.normalize(10.0), 1.0);
        assert_eq!(SPEC.normalize(25.0), 1.0);
    }

    #[test]
    fn test_denormalize_inverts_normalize() {
        assert_eq!(SPEC.denormalize(0.25), 2.5);
        assert_eq!(SPEC.denormalize(SPEC.normalize(7.5)), 7.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(SPEC.clamp(-1.0), 0.0);
        assert_eq!(SPEC.clamp(11.0), 10.0);
        assert_eq!(SPEC.clamp(3.0), 3.0);
    }
}

use std::sync::Arc;

use super::{
    AtomicFlag, AtomicParam, ParamAddress, ParamSpec, BYPASS_ADDRESS, UNKNOWN_PARAMETER_VALUE,
};

/// Goal values for one strategy's parameter table plus the bypass switch.
///
/// Built once (non-realtime) from a `'static` spec table. After that every
/// operation is a lookup in a handful of entries and one atomic access, so it
/// is safe from the render thread.
#[derive(Debug)]
pub struct ParameterStore {
    specs: &'static [ParamSpec],
    values: Box<[AtomicParam]>,
    bypass: AtomicFlag,
}

impl ParameterStore {
    pub fn new(specs: &'static [ParamSpec]) -> Self {
        let values = specs.iter().map(|spec| AtomicParam::new(spec.default)).collect();
        tracing::trace!("parameter store created with {} parameters", specs.len());

        Self {
            specs,
            values,
            bypass: AtomicFlag::default(),
        }
    }

    #[inline]
    fn slot(&self, address: ParamAddress) -> Option<&AtomicParam> {
        self.specs
            .iter()
            .position(|spec| spec.address == address)
            .map(|index| &self.values[index])
    }

    /// Store a new goal value. Unknown addresses are ignored.
    #[inline]
    pub fn set(&self, address: ParamAddress, value: f32) {
        if address == BYPASS_ADDRESS {
            self.bypass.set(value >= 0.5);
            return;
        }

        if let Some(slot) = self.slot(address) {
            slot.set(value);
        }
    }

    /// Last goal value for `address`, or [`UNKNOWN_PARAMETER_VALUE`].
    #[inline]
    pub fn get(&self, address: ParamAddress) -> f32 {
        if address == BYPASS_ADDRESS {
            return if self.bypass.get() { 1.0 } else { 0.0 };
        }

        self.slot(address)
            .map_or(UNKNOWN_PARAMETER_VALUE, AtomicParam::get)
    }

    /// Render-thread read: relaxed ordering, same fallback as [`get`](Self::get).
    #[inline]
    pub fn load(&self, address: ParamAddress) -> f32 {
        self.slot(address)
            .map_or(UNKNOWN_PARAMETER_VALUE, AtomicParam::get_relaxed)
    }

    #[inline]
    pub fn is_bypassed(&self) -> bool {
        self.bypass.get()
    }

    #[inline]
    pub fn set_bypass(&self, bypassed: bool) {
        self.bypass.set(bypassed);
    }

    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }

    pub fn spec(&self, address: ParamAddress) -> Option<&'static ParamSpec> {
        self.specs.iter().find(|spec| spec.address == address)
    }

    /// Put every parameter back to its declared default. Bypass is untouched.
    pub fn reset_to_defaults(&self) {
        for (spec, slot) in self.specs.iter().zip(self.values.iter()) {
            slot.set(spec.default);
        }
    }
}

/// Cloneable access to a kernel's parameters from non-realtime threads.
///
/// Writes through a handle bypass the render-event path and are picked up by
/// the render thread at its next buffer.
#[derive(Debug, Clone)]
pub struct ParameterHandle {
    store: Arc<ParameterStore>,
}

impl ParameterHandle {
    pub(crate) fn new(store: Arc<ParameterStore>) -> Self {
        Self { store }
    }

    pub fn set_parameter(&self, address: ParamAddress, value: f32) {
        self.store.set(address, value);
    }

    pub fn get_parameter(&self, address: ParamAddress) -> f32 {
        self.store.get(address)
    }

    pub fn set_bypass(&self, bypassed: bool) {
        self.store.set_bypass(bypassed);
    }

    pub fn is_bypassed(&self) -> bool {
        self.store.is_bypassed()
    }

    pub fn specs(&self) -> &'static [ParamSpec] {
        self.store.specs()
    }

    pub fn spec(&self, address: ParamAddress) -> Option<&'static ParamSpec> {
        self.store.spec(address)
    }

    pub fn reset_to_defaults(&self) {
        self.store.reset_to_defaults();
    }
}

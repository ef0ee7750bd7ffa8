//! Lock-free cells shared between the render thread and control threads.

use std::sync::atomic::{AtomicBool, Ordering};

use atomic_float::AtomicF32;

/// Cache-line aligned atomic parameter value.
///
/// Each parameter gets its own line so a UI write to one control never
/// contends with render-thread reads of another.
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicParam {
    value: AtomicF32,
}

impl AtomicParam {
    pub fn new(value: f32) -> Self {
        Self {
            value: AtomicF32::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Acquire)
    }

    /// Relaxed load for the render loop, where a value one buffer stale is fine.
    #[inline]
    pub fn get_relaxed(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set(&self, value: f32) {
        self.value.store(value, Ordering::Release);
    }
}

impl Default for AtomicParam {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Cache-line aligned atomic bool.
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicFlag {
    value: AtomicBool,
}

impl AtomicFlag {
    pub fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::Release);
    }
}

impl Default for AtomicFlag {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_param() {
        let val = AtomicParam::new(0.5);
        assert_eq!(val.get(), 0.5);
        val.set(7.25);
        assert_eq!(val.get(), 7.25);
        assert_eq!(val.get_relaxed(), 7.25);
    }

    #[test]
    fn test_atomic_flag() {
        let flag = AtomicFlag::default();
        assert!(!flag.get());
        flag.set(true);
        assert!(flag.get());
    }

    #[test]
    fn test_params_do_not_share_cache_lines() {
        assert_eq!(std::mem::align_of::<AtomicParam>(), 64);
        assert_eq!(std::mem::size_of::<AtomicParam>(), 64);
    }
}

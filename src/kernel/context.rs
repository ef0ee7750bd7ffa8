/// Host transport snapshot, as a tempo query callback would report it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MusicalContext {
    pub tempo: f64,
    pub time_signature_numerator: f64,
    pub time_signature_denominator: i64,
    pub beat_position: f64,
    pub sample_offset_to_next_beat: i64,
    pub measure_downbeat_position: f64,
}

/// Host-supplied tempo query.
///
/// Stored by the kernel but never called; reserved for tempo-synced
/// features.
pub type MusicalContextBlock = Box<dyn Fn() -> Option<MusicalContext> + Send>;

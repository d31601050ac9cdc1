use crate::field::MAX_BLOBS;

const INITIAL_BLOB_COUNT: u32 = 1;
// Spin speed is tracked in tenths of a revolution per second so repeated
// steps land exactly on 0.1 multiples.
const INITIAL_SPIN_TENTHS: u32 = 2;
const MAX_SPIN_TENTHS: u32 = 20;

/// Click-driven parameter cycle: grow the blob count to the maximum, then
/// speed up the spin in 0.1 steps up to 2.0, then start over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickCycle {
    blob_count: u32,
    spin_tenths: u32,
}

impl Default for ClickCycle {
    fn default() -> Self {
        Self {
            blob_count: INITIAL_BLOB_COUNT,
            spin_tenths: INITIAL_SPIN_TENTHS,
        }
    }
}

impl ClickCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start mid-cycle. Values are clamped into the cycle's range.
    pub fn starting_at(blob_count: u32, spin_speed: f32) -> Self {
        let spin_tenths = (spin_speed * 10.0).round().max(0.0) as u32;
        Self {
            blob_count: blob_count.clamp(1, MAX_BLOBS),
            spin_tenths: spin_tenths.clamp(INITIAL_SPIN_TENTHS, MAX_SPIN_TENTHS),
        }
    }

    pub fn advance(&mut self) {
        if self.blob_count < MAX_BLOBS {
            self.blob_count += 1;
        } else if self.spin_tenths < MAX_SPIN_TENTHS {
            self.spin_tenths += 1;
        } else {
            *self = Self::default();
        }
    }

    pub fn blob_count(&self) -> u32 {
        self.blob_count
    }

    pub fn spin_speed(&self) -> f32 {
        self.spin_tenths as f32 / 10.0
    }
}

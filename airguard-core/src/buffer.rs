//! Fixed-Capacity History Buffer for Per-Channel Sensor Samples
//!
//! ## Overview
//!
//! Every channel keeps the raw samples it has seen in a ring buffer whose
//! capacity is fixed at compile time through a const generic. Both filter
//! stages read windows out of this buffer; neither keeps storage of its own.
//!
//! ## Behaviour
//!
//! - While `len < N`, `push` grows the buffer by one slot.
//! - Once `len == N`, `push` overwrites the oldest slot and that slot becomes
//!   the newest. The observable effect is a FIFO eviction followed by an
//!   append, but nothing is allocated or moved.
//! - Windows are always yielded oldest first, most recent last.
//! - Asking for a window larger than the history silently yields what exists.
//!
//! ### Memory Layout
//!
//! ```text
//! HistoryBuffer<5> after 7 pushes (values 1..=7):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  6  │  7  │  3  │  4  │  5  │  ← slots
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2 (oldest sample, next slot to reuse)
//!
//! Logical view: [3, 4, 5, 6, 7]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use airguard_core::buffer::HistoryBuffer;
//!
//! let mut history: HistoryBuffer<4> = HistoryBuffer::new();
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     history.push(value);
//! }
//!
//! assert_eq!(history.len(), 4);
//! let window: Vec<f32> = history.recent(2).collect();
//! assert_eq!(window, vec![4.0, 5.0]);
//! ```

/// Ring buffer of raw samples with capacity `N`
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - when `len < N`, the samples occupy slots `0..len` in insertion order
/// - when `len == N`, the oldest sample sits at `write_pos`
///
/// ## Thread Safety
///
/// Not synchronized. Callers sharing a buffer across threads must serialize
/// access themselves.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<const N: usize> {
    data: [f32; N],

    /// Slot the next push writes to
    write_pos: usize,

    /// Number of valid samples, grows until `N`
    len: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Creates an empty buffer
    ///
    /// ```rust
    /// use airguard_core::buffer::HistoryBuffer;
    /// static EMPTY: HistoryBuffer<100> = HistoryBuffer::new();
    /// ```
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Appends a sample, evicting the oldest one when full
    pub fn push(&mut self, sample: f32) {
        if N == 0 {
            return;
        }

        self.data[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples retained
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent sample
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Iterate over every sample, oldest to newest
    pub fn iter(&self) -> HistoryIter<'_, N> {
        self.recent(self.len)
    }

    /// Iterate over the last `min(n, len)` samples, oldest to newest
    pub fn recent(&self, n: usize) -> HistoryIter<'_, N> {
        let count = n.min(self.len);
        HistoryIter {
            buffer: self,
            index: self.len - count,
            end: self.len,
        }
    }

    /// Drop all samples; slots are kept for reuse
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Maps a logical index (0 = oldest) to its slot
    ///
    /// ```text
    /// Slots:    [6, 7, 3, 4, 5]   write_pos = 2
    /// Logical:  [3, 4, 5, 6, 7]
    /// logical[i] = slot[(write_pos + i) % N]
    /// ```
    fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }

        let slot = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        Some(self.data[slot])
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a window of a [`HistoryBuffer`], oldest first
pub struct HistoryIter<'a, const N: usize> {
    buffer: &'a HistoryBuffer<N>,
    index: usize,
    end: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }

        let sample = self.buffer.get(self.index)?;
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, const N: usize> ExactSizeIterator for HistoryIter<'a, N> {}

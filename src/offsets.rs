use alloc::vec::Vec;

/// Cumulative start offsets for every row, plus the total extent.
///
/// Built in one linear pass from a per-row height function. Offsets are non-decreasing by
/// construction: heights are `u32` and the running sum saturates instead of wrapping.
///
/// There is no per-row update: when heights change, compute a new index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetIndex {
    offsets: Vec<u64>,
    total: u64,
}

impl OffsetIndex {
    pub fn compute<R>(rows: &[R], mut height: impl FnMut(&R) -> u32) -> Self {
        let mut offsets = Vec::with_capacity(rows.len());
        let mut total = 0u64;
        for row in rows {
            offsets.push(total);
            total = total.saturating_add(height(row) as u64);
        }
        Self { offsets, total }
    }

    /// Builds an index directly from a slice of heights.
    pub fn from_heights(heights: &[u32]) -> Self {
        Self::compute(heights, |h| *h)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn offset(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied()
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        let start = self.offset(index)?;
        let end = self.offset(index + 1).unwrap_or(self.total);
        Some(u32::try_from(end - start).unwrap_or(u32::MAX))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.offsets
    }

    /// Returns the first index whose offset is `>= target`, or `len()` when there is none.
    ///
    /// Equal offsets (zero-height rows) resolve to the lowest index.
    pub fn lower_bound(&self, target: u64) -> usize {
        self.offsets.partition_point(|&off| off < target)
    }

    /// Returns the row whose span contains `offset`.
    ///
    /// Offsets at or past the total extent map to the last row. `None` when empty.
    pub fn row_at(&self, offset: u64) -> Option<usize> {
        if self.offsets.is_empty() {
            return None;
        }
        let after = self.offsets.partition_point(|&off| off <= offset);
        Some(after.saturating_sub(1))
    }
}


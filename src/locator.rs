use crate::{OffsetIndex, Window};

/// Maps a viewport to the window of rows that should hold surfaces.
///
/// The window is centered on the row at the viewport midpoint and spans `ceil(budget / 2)`
/// rows on each side, clamped to the row count. The locator remembers the last midpoint row
/// so that scroll deltas which do not cross a row boundary resolve to "no change".
#[derive(Clone, Debug)]
pub struct WindowLocator {
    budget: usize,
    last_mid: Option<usize>,
}

impl WindowLocator {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            last_mid: None,
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Rows on each side of the midpoint row.
    pub fn half_span(&self) -> usize {
        self.budget.div_ceil(2)
    }

    pub fn last_mid(&self) -> Option<usize> {
        self.last_mid
    }

    /// Forgets the remembered midpoint so the next `locate` always reports a window.
    pub fn reset(&mut self) {
        self.last_mid = None;
    }

    /// Computes the window for a viewport spanning `[top, bottom)` without touching state.
    pub fn window_for(&self, top: u64, bottom: u64, offsets: &OffsetIndex) -> Window {
        let midpoint = top / 2 + bottom / 2 + (top % 2 + bottom % 2) / 2;
        let mid = offsets.lower_bound(midpoint);
        let half = self.half_span();
        Window {
            start: mid.saturating_sub(half),
            end: mid.saturating_add(half).min(offsets.len()),
            mid,
        }
    }

    /// Like [`Self::window_for`], but returns `None` when the midpoint row is unchanged
    /// since the previous call.
    pub fn locate(&mut self, top: u64, bottom: u64, offsets: &OffsetIndex) -> Option<Window> {
        let window = self.window_for(top, bottom, offsets);
        if self.last_mid == Some(window.mid) {
            rtrace!(mid = window.mid, "locate: midpoint row unchanged");
            return None;
        }
        rtrace!(
            top,
            bottom,
            start = window.start,
            end = window.end,
            mid = window.mid,
            "locate"
        );
        self.last_mid = Some(window.mid);
        Some(window)
    }
}

use core::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
}

/// Where a [`crate::Recycler`] is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleState {
    /// No pool is built; scroll notifications are ignored.
    #[default]
    Uninitialized,
    /// The pool is built and scroll notifications are handled.
    Ready,
}

/// A scroll notification delivered by the host viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// Scroll offset of the viewport's top edge.
    pub offset: u64,
    /// Visible extent of the viewport.
    pub viewport: u32,
}

/// The contiguous range of rows that should hold a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
    /// Row at the viewport midpoint (lower bound into the offsets).
    pub mid: usize,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// What a single recycle pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecycleReport {
    /// Rows that received a surface (one repaint + one positioning each).
    pub reassigned: usize,
    /// Surfaces detached from rows outside the window and left free.
    pub released: usize,
    /// Rows inside the window that could not be served because the pool was exhausted.
    pub unserved: usize,
}

impl RecycleReport {
    pub fn is_noop(&self) -> bool {
        self.reassigned == 0 && self.released == 0
    }
}

use alloc::vec::Vec;

use crate::ScrollNotifier;

/// The host viewport a [`crate::Recycler`] renders into.
///
/// The recycler never measures anything itself. It tells the host where pooled surfaces go
/// and how tall the scrollable content is; the host delivers scroll notifications back via
/// [`crate::Recycler::on_scroll`] / [`crate::Recycler::on_scroll_event`].
pub trait Container<S> {
    /// Positions the surface in `slot` at an absolute main-axis `offset`.
    fn place(&mut self, slot: usize, surface: &mut S, offset: u64);

    /// Pins the extent marker at `extent` so the host reports the full scrollable size.
    fn place_extent_marker(&mut self, extent: u64);

    /// Called at the start of every reset, before the previous pool is dropped.
    fn clear(&mut self) {}

    /// Called once the pool is rebuilt; hosts subscribe to scroll notifications here.
    fn attach(&mut self, _notifier: &ScrollNotifier) {}
}

/// A container that records placements instead of drawing.
///
/// Useful for immediate-mode hosts (TUIs, canvases) that read positions back each frame,
/// and for tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessContainer {
    positions: Vec<Option<u64>>,
    extent: Option<u64>,
    attached: usize,
    placements: usize,
}

impl HeadlessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last offset the surface in `slot` was placed at.
    pub fn position(&self, slot: usize) -> Option<u64> {
        self.positions.get(slot).copied().flatten()
    }

    pub fn extent_marker(&self) -> Option<u64> {
        self.extent
    }

    /// How many times the container was attached (once per reset).
    pub fn attach_count(&self) -> usize {
        self.attached
    }

    /// Total `place` calls since creation.
    pub fn placements(&self) -> usize {
        self.placements
    }
}

impl<S> Container<S> for HeadlessContainer {
    fn place(&mut self, slot: usize, _surface: &mut S, offset: u64) {
        if self.positions.len() <= slot {
            self.positions.resize(slot + 1, None);
        }
        self.positions[slot] = Some(offset);
        self.placements += 1;
    }

    fn place_extent_marker(&mut self, extent: u64) {
        self.extent = Some(extent);
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.extent = None;
    }

    fn attach(&mut self, _notifier: &ScrollNotifier) {
        self.attached += 1;
    }
}

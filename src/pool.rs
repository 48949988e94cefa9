use alloc::vec::Vec;

use crate::{RecycleReport, Window};

/// A fixed set of surfaces and their row assignments.
///
/// Slot `k` owns surface `k` for the lifetime of the pool. Two tables keep the row/slot
/// bijection:
/// - the assignment index (`slot -> Option<row>`), scanned when looking for a surface to steal;
/// - the row table (`row -> Option<slot>`), consulted to skip rows that already hold one.
///
/// The scan cursor starts at slot 0 when the pool is built and persists across
/// [`Self::recycle`] calls, so consecutive passes continue where the previous one stopped.
#[derive(Clone, Debug)]
pub struct SurfacePool<S> {
    surfaces: Vec<S>,
    assignment: Vec<Option<usize>>,
    row_slots: Vec<Option<usize>>,
    cursor: usize,
}

impl<S> Default for SurfacePool<S> {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            assignment: Vec::new(),
            row_slots: Vec::new(),
            cursor: 0,
        }
    }
}

impl<S> SurfacePool<S> {
    /// Builds `min(pool_size, row_count)` surfaces and assigns slot `k` to row `k`.
    ///
    /// `build(row)` is called once per slot, in row order.
    pub fn build(row_count: usize, pool_size: usize, mut build: impl FnMut(usize) -> S) -> Self {
        let n = pool_size.min(row_count);
        let mut surfaces = Vec::with_capacity(n);
        let mut assignment = Vec::with_capacity(n);
        let mut row_slots = alloc::vec![None; row_count];
        for row in 0..n {
            surfaces.push(build(row));
            assignment.push(Some(row));
            row_slots[row] = Some(row);
        }
        Self {
            surfaces,
            assignment,
            row_slots,
            cursor: 0,
        }
    }

    /// Number of surfaces in the pool.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Number of rows the pool was built for.
    pub fn row_count(&self) -> usize {
        self.row_slots.len()
    }

    /// Number of surfaces currently linked to a row.
    pub fn assigned_len(&self) -> usize {
        self.assignment.iter().filter(|a| a.is_some()).count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slot_of(&self, row: usize) -> Option<usize> {
        self.row_slots.get(row).copied().flatten()
    }

    pub fn row_of(&self, slot: usize) -> Option<usize> {
        self.assignment.get(slot).copied().flatten()
    }

    pub fn surface(&self, slot: usize) -> Option<&S> {
        self.surfaces.get(slot)
    }

    pub fn surface_mut(&mut self, slot: usize) -> Option<&mut S> {
        self.surfaces.get_mut(slot)
    }

    pub fn surface_for(&self, row: usize) -> Option<&S> {
        self.surface(self.slot_of(row)?)
    }

    /// Iterates `(row, slot, surface)` for every linked surface, in slot order.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, usize, &S)> + '_ {
        self.assignment
            .iter()
            .zip(self.surfaces.iter())
            .enumerate()
            .filter_map(|(slot, (row, surface))| row.map(|row| (row, slot, surface)))
    }

    /// Moves surfaces onto the rows of `window` that lack one.
    ///
    /// Rows already inside the window with a surface are left alone. For every other row in
    /// the window, in ascending order, the first slot at or after the cursor that is free or
    /// linked to a row outside the window is stolen, relinked, and handed to
    /// `paint(slot, row, surface)` exactly once.
    ///
    /// When the pool runs out of candidates the remaining rows stay unserved. Afterwards every
    /// slot still linked outside the window is released without being painted.
    pub fn recycle(
        &mut self,
        window: Window,
        mut paint: impl FnMut(usize, usize, &mut S),
    ) -> RecycleReport {
        let mut report = RecycleReport::default();
        let end = window.end.min(self.row_slots.len());

        for row in window.start..end {
            if self.row_slots[row].is_some() {
                continue;
            }
            let Some(slot) = self.find_free(window) else {
                report.unserved = (row..end)
                    .filter(|&r| self.row_slots[r].is_none())
                    .count();
                // An odd pool size makes the window one row wider than the pool every pass.
                let expected = window.len().saturating_sub(self.surfaces.len());
                if report.unserved > expected {
                    rwarn!(
                        unserved = report.unserved,
                        window_len = window.len(),
                        pool = self.surfaces.len(),
                        "recycle: window is wider than the pool"
                    );
                } else {
                    rtrace!(
                        unserved = report.unserved,
                        window_len = window.len(),
                        pool = self.surfaces.len(),
                        "recycle: window is wider than the pool"
                    );
                }
                break;
            };

            if let Some(old) = self.assignment[slot] {
                self.row_slots[old] = None;
            }
            self.row_slots[row] = Some(slot);
            self.assignment[slot] = Some(row);
            paint(slot, row, &mut self.surfaces[slot]);
            self.cursor = (slot + 1) % self.surfaces.len();
            report.reassigned += 1;
        }

        for entry in &mut self.assignment {
            let Some(old) = *entry else {
                continue;
            };
            if !window.contains(old) {
                self.row_slots[old] = None;
                *entry = None;
                report.released += 1;
            }
        }

        debug_assert!(self.is_consistent(), "row/slot tables diverged");
        report
    }

    fn find_free(&self, window: Window) -> Option<usize> {
        let n = self.assignment.len();
        (0..n)
            .map(|step| (self.cursor + step) % n)
            .find(|&slot| match self.assignment[slot] {
                Some(row) => !window.contains(row),
                None => true,
            })
    }

    fn is_consistent(&self) -> bool {
        let forward = self
            .assignment
            .iter()
            .enumerate()
            .all(|(slot, &row)| row.is_none_or(|row| self.row_slots[row] == Some(slot)));
        let linked = self.row_slots.iter().filter(|s| s.is_some()).count();
        forward && linked == self.assigned_len()
    }
}

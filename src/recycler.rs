use alloc::vec::Vec;

use crate::options::{BuildSurfaceCallback, HeightCallback, UpdateSurfaceCallback};
use crate::{
    Align, ConfigError, Container, LifecycleState, OffsetIndex, RecycleReport, RecyclerOptions,
    ScrollEvent, ScrollNotifier, SurfacePool, Window, WindowLocator,
};

/// A row that currently holds a surface, as yielded by [`Recycler::for_each_assigned`].
#[derive(Debug)]
pub struct AssignedRow<'a, R, S> {
    pub index: usize,
    /// Absolute start offset the surface is placed at.
    pub offset: u64,
    pub row: &'a R,
    pub surface: &'a S,
}

/// Drives a bounded surface pool over a large list of rows.
///
/// The recycler owns the rows, the offset index, the pool and the host container. Hosts feed
/// it scroll notifications; it answers by repainting and repositioning only the surfaces
/// whose row changed.
///
/// Lifecycle: `Uninitialized -> reset -> Ready`. `Recycler::new` runs the first reset, so a
/// constructed recycler is always `Ready`. Every later [`Self::reset`] passes through
/// `Uninitialized` again while the pool is rebuilt.
pub struct Recycler<R, S, C> {
    container: C,
    rows: Vec<R>,
    build_surface: BuildSurfaceCallback<R, S>,
    update_surface: UpdateSurfaceCallback<R, S>,
    height: HeightCallback<R>,
    pool_size: usize,
    viewport_height: u32,
    scroll_offset: u64,

    offsets: OffsetIndex,
    pool: SurfacePool<S>,
    locator: WindowLocator,

    state: LifecycleState,
    window: Option<Window>,
    last_report: Option<RecycleReport>,
    // Carries the ready and updating flags; notifications arriving mid-pass are dropped there.
    notifier: ScrollNotifier,
}

impl<R, S, C: Container<S>> Recycler<R, S, C> {
    /// Validates `options` and builds the initial pool.
    pub fn new(options: RecyclerOptions<R, S, C>) -> Result<Self, ConfigError> {
        let RecyclerOptions {
            container,
            rows,
            build_surface,
            update_surface,
            height,
            pool_size,
            viewport_height,
            notifier,
        } = options;
        let container = container.ok_or(ConfigError::MissingContainer)?;
        let rows = rows.ok_or(ConfigError::MissingRows)?;
        let build_surface = build_surface.ok_or(ConfigError::MissingBuildSurface)?;
        let update_surface = update_surface.ok_or(ConfigError::MissingUpdateSurface)?;
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        rdebug!(
            rows = rows.len(),
            pool_size,
            viewport_height,
            "Recycler::new"
        );
        let mut r = Self {
            container,
            rows,
            build_surface,
            update_surface,
            height,
            pool_size,
            viewport_height,
            scroll_offset: 0,
            offsets: OffsetIndex::default(),
            pool: SurfacePool::default(),
            locator: WindowLocator::new(pool_size),
            state: LifecycleState::Uninitialized,
            window: None,
            last_report: None,
            notifier: notifier.unwrap_or_default(),
        };
        r.reset();
        Ok(r)
    }

    /// Rebuilds everything from the current rows.
    ///
    /// Clears the container, drops the previous pool, recomputes offsets, builds
    /// `min(pool_size, row_count)` surfaces for rows `0..n`, places each at its row's offset,
    /// pins the extent marker and re-attaches to scroll notifications.
    ///
    /// `build_surface` paints the new surface itself, so `update_surface` is not called here.
    pub fn reset(&mut self) {
        self.state = LifecycleState::Uninitialized;
        self.notifier.set_ready(false);
        self.notifier.take_pending();
        self.container.clear();
        self.pool = SurfacePool::default();
        self.window = None;
        self.last_report = None;
        self.locator.reset();

        self.offsets = OffsetIndex::compute(&self.rows, |row| (self.height)(row));
        self.pool = SurfacePool::build(self.rows.len(), self.pool_size, |i| {
            (self.build_surface)(&self.rows[i])
        });

        let Self {
            pool,
            container,
            offsets,
            notifier,
            ..
        } = self;
        for slot in 0..pool.len() {
            let Some(row) = pool.row_of(slot) else {
                continue;
            };
            let offset = offsets.offset(row).unwrap_or_default();
            if let Some(surface) = pool.surface_mut(slot) {
                container.place(slot, surface, offset);
            }
        }
        container.place_extent_marker(offsets.total());
        container.attach(notifier);

        rdebug!(
            rows = self.rows.len(),
            surfaces = self.pool.len(),
            extent = self.offsets.total(),
            "reset"
        );
        self.state = LifecycleState::Ready;
        self.notifier.set_ready(true);
    }

    /// Replaces the row payloads and resets.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = R>) {
        self.rows = rows.into_iter().collect();
        self.reset();
    }

    /// Handles a scroll notification using the current viewport height.
    pub fn on_scroll(&mut self, offset: u64) {
        self.handle_scroll(offset, None);
    }

    /// Handles a scroll notification that also carries the viewport's visible extent.
    pub fn on_scroll_event(&mut self, event: ScrollEvent) {
        self.handle_scroll(event.offset, Some(event.viewport));
    }

    /// Applies the latest notification accepted by the [`ScrollNotifier`], if any.
    ///
    /// Returns `true` when a pass ran. Hosts call this from their event loop after
    /// delivering through the notifier.
    pub fn process_pending(&mut self) -> bool {
        let Some((offset, viewport)) = self.notifier.take_pending() else {
            return false;
        };
        self.handle_scroll(offset, viewport);
        true
    }

    fn handle_scroll(&mut self, offset: u64, viewport: Option<u32>) {
        debug_assert_eq!(self.state, LifecycleState::Ready);
        // A direct notification supersedes anything delivered through the notifier before it.
        self.notifier.take_pending();
        self.notifier.set_updating(true);

        if let Some(viewport) = viewport {
            self.viewport_height = viewport;
        }
        self.scroll_offset = offset;
        let bottom = offset.saturating_add(self.viewport_height as u64);
        rtrace!(offset, bottom, "on_scroll");

        if let Some(window) = self.locator.locate(offset, bottom, &self.offsets) {
            let Self {
                pool,
                container,
                offsets,
                rows,
                update_surface,
                ..
            } = self;
            let report = pool.recycle(window, |slot, row, surface| {
                update_surface(&rows[row], &mut *surface);
                container.place(slot, surface, offsets.offset(row).unwrap_or_default());
            });
            rtrace!(
                start = window.start,
                end = window.end,
                reassigned = report.reassigned,
                released = report.released,
                unserved = report.unserved,
                "recycle"
            );
            self.window = Some(window);
            self.last_report = Some(report);
        }

        self.notifier.set_updating(false);
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// `true` while a scroll pass is running (observable from callbacks via the notifier).
    pub fn is_updating(&self) -> bool {
        self.notifier.is_updating()
    }

    /// Notifications dropped because they arrived while a pass was running.
    pub fn dropped_notifications(&self) -> usize {
        self.notifier.dropped()
    }

    /// A handle sharing this recycler's update flag.
    pub fn notifier(&self) -> ScrollNotifier {
        self.notifier.clone()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn offsets(&self) -> &OffsetIndex {
        &self.offsets
    }

    pub fn total_extent(&self) -> u64 {
        self.offsets.total()
    }

    pub fn offset_of(&self, index: usize) -> Option<u64> {
        self.offsets.offset(index)
    }

    pub fn row_at_offset(&self, offset: u64) -> Option<usize> {
        self.offsets.row_at(offset)
    }

    /// The window applied by the most recent recycle pass, if any since the last reset.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn last_report(&self) -> Option<RecycleReport> {
        self.last_report
    }

    pub fn pool(&self) -> &SurfacePool<S> {
        &self.pool
    }

    pub fn surface_for(&self, index: usize) -> Option<&S> {
        self.pool.surface_for(index)
    }

    pub fn assigned_count(&self) -> usize {
        self.pool.assigned_len()
    }

    /// Visits every row that holds a surface, in slot order.
    pub fn for_each_assigned(&self, mut f: impl FnMut(AssignedRow<'_, R, S>)) {
        for (index, _slot, surface) in self.pool.assigned() {
            f(AssignedRow {
                index,
                offset: self.offsets.offset(index).unwrap_or_default(),
                row: &self.rows[index],
                surface,
            });
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.offsets
            .total()
            .saturating_sub(self.viewport_height as u64)
    }

    /// Scroll offset that brings row `index` to the given edge of the viewport (clamped).
    ///
    /// Out-of-range indexes are clamped to the last row.
    pub fn scroll_offset_for_row(&self, index: usize, align: Align) -> u64 {
        let count = self.offsets.len();
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let start = self.offsets.offset(index).unwrap_or_default();
        let size = self.offsets.height(index).unwrap_or_default() as u64;
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => start.saturating_add(size).saturating_sub(view),
            Align::Center => start.saturating_add(size / 2).saturating_sub(view / 2),
        };
        target.min(self.max_scroll_offset())
    }
}

impl<R, S, C> core::fmt::Debug for Recycler<R, S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("state", &self.state)
            .field("rows", &self.rows.len())
            .field("pool_size", &self.pool_size)
            .field("surfaces", &self.pool.len())
            .field("viewport_height", &self.viewport_height)
            .field("scroll_offset", &self.scroll_offset)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

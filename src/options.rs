use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::ScrollNotifier;

pub const DEFAULT_POOL_SIZE: usize = 100;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 400;
pub const DEFAULT_ROW_HEIGHT: u32 = 20;

/// Builds the surface for a pool slot, painted with the given row.
pub type BuildSurfaceCallback<R, S> = Arc<dyn Fn(&R) -> S + Send + Sync>;

/// Repaints a recycled surface with the content of its new row.
pub type UpdateSurfaceCallback<R, S> = Arc<dyn Fn(&R, &mut S) + Send + Sync>;

/// Returns the main-axis extent of a row. Must be a pure function of the row.
pub type HeightCallback<R> = Arc<dyn Fn(&R) -> u32 + Send + Sync>;

/// Configuration for [`crate::Recycler`].
///
/// `container`, `rows`, `build_surface` and `update_surface` are required; `Recycler::new`
/// reports a [`crate::ConfigError`] when one is missing. Callbacks are stored in `Arc`s so the
/// options are cheap to clone.
pub struct RecyclerOptions<R, S, C> {
    pub container: Option<C>,
    pub rows: Option<Vec<R>>,
    pub build_surface: Option<BuildSurfaceCallback<R, S>>,
    pub update_surface: Option<UpdateSurfaceCallback<R, S>>,
    pub height: HeightCallback<R>,
    /// Upper bound on simultaneously rendered surfaces. Also the width of the fill window.
    pub pool_size: usize,
    /// Visible extent used until the host reports one with a scroll event.
    pub viewport_height: u32,
    /// Handle shared with the recycler. A fresh one is created when unset.
    pub notifier: Option<ScrollNotifier>,
}

impl<R, S, C> RecyclerOptions<R, S, C> {
    pub fn new() -> Self {
        Self {
            container: None,
            rows: None,
            build_surface: None,
            update_surface: None,
            height: Arc::new(|_| DEFAULT_ROW_HEIGHT),
            pool_size: DEFAULT_POOL_SIZE,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            notifier: None,
        }
    }

    pub fn with_container(mut self, container: C) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows = Some(rows.into_iter().collect());
        self
    }

    pub fn with_build_surface(mut self, f: impl Fn(&R) -> S + Send + Sync + 'static) -> Self {
        self.build_surface = Some(Arc::new(f));
        self
    }

    pub fn with_update_surface(
        mut self,
        f: impl Fn(&R, &mut S) + Send + Sync + 'static,
    ) -> Self {
        self.update_surface = Some(Arc::new(f));
        self
    }

    pub fn with_height(mut self, f: impl Fn(&R) -> u32 + Send + Sync + 'static) -> Self {
        self.height = Arc::new(f);
        self
    }

    /// Every row gets the same `height`.
    pub fn with_fixed_height(self, height: u32) -> Self {
        self.with_height(move |_| height)
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    /// Shares `notifier` with the recycler, so callbacks built beforehand can capture a clone.
    pub fn with_notifier(mut self, notifier: ScrollNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

impl<R, S, C> Default for RecyclerOptions<R, S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone, S, C: Clone> Clone for RecyclerOptions<R, S, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            rows: self.rows.clone(),
            build_surface: self.build_surface.clone(),
            update_surface: self.update_surface.clone(),
            height: Arc::clone(&self.height),
            pool_size: self.pool_size,
            viewport_height: self.viewport_height,
            notifier: self.notifier.clone(),
        }
    }
}

impl<R, S, C> core::fmt::Debug for RecyclerOptions<R, S, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("has_container", &self.container.is_some())
            .field("rows", &self.rows.as_ref().map(Vec::len))
            .field("has_build_surface", &self.build_surface.is_some())
            .field("has_update_surface", &self.update_surface.is_some())
            .field("pool_size", &self.pool_size)
            .field("viewport_height", &self.viewport_height)
            .field("has_notifier", &self.notifier.is_some())
            .finish_non_exhaustive()
    }
}

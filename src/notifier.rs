use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crate::ScrollEvent;

// Stored in `pending_viewport` when a notification carried no viewport extent.
const NO_VIEWPORT: u64 = u64::MAX;

/// What happened to a notification handed to a [`ScrollNotifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delivery {
    /// Stored as the latest pending notification; the next
    /// [`crate::Recycler::process_pending`] applies it.
    Accepted,
    /// A pass was in flight. The notification was counted and discarded.
    Dropped,
    /// The recycler is not `Ready` (before construction finished or during a reset).
    Ignored,
}

/// A cloneable handle through which a host delivers scroll notifications.
///
/// Hosts usually receive scroll events from places that cannot borrow the
/// [`crate::Recycler`]: a [`crate::Container`] that subscribed in `attach`, a surface callback,
/// another thread. The notifier shares the recycler's update flag, so a notification that
/// arrives while a pass is running is dropped (and counted) instead of queued. Otherwise it
/// replaces any earlier pending notification.
///
/// Create one up front and hand it to [`crate::RecyclerOptions::with_notifier`] when the
/// callbacks need it, or take the recycler's own via [`crate::Recycler::notifier`].
#[derive(Clone, Debug, Default)]
pub struct ScrollNotifier {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    ready: AtomicBool,
    updating: AtomicBool,
    dropped: AtomicUsize,
    has_pending: AtomicBool,
    pending_offset: AtomicU64,
    pending_viewport: AtomicU64,
}

impl ScrollNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a scroll offset; the viewport height stays as it is.
    pub fn notify(&self, offset: u64) -> Delivery {
        self.deliver(offset, NO_VIEWPORT)
    }

    /// Delivers a scroll offset together with the viewport's visible extent.
    pub fn notify_event(&self, event: ScrollEvent) -> Delivery {
        self.deliver(event.offset, u64::from(event.viewport))
    }

    fn deliver(&self, offset: u64, viewport: u64) -> Delivery {
        let s = &*self.shared;
        if !s.ready.load(Ordering::Acquire) {
            rtrace!(offset, "on_scroll: not ready, ignored");
            return Delivery::Ignored;
        }
        if s.updating.load(Ordering::Acquire) {
            s.dropped.fetch_add(1, Ordering::Relaxed);
            rwarn!(offset, "on_scroll: update in flight, notification dropped");
            return Delivery::Dropped;
        }
        s.pending_offset.store(offset, Ordering::Relaxed);
        s.pending_viewport.store(viewport, Ordering::Relaxed);
        s.has_pending.store(true, Ordering::Release);
        Delivery::Accepted
    }

    /// `true` while the recycler is running a scroll pass.
    pub fn is_updating(&self) -> bool {
        self.shared.updating.load(Ordering::Acquire)
    }

    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// Notifications dropped because they arrived while a pass was running.
    pub fn dropped(&self) -> usize {
        self.shared.dropped.load(Ordering::Relaxed)
    }

    pub fn has_pending(&self) -> bool {
        self.shared.has_pending.load(Ordering::Acquire)
    }

    pub(crate) fn set_ready(&self, ready: bool) {
        self.shared.ready.store(ready, Ordering::Release);
    }

    pub(crate) fn set_updating(&self, updating: bool) {
        self.shared.updating.store(updating, Ordering::Release);
    }

    /// Takes the latest accepted notification as `(offset, viewport)`.
    pub(crate) fn take_pending(&self) -> Option<(u64, Option<u32>)> {
        let s = &*self.shared;
        if !s.has_pending.swap(false, Ordering::Acquire) {
            return None;
        }
        let offset = s.pending_offset.load(Ordering::Relaxed);
        let viewport = u32::try_from(s.pending_viewport.load(Ordering::Relaxed)).ok();
        Some((offset, viewport))
    }
}

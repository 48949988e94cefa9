//! A headless surface-recycling engine for large, variable-height lists.
//!
//! Instead of materializing one visual surface per data row, a [`Recycler`] keeps a small,
//! fixed pool of surfaces and moves them between rows as the viewport scrolls. The core
//! pieces are:
//!
//! - [`OffsetIndex`]: cumulative start offsets over per-row heights, plus the total extent.
//! - [`WindowLocator`]: a lower-bound search from the viewport midpoint to the window of rows
//!   that should hold a surface.
//! - [`SurfacePool`]: the fixed pool and its row/slot bijection. Recycling only touches rows
//!   whose membership in the window flipped.
//! - [`Recycler`]: (re)initialization and scroll handling, with a guard against overlapping
//!   update passes.
//! - [`ScrollNotifier`]: a shared handle for hosts that deliver scroll notifications from
//!   callbacks or other threads.
//!
//! It is UI-agnostic. The host layer provides:
//! - a [`Container`] that positions surfaces and the extent marker
//! - closures that build and repaint surfaces
//! - scroll notifications (offset and visible extent)
//!
//! ```
//! use recycling_list::{HeadlessContainer, Recycler, RecyclerOptions};
//!
//! let options = RecyclerOptions::new()
//!     .with_container(HeadlessContainer::new())
//!     .with_rows(0..1_000u32)
//!     .with_build_surface(|row: &u32| format!("row {row}"))
//!     .with_update_surface(|row: &u32, label: &mut String| *label = format!("row {row}"))
//!     .with_fixed_height(10)
//!     .with_pool_size(100);
//! let mut list = Recycler::new(options).unwrap();
//!
//! list.on_scroll(5_000);
//! let window = list.window().unwrap();
//! assert_eq!((window.start, window.end), (470, 570));
//! assert_eq!(list.surface_for(520).map(String::as_str), Some("row 520"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod error;
mod locator;
mod notifier;
mod offsets;
mod options;
mod pool;
mod recycler;
mod types;


pub use container::{Container, HeadlessContainer};
pub use error::ConfigError;
pub use locator::WindowLocator;
pub use notifier::{Delivery, ScrollNotifier};
pub use offsets::OffsetIndex;
pub use options::{
    BuildSurfaceCallback, DEFAULT_POOL_SIZE, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT,
    HeightCallback, RecyclerOptions, UpdateSurfaceCallback,
};
pub use pool::SurfacePool;
pub use recycler::{AssignedRow, Recycler};
pub use types::{Align, LifecycleState, RecycleReport, ScrollEvent, Window};

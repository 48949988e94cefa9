// Example: a million rows with uneven heights, rendered through a 64-surface pool.
use std::fmt::Write as _;

use recycling_list::{Align, HeadlessContainer, Recycler, RecyclerOptions, ScrollEvent};

#[derive(Debug)]
struct Line {
    text: String,
}

fn main() {
    let options = RecyclerOptions::new()
        .with_container(HeadlessContainer::new())
        .with_rows(0..1_000_000u32)
        .with_build_surface(|row: &u32| Line {
            text: format!("row {row}"),
        })
        .with_update_surface(|row: &u32, line: &mut Line| {
            line.text.clear();
            let _ = write!(line.text, "row {row}");
        })
        .with_height(|row: &u32| if row % 10 == 0 { 3 } else { 1 })
        .with_pool_size(64)
        .with_viewport_height(24);

    let mut list = match Recycler::new(options) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    println!("total_extent={}", list.total_extent());
    println!("surfaces={}", list.pool().len());

    // Host scrolls a few lines at a time, then jumps.
    for offset in [0u64, 1, 2, 40, 600_000] {
        list.on_scroll_event(ScrollEvent {
            offset,
            viewport: 24,
        });
        println!(
            "offset={offset} window={:?} report={:?}",
            list.window(),
            list.last_report()
        );
    }

    let target = list.scroll_offset_for_row(999_999, Align::End);
    list.on_scroll(target);
    let mut shown = Vec::new();
    list.for_each_assigned(|a| {
        if a.offset >= target {
            shown.push((a.offset, a.surface.text.clone()));
        }
    });
    shown.sort();
    println!("after scroll to last row: offset={target}");
    for (offset, text) in shown.iter().take(5) {
        println!("  {offset:>8} {text}");
    }
}

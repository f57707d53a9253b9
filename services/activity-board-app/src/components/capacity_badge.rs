//! Capacity badge component

use activity_board::Capacity;
use leptos::prelude::*;

/// Fewer open spots than this counts as nearly full
const NEARLY_FULL_BELOW: u32 = 3;

/// Text and background colours for a capacity
fn badge_colors(capacity: &Capacity) -> (&'static str, &'static str) {
    if capacity.is_full() {
        ("#721c24", "#f8d7da")
    } else if capacity.spots_left < NEARLY_FULL_BELOW {
        ("#856404", "#fff3cd")
    } else {
        ("#155724", "#d4edda")
    }
}

fn spots_hint(capacity: &Capacity) -> String {
    match capacity.spots_left {
        0 => "full".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{} spots left", n),
    }
}

/// A coloured `taken/max` badge: green while open, amber when nearly full, red when full
#[component]
pub fn CapacityBadge(capacity: Capacity) -> impl IntoView {
    let (color, bg) = badge_colors(&capacity);

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span class="capacity" style=style>{capacity.to_string()}</span>
        " "
        <small class="spots-left">{spots_hint(&capacity)}</small>
    }
}

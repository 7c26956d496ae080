use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::crosshair::{format_coord, CrosshairGeometry, DEFAULT_SIZE};
use shared::paint::Paint;

/// Minimal crosshair: a center dot and four ticks held apart by a gap.
///
/// `color` paints both the dot and the ticks and defaults to the ambient text
/// color. Non-positive sizes still render, just as an empty-looking glyph.
#[component]
pub fn CrosshairIcon(
    #[props(default = DEFAULT_SIZE)] size: f64,
    #[props(default)] color: Paint,
) -> Element {
    let geometry = CrosshairGeometry::new(size);
    if geometry.is_degenerate() {
        warn!("Crosshair icon rendered with non-positive size {size}");
    }

    let paint = color.to_string();
    let edge = geometry.size;
    let stroke_width = format_coord(geometry.stroke_width);

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{edge}",
            height: "{edge}",
            view_box: geometry.view_box(),
            fill: "none",
            circle {
                cx: format_coord(geometry.center.x),
                cy: format_coord(geometry.center.y),
                r: format_coord(geometry.dot_radius),
                fill: "{paint}",
            }
            for (i, tick) in geometry.ticks().into_iter().enumerate() {
                line {
                    key: "{i}",
                    x1: format_coord(tick.from.x),
                    y1: format_coord(tick.from.y),
                    x2: format_coord(tick.to.x),
                    y2: format_coord(tick.to.y),
                    stroke: "{paint}",
                    stroke_width: "{stroke_width}",
                }
            }
        }
    }
}

//! Print the default menu placements and the clip path of each card slot.
//!
//! Usage:
//!   cargo run -p hexnav --example menu_preview -- [aspect]

use hexnav::prelude::*;

fn main() {
    let aspect: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.6);
    let cfg = GridCfg::default();
    for p in layout(MENU_TILES, &cfg) {
        println!(
            "cell ({}, {}): center=({:.1}, {:.1}) half={} rot={}",
            p.cell.column, p.cell.row, p.center.x, p.center.y, p.is_half, p.rotation_deg
        );
    }
    for style in 0..9 {
        println!("style {style}: {}", shape_path(style, aspect));
    }
}

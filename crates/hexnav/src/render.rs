//! Standalone SVG preview of a menu layout.
//!
//! One `<path>` per tile. Side length is `scale_up / 2`, which makes the
//! hexagons of interleaved rows touch. Each outline is rotated about its own
//! logical center, then translated so that center lands on the placement.

use std::fmt::Write as _;

use nalgebra::Vector2;

use crate::fmt::{fmt, push_point};
use crate::grid::{place, GridCfg, TileSpec};
use crate::path::HexPath;

pub fn menu_svg(tiles: &[TileSpec], cfg: &GridCfg, corner_radius: f64) -> String {
    let side = cfg.scale_up() / 2.0;
    let full = HexPath::new(side, corner_radius, false);
    let half = HexPath::new(side, corner_radius, true);
    let local = full.center();

    let mut lo = Vector2::new(f64::INFINITY, f64::INFINITY);
    let mut hi = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut body = String::new();
    for tile in tiles {
        let p = place(tile, cfg);
        lo = lo.inf(&(p.center - local));
        hi = hi.sup(&(p.center + local));

        let outline = if p.is_half { &half } else { &full };
        let shift = p.center - local;
        body.push_str("  <path");
        if !tile.label.is_empty() {
            let _ = write!(body, " data-label=\"{}\"", escape_attr(tile.label));
        }
        let _ = write!(body, " d=\"{}\" transform=\"translate(", outline.path);
        push_point(&mut body, shift);
        body.push_str(") rotate(");
        body.push_str(&fmt(p.rotation_deg));
        body.push(' ');
        push_point(&mut body, local);
        body.push_str(")\"/>\n");
    }
    if tiles.is_empty() {
        lo = Vector2::zeros();
        hi = Vector2::zeros();
    }

    let size = hi - lo;
    let mut out = String::with_capacity(body.len() + 128);
    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"");
    push_point(&mut out, lo);
    out.push(' ');
    push_point(&mut out, size);
    out.push_str("\">\n");
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

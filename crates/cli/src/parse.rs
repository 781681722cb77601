//! Text forms accepted on the command line.
//!
//! - point: `"x,y"` (or `"x;y"` when the numbers use a decimal comma)
//! - edge: two points separated by whitespace
//! - polygon: one or more points separated by whitespace

use anyhow::{bail, Context, Result};
use polyedit::api::{parse_point, Edge, Point, Polygon};

pub fn point(text: &str) -> Result<Point> {
    parse_point(text).with_context(|| format!("parsing point '{text}'"))
}

pub fn edge(text: &str) -> Result<Edge> {
    let pts = points(text).with_context(|| format!("parsing edge '{text}'"))?;
    match pts.as_slice() {
        [start, end] => Ok(Edge::new(*start, *end)),
        _ => bail!("edge '{text}' needs exactly two points, got {}", pts.len()),
    }
}

pub fn polygon(text: &str) -> Result<Polygon> {
    let pts = points(text).with_context(|| format!("parsing polygon '{text}'"))?;
    if pts.is_empty() {
        bail!("polygon has no points");
    }
    Ok(Polygon::from_points(pts))
}

fn points(text: &str) -> Result<Vec<Point>> {
    text.split_whitespace().map(point).collect()
}

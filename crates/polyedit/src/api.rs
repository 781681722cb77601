//! Flat call surface for editor front ends.
//!
//! One function per editor action, taking explicit values. Front ends (GUI
//! event handlers, the CLI) call these instead of reaching into modules.

// Geometry types and primitives
pub use crate::geom2::{
    classify, classify_sign, distance_to_segment, find_intersection, find_intersection_cfg,
    is_near_edge, is_point_in_polygon, Affine2, Edge, GeomCfg, Point, Polygon, Side,
};
// Editor operations
pub use crate::scene::{AddPoint, Scene, SceneCfg, SceneError};
pub use crate::transform::{
    apply_transform, apply_transform_text, parse_number, Field, InputError, InputErrorKind,
    RawTransformParams, TransformKind, TransformRequest,
};

/// Parse `"x,y"` (or `"x;y"` / `"x y"`) into a point, reusing the numeric text rules.
///
/// A single comma separates coordinates; use `;` or a space to separate when
/// the numbers themselves use a decimal comma (`"1,5;2"`). A space next to a
/// comma (`"1 ,2"`) is padding around the comma separator. Text holding more
/// than two coordinates is rejected.
pub fn parse_point(text: &str) -> Result<Point, InputError> {
    let t = text.trim();
    let (xs, ys) = split_coords(t).ok_or_else(|| InputError {
        field: Field::Y,
        text: t.to_string(),
        kind: InputErrorKind::TooManyValues,
    })?;
    Ok(Point::new(
        parse_number(Field::X, xs)?,
        parse_number(Field::Y, ys)?,
    ))
}

/// Split trimmed point text into its two coordinate halves.
///
/// `None` when the chosen separator occurs again in the second half.
fn split_coords(t: &str) -> Option<(&str, &str)> {
    if let Some((x, y)) = t.split_once(';') {
        return (!y.contains(';')).then_some((x, y));
    }
    if let Some((x, y)) = t.split_once(char::is_whitespace) {
        let (x, y) = (x.trim_end(), y.trim_start());
        if !x.ends_with(',') && !y.starts_with(',') {
            return (!y.contains(char::is_whitespace)).then_some((x, y));
        }
    }
    match t.split_once(',') {
        Some((x, y)) => (!y.contains(',')).then_some((x, y)),
        None => Some((t, "")),
    }
}

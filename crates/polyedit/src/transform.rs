//! Transform requests: one logical editor operation → one net `Affine2`.
//!
//! - `TransformRequest`: typed, already-validated parameters for one kind.
//! - `RawTransformParams`: the six free-text fields an editor collects
//!   (dx, dy, angle, scale, center x, center y). Parsing reads only the fields
//!   the chosen kind uses and fails before any matrix is built.
//! - `apply_transform`: builds the composed matrix once and applies it once,
//!   so repeated operations do not accumulate incremental rounding.
//!
//! Centroid-based kinds are a no-op on an empty polygon.

use std::fmt;
use std::str::FromStr;

use crate::geom2::{Affine2, Point, Polygon};

/// The five editor operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Translate,
    RotateAboutPoint,
    RotateAboutCentroid,
    ScaleAboutPoint,
    ScaleAboutCentroid,
}

impl TransformKind {
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Translate,
        TransformKind::RotateAboutPoint,
        TransformKind::RotateAboutCentroid,
        TransformKind::ScaleAboutPoint,
        TransformKind::ScaleAboutCentroid,
    ];

    /// Kebab-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Translate => "translate",
            TransformKind::RotateAboutPoint => "rotate-about-point",
            TransformKind::RotateAboutCentroid => "rotate-about-centroid",
            TransformKind::ScaleAboutPoint => "scale-about-point",
            TransformKind::ScaleAboutCentroid => "scale-about-centroid",
        }
    }

    /// Text fields read when parsing this kind.
    pub fn fields(self) -> &'static [Field] {
        match self {
            TransformKind::Translate => &[Field::Dx, Field::Dy],
            TransformKind::RotateAboutPoint => &[Field::Angle, Field::CenterX, Field::CenterY],
            TransformKind::RotateAboutCentroid => &[Field::Angle],
            TransformKind::ScaleAboutPoint => &[Field::Scale, Field::CenterX, Field::CenterY],
            TransformKind::ScaleAboutCentroid => &[Field::Scale],
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized transform kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = TransformKind::ALL.iter().map(|k| k.name()).collect();
        write!(
            f,
            "unknown transform kind '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for TransformKind {
    type Err = UnknownKind;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TransformKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Fully validated transform parameters. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformRequest {
    Translate { dx: f64, dy: f64 },
    RotateAboutPoint { angle_deg: f64, center: Point },
    RotateAboutCentroid { angle_deg: f64 },
    ScaleAboutPoint { sx: f64, sy: f64, center: Point },
    ScaleAboutCentroid { factor: f64 },
}

impl TransformRequest {
    pub fn kind(&self) -> TransformKind {
        match self {
            TransformRequest::Translate { .. } => TransformKind::Translate,
            TransformRequest::RotateAboutPoint { .. } => TransformKind::RotateAboutPoint,
            TransformRequest::RotateAboutCentroid { .. } => TransformKind::RotateAboutCentroid,
            TransformRequest::ScaleAboutPoint { .. } => TransformKind::ScaleAboutPoint,
            TransformRequest::ScaleAboutCentroid { .. } => TransformKind::ScaleAboutCentroid,
        }
    }

    /// Net matrix for this request on `polygon`.
    ///
    /// `None` when the pivot is the centroid and the polygon is empty.
    pub fn matrix(&self, polygon: &Polygon) -> Option<Affine2> {
        match *self {
            TransformRequest::Translate { dx, dy } => Some(Affine2::translation(dx, dy)),
            TransformRequest::RotateAboutPoint { angle_deg, center } => {
                Some(Affine2::rotation_about(angle_deg, center))
            }
            TransformRequest::RotateAboutCentroid { angle_deg } => polygon
                .centroid()
                .map(|c| Affine2::rotation_about(angle_deg, c)),
            TransformRequest::ScaleAboutPoint { sx, sy, center } => {
                Some(Affine2::scale_about(sx, sy, center))
            }
            TransformRequest::ScaleAboutCentroid { factor } => polygon
                .centroid()
                .map(|c| Affine2::scale_about(factor, factor, c)),
        }
    }

    /// Parse the fields `kind` needs from raw editor text.
    ///
    /// Scaling from text is uniform (one `scale` field for both axes).
    pub fn parse(kind: TransformKind, raw: &RawTransformParams) -> Result<Self, InputError> {
        let req = match kind {
            TransformKind::Translate => TransformRequest::Translate {
                dx: parse_number(Field::Dx, &raw.dx)?,
                dy: parse_number(Field::Dy, &raw.dy)?,
            },
            TransformKind::RotateAboutPoint => TransformRequest::RotateAboutPoint {
                angle_deg: parse_number(Field::Angle, &raw.angle)?,
                center: raw.center()?,
            },
            TransformKind::RotateAboutCentroid => TransformRequest::RotateAboutCentroid {
                angle_deg: parse_number(Field::Angle, &raw.angle)?,
            },
            TransformKind::ScaleAboutPoint => {
                let s = parse_number(Field::Scale, &raw.scale)?;
                TransformRequest::ScaleAboutPoint {
                    sx: s,
                    sy: s,
                    center: raw.center()?,
                }
            }
            TransformKind::ScaleAboutCentroid => TransformRequest::ScaleAboutCentroid {
                factor: parse_number(Field::Scale, &raw.scale)?,
            },
        };
        Ok(req)
    }
}

/// Raw text fields of the transform panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransformParams {
    pub dx: String,
    pub dy: String,
    pub angle: String,
    pub scale: String,
    pub center_x: String,
    pub center_y: String,
}

impl Default for RawTransformParams {
    fn default() -> Self {
        Self {
            dx: "0".into(),
            dy: "0".into(),
            angle: "0".into(),
            scale: "1".into(),
            center_x: "0".into(),
            center_y: "0".into(),
        }
    }
}

impl RawTransformParams {
    fn center(&self) -> Result<Point, InputError> {
        Ok(Point::new(
            parse_number(Field::CenterX, &self.center_x)?,
            parse_number(Field::CenterY, &self.center_y)?,
        ))
    }
}

/// Name of a numeric text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Dx,
    Dy,
    Angle,
    Scale,
    CenterX,
    CenterY,
    /// Coordinates of a free-standing point (not part of the transform panel).
    X,
    Y,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Dx => "dx",
            Field::Dy => "dy",
            Field::Angle => "angle",
            Field::Scale => "scale",
            Field::CenterX => "center x",
            Field::CenterY => "center y",
            Field::X => "x",
            Field::Y => "y",
        }
    }
}

/// Why a text field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputErrorKind {
    Empty,
    NotANumber,
    NotFinite,
    /// More values than the field holds (e.g. three coordinates for a point).
    TooManyValues,
}

/// Malformed numeric input. Recoverable: nothing has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputError {
    pub field: Field,
    pub text: String,
    pub kind: InputErrorKind,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.name();
        match self.kind {
            InputErrorKind::Empty => write!(f, "{field}: value is empty"),
            InputErrorKind::NotANumber => write!(f, "{field}: '{}' is not a number", self.text),
            InputErrorKind::NotFinite => write!(f, "{field}: '{}' is not finite", self.text),
            InputErrorKind::TooManyValues => {
                write!(f, "{field}: '{}' has more than two values", self.text)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one numeric text field.
///
/// Surrounding whitespace is ignored and a lone `,` is read as the decimal
/// separator (`"1,5"` == `1.5`). `NaN` and infinities are rejected.
pub fn parse_number(field: Field, text: &str) -> Result<f64, InputError> {
    let err = |kind| InputError {
        field,
        text: text.to_string(),
        kind,
    };
    let t = text.trim();
    if t.is_empty() {
        return Err(err(InputErrorKind::Empty));
    }
    let normalized;
    let t = if !t.contains('.') && t.matches(',').count() == 1 {
        normalized = t.replace(',', ".");
        normalized.as_str()
    } else {
        t
    };
    let v: f64 = t.parse().map_err(|_| err(InputErrorKind::NotANumber))?;
    if !v.is_finite() {
        return Err(err(InputErrorKind::NotFinite));
    }
    Ok(v)
}

/// Apply a validated request in place; vertex count and order are preserved.
///
/// Returns the net matrix that was applied, or `None` for a no-op
/// (centroid of an empty polygon).
pub fn apply_transform(polygon: &mut Polygon, request: &TransformRequest) -> Option<Affine2> {
    let m = request.matrix(polygon)?;
    m.apply_points(polygon.points_mut());
    Some(m)
}

/// Parse raw text, then apply. On error the polygon is left unchanged.
pub fn apply_transform_text(
    polygon: &mut Polygon,
    kind: TransformKind,
    raw: &RawTransformParams,
) -> Result<Option<Affine2>, InputError> {
    let request = TransformRequest::parse(kind, raw)?;
    Ok(apply_transform(polygon, &request))
}

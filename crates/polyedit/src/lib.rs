//! Geometry kernel for a small 2D polygon editor.
//!
//! - `geom2`: homogeneous affine maps (`Affine2`) and the predicates
//!   (segment intersection, even-odd containment, edge classification).
//! - `transform`: editor operations (translate / rotate / scale about a point
//!   or the centroid), including validation of free-text parameters.
//! - `scene`: caller-owned authoring state (committed polygons + one in progress).
//!
//! Everything works in world coordinates (y up) and is pure value-passing:
//! there is no process-wide "current transform". Display mapping, widgets and
//! painting live with the caller.

pub mod api;
pub mod geom2;
pub mod scene;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Affine2, Edge, GeomCfg, Point, Polygon, Side};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{random_star_polygon, StarCfg, VertexCount};
    pub use crate::geom2::{
        classify, classify_sign, find_intersection, is_point_in_polygon, Affine2, Edge, GeomCfg,
        Point, Polygon, Side,
    };
    pub use crate::scene::{AddPoint, Scene, SceneCfg};
    pub use crate::transform::{
        apply_transform, apply_transform_text, RawTransformParams, TransformKind,
        TransformRequest,
    };
}

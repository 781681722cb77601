//! In-memory authoring state: committed polygons plus one polygon in progress.
//!
//! Authoring rules
//! - `add_point` appends to the in-progress polygon, starting one if needed.
//!   Once it has ≥ 3 vertices, a click within `close_radius` of the first
//!   vertex commits it instead of appending.
//! - `close_current` commits only a real polygon (≥ 3 vertices).
//! - `finish_current` commits whatever is there; 1–2 vertex shapes are kept as
//!   degenerate vertex/segment polygons.
//!
//! The caller owns the `Scene`; operations apply in call order.

use std::fmt;

use crate::geom2::{is_near_edge, is_point_in_polygon, Affine2, Edge, Point, Polygon};
use crate::transform::{
    apply_transform, InputError, RawTransformParams, TransformKind, TransformRequest,
};

/// Scene tolerances in world units.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Clicking closer than this to the first vertex closes the polygon.
    pub close_radius: f64,
    /// Max distance from a click to an edge for the edge to be picked.
    pub edge_pick_tolerance: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            close_radius: 0.5,
            edge_pick_tolerance: 0.25,
        }
    }
}

/// Result of `Scene::add_point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddPoint {
    /// Appended; `len` is the in-progress vertex count afterwards.
    Appended { len: usize },
    /// The click closed the polygon, now committed at this index.
    Closed(usize),
}

#[derive(Debug)]
pub enum SceneError {
    NoSuchPolygon { index: usize, len: usize },
    Input(InputError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NoSuchPolygon { index, len } => {
                write!(f, "no polygon at index {index} (scene has {len})")
            }
            SceneError::Input(e) => write!(f, "invalid transform input: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Input(e) => Some(e),
            SceneError::NoSuchPolygon { .. } => None,
        }
    }
}

impl From<InputError> for SceneError {
    fn from(e: InputError) -> Self {
        SceneError::Input(e)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    cfg: SceneCfg,
    polygons: Vec<Polygon>,
    current: Option<Polygon>,
}

impl Scene {
    pub fn new(cfg: SceneCfg) -> Self {
        Self {
            cfg,
            polygons: Vec::new(),
            current: None,
        }
    }

    #[inline]
    pub fn cfg(&self) -> SceneCfg {
        self.cfg
    }

    /// Committed polygons, oldest first (last is drawn on top).
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn current(&self) -> Option<&Polygon> {
        self.current.as_ref()
    }

    pub fn add_point(&mut self, p: Point) -> AddPoint {
        let close_radius = self.cfg.close_radius;
        let current = self.current.get_or_insert_with(Polygon::new);
        let closes = current.len() >= 3
            && current
                .first()
                .is_some_and(|first| (p - *first).norm() < close_radius);
        if closes {
            return AddPoint::Closed(self.commit_current_unchecked());
        }
        current.push(p);
        AddPoint::Appended { len: current.len() }
    }

    /// Commit the in-progress polygon if it has at least three vertices.
    pub fn close_current(&mut self) -> Option<usize> {
        if self.current.as_ref().is_some_and(|poly| poly.len() >= 3) {
            Some(self.commit_current_unchecked())
        } else {
            None
        }
    }

    /// Commit any non-empty in-progress polygon; an empty one is discarded.
    pub fn finish_current(&mut self) -> Option<usize> {
        match self.current.take() {
            Some(poly) if !poly.is_empty() => {
                self.polygons.push(poly);
                Some(self.polygons.len() - 1)
            }
            _ => None,
        }
    }

    fn commit_current_unchecked(&mut self) -> usize {
        if let Some(poly) = self.current.take() {
            self.polygons.push(poly);
        }
        self.polygons.len() - 1
    }

    /// Commit an already built polygon.
    pub fn insert(&mut self, polygon: Polygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Polygon> {
        (index < self.polygons.len()).then(|| self.polygons.remove(index))
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
        self.current = None;
    }

    /// Topmost committed polygon containing `p` (even-odd rule).
    pub fn polygon_at(&self, p: Point) -> Option<usize> {
        self.polygons
            .iter()
            .rposition(|poly| is_point_in_polygon(p, poly.points()))
    }

    /// Indices of every committed polygon containing `p`.
    pub fn polygons_containing(&self, p: Point) -> Vec<usize> {
        self.polygons
            .iter()
            .enumerate()
            .filter(|(_, poly)| is_point_in_polygon(p, poly.points()))
            .map(|(i, _)| i)
            .collect()
    }

    /// First edge, in scene order, within `edge_pick_tolerance` of `p`.
    pub fn edge_at(&self, p: Point) -> Option<Edge> {
        let tol = self.cfg.edge_pick_tolerance;
        self.polygons
            .iter()
            .flat_map(|poly| poly.edges())
            .find(|e| is_near_edge(p, e, tol))
    }

    fn polygon_mut(&mut self, index: usize) -> Result<&mut Polygon, SceneError> {
        let len = self.polygons.len();
        self.polygons
            .get_mut(index)
            .ok_or(SceneError::NoSuchPolygon { index, len })
    }

    /// Apply a validated request to the committed polygon at `index`.
    pub fn transform(
        &mut self,
        index: usize,
        request: &TransformRequest,
    ) -> Result<Option<Affine2>, SceneError> {
        let poly = self.polygon_mut(index)?;
        Ok(apply_transform(poly, request))
    }

    /// Parse raw text and apply. On any error the scene is unchanged.
    pub fn transform_text(
        &mut self,
        index: usize,
        kind: TransformKind,
        raw: &RawTransformParams,
    ) -> Result<Option<Affine2>, SceneError> {
        self.polygon_mut(index)?;
        let request = TransformRequest::parse(kind, raw)?;
        self.transform(index, &request)
    }
}

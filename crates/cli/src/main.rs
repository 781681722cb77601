use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyedit::api::{
    apply_transform_text, classify, find_intersection_cfg, is_point_in_polygon, AddPoint,
    GeomCfg, RawTransformParams, Scene, SceneCfg, TransformKind,
};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod output;
mod parse;

#[derive(Parser)]
#[command(name = "polyedit")]
#[command(about = "Polygon editor geometry: transforms and predicates on world coordinates")]
struct Cmd {
    /// |denom| below which two segments count as parallel
    #[arg(long, default_value_t = GeomCfg::default().eps_parallel)]
    eps_parallel: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply one affine operation to a polygon and print the new vertices
    Transform {
        /// translate | rotate-about-point | rotate-about-centroid | scale-about-point | scale-about-centroid
        #[arg(long)]
        kind: TransformKind,
        /// Vertices, e.g. "0,0 1,0 1,1"
        #[arg(long, allow_hyphen_values = true)]
        poly: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dx: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dy: String,
        /// Degrees, counter-clockwise
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        angle: String,
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        scale: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        cx: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        cy: String,
    },
    /// Intersection point of two segments, if any
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Even-odd containment of a point in a polygon
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        poly: String,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Side of a point relative to a directed edge (positive = left)
    Classify {
        #[arg(long, allow_hyphen_values = true)]
        edge: String,
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Replay authoring clicks through a scene and print what gets committed
    Author {
        /// Click positions in order, e.g. "0,0 3,0 3,3 0.1,0.1"
        #[arg(long, allow_hyphen_values = true)]
        clicks: String,
        /// Commit the trailing in-progress polygon with any vertex count
        #[arg(long)]
        finish: bool,
        #[arg(long, default_value_t = SceneCfg::default().close_radius)]
        close_radius: f64,
    },
    /// Print the library version
    Version,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg {
        eps_parallel: cmd.eps_parallel,
    };
    let doc = match cmd.action {
        Action::Transform {
            kind,
            poly,
            dx,
            dy,
            angle,
            scale,
            cx,
            cy,
        } => {
            let raw = RawTransformParams {
                dx,
                dy,
                angle,
                scale,
                center_x: cx,
                center_y: cy,
            };
            transform(kind, &poly, &raw)?
        }
        Action::Intersect { a, b } => intersect(&a, &b, cfg)?,
        Action::Contains { poly, point } => contains(&poly, &point)?,
        Action::Classify { edge, point } => classify_point(&edge, &point)?,
        Action::Author {
            clicks,
            finish,
            close_radius,
        } => author(&clicks, finish, close_radius)?,
        Action::Version => json!({ "version": polyedit::VERSION }),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn transform(
    kind: TransformKind,
    poly: &str,
    raw: &RawTransformParams,
) -> Result<serde_json::Value> {
    let mut polygon = parse::polygon(poly)?;
    let reads: Vec<&str> = kind.fields().iter().map(|f| f.name()).collect();
    tracing::info!(%kind, vertices = polygon.len(), ?reads, "transform");
    let applied = apply_transform_text(&mut polygon, kind, raw)
        .with_context(|| format!("{kind}: invalid parameters"))?;
    if applied.is_none() {
        tracing::warn!(%kind, "no-op transform");
    }
    let doc = output::TransformOut {
        kind: kind.to_string(),
        matrix: applied.as_ref().map(output::matrix_rows),
        points: output::points_out(polygon.points()),
    };
    Ok(serde_json::to_value(doc)?)
}

fn intersect(a: &str, b: &str, cfg: GeomCfg) -> Result<serde_json::Value> {
    let (ea, eb) = (parse::edge(a)?, parse::edge(b)?);
    let hit = find_intersection_cfg(&ea, &eb, cfg);
    tracing::info!(hit = hit.is_some(), eps = cfg.eps_parallel, "intersect");
    Ok(json!({ "intersection": hit.map(output::PointOut::from) }))
}

fn contains(poly: &str, point: &str) -> Result<serde_json::Value> {
    let polygon = parse::polygon(poly)?;
    let p = parse::point(point)?;
    if polygon.len() < 3 {
        tracing::warn!(vertices = polygon.len(), "degenerate polygon never contains points");
    }
    let inside = is_point_in_polygon(p, polygon.points());
    tracing::info!(inside, "contains");
    Ok(json!({ "inside": inside }))
}

fn classify_point(edge: &str, point: &str) -> Result<serde_json::Value> {
    let e = parse::edge(edge)?;
    let p = parse::point(point)?;
    let side = classify(p, &e);
    tracing::info!(side = output::side_name(side), "classify");
    Ok(serde_json::to_value(output::ClassifyOut {
        sign: side.signum(),
        side: output::side_name(side),
    })?)
}

fn author(clicks: &str, finish: bool, close_radius: f64) -> Result<serde_json::Value> {
    let mut scene = Scene::new(SceneCfg {
        close_radius,
        ..SceneCfg::default()
    });
    for text in clicks.split_whitespace() {
        let p = parse::point(text)?;
        if let AddPoint::Closed(index) = scene.add_point(p) {
            tracing::info!(index, "polygon closed by click");
        }
    }
    if finish {
        if let Some(index) = scene.finish_current() {
            tracing::info!(index, "in-progress polygon committed");
        }
    }
    let polygons: Vec<_> = scene
        .polygons()
        .iter()
        .map(|poly| output::points_out(poly.points()))
        .collect();
    let current = scene.current().map(|poly| output::points_out(poly.points()));
    Ok(json!({ "polygons": polygons, "in_progress": current }))
}

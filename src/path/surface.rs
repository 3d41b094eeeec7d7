use std::{cell::RefCell, rc::Rc};

use kurbo::{BezPath, ParamCurveArclen, Point};

use crate::foundation::error::{DrawError, DrawResult};

const ARCLEN_ACCURACY: f64 = 1e-6;

/// The stroke-dash primitives a path controller drives.
///
/// Implementations must report the offset actually in effect from
/// [`RenderSurface::computed_dash_offset`]; other code may write it too.
pub trait RenderSurface {
    /// Total path length in user units.
    fn total_length(&self) -> f64;

    fn set_dash_array(&mut self, dash: f64, gap: f64);

    fn set_dash_offset(&mut self, offset: f64);

    /// Offset currently in effect on the surface.
    fn computed_dash_offset(&self) -> f64;

    /// Flush pending style writes so the next read is fresh.
    fn force_layout(&mut self) {}
}

/// Stroke style state of a [`StrokePath`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeStyle {
    pub dash_array: Option<(f64, f64)>,
    pub dash_offset: f64,
    pub layout_passes: u64,
}

/// In-memory stroked path measured with kurbo.
///
/// Clones are handles onto the same style state, so a clone kept outside a controller sees
/// and can change the offset the controller writes.
#[derive(Clone, Debug)]
pub struct StrokePath {
    length: f64,
    style: Rc<RefCell<StrokeStyle>>,
}

impl StrokePath {
    pub fn from_bez_path(path: BezPath) -> Self {
        let length = path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum();
        Self {
            length,
            style: Rc::new(RefCell::new(StrokeStyle::default())),
        }
    }

    /// Bind to SVG path data (`d` attribute syntax).
    pub fn from_path_data(d: &str) -> DrawResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(DrawError::binding("path data is empty"));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| DrawError::binding(format!("invalid path data: {e}")))?;
        Ok(Self::from_bez_path(path))
    }

    /// Bind to the `<path>` element with `id` inside an SVG document.
    #[tracing::instrument(skip(svg))]
    pub fn from_svg_document(svg: &[u8], id: &str) -> DrawResult<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg, &opts)
            .map_err(|e| DrawError::binding(format!("parse svg document: {e}")))?;
        let node = tree
            .node_by_id(id)
            .ok_or_else(|| DrawError::binding(format!("no element with id '{id}'")))?;
        match node {
            usvg::Node::Path(path) => Ok(Self::from_bez_path(to_bez_path(path.data()))),
            _ => Err(DrawError::binding(format!("element '{id}' is not a path"))),
        }
    }

    /// Snapshot of the current stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style.borrow().clone()
    }
}

impl RenderSurface for StrokePath {
    fn total_length(&self) -> f64 {
        self.length
    }

    fn set_dash_array(&mut self, dash: f64, gap: f64) {
        self.style.borrow_mut().dash_array = Some((dash, gap));
    }

    fn set_dash_offset(&mut self, offset: f64) {
        self.style.borrow_mut().dash_offset = offset;
    }

    fn computed_dash_offset(&self) -> f64 {
        self.style.borrow().dash_offset
    }

    fn force_layout(&mut self) {
        self.style.borrow_mut().layout_passes += 1;
    }
}

fn to_bez_path(data: &usvg::tiny_skia_path::Path) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    fn pt(p: usvg::tiny_skia_path::Point) -> Point {
        Point::new(f64::from(p.x), f64::from(p.y))
    }

    let mut out = BezPath::new();
    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p) => out.quad_to(pt(p1), pt(p)),
            PathSegment::CubicTo(p1, p2, p) => out.curve_to(pt(p1), pt(p2), pt(p)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/surface.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use stemma_core::PersonId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// One curved parent→child connective line.
///
/// Quadratic Bézier from the parent's point to the child's, with the control
/// point pulled toward the parent (2/3 of the horizontal span, 1/8 of the
/// vertical span).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeLayout {
    pub source: PersonId,
    pub target: PersonId,
    pub start: LayoutPoint,
    pub control: LayoutPoint,
    pub end: LayoutPoint,
    pub stroke: String,
    pub stroke_width: f64,
}

/// One person marker plus its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonNodeLayout {
    pub id: PersonId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: String,
    pub label_dy: f64,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub bounds: Option<Bounds>,
    /// Edges come first: consumers paint in this order so person markers land
    /// on top of the relation lines.
    pub edges: Vec<EdgeLayout>,
    pub nodes: Vec<PersonNodeLayout>,
}

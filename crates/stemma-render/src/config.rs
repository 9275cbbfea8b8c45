use serde::Deserialize;

/// Upper bound of the normalized horizontal domain. Resolved x coordinates
/// live on `0..=X_DOMAIN_MAX` before being mapped to pixels.
pub const X_DOMAIN_MAX: f64 = 1000.0;

/// Chart styling and canvas geometry.
///
/// Every recognized option is an explicit field here; nothing is read from
/// ambient state. The defaults reproduce the reference chart exactly:
///
/// - canvas 2150×1000 with a 30px offset on both axes
/// - person dot radius 2, color `#eb3328`
/// - label drawn 7px above the dot, black 10px Tahoma
/// - relation lines `#d3d3d3` (when the dynasty has no color), width 0.75
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub total_width: f64,
    pub total_height: f64,
    pub x_axis_offset: f64,
    pub y_axis_offset: f64,
    pub dot_radius: f64,
    pub dot_color: String,
    /// Vertical label bias in pixels; negative draws the label above the dot.
    pub label_dy: f64,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub edge_default_color: String,
    pub edge_stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            total_width: 2150.0,
            total_height: 1000.0,
            x_axis_offset: 30.0,
            y_axis_offset: 30.0,
            dot_radius: 2.0,
            dot_color: "#eb3328".to_string(),
            label_dy: -7.0,
            text_color: "#000000".to_string(),
            font_family: "Tahoma".to_string(),
            font_size: 10.0,
            edge_default_color: "#d3d3d3".to_string(),
            edge_stroke_width: 0.75,
        }
    }
}

impl ChartConfig {
    /// Pixels per normalized horizontal unit.
    pub fn x_scale(&self) -> f64 {
        (self.total_width - 2.0 * self.x_axis_offset) / X_DOMAIN_MAX
    }

    /// Anchor for chains that never reach an absolute position: the middle of
    /// the normalized domain.
    pub fn fallback_center(&self) -> f64 {
        X_DOMAIN_MAX / 2.0
    }

    /// Vertical pixel range the birth-year scale maps onto.
    pub fn y_pixel_range(&self) -> (f64, f64) {
        (self.y_axis_offset, self.total_height - self.y_axis_offset)
    }
}

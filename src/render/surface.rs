use crate::foundation::core::{Point, Rgba8};

/// Horizontal anchoring of drawn text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

/// Vertical anchoring of drawn text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Font and anchoring attributes for text nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub font: String,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default)]
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 30.0,
            font: "sans-serif".to_string(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

/// A 2D drawing surface (external collaborator).
///
/// The toolkit issues a scoped sequence of state changes and primitive draws;
/// no return values are consumed. Every render node brackets its own draws in
/// `save`/`restore`, so implementations only need a state stack with the
/// usual canvas semantics: `translate`/`rotate`/`scale` compose onto the
/// current transform, paint setters overwrite the current paint, `restore`
/// pops back to the state at the matching `save`.
///
/// Geometry is expressed in the node's local frame: rectangles anchor their
/// top-left corner on the origin, circles center on it, text anchors on it
/// according to its [`TextStyle`].
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_fill(&mut self, color: Rgba8);
    fn set_stroke(&mut self, color: Rgba8);
    fn set_stroke_width(&mut self, width: f64);

    fn fill_rect(&mut self, w: f64, h: f64);
    fn stroke_rect(&mut self, w: f64, h: f64);
    fn fill_circle(&mut self, radius: f64);
    fn stroke_circle(&mut self, radius: f64);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn fill_path(&mut self, points: &[Point]);
    fn stroke_path(&mut self, points: &[Point]);
    fn fill_text(&mut self, text: &str, style: &TextStyle);

    /// Draw a previously loaded asset by name at the origin, natural size.
    fn draw_image(&mut self, asset: &str);
}

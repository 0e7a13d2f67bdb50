//! A small typed SVG builder covering exactly the document shape and
//! attribute grammar the renderer needs: circles, polylines, and text, with
//! an XML declaration and a single `<svg>` root. No general-purpose XML or
//! SVG crate appears anywhere else in this crate's dependency lineage, so
//! this stays hand-written rather than reaching for one.

use std::fmt;

/// Stroke/fill colour, rendered the way the renderer's settings describe it.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    None,
    Named(String),
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{name}"),
            Color::Rgb { r, g, b } => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

/// Escapes the five XML-significant characters; applied to every piece of
/// text content emitted into the document.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct Circle {
    pub center: (f64, f64),
    pub radius: f64,
    pub fill: Color,
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.center.0, self.center.1, self.radius, self.fill
        )
    }
}

#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points = self
            .points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke, self.stroke_width
        )
    }
}

#[derive(Debug, Clone)]
pub struct Text {
    pub position: (f64, f64),
    pub offset: (f64, f64),
    pub font_size: u32,
    pub font_weight: Option<String>,
    pub data: String,
    pub fill: Color,
    pub stroke: Option<(Color, f64)>,
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<text fill="{}""#, self.fill)?;
        if let Some((stroke, stroke_width)) = &self.stroke {
            write!(
                f,
                r#" stroke="{stroke}" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round""#
            )?;
        }
        write!(
            f,
            r#" x="{}" y="{}" dx="{}" dy="{}" font-size="{}" font-family="Verdana""#,
            self.position.0, self.position.1, self.offset.0, self.offset.1, self.font_size
        )?;
        if let Some(weight) = &self.font_weight {
            write!(f, r#" font-weight="{weight}""#)?;
        }
        write!(f, ">{}</text>", escape(&self.data))
    }
}

#[derive(Debug, Clone)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Circle(circle) => circle.fmt(f),
            Object::Polyline(polyline) => polyline.fmt(f),
            Object::Text(text) => text.fmt(f),
        }
    }
}

/// An ordered list of objects; insertion order is rendering order, which is
/// the whole point, since the renderer controls layering by push order alone.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: Object) {
        self.objects.push(object);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#)?;
        for object in &self.objects {
            writeln!(f, "  {object}")?;
        }
        write!(f, "</svg>")
    }
}

//! SVG map rendering: project stop coordinates onto the image plane, then
//! emit primitives in the contractual layer order (polylines, bus labels,
//! stop dots, stop labels).

mod projector;
pub mod svg;

pub use projector::SphereProjector;
pub use svg::Color;

use std::collections::BTreeSet;

use crate::catalogue::Catalogue;
use svg::{Circle, Document, Object, Polyline, Text};

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),
    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    /// `settings.color_palette` must already be non-empty; the loader
    /// rejects an empty palette before this type is ever constructed.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, catalogue: &Catalogue) -> String {
        let mut buses: Vec<_> = catalogue
            .all_buses()
            .iter()
            .filter(|bus| bus.stop_count() > 0)
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let mut rendered_stop_indices: BTreeSet<u32> = BTreeSet::new();
        for bus in &buses {
            rendered_stop_indices.extend(bus.stops.iter().copied());
        }

        let coordinates = rendered_stop_indices
            .iter()
            .map(|&idx| catalogue.stop_by_index(idx).coordinate);
        let projector = SphereProjector::new(
            coordinates,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut document = Document::new();

        for (i, bus) in buses.iter().enumerate() {
            let color = self.palette_color(i);
            let points = bus
                .stops
                .iter()
                .map(|&idx| projector.project(catalogue.stop_by_index(idx).coordinate))
                .collect();
            document.push(Object::Polyline(Polyline {
                points,
                stroke: color,
                stroke_width: self.settings.line_width,
            }));
        }

        for (i, bus) in buses.iter().enumerate() {
            let color = self.palette_color(i);
            let first = bus.stops[0];
            self.push_bus_label(&mut document, catalogue, &projector, first, &bus.name, &color);

            if !bus.is_roundtrip {
                let middle = bus.stops[bus.middle_index()];
                if middle != first {
                    self.push_bus_label(
                        &mut document,
                        catalogue,
                        &projector,
                        middle,
                        &bus.name,
                        &color,
                    );
                }
            }
        }

        let mut stop_names: Vec<(&str, u32)> = rendered_stop_indices
            .iter()
            .map(|&idx| (catalogue.stop_by_index(idx).name.as_ref(), idx))
            .collect();
        stop_names.sort_by_key(|(name, _)| *name);

        for &(_, idx) in &stop_names {
            let (x, y) = projector.project(catalogue.stop_by_index(idx).coordinate);
            document.push(Object::Circle(Circle {
                center: (x, y),
                radius: self.settings.stop_radius,
                fill: Color::Named("white".to_string()),
            }));
        }

        for &(name, idx) in &stop_names {
            let (x, y) = projector.project(catalogue.stop_by_index(idx).coordinate);
            document.push(Object::Text(Text {
                position: (x, y),
                offset: self.settings.stop_label_offset,
                font_size: self.settings.stop_label_font_size,
                font_weight: None,
                data: name.to_string(),
                fill: self.settings.underlayer_color.clone(),
                stroke: Some((
                    self.settings.underlayer_color.clone(),
                    self.settings.underlayer_width,
                )),
            }));
            document.push(Object::Text(Text {
                position: (x, y),
                offset: self.settings.stop_label_offset,
                font_size: self.settings.stop_label_font_size,
                font_weight: None,
                data: name.to_string(),
                fill: Color::Named("black".to_string()),
                stroke: None,
            }));
        }

        document.to_string()
    }

    fn palette_color(&self, bus_index: usize) -> Color {
        let palette = &self.settings.color_palette;
        palette[bus_index % palette.len()].clone()
    }

    fn push_bus_label(
        &self,
        document: &mut Document,
        catalogue: &Catalogue,
        projector: &SphereProjector,
        stop_index: u32,
        bus_name: &str,
        color: &Color,
    ) {
        let (x, y) = projector.project(catalogue.stop_by_index(stop_index).coordinate);
        document.push(Object::Text(Text {
            position: (x, y),
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            font_weight: Some("bold".to_string()),
            data: bus_name.to_string(),
            fill: self.settings.underlayer_color.clone(),
            stroke: Some((
                self.settings.underlayer_color.clone(),
                self.settings.underlayer_width,
            )),
        }));
        document.push(Object::Text(Text {
            position: (x, y),
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            font_weight: Some("bold".to_string()),
            data: bus_name.to_string(),
            fill: color.clone(),
            stroke: None,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn settings(palette: Vec<Color>) -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: (7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: (7.0, -3.0),
            underlayer_color: Color::Rgba {
                r: 255,
                g: 255,
                b: 255,
                a: 0.85,
            },
            underlayer_width: 3.0,
            color_palette: palette,
        }
    }

    fn abc_catalogue() -> Catalogue {
        let mut cat = Catalogue::new();
        cat.add_stop("A", Coordinate::new(55.0, 37.0)).unwrap();
        cat.add_stop("B", Coordinate::new(55.0, 37.1)).unwrap();
        cat.set_distance("A", "B", 1000).unwrap();
        cat.set_distance("B", "A", 1000).unwrap();
        cat.add_bus("1", &["A".to_string(), "B".to_string()], false)
            .unwrap();
        cat
    }

    #[test]
    fn empty_catalogue_renders_a_bare_svg() {
        let renderer = Renderer::new(settings(vec![Color::Named("red".to_string())]));
        let document = renderer.render(&Catalogue::new());
        assert!(document.contains("<svg"));
        assert!(!document.contains("<circle"));
        assert!(!document.contains("<polyline"));
    }

    #[test]
    fn single_colour_palette_is_used_for_every_polyline() {
        let mut cat = abc_catalogue();
        cat.add_stop("C", Coordinate::new(55.0, 37.2)).unwrap();
        cat.set_distance("B", "C", 1000).unwrap();
        cat.set_distance("C", "B", 1000).unwrap();
        cat.add_bus("2", &["B".to_string(), "C".to_string()], false)
            .unwrap();
        let renderer = Renderer::new(settings(vec![Color::Named("red".to_string())]));
        let document = renderer.render(&cat);
        assert_eq!(document.matches(r#"stroke="red""#).count(), 2);
    }

    #[test]
    fn single_stop_non_roundtrip_bus_coincident_middle_emits_one_label_pair() {
        let mut cat = Catalogue::new();
        cat.add_stop("A", Coordinate::new(55.0, 37.0)).unwrap();
        cat.add_bus("1", &["A".to_string()], false).unwrap();
        let renderer = Renderer::new(settings(vec![Color::Named("green".to_string())]));
        let document = renderer.render(&cat);
        // one halo + one glyph = two bus-name occurrences in bold text elements
        assert_eq!(document.matches(r#"font-weight="bold">1</text>"#).count(), 2);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let cat = abc_catalogue();
        let renderer = Renderer::new(settings(vec![Color::Named("blue".to_string())]));
        assert_eq!(renderer.render(&cat), renderer.render(&cat));
    }
}

//! Translation between the JSON DTOs and domain types: populate the
//! catalogue, build the settings structs, and turn each `stat_requests`
//! entry into a [`Query`].

use crate::{
    catalogue::{self, Catalogue},
    error::LoadError,
    geo::Coordinate,
    handler::Query,
    render::{Color, RenderSettings},
    router::RoutingSettings,
};

use super::input::{BaseRequest, ColorDto, InputDocument, StatRequest};

pub struct LoadedSystem {
    pub catalogue: Catalogue,
    pub routing_settings: RoutingSettings,
    pub render_settings: RenderSettings,
    pub queries: Vec<Query>,
}

/// Populates a catalogue in two passes (stops first, so that `add_bus` can
/// resolve every name it references), then builds the settings structs and
/// the query list.
pub fn load(document: InputDocument) -> Result<LoadedSystem, LoadError> {
    let mut catalogue = Catalogue::new();

    for request in &document.base_requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name, Coordinate::new(*latitude, *longitude))?;
        }
    }

    for request in &document.base_requests {
        match request {
            BaseRequest::Stop {
                name,
                road_distances,
                ..
            } => {
                for (to_name, meters) in road_distances {
                    catalogue.set_distance(name, to_name, *meters)?;
                }
            }
            BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } => {
                catalogue.add_bus(name, stops, *is_roundtrip)?;
            }
        }
    }

    catalogue::validate_adjacent_distances(&catalogue)?;

    let routing_settings = RoutingSettings {
        bus_wait_time: document.routing_settings.bus_wait_time as f64,
        bus_velocity_kmh: document.routing_settings.bus_velocity,
    };

    let render_settings = convert_render_settings(document.render_settings)?;
    let queries = document.stat_requests.iter().map(convert_query).collect();

    Ok(LoadedSystem {
        catalogue,
        routing_settings,
        render_settings,
        queries,
    })
}

fn convert_render_settings(
    dto: crate::protocol::input::RenderSettingsDto,
) -> Result<RenderSettings, LoadError> {
    if dto.color_palette.is_empty() {
        return Err(LoadError::EmptyPalette);
    }
    Ok(RenderSettings {
        width: dto.width,
        height: dto.height,
        padding: dto.padding,
        line_width: dto.line_width,
        stop_radius: dto.stop_radius,
        bus_label_font_size: dto.bus_label_font_size,
        bus_label_offset: dto.bus_label_offset,
        stop_label_font_size: dto.stop_label_font_size,
        stop_label_offset: dto.stop_label_offset,
        underlayer_color: dto.underlayer_color.into(),
        underlayer_width: dto.underlayer_width,
        color_palette: dto.color_palette.into_iter().map(Into::into).collect(),
    })
}

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        match dto {
            ColorDto::Named(name) => Color::Named(name),
            ColorDto::Rgb(r, g, b) => Color::Rgb { r, g, b },
            ColorDto::Rgba(r, g, b, a) => Color::Rgba { r, g, b, a },
        }
    }
}

fn convert_query(request: &StatRequest) -> Query {
    match request {
        StatRequest::Bus { id, name } => Query::Bus {
            id: *id,
            name: name.clone(),
        },
        StatRequest::Stop { id, name } => Query::Stop {
            id: *id,
            name: name.clone(),
        },
        StatRequest::Map { id } => Query::Map { id: *id },
        StatRequest::Route { id, from, to } => Query::Route {
            id: *id,
            from: from.clone(),
            to: to.clone(),
        },
    }
}

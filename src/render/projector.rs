//! Affine projection of geodetic coordinates onto the image plane, sharing
//! a single scale factor across both axes so the map is never stretched.

use crate::geo::Coordinate;

const ZERO_EPSILON: f64 = 1e-6;

/// Built once per render from exactly the stop coordinates that will be
/// drawn; degenerate axes (all points sharing a longitude or latitude) fall
/// back to the other axis's scale, or to zero if both are degenerate.
pub struct SphereProjector {
    min_longitude: f64,
    max_latitude: f64,
    zoom: f64,
    padding: f64,
}

impl SphereProjector {
    pub fn new<I>(coordinates: I, width: f64, height: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut min_longitude = f64::INFINITY;
        let mut max_longitude = f64::NEG_INFINITY;
        let mut min_latitude = f64::INFINITY;
        let mut max_latitude = f64::NEG_INFINITY;
        let mut any = false;

        for coordinate in coordinates {
            any = true;
            min_longitude = min_longitude.min(coordinate.longitude);
            max_longitude = max_longitude.max(coordinate.longitude);
            min_latitude = min_latitude.min(coordinate.latitude);
            max_latitude = max_latitude.max(coordinate.latitude);
        }

        if !any {
            return Self {
                min_longitude: 0.0,
                max_latitude: 0.0,
                zoom: 0.0,
                padding,
            };
        }

        let width_zoom = if (max_longitude - min_longitude).abs() < ZERO_EPSILON {
            None
        } else {
            Some((width - 2.0 * padding) / (max_longitude - min_longitude))
        };
        let height_zoom = if (max_latitude - min_latitude).abs() < ZERO_EPSILON {
            None
        } else {
            Some((height - 2.0 * padding) / (max_latitude - min_latitude))
        };

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            min_longitude,
            max_latitude,
            zoom,
            padding,
        }
    }

    pub fn project(&self, coordinate: Coordinate) -> (f64, f64) {
        let x = (coordinate.longitude - self.min_longitude) * self.zoom + self.padding;
        let y = (self.max_latitude - coordinate.latitude) * self.zoom + self.padding;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_degenerates_both_axes_to_zero_zoom() {
        let projector = SphereProjector::new([Coordinate::new(55.0, 37.0)], 600.0, 400.0, 50.0);
        let (x, y) = projector.project(Coordinate::new(55.0, 37.0));
        assert_eq!(x, 50.0);
        assert_eq!(y, 50.0);
    }

    #[test]
    fn shared_longitude_falls_back_to_height_zoom() {
        let points = [Coordinate::new(55.0, 37.0), Coordinate::new(56.0, 37.0)];
        let projector = SphereProjector::new(points, 600.0, 400.0, 50.0);
        let (x_a, _) = projector.project(points[0]);
        let (x_b, _) = projector.project(points[1]);
        assert_eq!(x_a, x_b);
    }

    #[test]
    fn empty_coordinate_set_yields_zero_zoom() {
        let projector = SphereProjector::new(std::iter::empty(), 600.0, 400.0, 50.0);
        let (x, y) = projector.project(Coordinate::new(10.0, 10.0));
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.0);
    }
}

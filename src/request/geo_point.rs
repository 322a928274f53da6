use serde_json::Value;

use crate::node::{Category, Node};
use crate::{DslError, Result};

/// Latitude/longitude pair
///
/// Renders as the array form `[lon, lat]`, longitude first. Both
/// coordinates must be finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let mut point = Self { lat: 0.0, lon: 0.0 };
        point.set_lat(lat)?.set_lon(lon)?;
        Ok(point)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn set_lat(&mut self, lat: f64) -> Result<&mut Self> {
        self.lat = coordinate("lat", lat)?;
        Ok(self)
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn set_lon(&mut self, lon: f64) -> Result<&mut Self> {
        self.lon = coordinate("lon", lon)?;
        Ok(self)
    }
}

fn coordinate(axis: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DslError::InvalidArgument(format!(
            "{axis} must be a finite number, got {value}"
        )))
    }
}

impl Node for GeoPoint {
    fn category(&self) -> Category {
        Category::GeoPoint
    }

    fn to_fragment(&self) -> Value {
        Value::Array(vec![Value::from(self.lon), Value::from(self.lat)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_point_is_lon_lat() {
        let mut point = GeoPoint::new(52.37, 4.89).unwrap();
        assert_eq!(point.to_fragment(), json!([4.89, 52.37]));

        point.set_lat(40.7).unwrap().set_lon(-74.0).unwrap();
        assert_eq!(point.lat(), 40.7);
        assert_eq!(point.to_json_string().unwrap(), "[-74.0,40.7]");
    }

    #[test]
    fn test_geo_point_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 4.89).is_err());

        let mut point = GeoPoint::new(52.37, 4.89).unwrap();
        assert!(point.set_lon(f64::INFINITY).is_err());
        assert_eq!(point.to_fragment(), json!([4.89, 52.37]));
    }
}

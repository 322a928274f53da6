//! Geo distance filter - documents within a radius of a point

use serde_json::Value;

use super::FieldFilter;
use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node};
use crate::Result;

/// Filter matching documents whose geo field lies within `distance` of a point
///
/// Renders as `{ geo_distance: { <field>: [lon, lat], distance: "10km" } }`.
/// The point must be a geo point node; no distance arithmetic happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoDistanceFilter {
    core: FilterCore,
}

impl GeoDistanceFilter {
    pub fn new(
        field: impl Into<String>,
        point: &dyn Node,
        distance: impl Into<String>,
    ) -> Result<Self> {
        let fragment = accessor::splice(point, Category::GeoPoint, "point")?;
        let mut core = FilterCore::keyed("geo_distance", field, fragment);
        accessor::set(core.body_mut(), "distance", distance.into());
        Ok(Self { core })
    }

    pub fn point(&self) -> Option<&Value> {
        self.core.field_value()
    }

    pub fn set_point(&mut self, point: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(point, Category::GeoPoint, "point")?;
        self.core.set_field_value(fragment);
        Ok(self)
    }

    /// Radius with unit, e.g. `"12km"`
    pub fn distance(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "distance")
    }

    pub fn set_distance(&mut self, distance: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "distance", distance.into());
        self
    }

    /// `arc` or `plane`
    pub fn distance_type(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "distance_type")
    }

    pub fn set_distance_type(&mut self, distance_type: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "distance_type", distance_type.into());
        self
    }
}

impl Mixin for GeoDistanceFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FieldFilter for GeoDistanceFilter {}

impl FilterNode for GeoDistanceFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use crate::request::GeoPoint;
    use serde_json::json;

    #[test]
    fn test_geo_distance_fragment() {
        let point = GeoPoint::new(40.7, -74.0).unwrap();
        let mut filter = GeoDistanceFilter::new("location", &point, "10km").unwrap();
        filter.set_distance_type("arc");

        assert_eq!(filter.field(), Some("location"));
        assert_eq!(filter.distance(), Some("10km"));
        assert_eq!(
            filter.to_fragment(),
            json!({ "geo_distance": {
                "distance": "10km",
                "location": [-74.0, 40.7],
                "distance_type": "arc"
            } })
        );
    }

    #[test]
    fn test_geo_distance_requires_geo_point() {
        let err = GeoDistanceFilter::new("location", &TermFilter::new("a", 1), "1km").unwrap_err();
        assert!(err.is_category_mismatch());

        let mut filter =
            GeoDistanceFilter::new("location", &GeoPoint::new(1.0, 2.0).unwrap(), "1km").unwrap();
        assert!(filter.set_point(&TermFilter::new("a", 1)).is_err());
        assert_eq!(filter.point(), Some(&json!([2.0, 1.0])));

        filter.set_point(&GeoPoint::new(3.0, 4.0).unwrap()).unwrap();
        assert_eq!(filter.point(), Some(&json!([4.0, 3.0])));
    }
}

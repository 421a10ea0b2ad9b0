//! Geocoding and directions types.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use strum::{Display, EnumString};

use crate::mapper::Shape;

/// One step of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub segment_number: i64,
    pub step_number: i64,
    pub action: String,
    pub description: String,
    pub road: String,
    /// Seconds for this step.
    pub step_time: i64,
    /// Metres for this step.
    pub step_distance: i64,
    pub total_time: i64,
    pub total_distance: i64,
}

impl Shape for Direction {
    const NAME: &'static str = "Direction";
}

/// Coordinates of a geocoded location.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub latitude: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub longitude: f64,
}

impl Shape for Location {
    const NAME: &'static str = "Location";
}

/// Country containing a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country_name: String,
    pub country_iso2: String,
    pub country_iso3: String,
    pub country_iso_number: i64,
}

impl Shape for Country {
    const NAME: &'static str = "Country";
}

/// Route optimisation for directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum DistanceType {
    #[default]
    Fastest,
    Shortest,
}

/// Options for [`GeocodingGateway::directions`](super::GeocodingGateway::directions).
///
/// Points are postcodes or `latitude,longitude` pairs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectionsOptions {
    pub start: Vec<String>,
    pub finish: Vec<String>,
    pub way_points: Vec<String>,
    pub distance_type: Option<DistanceType>,
    /// Day of the week, e.g. `Monday`.
    pub start_day: Option<String>,
    /// Minutes after midnight.
    pub start_time: Option<u32>,
}

impl DirectionsOptions {
    pub fn new<S, F, A, B>(start: S, finish: F) -> Self
    where
        S: IntoIterator<Item = A>,
        F: IntoIterator<Item = B>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            start: start.into_iter().map(Into::into).collect(),
            finish: finish.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn way_point(mut self, point: impl Into<String>) -> Self {
        self.way_points.push(point.into());
        self
    }

    pub fn distance_type(mut self, distance_type: DistanceType) -> Self {
        self.distance_type = Some(distance_type);
        self
    }
}

/// Options for [`GeocodingGateway::geocode`](super::GeocodingGateway::geocode).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeocodeOptions {
    /// ISO 2 or 3 character country code.
    pub country: String,
    /// Place name, postcode or address.
    pub location: String,
}

/// Options for [`GeocodingGateway::position_to_country`](super::GeocodingGateway::position_to_country).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionToCountryOptions {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::encode_options;
    use crate::mapper::AttributeMapper;
    use serde_json::json;

    #[test]
    fn location_accepts_stringly_coordinates() {
        let item = json!({ "Name": "London", "Latitude": "51.5073", "Longitude": -0.1277 });
        let location: Location = AttributeMapper.map_one(item.as_object().unwrap()).unwrap();
        assert_eq!(location.latitude, 51.5073);
        assert_eq!(location.longitude, -0.1277);
    }

    #[test]
    fn direction_requires_integers() {
        let item = json!({
            "SegmentNumber": 1, "StepNumber": 1, "Action": "Start", "Description": "d",
            "Road": "", "StepTime": "fast", "StepDistance": 0, "TotalTime": 0, "TotalDistance": 0
        });
        assert!(AttributeMapper.map_one::<Direction>(item.as_object().unwrap()).is_err());
    }

    #[test]
    fn directions_options_skip_empty_way_points() {
        let options = DirectionsOptions::new(["EC1Y 8AF"], ["51.5007,-0.1246"])
            .distance_type(DistanceType::Shortest);
        let params = encode_options("geocoding.directions", &options).unwrap();

        assert!(params.contains(&("Start".to_string(), "EC1Y 8AF".to_string())));
        assert!(params.contains(&("Finish".to_string(), "51.5007,-0.1246".to_string())));
        assert!(params.contains(&("DistanceType".to_string(), "Shortest".to_string())));
        assert!(!params.iter().any(|(key, _)| key == "WayPoints"));
    }
}

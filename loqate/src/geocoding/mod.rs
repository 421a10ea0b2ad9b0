//! Geocoding, directions and reverse country lookup.

mod types;

pub use types::{
    Country, Direction, DirectionsOptions, DistanceType, GeocodeOptions, Location,
    PositionToCountryOptions,
};

use crate::client::Transport;
use crate::error::{LoqateError, SchemaViolation};
use crate::gateway::fetch;
use crate::normalize::{normalize_many, normalize_one, normalize_optional};
use crate::result::{unwrap_or_raise, ApiResult};

pub const DIRECTIONS_ENDPOINT: &str = "/DistancesAndDirections/Interactive/Directions/v2.00/json3.ws";
pub const GEOCODE_ENDPOINT: &str = "/Geocoding/International/Geocode/v1.10/json3.ws";
pub const POSITION_TO_COUNTRY_ENDPOINT: &str =
    "/Geocoding/International/PositionToCountry/v1.00/json3.ws";

/// Gateway to the geocoding services.
#[derive(Debug)]
pub struct GeocodingGateway<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> GeocodingGateway<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Returns the steps of a route between two points.
    pub async fn directions(
        &self,
        options: &DirectionsOptions,
    ) -> Result<ApiResult<Vec<Direction>>, SchemaViolation> {
        let envelope =
            fetch(self.transport, "geocoding.directions", DIRECTIONS_ENDPOINT, options).await?;
        normalize_many(&envelope)
    }

    /// Returns the coordinates of a location.
    pub async fn geocode(
        &self,
        options: &GeocodeOptions,
    ) -> Result<ApiResult<Location>, SchemaViolation> {
        let envelope = fetch(self.transport, "geocoding.geocode", GEOCODE_ENDPOINT, options).await?;
        normalize_one(&envelope)
    }

    /// Returns the country containing a coordinate, or `None` for a point
    /// outside every country.
    pub async fn position_to_country(
        &self,
        options: &PositionToCountryOptions,
    ) -> Result<ApiResult<Option<Country>>, SchemaViolation> {
        let envelope = fetch(
            self.transport,
            "geocoding.position_to_country",
            POSITION_TO_COUNTRY_ENDPOINT,
            options,
        )
        .await?;
        normalize_optional(&envelope)
    }

    pub async fn directions_or_raise(
        &self,
        options: &DirectionsOptions,
    ) -> Result<Vec<Direction>, LoqateError> {
        Ok(unwrap_or_raise(self.directions(options).await?)?)
    }

    pub async fn geocode_or_raise(&self, options: &GeocodeOptions) -> Result<Location, LoqateError> {
        Ok(unwrap_or_raise(self.geocode(options).await?)?)
    }

    pub async fn position_to_country_or_raise(
        &self,
        options: &PositionToCountryOptions,
    ) -> Result<Option<Country>, LoqateError> {
        Ok(unwrap_or_raise(self.position_to_country(options).await?)?)
    }
}

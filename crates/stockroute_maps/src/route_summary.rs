use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{directions_api::DirectionsLeg, error::RoutingError};

const METERS_PER_KM: u64 = 1000;
const SECONDS_PER_HOUR: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteSummary {
    /// `lat,lng` of every leg start followed by the end of the last leg
    pub route: Vec<String>,
    /// Total distance in whole kilometers, truncated
    pub distance_km: u64,
    /// Total duration in whole hours, truncated
    pub duration_hr: u64,
}

impl RouteSummary {
    pub fn from_legs(legs: &[DirectionsLeg]) -> Result<Self, RoutingError> {
        let Some(last_leg) = legs.last() else {
            return Err(RoutingError::DirectionsMalformedResponse(String::from(
                "route contains no legs",
            )));
        };

        let mut route: Vec<String> = legs
            .iter()
            .map(|leg| leg.start_location.to_string())
            .collect();
        route.push(last_leg.end_location.to_string());

        let meters = checked_total(legs.iter().map(|leg| leg.distance.value), "distance")?;
        let seconds = checked_total(legs.iter().map(|leg| leg.duration.value), "duration")?;

        Ok(RouteSummary {
            route,
            distance_km: meters / METERS_PER_KM,
            duration_hr: seconds / SECONDS_PER_HOUR,
        })
    }

    pub fn leg_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

fn checked_total(mut values: impl Iterator<Item = u64>, field: &str) -> Result<u64, RoutingError> {
    values
        .try_fold(0u64, u64::checked_add)
        .ok_or_else(|| {
            RoutingError::DirectionsMalformedResponse(format!("total leg {field} overflows"))
        })
}

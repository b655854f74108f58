//! Trip window and driving economics.

use chrono::{Days, NaiveDate};
use thiserror::Error;

/// Errors returned by [`TripParameters::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripParametersError {
    /// The trip must last at least one day.
    #[error("trip length must be at least one day")]
    ZeroDays,
    /// The trip window runs past the end of the calendar.
    #[error("trip of {total_days} days starting {start_date} overflows the calendar")]
    DateOverflow {
        /// First day of the trip.
        start_date: NaiveDate,
        /// Requested trip length.
        total_days: u32,
    },
    /// Fuel economy must be a positive, finite number.
    #[error("fuel economy must be positive, got {0}")]
    InvalidMpg(f64),
    /// Fuel price must be a non-negative, finite number.
    #[error("fuel price must be non-negative, got {0}")]
    InvalidFuelPrice(f64),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTripParameters {
    start_date: NaiveDate,
    total_days: u32,
    mpg: f64,
    fuel_price: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTripParameters> for TripParameters {
    type Error = TripParametersError;

    fn try_from(raw: RawTripParameters) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.total_days, raw.mpg, raw.fuel_price)
    }
}

/// Start date, length and fuel economics of one trip.
///
/// Day 1 of the trip is `start_date`; the last usable day is
/// `start_date + total_days - 1`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use driftwood_core::TripParameters;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or("bad date")?;
/// let trip = TripParameters::new(start, 7, 26.0, 4.10)?;
/// assert_eq!(trip.last_day(), NaiveDate::from_ymd_opt(2025, 10, 7).ok_or("bad date")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTripParameters"))]
pub struct TripParameters {
    start_date: NaiveDate,
    total_days: u32,
    mpg: f64,
    fuel_price: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    last_day: NaiveDate,
}

impl TripParameters {
    /// Validate and construct trip parameters.
    ///
    /// # Errors
    /// Returns [`TripParametersError`] when the trip has no days, runs past
    /// the calendar, or the fuel figures are not finite and in range.
    pub fn new(
        start_date: NaiveDate,
        total_days: u32,
        mpg: f64,
        fuel_price: f64,
    ) -> Result<Self, TripParametersError> {
        if total_days == 0 {
            return Err(TripParametersError::ZeroDays);
        }
        if !(mpg.is_finite() && mpg > 0.0) {
            return Err(TripParametersError::InvalidMpg(mpg));
        }
        if !(fuel_price.is_finite() && fuel_price >= 0.0) {
            return Err(TripParametersError::InvalidFuelPrice(fuel_price));
        }
        let last_day = start_date
            .checked_add_days(Days::new(u64::from(total_days - 1)))
            .ok_or(TripParametersError::DateOverflow {
                start_date,
                total_days,
            })?;
        Ok(Self {
            start_date,
            total_days,
            mpg,
            fuel_price,
            last_day,
        })
    }

    /// Day 1 of the trip.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Number of calendar days in the trip window.
    #[must_use]
    pub const fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Miles per gallon of the vehicle.
    #[must_use]
    pub const fn mpg(&self) -> f64 {
        self.mpg
    }

    /// Default fuel price per gallon, used where a waypoint has none.
    #[must_use]
    pub const fn fuel_price(&self) -> f64 {
        self.fuel_price
    }

    /// Final day on which the traveller may still be on the road.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
    }

    #[rstest]
    fn one_day_trip_ends_on_start_date(start: NaiveDate) {
        let trip = TripParameters::new(start, 1, 25.0, 4.0).expect("valid trip");
        assert_eq!(trip.last_day(), start);
    }

    #[rstest]
    fn rejects_zero_days(start: NaiveDate) {
        let err = TripParameters::new(start, 0, 25.0, 4.0).expect_err("zero days");
        assert_eq!(err, TripParametersError::ZeroDays);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    fn rejects_bad_mpg(start: NaiveDate, #[case] mpg: f64) {
        let err = TripParameters::new(start, 3, mpg, 4.0).expect_err("bad mpg");
        assert!(matches!(err, TripParametersError::InvalidMpg(_)));
    }

    #[rstest]
    #[case(-0.01)]
    #[case(f64::INFINITY)]
    fn rejects_bad_fuel_price(start: NaiveDate, #[case] price: f64) {
        let err = TripParameters::new(start, 3, 25.0, price).expect_err("bad price");
        assert!(matches!(err, TripParametersError::InvalidFuelPrice(_)));
    }

    #[rstest]
    fn accepts_free_fuel(start: NaiveDate) {
        assert!(TripParameters::new(start, 3, 25.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_calendar_overflow() {
        let err = TripParameters::new(NaiveDate::MAX, 2, 25.0, 4.0).expect_err("overflow");
        assert!(matches!(err, TripParametersError::DateOverflow { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialisation_validates() {
        let json = r#"{"start_date":"2025-10-01","total_days":0,"mpg":25.0,"fuel_price":4.0}"#;
        assert!(serde_json::from_str::<TripParameters>(json).is_err());
        let json = r#"{"start_date":"2025-10-01","total_days":4,"mpg":25.0,"fuel_price":4.0}"#;
        let trip: TripParameters = serde_json::from_str(json).expect("valid trip");
        assert_eq!(trip.total_days(), 4);
    }
}

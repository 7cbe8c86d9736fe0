use crate::model::route::Coordinate;
use crate::model::trip::TripRecord;
use crate::service::aggregate::day_trips;

const BASE_LAT: f64 = 35.0;
const BASE_LNG: f64 = 128.0;
const STEP: f64 = 0.01;

/// Placeholder geocoder: a point derived from the label's UTF-16 code units.
///
/// Not a real location. Different labels may land on the same point.
pub fn to_coordinate(label: &str) -> Coordinate {
    let sum: u64 = label.encode_utf16().map(u64::from).sum();
    let offset = (sum % 10) as f64 * STEP;
    Coordinate {
        lat: BASE_LAT + offset,
        lng: BASE_LNG + offset,
    }
}

/// Origin then destination of every trip on `date`, in record order.
pub fn day_route(records: &[TripRecord], date: &str) -> Vec<Coordinate> {
    day_trips(records, date)
        .into_iter()
        .flat_map(|r| [to_coordinate(&r.from), to_coordinate(&r.to)])
        .collect()
}

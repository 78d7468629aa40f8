use std::fmt;

/// A geographic position decoded from a compact `DDMM[N|S]DDDMM[E|W]` token
///
/// Latitude and longitude are in decimal degrees; `raw` keeps the token the
/// position was decoded from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub raw: String,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64, raw: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            raw: raw.into(),
        }
    }

    /// Check if the position lies within the valid lat/lon range
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Render the position back into the compact NOTAM token format
    ///
    /// For coordinates decoded from a valid token this reproduces `raw`.
    pub fn to_compact(&self) -> String {
        let (lat_deg, lat_min) = to_degrees_minutes(self.latitude);
        let (lon_deg, lon_min) = to_degrees_minutes(self.longitude);
        let lat_hemisphere = if self.latitude.is_sign_negative() { 'S' } else { 'N' };
        let lon_hemisphere = if self.longitude.is_sign_negative() { 'W' } else { 'E' };

        format!("{lat_deg:02}{lat_min:02}{lat_hemisphere}{lon_deg:03}{lon_min:02}{lon_hemisphere}")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact())
    }
}

/// Split decimal degrees into whole degrees and rounded minutes
fn to_degrees_minutes(value: f64) -> (u32, u32) {
    let total_minutes = (value.abs() * 60.0).round() as u32;
    (total_minutes / 60, total_minutes % 60)
}

use std::fmt;

pub type RawCoord = i32;

// The raw range is symmetric around zero, leaving the leftover
// two's complement bit pattern i32::MIN as the invalid marker.
const RAW_INVALID: RawCoord = i32::MIN;
const RAW_MAX: RawCoord = i32::MAX;
const RAW_MIN: RawCoord = -RAW_MAX;
const RAW_SPAN: f64 = RAW_MAX as f64 - RAW_MIN as f64;

/// Fixed-point storage format of a single geographical coordinate.
///
/// The whole raw range maps onto the coordinate's degree range, with
/// a single reserved bit pattern for the invalid default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_INVALID);

    pub const fn max() -> Self {
        Self(RAW_MAX)
    }

    pub const fn min() -> Self {
        Self(RAW_MIN)
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    // NaN for the invalid coordinate, like the degree/radian accessors.
    fn scaled(self, factor: f64) -> f64 {
        if self.is_valid() {
            f64::from(self.0) * factor
        } else {
            f64::NAN
        }
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        Self::INVALID
    }
}

// Invalid coordinates are unordered, except that they equal themselves.
impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if !self.is_valid() || !other.is_valid() {
            return (self == other).then_some(std::cmp::Ordering::Equal);
        }
        Some(self.to_raw().cmp(&other.to_raw()))
    }
}

// Latitude and longitude only differ in their degree/radian bounds,
// everything else is generated from the same template.
macro_rules! geo_coord_axis {
    ($name:ident, $deg_bound:expr, $rad_bound:expr) => {
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
        pub struct $name(GeoCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_bound;
            const DEG_MIN: f64 = -$deg_bound;
            const RAD_MAX: f64 = $rad_bound;
            const RAD_MIN: f64 = -$rad_bound;

            const TO_DEG: f64 = (Self::DEG_MAX - Self::DEG_MIN) / RAW_SPAN;
            const FROM_DEG: f64 = RAW_SPAN / (Self::DEG_MAX - Self::DEG_MIN);
            const TO_RAD: f64 = (Self::RAD_MAX - Self::RAD_MIN) / RAW_SPAN;

            pub const fn max() -> Self {
                Self(GeoCoord::max())
            }

            pub const fn min() -> Self {
                Self(GeoCoord::min())
            }

            pub const fn to_raw(self) -> RawCoord {
                self.0.to_raw()
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(GeoCoord::from_raw(raw))
            }

            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            pub fn to_deg(self) -> f64 {
                self.0.scaled(Self::TO_DEG)
            }

            pub fn to_rad(self) -> f64 {
                self.0.scaled(Self::TO_RAD)
            }

            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!(deg >= Self::DEG_MIN);
                debug_assert!(deg <= Self::DEG_MAX);
                let res = Self::from_raw(f64::round(deg * Self::FROM_DEG) as RawCoord);
                debug_assert!(res.is_valid());
                res
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                // Also filters out NaN.
                if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
                    Some(Self::from_deg(deg))
                } else {
                    None
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

geo_coord_axis!(LatCoord, 90.0, std::f64::consts::FRAC_PI_2);
geo_coord_axis!(LngCoord, 180.0, std::f64::consts::PI);

/// A geographical location, stored as a fixed-point coordinate pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// Panics in debug mode if either coordinate is out of range.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    /// `None` if either coordinate is out of range.
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A non-directional distance between two points on the earth's
/// surface, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

const METERS_PER_KILOMETER: f64 = 1_000.0;

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers * METERS_PER_KILOMETER)
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / METERS_PER_KILOMETER
    }

    pub fn is_valid(self) -> bool {
        // NaN compares false here as well.
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// The great-circle distance between two points on the earth's
    /// surface, `None` if either point is invalid.
    ///
    /// Uses the special case of the Vincenty formula that stays
    /// numerically accurate for both close and antipodal points, see
    /// <https://en.wikipedia.org/wiki/Great-circle_distance>.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1, lng1) = p1.to_lat_lng_rad();
        let (lat2, lng2) = p2.to_lat_lng_rad();

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_lat2, cos_lat2) = lat2.sin_cos();

        let delta_lng = (lng1 - lng2).abs();
        let (sin_delta_lng, cos_delta_lng) = delta_lng.sin_cos();

        let east = cos_lat2 * sin_delta_lng;
        let north = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lng;

        let num = (east * east + north * north).sqrt();
        let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lng;

        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * num.atan2(den),
        ))
    }
}

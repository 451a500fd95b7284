//! Geographic coordinate type and spherical distance algorithms.
//!
//! `GeoPoint` stores `f64` (double-precision) latitude/longitude in decimal
//! degrees.  Two distance formulations are provided: a haversine great-circle
//! distance and a legacy cosine-law distance that runs through a
//! nautical-mile unit chain.  They agree only to ~0.1 % — the two paths use
//! different Earth-size approximations — and are kept separate on purpose,
//! since callers of the legacy path depend on its exact output.

/// A geographic coordinate stored as double-precision decimal degrees.
///
/// Coordinates are not validated: a latitude outside [-90, 90] or a longitude
/// outside [-180, 180] yields a numerically defined (if geographically
/// meaningless) distance rather than an error.  Non-finite inputs propagate
/// to a non-finite result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Shortest path over a spherical Earth of mean radius 6 378 100 m.
    /// The central angle is recovered with `atan2` rather than `acos`, which
    /// stays well-conditioned near zero and near-antipodal separations, so
    /// this path needs no domain clamping.  Symmetric up to floating-point
    /// rounding; returns 0 for coincident points.
    pub fn great_circle_distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_378_100.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        // sin²(Δlat/2) + sin²(Δlon/2)·cos(lat1)·cos(lat2); bounded to [0, 1]
        // for real angle differences by construction.
        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        R * c
    }

    /// Legacy spherical distance in metres, via a nautical-mile unit chain.
    ///
    /// Cosine-law formulation: the angular separation in degrees is taken
    /// through ×60 (arcminutes, i.e. nautical miles), ×1.1515 (statute
    /// miles), ×1.609344 (kilometres), ×1000 (metres).  Not equal to
    /// [`great_circle_distance_m`]: the ~0.1 % divergence is contractual and
    /// must not be reconciled.
    ///
    /// [`great_circle_distance_m`]: GeoPoint::great_circle_distance_m
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        // Longitude delta is self − other here, the opposite convention from
        // the haversine path.  cos() is even, so the result is unaffected.
        let d_lon = (self.lon - other.lon).to_radians();

        let mut hav = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();

        // Rounding can push the sum marginally above 1 for near-coincident
        // points, where acos is undefined.  Only the upper bound is clamped:
        // acos(-1) = π is already well-defined at the lower boundary, and
        // legacy output at that boundary must not change.
        if hav > 1.0 {
            hav = 1.0;
        }

        let angular_nm = hav.acos().to_degrees() * 60.0;
        angular_nm * 1.1515 * 1.609344 * 1000.0
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

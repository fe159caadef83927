//! Reference data shared across altimetry-kit tests.

/// Reference ground tracks.
pub mod tracks {
    /// Short Antarctic pass whose latitude extremum sits at index 2.
    pub const TIME: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
    pub const LAT: [f64; 5] = [-80.0, -82.0, -85.0, -83.0, -81.0];

    /// Ascending mask for `TIME`/`LAT` under the single split at the extremum.
    pub const ASCENDING: [bool; 5] = [false, false, true, true, true];
}

/// Geographic points (lon, lat) in the polar regions.
pub mod points {
    /// South Pole.
    pub const SOUTH_POLE: (f64, f64) = (0.0, -90.0);

    /// North Pole.
    pub const NORTH_POLE: (f64, f64) = (0.0, 90.0);

    /// Byrd glacier region, Antarctica.
    pub const BYRD_GLACIER: (f64, f64) = (159.0, -80.3);

    /// Jakobshavn Isbræ, Greenland.
    pub const JAKOBSHAVN: (f64, f64) = (-49.6, 69.2);

    /// Pine Island Glacier, Antarctica.
    pub const PINE_ISLAND: (f64, f64) = (-100.0, -75.0);

    /// Summit Station, Greenland.
    pub const SUMMIT: (f64, f64) = (-38.46, 72.58);
}

/// GPS time instants (seconds since 1980-01-06T00:00:00 UTC).
pub mod gps {
    /// The GPS epoch.
    pub const EPOCH: f64 = 0.0;

    /// ICESat-2 launch, 2018-09-15T13:02:00 UTC.
    pub const ICESAT2_LAUNCH: f64 = 1_221_051_738.0;

    /// One billion GPS seconds (2011-09-14T01:46:25 UTC).
    pub const BILLION: f64 = 1_000_000_000.0;
}

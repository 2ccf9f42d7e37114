//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Gear silhouette constants (all ratios are relative to the gear's size)
pub mod gear {
    /// Tooth count used when the caller doesn't ask for one
    pub const DEFAULT_TOOTH_COUNT: u32 = 16;

    /// Smallest tooth count that still yields a simple polygon
    pub const MIN_TOOTH_COUNT: u32 = 3;

    /// Radial depth of a tooth beyond the body radius
    pub const DEFAULT_TOOTH_DEPTH_RATIO: f64 = 0.08;

    /// Fraction of the inter-tooth angular span covered by a tooth tip
    pub const TOOTH_WIDTH_FRACTION: f64 = 0.4;

    /// Compact hub: body radius / inner hub radius
    pub const COMPACT_OUTER_RATIO: f64 = 0.42;
    pub const COMPACT_INNER_RATIO: f64 = 0.3;

    /// Wide hub: body radius / inner hub radius
    pub const WIDE_OUTER_RATIO: f64 = 0.5;
    pub const WIDE_INNER_RATIO: f64 = 0.35;

    /// Center hole radius as a fraction of the inner hub radius
    pub const HOLE_RATIO: f64 = 0.3;

    /// Spoke directions in degrees
    pub const SPOKE_ANGLES: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

    /// Spoke start/end as fractions of the inner hub radius
    pub const SPOKE_INNER_RATIO: f64 = 0.4;
    pub const SPOKE_OUTER_RATIO: f64 = 0.95;
}

/// Analog clock dial constants (in a 200x200 viewbox)
pub mod clock {
    /// Side of the square dial viewbox
    pub const DIAL_SIZE: f64 = 200.0;

    pub const HOUR_HAND_LENGTH: f64 = 40.0;
    pub const MINUTE_HAND_LENGTH: f64 = 55.0;
    pub const SECOND_HAND_LENGTH: f64 = 65.0;

    /// Radius of the Roman numeral label centers
    pub const NUMERAL_RADIUS: f64 = 65.0;

    /// Hour marker line runs between these radii
    pub const HOUR_MARKER_INNER: f64 = 75.0;
    pub const HOUR_MARKER_OUTER: f64 = 80.0;

    /// Minute tick line runs between these radii
    pub const MINUTE_TICK_INNER: f64 = 78.0;
    pub const MINUTE_TICK_OUTER: f64 = 80.0;

    /// Decorative screws sit on this radius at the listed angles
    pub const SCREW_RADIUS: f64 = 88.0;
    pub const SCREW_ANGLES: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

    pub const ROMAN_NUMERALS: [&str; 12] = [
        "XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI",
    ];

    /// Interval between two clock recomputations
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// Persisted record defaults
pub mod defaults {
    pub const TITLE: &str = "Firefox";

    /// Number of shortcut slots on the page (never resized)
    pub const LINK_SLOT_COUNT: usize = 8;

    pub const MAIN_COLOR: &str = "#2d2519";
    pub const ACCENT_COLOR: &str = "#a6784a";
}

/// Config storage location
pub mod config {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "gearwork-tab";

    /// Environment variable overriding the storage directory
    pub const DIR_ENV: &str = "GEARWORK_TAB_CONFIG_DIR";

    /// Envelope schema version written with every record
    pub const SCHEMA_VERSION: u32 = 1;

    /// Extension of every record file
    pub const FILE_EXTENSION: &str = "json";
}

/// External URL templates used by presentation helpers
pub mod web {
    /// Favicon service, queried by hostname
    pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

    /// Requested favicon edge length in pixels
    pub const FAVICON_SIZE: &str = "64";

    pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

    /// Prefix marking an embedded image payload
    pub const DATA_URL_PREFIX: &str = "data:";
}

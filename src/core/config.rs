//! Puzzle configuration.
//!
//! The surrounding application owns a `PuzzleConfig` and hands it to the
//! engine:
//! - `disk_count`: how many disks a new puzzle starts with
//! - `step_delay`: cadence of solution playback
//! - `geometry`: sizing constants for the board initializer
//!
//! Raw user input (a text field holding the disk count, a signed delay in
//! milliseconds) is validated here. Invalid disk counts are rejected with
//! `InvalidConfiguration`; they are never coerced to a default.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use super::error::{HanoiError, HanoiResult};

/// Disk count used when the application does not pick one.
pub const DEFAULT_DISK_COUNT: u32 = 8;

/// Largest tower `solve_and_animate` accepts by default (2^20 - 1 steps).
pub const DEFAULT_MAX_ANIMATED_DISKS: u32 = 20;

/// Largest tower a puzzle may be created with by default.
pub const DEFAULT_MAX_DISKS: u32 = 64;

/// Validate a signed disk count coming from the rendering layer.
pub fn validate_disk_count(disk_count: i64) -> HanoiResult<u32> {
    if disk_count <= 0 {
        warn!(disk_count, "rejected non-positive disk count");
        return Err(HanoiError::invalid_configuration(format!(
            "disk count must be positive, got {disk_count}"
        )));
    }
    u32::try_from(disk_count).map_err(|_| {
        HanoiError::invalid_configuration(format!("disk count {disk_count} is too large"))
    })
}

/// Parse a disk count typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a positive
/// integer is rejected.
///
/// ```
/// use hanoi_engine::core::parse_disk_count;
///
/// assert_eq!(parse_disk_count(" 5 ").unwrap(), 5);
/// assert!(parse_disk_count("five").is_err());
/// assert!(parse_disk_count("0").is_err());
/// ```
pub fn parse_disk_count(input: &str) -> HanoiResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        warn!(input = trimmed, "rejected malformed disk count");
        HanoiError::invalid_configuration(format!("disk count {trimmed:?} is not an integer"))
    })?;
    validate_disk_count(value)
}

/// Per-step playback delay.
///
/// Holds the delay as configured, which may be absent, zero or negative.
/// [`effective`](Self::effective) substitutes [`Self::FALLBACK`] for any
/// value that is not strictly positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayDelay {
    millis: Option<i64>,
}

impl ReplayDelay {
    /// Delay used when none (or an unusable one) is configured.
    pub const FALLBACK: Duration = Duration::from_millis(1000);

    /// Delay the application starts with.
    pub const INITIAL: ReplayDelay = ReplayDelay { millis: Some(300) };

    /// No delay configured.
    #[must_use]
    pub const fn unset() -> Self {
        Self { millis: None }
    }

    /// Delay in signed milliseconds, as a form field would supply it.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            millis: Some(millis),
        }
    }

    /// Delay from a `Duration`. Saturates at `i64::MAX` milliseconds.
    #[must_use]
    pub fn from_duration(delay: Duration) -> Self {
        Self::from_millis(i64::try_from(delay.as_millis()).unwrap_or(i64::MAX))
    }

    /// The raw configured value in milliseconds, if any.
    #[must_use]
    pub fn configured_millis(&self) -> Option<i64> {
        self.millis
    }

    /// The delay playback actually waits between steps. Always positive.
    #[must_use]
    pub fn effective(&self) -> Duration {
        match self.millis {
            Some(ms) if ms > 0 => Duration::from_millis(ms as u64),
            _ => Self::FALLBACK,
        }
    }
}

impl From<Duration> for ReplayDelay {
    fn from(delay: Duration) -> Self {
        Self::from_duration(delay)
    }
}

impl From<Option<Duration>> for ReplayDelay {
    fn from(delay: Option<Duration>) -> Self {
        delay.map_or_else(Self::unset, Self::from_duration)
    }
}

/// Sizing constants for the board initializer.
///
/// All values are in rendering units. The defaults reproduce the classic
/// 300-unit board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    /// Width cap for the bottom disk.
    pub base_width_max: f64,
    /// Bottom-disk width per disk in the puzzle.
    pub base_rate: f64,
    /// Width cap for the top disk.
    pub top_width_max: f64,
    /// Top-disk width per disk in the puzzle.
    pub top_rate: f64,
    /// Height of a peg.
    pub column_height: f64,
    /// Height cap for a single disk.
    pub height_rate_max: f64,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            base_width_max: 300.0,
            base_rate: 30.0,
            top_width_max: 30.0,
            top_rate: 3.0,
            column_height: 300.0,
            height_rate_max: 30.0,
        }
    }
}

impl BoardGeometry {
    /// Check that every constant is finite and positive.
    pub fn validate(&self) -> HanoiResult<()> {
        let fields = [
            ("base_width_max", self.base_width_max),
            ("base_rate", self.base_rate),
            ("top_width_max", self.top_width_max),
            ("top_rate", self.top_rate),
            ("column_height", self.column_height),
            ("height_rate_max", self.height_rate_max),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(HanoiError::invalid_configuration(format!(
                    "geometry {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Disks stacked on peg 1 when a puzzle is created.
    pub disk_count: u32,

    /// Delay between playback steps.
    pub step_delay: ReplayDelay,

    /// Sizing constants.
    pub geometry: BoardGeometry,

    /// Seed for disk colors. Same seed produces the same colors.
    pub color_seed: u64,

    /// Largest tower `solve_and_animate` will record.
    pub max_animated_disks: u32,

    /// Largest tower a puzzle may be created with.
    pub max_disks: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            step_delay: ReplayDelay::INITIAL,
            geometry: BoardGeometry::default(),
            color_seed: 42,
            max_animated_disks: DEFAULT_MAX_ANIMATED_DISKS,
            max_disks: DEFAULT_MAX_DISKS,
        }
    }
}

impl PuzzleConfig {
    /// Set the disk count.
    #[must_use]
    pub fn with_disk_count(mut self, disk_count: u32) -> Self {
        self.disk_count = disk_count;
        self
    }

    /// Set the playback delay.
    #[must_use]
    pub fn with_step_delay(mut self, delay: impl Into<ReplayDelay>) -> Self {
        self.step_delay = delay.into();
        self
    }

    /// Set the sizing constants.
    #[must_use]
    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the color seed.
    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = seed;
        self
    }

    /// Set the largest tower accepted for animation.
    #[must_use]
    pub fn with_max_animated_disks(mut self, max: u32) -> Self {
        self.max_animated_disks = max;
        self
    }

    /// Set the largest tower a puzzle may be created with.
    #[must_use]
    pub fn with_max_disks(mut self, max: u32) -> Self {
        self.max_disks = max;
        self
    }

    /// Validate a requested disk count against `max_disks`.
    pub fn check_disk_count(&self, disk_count: i64) -> HanoiResult<u32> {
        let n = validate_disk_count(disk_count)?;
        if n > self.max_disks {
            warn!(disk_count = n, max = self.max_disks, "rejected oversized disk count");
            return Err(HanoiError::invalid_configuration(format!(
                "disk count {n} exceeds the limit of {}",
                self.max_disks
            )));
        }
        Ok(n)
    }

    /// Reject configurations the engine cannot start from.
    pub fn validate(&self) -> HanoiResult<()> {
        if self.max_disks == 0 {
            return Err(HanoiError::invalid_configuration("max_disks must be at least 1"));
        }
        if self.max_animated_disks == 0 {
            return Err(HanoiError::invalid_configuration(
                "max_animated_disks must be at least 1",
            ));
        }
        self.check_disk_count(i64::from(self.disk_count))?;
        self.geometry.validate()
    }

    /// Load and validate a configuration from TOML. Missing keys take
    /// their defaults.
    ///
    /// ```
    /// use hanoi_engine::core::PuzzleConfig;
    ///
    /// let config = PuzzleConfig::from_toml_str("disk_count = 4\nstep_delay = 50").unwrap();
    /// assert_eq!(config.disk_count, 4);
    /// assert_eq!(config.step_delay.configured_millis(), Some(50));
    /// ```
    pub fn from_toml_str(source: &str) -> HanoiResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| HanoiError::invalid_configuration(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.disk_count, 8);
        assert_eq!(config.step_delay.effective(), Duration::from_millis(300));
        assert_eq!(config.geometry.base_width_max, 300.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PuzzleConfig::default()
            .with_disk_count(3)
            .with_step_delay(Duration::from_millis(10))
            .with_color_seed(7)
            .with_max_animated_disks(5);

        assert_eq!(config.disk_count, 3);
        assert_eq!(config.step_delay.effective(), Duration::from_millis(10));
        assert_eq!(config.color_seed, 7);
        assert_eq!(config.max_animated_disks, 5);
    }

    #[test]
    fn test_delay_fallback() {
        assert_eq!(ReplayDelay::unset().effective(), ReplayDelay::FALLBACK);
        assert_eq!(ReplayDelay::from_millis(0).effective(), ReplayDelay::FALLBACK);
        assert_eq!(ReplayDelay::from_millis(-5).effective(), ReplayDelay::FALLBACK);
        assert_eq!(
            ReplayDelay::from_millis(250).effective(),
            Duration::from_millis(250)
        );
        assert_eq!(ReplayDelay::from(None::<Duration>).effective(), ReplayDelay::FALLBACK);
    }

    #[test]
    fn test_validate_disk_count() {
        assert_eq!(validate_disk_count(3).unwrap(), 3);
        assert!(validate_disk_count(0).is_err());
        assert!(validate_disk_count(-2).is_err());
        assert!(validate_disk_count(i64::MAX).is_err());
    }

    #[test]
    fn test_parse_disk_count() {
        assert_eq!(parse_disk_count("8").unwrap(), 8);
        assert_eq!(parse_disk_count("\t12\n").unwrap(), 12);

        for bad in ["", "abc", "3.5", "-1", "0", "4 disks"] {
            let err = parse_disk_count(bad).unwrap_err();
            assert!(matches!(err, HanoiError::InvalidConfiguration { .. }), "{bad}");
        }
    }

    #[test]
    fn test_validate_rejects_zero_disks() {
        let config = PuzzleConfig::default().with_disk_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disk_count_limit() {
        let config = PuzzleConfig::default().with_max_disks(10);
        assert_eq!(config.check_disk_count(10).unwrap(), 10);
        assert!(config.check_disk_count(11).is_err());
        assert!(config.check_disk_count(3_000_000_000).is_err());

        assert!(config.clone().with_disk_count(11).validate().is_err());
        assert!(config.with_max_disks(0).validate().is_err());
        assert_eq!(PuzzleConfig::default().max_disks, DEFAULT_MAX_DISKS);
    }

    #[test]
    fn test_geometry_validation() {
        let geometry = BoardGeometry {
            top_rate: 0.0,
            ..BoardGeometry::default()
        };
        assert!(geometry.validate().is_err());

        let geometry = BoardGeometry {
            column_height: f64::NAN,
            ..BoardGeometry::default()
        };
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = PuzzleConfig::from_toml_str(
            r#"
            disk_count = 5
            step_delay = -1
            color_seed = 3

            [geometry]
            column_height = 150.0
            "#,
        )
        .unwrap();

        assert_eq!(config.disk_count, 5);
        assert_eq!(config.step_delay.effective(), ReplayDelay::FALLBACK);
        assert_eq!(config.geometry.column_height, 150.0);
        assert_eq!(config.geometry.base_rate, 30.0);
        assert_eq!(config.max_animated_disks, DEFAULT_MAX_ANIMATED_DISKS);
    }

    #[test]
    fn test_from_toml_rejects_bad_input() {
        assert!(PuzzleConfig::from_toml_str("disk_count = 0").is_err());
        assert!(PuzzleConfig::from_toml_str("disk_count = \"many\"").is_err());
        assert!(PuzzleConfig::from_toml_str("disk_count = -3").is_err());
    }

    #[test]
    fn test_serialization() {
        let config = PuzzleConfig::default().with_step_delay(ReplayDelay::unset());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

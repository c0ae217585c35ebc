//! Engine configuration.
//!
//! The engine itself is pure; the only tunable is the quorum fraction used
//! by the vote outcome tally. Configuration can be built directly or loaded
//! from environment variables, with invalid values falling back to defaults.

use tracing::warn;

/// Default fraction of voting reviewers that must have cast a vote for a
/// tally to be considered decisive.
pub const DEFAULT_QUORUM_FRACTION: f64 = 0.5;

// ============================================================================
// Engine Configuration
// ============================================================================

/// Configuration for the governance engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Quorum fraction in `(0, 1]`: the share of voting reviewers that must
    /// have cast a vote before `quorum_met` is reported.
    pub quorum_fraction: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quorum_fraction: DEFAULT_QUORUM_FRACTION,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given quorum fraction.
    ///
    /// Out-of-range fractions are replaced by [`DEFAULT_QUORUM_FRACTION`]
    /// with a warning, so a miswired caller degrades rather than panics.
    #[must_use]
    pub fn new(quorum_fraction: f64) -> Self {
        if !is_valid_fraction(quorum_fraction) {
            warn!(
                quorum_fraction,
                default = DEFAULT_QUORUM_FRACTION,
                "quorum fraction out of range, using default"
            );
            return Self::default();
        }
        Self { quorum_fraction }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GOVBOARD_QUORUM_FRACTION` (default: 0.5) — must parse as a float
    ///   in `(0, 1]`; anything else keeps the default.
    #[must_use]
    pub fn from_env() -> Self {
        let default = Self::default();

        let quorum_fraction = match std::env::var("GOVBOARD_QUORUM_FRACTION") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(value) if is_valid_fraction(value) => value,
                Ok(value) => {
                    warn!(
                        value,
                        default = default.quorum_fraction,
                        "GOVBOARD_QUORUM_FRACTION out of range, using default"
                    );
                    default.quorum_fraction
                }
                Err(_) => {
                    warn!(
                        raw = %raw,
                        default = default.quorum_fraction,
                        "GOVBOARD_QUORUM_FRACTION is not a number, using default"
                    );
                    default.quorum_fraction
                }
            },
            Err(_) => default.quorum_fraction,
        };

        Self { quorum_fraction }
    }
}

/// Returns true if `fraction` is a usable quorum fraction.
fn is_valid_fraction(fraction: f64) -> bool {
    fraction.is_finite() && fraction > 0.0 && fraction <= 1.0
}

// ============================================================================
// Tests
// ============================================================================

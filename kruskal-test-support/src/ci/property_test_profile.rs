//! Property-test run profile parsing for CI and local overrides.
//!
//! Lets every property suite read one environment variable for its case count
//! so CI can raise coverage without touching test code.

use std::env;

/// Environment variable controlling proptest case counts.
pub const STEPPER_PBT_CASES_ENV_KEY: &str = "STEPPER_PBT_CASES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to `default_cases`
    /// when the override is absent or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self::from_override(env::var(STEPPER_PBT_CASES_ENV_KEY).ok().as_deref(), default_cases)
    }

    /// Builds a profile from an optional raw override value.
    #[must_use]
    pub fn from_override(raw: Option<&str>, default_cases: u32) -> Self {
        let cases = match raw.map(parse_cases) {
            Some(Ok(cases)) => cases,
            Some(Err(reason)) => {
                tracing::warn!(
                    env = STEPPER_PBT_CASES_ENV_KEY,
                    raw = raw.unwrap_or_default(),
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }
            None => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

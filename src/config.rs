//! Configuration passed explicitly into the validator and submitter.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::services::date_policy::DatePolicy;

/// Placeholder left in the page until a real Apps Script URL is deployed.
pub const UNCONFIGURED_ENDPOINT: &str = "YOUR_APPS_SCRIPT_WEB_APP_URL_HERE";

const DEFAULT_DEMO_DELAY_MS: u64 = 1500;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where reservations are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// No endpoint deployed; submissions are simulated.
    Unconfigured,
    Endpoint(String),
}

impl Destination {
    /// Map a raw URL setting to a destination. Empty values and the
    /// deployment placeholder both mean "unconfigured".
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() || trimmed == UNCONFIGURED_ENDPOINT {
            Self::Unconfigured
        } else {
            Self::Endpoint(trimmed.to_string())
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Endpoint(_))
    }
}

/// How much of the endpoint's response is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Only transport errors fail; the response status is ignored.
    FireAndForget,
    /// Non-2xx responses fail too.
    #[default]
    Checked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub date_policy: DatePolicy,
    /// Re-check the date window and weekend rule at submit time.
    pub enforce_date_policy: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            date_policy: DatePolicy::default(),
            enforce_date_policy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    pub destination: Destination,
    pub transport_mode: TransportMode,
    pub demo_delay: Duration,
    pub timeout: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            destination: Destination::Unconfigured,
            transport_mode: TransportMode::default(),
            demo_delay: Duration::from_millis(DEFAULT_DEMO_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationConfig {
    pub validator: ValidatorConfig,
    pub submitter: SubmitterConfig,
}

impl ReservationConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `CAFE_RESERVATION_ENDPOINT` | Endpoint URL (unset = demo mode) |
    /// | `CAFE_RESERVATION_MIN_DAYS` | Earliest bookable day, from today |
    /// | `CAFE_RESERVATION_MAX_DAYS` | Latest bookable day, from today |
    /// | `CAFE_RESERVATION_DEMO_DELAY_MS` | Simulated latency in demo mode |
    /// | `CAFE_RESERVATION_TIMEOUT_SECS` | HTTP request timeout |
    /// | `CAFE_RESERVATION_FIRE_AND_FORGET` | Ignore response status (legacy) |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let requested = DatePolicy {
            min_days_from_today: parse_var(&lookup, "CAFE_RESERVATION_MIN_DAYS")
                .unwrap_or(defaults.validator.date_policy.min_days_from_today),
            max_days_from_today: parse_var(&lookup, "CAFE_RESERVATION_MAX_DAYS")
                .unwrap_or(defaults.validator.date_policy.max_days_from_today),
        };
        // Past dates and empty windows are never bookable
        let date_policy = if requested.min_days_from_today < 0
            || requested.min_days_from_today > requested.max_days_from_today
        {
            warn!(
                min_days = requested.min_days_from_today,
                max_days = requested.max_days_from_today,
                "invalid reservation day window, using defaults"
            );
            defaults.validator.date_policy
        } else {
            requested
        };

        let transport_mode = match lookup("CAFE_RESERVATION_FIRE_AND_FORGET") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => TransportMode::FireAndForget,
            _ => TransportMode::Checked,
        };

        Self {
            validator: ValidatorConfig {
                date_policy,
                ..defaults.validator
            },
            submitter: SubmitterConfig {
                destination: lookup("CAFE_RESERVATION_ENDPOINT")
                    .map_or(Destination::Unconfigured, Destination::from_url),
                transport_mode,
                demo_delay: parse_var(&lookup, "CAFE_RESERVATION_DEMO_DELAY_MS")
                    .map_or(defaults.submitter.demo_delay, Duration::from_millis),
                timeout: parse_var(&lookup, "CAFE_RESERVATION_TIMEOUT_SECS")
                    .map_or(defaults.submitter.timeout, Duration::from_secs),
            },
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.submitter.destination = Destination::from_url(url);
        self
    }

    pub fn with_transport_mode(mut self, mode: TransportMode) -> Self {
        self.submitter.transport_mode = mode;
        self
    }

    pub fn with_demo_delay(mut self, delay: Duration) -> Self {
        self.submitter.demo_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.submitter.timeout = timeout;
        self
    }

    pub fn with_date_policy(mut self, policy: DatePolicy) -> Self {
        self.validator.date_policy = policy;
        self
    }

    /// Keep the weekend/window rule as a date-selection check only.
    pub fn with_enforce_date_policy(mut self, enforce: bool) -> Self {
        self.validator.enforce_date_policy = enforce;
        self
    }
}

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use rhub_domain::config::CampaignConfig;
use serde::Serialize;
use std::fmt;

/// Remaining time split for display, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} days {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug)]
pub struct Countdown;

impl Countdown {
    /// Splits `deadline - now` into whole days, hours, minutes and seconds.
    #[must_use]
    pub fn between<A, B>(now: DateTime<A>, deadline: DateTime<B>) -> CountdownParts
    where
        A: chrono::TimeZone,
        B: chrono::TimeZone,
    {
        let left = deadline.signed_duration_since(now).max(TimeDelta::zero());
        let total = left.num_seconds();

        CountdownParts {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }
}

/// Campaign window and reward split taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Campaign {
    pub deadline: DateTime<FixedOffset>,
    pub instant_rate: f64,
}

impl Campaign {
    #[must_use]
    pub const fn new(deadline: DateTime<FixedOffset>, instant_rate: f64) -> Self {
        Self { deadline, instant_rate }
    }

    /// New partner enrolment is accepted strictly before the deadline.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.deadline
    }

    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> CountdownParts {
        Countdown::between(now, self.deadline)
    }

    #[must_use]
    pub fn remaining_now(&self) -> CountdownParts {
        self.remaining(Utc::now())
    }
}

impl From<&CampaignConfig> for Campaign {
    fn from(config: &CampaignConfig) -> Self {
        Self::new(config.deadline, config.instant_rate)
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self::from(&CampaignConfig::default())
    }
}

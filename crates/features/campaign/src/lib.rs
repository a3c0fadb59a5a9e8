//! # Campaign
//!
//! Pure campaign arithmetic shared by the shell and the landing page:
//!
//! * [`distribution`]: maps a price and an instant-reward ratio to the fixed
//!   reward breakdown (cost, reward fund, company margin, partner fee).
//! * [`format`]: Korean won display strings.
//! * [`countdown`]: time left until the enrolment deadline.

pub mod countdown;
pub mod distribution;
pub mod format;

pub use countdown::{Campaign, Countdown, CountdownParts};
pub use distribution::{DEFAULT_INSTANT_RATE, DistributionResult, compute_distribution, parse_amount};
pub use format::format_krw;

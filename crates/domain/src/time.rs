//! Time and timestamp helpers.
//!
//! The gateway reports instants as Unix epoch seconds. They are kept as
//! [`Timestamp`] values in the domain and rendered as RFC 3339 strings only
//! when projected for callers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for creation and last-seen instants.
pub type Timestamp = DateTime<Utc>;

/// Convert gateway epoch seconds to a [`Timestamp`].
///
/// Returns `None` for `0` (the gateway's "never") and for values chrono
/// cannot represent.
#[must_use]
pub fn from_epoch_secs(secs: i64) -> Option<Timestamp> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Render a timestamp as an RFC 3339 string with second precision.
#[must_use]
pub fn to_rfc3339(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

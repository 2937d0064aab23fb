//! Telemetry metric name constants.
//!
//! Centralised metric names for roadsign operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `roadsign_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status` — upload outcome: "ok" or "error"
//! - `outcome` — scan outcome: "recognized", "unrecognized" or "error"

/// Total digit-recognition uploads attempted.
///
/// Labels: `status` ("ok" | "error").
pub const UPLOADS_TOTAL: &str = "roadsign_uploads_total";

/// Upload round-trip duration in seconds, from request send to body decoded.
pub const UPLOAD_DURATION_SECONDS: &str = "roadsign_upload_duration_seconds";

/// Total road-sign scans.
///
/// Labels: `outcome` ("recognized" | "unrecognized" | "error").
pub const SCANS_TOTAL: &str = "roadsign_scans_total";

//! JSON rendering of the report for programmatic consumers.
//!
//! ```json
//! {
//!   "total_attempted": 2,
//!   "total_succeeded": 1,
//!   "batches": 1,
//!   "method": "batch",
//!   "started_at": "2025-05-06T08:00:00Z",
//!   "elapsed_seconds": 0.41,
//!   "outcomes": [
//!     { "url": "https://a.example.com/", "status_code": 200 },
//!     { "url": "https://b.example.com/", "failure": { "kind": "timeout", "message": "..." } }
//!   ]
//! }
//! ```

use crate::models::BatchReport;

/// Serialize a [`BatchReport`] as pretty-printed JSON.
pub fn report_to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

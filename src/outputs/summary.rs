//! Plain-text run summary.

use crate::models::BatchReport;

/// The summary line: `total data <N>, success <M>`.
pub fn summary_line(report: &BatchReport) -> String {
    format!(
        "total data {}, success {}",
        report.total_attempted, report.total_succeeded
    )
}

/// The elapsed-time line, e.g. `took 1.503s`.
pub fn elapsed_line(report: &BatchReport) -> String {
    format!("took {:.3}s", report.elapsed_seconds)
}

/// Both lines, newline separated.
pub fn render(report: &BatchReport) -> String {
    format!("{}\n{}", summary_line(report), elapsed_line(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchMethod;
    use crate::models::FetchOutcome;
    use chrono::Utc;

    fn report() -> BatchReport {
        BatchReport {
            total_attempted: 3,
            total_succeeded: 2,
            batches: 1,
            method: DispatchMethod::Batch,
            started_at: Utc::now(),
            elapsed_seconds: 1.5034,
            outcomes: vec![
                FetchOutcome::status("https://a.example.com/", 200),
                FetchOutcome::status("https://b.example.com/", 404),
                FetchOutcome::status("https://c.example.com/", 200),
            ],
        }
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(&report()), "total data 3, success 2");
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&report()), "total data 3, success 2\ntook 1.503s");
    }
}

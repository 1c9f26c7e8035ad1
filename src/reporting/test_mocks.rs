// テスト用の記録型レポーター

use super::traits::BenchmarkReporter;
use crate::benchmarks::{BenchmarkResult, ComparisonSummary};
use crate::core::DivisionError;
use std::sync::Mutex;

/// 記録された報告イベント
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    DivisionError(DivisionError),
    PassStarted(usize, usize),
    Result(String),
    Summary(usize),
}

/// 呼び出し順をそのまま記録するレポーター
pub struct RecordingReporter {
    pub events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl BenchmarkReporter for RecordingReporter {
    fn report_division_error(&self, error: &DivisionError) {
        self.record(ReportEvent::DivisionError(*error));
    }

    fn report_pass_started(&self, pass: usize, total_passes: usize) {
        self.record(ReportEvent::PassStarted(pass, total_passes));
    }

    fn report_result(&self, result: &BenchmarkResult) {
        self.record(ReportEvent::Result(result.method.clone()));
    }

    fn report_summary(&self, summary: &ComparisonSummary) {
        self.record(ReportEvent::Summary(summary.pass));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_recording_reporter() {
        let reporter = RecordingReporter::new();
        let reporter_ref: &dyn BenchmarkReporter = &reporter;

        reporter_ref.report_division_error(&DivisionError::CheckedDivideByZero);
        reporter_ref.report_pass_started(1, 2);
        reporter_ref.report_result(&BenchmarkResult::new("seh_div", 1, 2, Duration::ZERO));

        let events = reporter.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ReportEvent::DivisionError(DivisionError::CheckedDivideByZero),
                ReportEvent::PassStarted(1, 2),
                ReportEvent::Result("seh_div".to_string()),
            ]
        );
    }
}

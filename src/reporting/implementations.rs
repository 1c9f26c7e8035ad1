// 報告トレイトの具象実装

use super::BenchmarkReporter;
use crate::benchmarks::{BenchmarkResult, ComparisonSummary};
use crate::core::DivisionError;

/// 計測結果の2行を整形
pub fn format_result(result: &BenchmarkResult) -> String {
    format!(
        "Method: {}\nBenchmark time (s): {}",
        result.method,
        result.elapsed_secs()
    )
}

/// サマリーを整形
pub fn format_summary(summary: &ComparisonSummary) -> String {
    let mut lines = vec![
        format!("📊 計測サマリー (パス {})", summary.pass),
        "=".repeat(40),
    ];
    lines.extend(summary.entries.iter().map(|entry| {
        let row = format!(
            "   {:<12} {:>10.6} s {:>8.2} ns/call",
            entry.method, entry.elapsed_secs, entry.nanos_per_call
        );
        match entry.overhead_ratio {
            Some(ratio) => format!("{row}  (x{ratio:.3})"),
            None => row,
        }
    }));
    if let Some(fastest) = &summary.fastest {
        lines.push(format!("🏆 Fastest: {fastest}"));
    }
    lines.join("\n")
}

/// 標準出力への報告実装
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// パス区切りも出力する
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl BenchmarkReporter for ConsoleReporter {
    fn report_division_error(&self, error: &DivisionError) {
        println!("{error}");
    }

    fn report_pass_started(&self, pass: usize, total_passes: usize) {
        if self.verbose {
            println!("🔬 Pass {pass}/{total_passes}");
        }
    }

    fn report_result(&self, result: &BenchmarkResult) {
        println!("{}", format_result(result));
    }

    fn report_summary(&self, summary: &ComparisonSummary) {
        println!("{}", format_summary(summary));
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpReporter {
    fn report_division_error(&self, _error: &DivisionError) {
        // 何もしない
    }

    fn report_pass_started(&self, _pass: usize, _total_passes: usize) {
        // 何もしない
    }

    fn report_result(&self, _result: &BenchmarkResult) {
        // 何もしない
    }

    fn report_summary(&self, _summary: &ComparisonSummary) {
        // 何もしない
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::SummaryEntry;
    use std::time::Duration;

    fn sample_result(micros: u64) -> BenchmarkResult {
        BenchmarkResult::new("checked_div", 1000, 2, Duration::from_micros(micros))
    }

    #[test]
    fn test_format_result() {
        let text = format_result(&sample_result(1_500_000));
        assert_eq!(text, "Method: checked_div\nBenchmark time (s): 1.5");
    }

    #[test]
    fn test_format_result_microsecond_precision() {
        let text = format_result(&sample_result(2_000_123));
        assert!(text.ends_with("Benchmark time (s): 2.000123"));
    }

    #[test]
    fn test_format_summary() {
        let summary = ComparisonSummary {
            pass: 2,
            entries: vec![
                SummaryEntry {
                    method: "unsafe_div".to_string(),
                    elapsed_secs: 1.0,
                    nanos_per_call: 1.0,
                    overhead_ratio: Some(1.0),
                },
                SummaryEntry {
                    method: "seh_div".to_string(),
                    elapsed_secs: 1.25,
                    nanos_per_call: 1.25,
                    overhead_ratio: Some(1.25),
                },
            ],
            fastest: Some("unsafe_div".to_string()),
        };

        let text = format_summary(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("パス 2"));
        assert!(lines[3].contains("seh_div"));
        assert!(lines[3].contains("1.25 ns/call"));
        assert!(lines[3].ends_with("(x1.250)"));
        assert_eq!(lines[4], "🏆 Fastest: unsafe_div");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_format_summary_without_baseline() {
        let summary = ComparisonSummary {
            pass: 1,
            entries: vec![SummaryEntry {
                method: "checked_div".to_string(),
                elapsed_secs: 0.5,
                nanos_per_call: 500.0,
                overhead_ratio: None,
            }],
            fastest: None,
        };

        let text = format_summary(&summary);
        let row = text.lines().nth(2).unwrap();
        assert!(row.ends_with("500.00 ns/call"));
        assert!(!text.contains("Fastest"));
    }

    #[test]
    fn test_reporters_as_trait_objects() {
        let reporters: Vec<Box<dyn BenchmarkReporter>> =
            vec![Box::new(NoOpReporter::new()), Box::new(ConsoleReporter::new())];

        for reporter in &reporters {
            reporter.report_pass_started(1, 2);
            reporter.report_result(&sample_result(10));
        }
    }
}

// 計測結果報告のトレイト定義

use crate::benchmarks::{BenchmarkResult, ComparisonSummary};
use crate::core::DivisionError;
use mockall::automock;

/// 計測結果の報告を抽象化するトレイト
#[automock]
pub trait BenchmarkReporter {
    /// ゼロ除算デモで発生したエラーの報告
    fn report_division_error(&self, error: &DivisionError);

    /// パス開始時の報告
    fn report_pass_started(&self, pass: usize, total_passes: usize);

    /// 1方式の計測結果の報告
    fn report_result(&self, result: &BenchmarkResult);

    /// 全パス完了後のサマリー報告
    fn report_summary(&self, summary: &ComparisonSummary);
}

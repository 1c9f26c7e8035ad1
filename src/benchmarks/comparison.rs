//! 除算方式のパフォーマンス比較
//!
//! 全方式を複数パス計測し、最終パスの結果からサマリーとレポートを生成

use super::harness::{run_benchmark, BenchmarkResult};
use crate::config::BenchmarkConfig;
use crate::core::{BenchError, BenchResult};
use crate::division::DivisionMethod;
use crate::reporting::BenchmarkReporter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1パス分の計測結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassResults {
    pub pass: usize,
    pub results: Vec<BenchmarkResult>,
}

/// サマリーの1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub method: String,
    pub elapsed_secs: f64,
    pub nanos_per_call: f64,
    /// `unsafe_div` を1.0としたときの比率。ベースライン未計測時は `None`
    pub overhead_ratio: Option<f64>,
}

/// 最終パスのサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub pass: usize,
    pub entries: Vec<SummaryEntry>,
    pub fastest: Option<String>,
}

impl ComparisonSummary {
    /// 1パスの結果からサマリーを作成
    pub fn from_pass(pass: &PassResults) -> Self {
        let baseline = pass
            .results
            .iter()
            .find(|r| r.method == DivisionMethod::UnsafeDiv.name())
            .map(BenchmarkResult::elapsed_secs)
            .filter(|secs| *secs > 0.0);

        let entries = pass
            .results
            .iter()
            .map(|result| {
                let elapsed_secs = result.elapsed_secs();
                SummaryEntry {
                    method: result.method.clone(),
                    elapsed_secs,
                    nanos_per_call: result.nanos_per_call(),
                    overhead_ratio: baseline.map(|base| elapsed_secs / base),
                }
            })
            .collect();

        let fastest = pass
            .results
            .iter()
            .min_by_key(|r| r.elapsed)
            .map(|r| r.method.clone());

        Self {
            pass: pass.pass,
            entries,
            fastest,
        }
    }
}

/// JSONレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: String,
    pub trap_supported: bool,
    pub config: BenchmarkConfig,
    pub passes: Vec<PassResults>,
    pub summary: Option<ComparisonSummary>,
}

/// 除算方式の比較スイート
pub struct DivisionComparison {
    passes: Vec<PassResults>,
}

impl DivisionComparison {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// 設定どおりに全パスを計測
    ///
    /// 1パス目はキャッシュや分岐予測が温まっていないため参考値扱い。
    pub fn run<R>(&mut self, config: &BenchmarkConfig, reporter: &R) -> BenchResult<()>
    where
        R: BenchmarkReporter + ?Sized,
    {
        config.validate()?;

        for pass in 1..=config.passes() {
            reporter.report_pass_started(pass, config.passes());

            let mut results = Vec::with_capacity(config.methods().len());
            for &method in config.methods() {
                let result =
                    run_benchmark(method, config.iterations(), config.denominator(), reporter)?;
                results.push(result);
            }

            self.passes.push(PassResults { pass, results });
        }

        Ok(())
    }

    /// 計測済みの全パス
    pub fn passes(&self) -> &[PassResults] {
        &self.passes
    }

    /// 最終パスのサマリー
    pub fn summary(&self) -> Option<ComparisonSummary> {
        self.passes.last().map(ComparisonSummary::from_pass)
    }

    /// レポートを作成
    pub fn to_report(&self, config: &BenchmarkConfig) -> BenchmarkReport {
        BenchmarkReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            trap_supported: crate::division::trap_supported(),
            config: config.clone(),
            passes: self.passes.clone(),
            summary: self.summary(),
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, config: &BenchmarkConfig, path: &Path) -> BenchResult<()> {
        let report = self.to_report(config);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).map_err(|e| BenchError::report(path, e))?;
        Ok(())
    }
}

impl Default for DivisionComparison {
    fn default() -> Self {
        Self::new()
    }
}

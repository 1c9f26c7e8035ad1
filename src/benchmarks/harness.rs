//! 軽量な計測ハーネス
//!
//! 除算関数を `(i, denominator)` で `iterations` 回呼び出し、経過時間を測る。
//! 統計処理は行わない。

use crate::core::{BenchError, BenchResult};
use crate::division::{checked_div, seh_div, unsafe_div, DivisionMethod};
use crate::reporting::BenchmarkReporter;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// 1方式・1回分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub method: String,
    pub iterations: u32,
    pub denominator: i32,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    pub fn new(
        method: impl Into<String>,
        iterations: u32,
        denominator: i32,
        elapsed: Duration,
    ) -> Self {
        Self {
            method: method.into(),
            iterations,
            denominator,
            elapsed,
        }
    }

    /// マイクロ秒単位に丸めた経過秒数
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_micros() as f64 / 1.0e6
    }

    /// 1呼び出しあたりの平均ナノ秒
    pub fn nanos_per_call(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

/// 除算関数を計測する
///
/// 分子は `0..iterations`、分母は常に `denominator`。
/// `iterations` は `i32::MAX` で頭打ちになる。
pub fn benchmark<F, R>(
    mut div_func: F,
    method: &str,
    iterations: u32,
    denominator: i32,
) -> BenchmarkResult
where
    F: FnMut(i32, i32) -> R,
{
    let end = i32::try_from(iterations).unwrap_or(i32::MAX);

    let start = Instant::now();
    for i in 0..end {
        black_box(div_func(black_box(i), black_box(denominator)));
    }
    let elapsed = start.elapsed();

    BenchmarkResult::new(method, end as u32, denominator, elapsed)
}

/// 指定した方式を計測する
///
/// 分母0は `unsafe_div` を未定義動作にするため拒否する。
pub fn run_method(
    method: DivisionMethod,
    iterations: u32,
    denominator: i32,
) -> BenchResult<BenchmarkResult> {
    if denominator == 0 {
        return Err(BenchError::validation(
            "denominator",
            "計測時の分母に0は指定できません",
        ));
    }

    let result = match method {
        DivisionMethod::UnsafeDiv => benchmark(
            // SAFETY: 分母は上で非ゼロを確認済み
            |n, d| unsafe { unsafe_div(n, d) },
            method.name(),
            iterations,
            denominator,
        ),
        DivisionMethod::CheckedDiv => benchmark(checked_div, method.name(), iterations, denominator),
        DivisionMethod::SehDiv => benchmark(seh_div, method.name(), iterations, denominator),
    };
    Ok(result)
}

/// 計測して結果を報告する
pub fn run_benchmark<R>(
    method: DivisionMethod,
    iterations: u32,
    denominator: i32,
    reporter: &R,
) -> BenchResult<BenchmarkResult>
where
    R: BenchmarkReporter + ?Sized,
{
    let result = run_method(method, iterations, denominator)?;
    reporter.report_result(&result);
    Ok(result)
}

//! パフォーマンス測定とベンチマークモジュール
//!
//! ゼロ除算ガード3方式の計測ハーネスと比較を提供

pub mod comparison;
pub mod harness;

pub use comparison::{
    BenchmarkReport, ComparisonSummary, DivisionComparison, PassResults, SummaryEntry,
};
pub use harness::{benchmark, run_benchmark, run_method, BenchmarkResult};

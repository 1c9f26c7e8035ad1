//! ゼロ除算ガード方式のマイクロベンチマーク
//!
//! 整数除算をゼロ除算から守る3つの方式のコストを比較する：
//! ガードなし（`unsafe_div`）、明示的チェック（`checked_div`）、
//! ハードウェア例外の捕捉（`seh_div`）。

pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod core;
pub mod division;
pub mod reporting;

pub use benchmarks::{benchmark, BenchmarkResult, DivisionComparison};
pub use config::BenchmarkConfig;
pub use crate::core::{BenchError, DivisionError};
pub use division::{checked_div, seh_div, unsafe_div, DivisionMethod};

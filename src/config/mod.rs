// ベンチマーク設定
// デフォルト値は「各方式を10億回 × 2パス、分母は2」

use crate::core::{BenchError, BenchResult};
use crate::division::DivisionMethod;
use serde::{Deserialize, Serialize};

/// 1回の計測での呼び出し回数（デフォルト）
pub const DEFAULT_ITERATIONS: u32 = 1_000_000_000;

/// 計測時に使う分母（デフォルト）
pub const DEFAULT_DENOMINATOR: i32 = 2;

/// パス数（デフォルト）。1パス目はコールドスタートの影響で不安定
pub const DEFAULT_PASSES: usize = 2;

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    iterations: u32,
    denominator: i32,
    passes: usize,
    methods: Vec<DivisionMethod>,
    run_demo: bool,
    pause_on_exit: bool,
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_denominator(mut self, denominator: i32) -> Self {
        self.denominator = denominator;
        self
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_methods(mut self, methods: Vec<DivisionMethod>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_demo(mut self, enable: bool) -> Self {
        self.run_demo = enable;
        self
    }

    pub fn with_pause_on_exit(mut self, enable: bool) -> Self {
        self.pause_on_exit = enable;
        self
    }

    /// 1回の計測での呼び出し回数
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// 計測時の分母
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// パス数
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// 計測する方式（実行順）
    pub fn methods(&self) -> &[DivisionMethod] {
        &self.methods
    }

    /// ゼロ除算のデモを実行するかどうか
    pub fn run_demo(&self) -> bool {
        self.run_demo
    }

    /// 終了前にユーザー入力を待つかどうか
    pub fn pause_on_exit(&self) -> bool {
        self.pause_on_exit
    }

    /// 設定値の検証
    ///
    /// 計測中の除算は例外を発生させてはならない。
    /// 分子は `0..iterations` なので `i32::MIN / -1` にはならない。
    pub fn validate(&self) -> BenchResult<()> {
        if self.iterations == 0 {
            return Err(BenchError::validation("iterations", "1以上である必要があります"));
        }
        if self.iterations > i32::MAX as u32 {
            return Err(BenchError::validation(
                "iterations",
                format!("{} 以下である必要があります", i32::MAX),
            ));
        }
        if self.denominator == 0 {
            return Err(BenchError::validation("denominator", "0は指定できません"));
        }
        if self.passes == 0 {
            return Err(BenchError::validation("passes", "1以上である必要があります"));
        }
        if self.methods.is_empty() {
            return Err(BenchError::validation("methods", "1つ以上指定してください"));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            denominator: DEFAULT_DENOMINATOR,
            passes: DEFAULT_PASSES,
            methods: DivisionMethod::ALL.to_vec(),
            run_demo: true,
            pause_on_exit: true,
        }
    }
}

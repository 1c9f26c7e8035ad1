use crate::config::{BenchmarkConfig, DEFAULT_DENOMINATOR, DEFAULT_ITERATIONS, DEFAULT_PASSES};
use crate::division::DivisionMethod;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zero_div_bench")]
#[command(about = "Measure the cost of guarding integer division against a zero denominator")]
#[command(version)]
pub struct Cli {
    /// Number of division calls per measurement
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Denominator used during measurement (must be nonzero)
    #[arg(short, long, default_value_t = DEFAULT_DENOMINATOR, allow_hyphen_values = true)]
    pub denominator: i32,

    /// Number of passes over all methods (the first pass is a cold run)
    #[arg(short, long, default_value_t = DEFAULT_PASSES)]
    pub passes: usize,

    /// Methods to measure, in order
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub methods: Vec<DivisionMethod>,

    /// Skip the divide-by-zero demonstration
    #[arg(long)]
    pub skip_demo: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Print a comparison summary after the last pass
    #[arg(short, long)]
    pub summary: bool,

    /// Print a header line before each pass
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a JSON report to this path
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

impl Cli {
    /// 引数からベンチマーク設定を作成
    pub fn to_config(&self) -> BenchmarkConfig {
        let methods = if self.methods.is_empty() {
            DivisionMethod::ALL.to_vec()
        } else {
            self.methods.clone()
        };

        BenchmarkConfig::new()
            .with_iterations(self.iterations)
            .with_denominator(self.denominator)
            .with_passes(self.passes)
            .with_methods(methods)
            .with_demo(!self.skip_demo)
            .with_pause_on_exit(!self.no_pause)
    }
}

use clap::Parser;
use zero_div_bench::cli::{execute_run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = execute_run(&cli) {
        eprintln!("❌ エラー: {error}");
        std::process::exit(1);
    }
}

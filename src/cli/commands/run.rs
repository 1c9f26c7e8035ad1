use crate::benchmarks::DivisionComparison;
use crate::cli::Cli;
use crate::core::{BenchError, DivisionError};
use crate::division::{checked_div, seh_div};
use crate::reporting::{BenchmarkReporter, ConsoleReporter};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// 分母0で `checked_div` と `seh_div` を1回ずつ呼び、発生したエラーを報告する
pub fn run_zero_division_demo<R>(reporter: &R) -> Vec<DivisionError>
where
    R: BenchmarkReporter + ?Sized,
{
    let attempts: [fn(i32, i32) -> Result<i32, DivisionError>; 2] = [checked_div, seh_div];
    let mut errors = Vec::with_capacity(attempts.len());

    for divide in attempts {
        match divide(42, 0) {
            Ok(quotient) => println!("{quotient}"),
            Err(error) => {
                reporter.report_division_error(&error);
                errors.push(error);
            }
        }
    }

    errors
}

/// Enterが押されるまで待つ
pub fn wait_for_acknowledgement<I, O>(input: &mut I, output: &mut O) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    write!(output, "Press Enter to continue . . . ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // 入力が閉じていると改行がエコーされないので補う
        writeln!(output)?;
    }
    Ok(())
}

/// ベンチマークを実行する
pub fn execute_run(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate()?;

    let reporter = if cli.verbose {
        ConsoleReporter::verbose()
    } else {
        ConsoleReporter::new()
    };

    if config.run_demo() {
        run_zero_division_demo(&reporter);
    }

    // 1パス目はコールドスタートの影響を受けるため、2パス目以降を有効な値とする
    let mut comparison = DivisionComparison::new();
    comparison.run(&config, &reporter)?;

    if cli.summary {
        if let Some(summary) = comparison.summary() {
            reporter.report_summary(&summary);
        }
    }

    if let Some(path) = &cli.json {
        comparison.export_json_report(&config, path)?;
        println!("📄 詳細レポートを出力しました: {}", path.display());
    }

    if config.pause_on_exit() {
        let stdin = io::stdin();
        wait_for_acknowledgement(&mut stdin.lock(), &mut io::stdout()).map_err(BenchError::io)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::MockBenchmarkReporter;
    use clap::Parser;
    use mockall::predicate::eq;

    #[test]
    fn test_zero_division_demo_reports_both_errors() {
        let mut reporter = MockBenchmarkReporter::new();
        reporter
            .expect_report_division_error()
            .with(eq(DivisionError::CheckedDivideByZero))
            .times(1)
            .return_const(());
        reporter
            .expect_report_division_error()
            .with(eq(DivisionError::TrappedDivideByZero))
            .times(1)
            .return_const(());

        let errors = run_zero_division_demo(&reporter);
        assert_eq!(
            errors,
            vec![
                DivisionError::CheckedDivideByZero,
                DivisionError::TrappedDivideByZero
            ]
        );
    }

    #[test]
    fn test_demo_messages() {
        let messages: Vec<String> = run_zero_division_demo(&crate::reporting::NoOpReporter::new())
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            messages,
            vec!["Divide by zero. -checked_div", "Divide by zero. -seh_div"]
        );
    }

    #[test]
    fn test_wait_for_acknowledgement() {
        let mut input = io::Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        wait_for_acknowledgement(&mut input, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Press Enter to continue . . . "
        );
    }

    #[test]
    fn test_wait_for_acknowledgement_on_closed_input() {
        let mut input = io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert!(wait_for_acknowledgement(&mut input, &mut output).is_ok());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Press Enter to continue . . . \n"
        );
    }

    #[test]
    fn test_execute_run_with_small_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let report_path = temp_dir.path().join("report.json");
        let report_arg = report_path.to_str().unwrap();

        let cli = Cli::try_parse_from([
            "zero_div_bench",
            "-n",
            "1000",
            "--no-pause",
            "--skip-demo",
            "--json",
            report_arg,
        ])
        .unwrap();

        execute_run(&cli).unwrap();
        assert!(report_path.exists());
    }

    #[test]
    fn test_execute_run_rejects_zero_denominator() {
        let cli = Cli::try_parse_from(["zero_div_bench", "-d", "0", "--no-pause"]).unwrap();
        let error = execute_run(&cli).unwrap_err();
        assert!(error.to_string().contains("denominator"));
    }
}

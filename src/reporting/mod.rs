// 計測結果の報告
//
// 標準出力に書く行の形式は固定：
//   Method: <name>
//   Benchmark time (s): <float>

pub mod implementations;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;

// コアレイヤー - エラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;

// 公開API
pub use error::{BenchError, BenchResult, DivisionError};

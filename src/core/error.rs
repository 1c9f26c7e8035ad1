// ゼロ除算ベンチマーク用のエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// 除算で発生するエラー
///
/// どちらも「分母がゼロ」という同じ論理的状態を表すが、検出方法が異なる。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    /// 除算前の明示的なチェックで検出
    #[error("Divide by zero. -checked_div")]
    CheckedDivideByZero,

    /// ハードウェア例外（SIGFPE）の捕捉で検出
    #[error("Divide by zero. -seh_div")]
    TrappedDivideByZero,
}

/// ベンチマーク実行全体のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("レポート出力エラー: {} - {source}", path.display())]
    ReportError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("シリアライズエラー: {source}")]
    SerializationError {
        #[source]
        source: serde_json::Error,
    },

    #[error("入出力エラー: {source}")]
    IoError {
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReportError {
            path: path.into(),
            source,
        }
    }

    /// 入出力エラーの作成
    pub fn io(source: std::io::Error) -> Self {
        Self::IoError { source }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(error: serde_json::Error) -> Self {
        BenchError::SerializationError { source: error }
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

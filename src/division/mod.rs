//! ゼロ除算ガードの3方式
//!
//! - `unsafe_div`: ガードなし（ベースライン）
//! - `checked_div`: 除算前に分母をチェック
//! - `seh_div`: ハードウェア例外を捕捉してエラーに変換

pub mod checked;
pub mod trap;
pub mod unchecked;

pub use checked::checked_div;
pub use trap::{intercepted_faults, seh_div, trap_supported};
pub use unchecked::unsafe_div;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// ベンチマーク対象の除算方式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMethod {
    /// ガードなしの除算
    UnsafeDiv,
    /// 明示的チェック付きの除算
    CheckedDiv,
    /// ハードウェア例外捕捉による除算
    SehDiv,
}

impl DivisionMethod {
    /// 実行順序どおりの全方式
    pub const ALL: [DivisionMethod; 3] = [
        DivisionMethod::UnsafeDiv,
        DivisionMethod::CheckedDiv,
        DivisionMethod::SehDiv,
    ];

    /// 出力用のメソッド名
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnsafeDiv => "unsafe_div",
            Self::CheckedDiv => "checked_div",
            Self::SehDiv => "seh_div",
        }
    }
}

impl std::fmt::Display for DivisionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// 明示的チェック付きの除算

use crate::core::DivisionError;

/// 分母が0かどうかを確認してから除算する
///
/// チェック → 除算の一連の流れが計測対象のコスト。
#[inline(never)]
pub fn checked_div(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
    if denominator == 0 {
        return Err(DivisionError::CheckedDivideByZero);
    }
    Ok(numerator / denominator)
}

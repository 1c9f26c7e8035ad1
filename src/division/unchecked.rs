// ガードなしの除算

/// チェックなしの除算。関数呼び出し + 除算命令のコストを測るためのベースライン
///
/// # Safety
///
/// `denominator` は0であってはならない。0を渡した場合の動作は未定義。
#[inline(never)]
pub unsafe fn unsafe_div(numerator: i32, denominator: i32) -> i32 {
    // SAFETY: 呼び出し側が分母の非ゼロを保証する
    unsafe { std::hint::assert_unchecked(denominator != 0) };
    numerator / denominator
}

//! ハードウェア例外捕捉による除算
//!
//! Linux/x86_64 では `idiv` 命令をそのまま実行し、ゼロ除算で発生する
//! SIGFPE をシグナルハンドラで捕捉してエラーに変換する：
//!
//! - ハンドラはプロセス全体で一度だけ遅延インストールされる
//! - 捕捉の有効範囲はスレッドローカルな `ArmedScope` で限定する
//! - 範囲外のSIGFPE、および分母が0でない例外（`i32::MIN / -1` など）は
//!   変換せず、以前のハンドラ（またはデフォルト動作）に委ねる
//!
//! それ以外のターゲット、またはハンドラのインストールに失敗した場合は
//! 通常のゼロチェックで代替する。

use crate::core::DivisionError;

/// ハードウェア例外を捕捉して除算する
///
/// 分母が0の場合は `DivisionError::TrappedDivideByZero` を返す。
#[inline(never)]
pub fn seh_div(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    if sigfpe::handler_installed() {
        return sigfpe::guarded_div(numerator, denominator);
    }

    fallback_div(numerator, denominator)
}

/// ハードウェア例外による捕捉が有効かどうか
pub fn trap_supported() -> bool {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    {
        sigfpe::handler_installed()
    }
    #[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
    {
        false
    }
}

/// 現在のスレッドで捕捉したゼロ除算例外の累計
pub fn intercepted_faults() -> u64 {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    {
        sigfpe::intercepted_on_current_thread()
    }
    #[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
    {
        0
    }
}

// 捕捉できない環境向けの代替実装
fn fallback_div(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
    if denominator == 0 {
        return Err(DivisionError::TrappedDivideByZero);
    }
    Ok(numerator / denominator)
}

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
mod sigfpe {
    use crate::core::DivisionError;
    use std::arch::asm;
    use std::cell::Cell;
    use std::mem::MaybeUninit;
    use std::sync::OnceLock;

    // <asm/siginfo.h> の FPE_INTDIV
    const FPE_INTDIV: libc::c_int = 1;

    // `idiv ecx` (F7 F9) の命令長
    const IDIV_ECX_LEN: i64 = 2;

    thread_local! {
        static ARMED: Cell<bool> = const { Cell::new(false) };
        static FAULTED: Cell<bool> = const { Cell::new(false) };
        static INTERCEPTED: Cell<u64> = const { Cell::new(0) };
    }

    /// インストール前に設定されていたSIGFPEの動作。失敗時は `None`
    static PREVIOUS_ACTION: OnceLock<Option<libc::sigaction>> = OnceLock::new();

    pub(super) fn handler_installed() -> bool {
        PREVIOUS_ACTION.get_or_init(install).is_some()
    }

    pub(super) fn intercepted_on_current_thread() -> u64 {
        INTERCEPTED.with(Cell::get)
    }

    fn install() -> Option<libc::sigaction> {
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = on_sigfpe as usize;
            action.sa_flags = libc::SA_SIGINFO;
            libc::sigemptyset(&mut action.sa_mask);

            let mut previous = MaybeUninit::<libc::sigaction>::zeroed();
            if libc::sigaction(libc::SIGFPE, &action, previous.as_mut_ptr()) != 0 {
                return None;
            }
            Some(previous.assume_init())
        }
    }

    /// SIGFPEの捕捉を有効にするスコープ。ネスト可能
    struct ArmedScope {
        was_armed: bool,
    }

    impl ArmedScope {
        fn enter() -> Self {
            FAULTED.with(|f| f.set(false));
            let was_armed = ARMED.with(|a| a.replace(true));
            Self { was_armed }
        }

        fn faulted(&self) -> bool {
            FAULTED.with(Cell::get)
        }
    }

    impl Drop for ArmedScope {
        fn drop(&mut self) {
            ARMED.with(|a| a.set(self.was_armed));
        }
    }

    pub(super) fn guarded_div(numerator: i32, denominator: i32) -> Result<i32, DivisionError> {
        let scope = ArmedScope::enter();
        let quotient = raw_idiv(numerator, denominator);
        if scope.faulted() {
            return Err(DivisionError::TrappedDivideByZero);
        }
        Ok(quotient)
    }

    // ハンドラが命令長ぶん RIP を進めるため、レジスタと命令を固定する。
    // nomem を付けないことで ARMED/FAULTED へのアクセスと順序が入れ替わらない。
    #[inline(always)]
    fn raw_idiv(numerator: i32, denominator: i32) -> i32 {
        let quotient: i32;
        unsafe {
            asm!(
                "cdq",
                "idiv ecx",
                inout("eax") numerator => quotient,
                in("ecx") denominator,
                out("edx") _,
                options(nostack),
            );
        }
        quotient
    }

    extern "C" fn on_sigfpe(
        signal: libc::c_int,
        info: *mut libc::siginfo_t,
        context: *mut libc::c_void,
    ) {
        unsafe {
            let ucontext = &mut *(context as *mut libc::ucontext_t);
            let gregs = &mut ucontext.uc_mcontext.gregs;
            let divisor = gregs[libc::REG_RCX as usize] as u32;

            if ARMED.with(Cell::get) && (*info).si_code == FPE_INTDIV && divisor == 0 {
                FAULTED.with(|f| f.set(true));
                INTERCEPTED.with(|c| c.set(c.get() + 1));
                gregs[libc::REG_RIP as usize] += IDIV_ECX_LEN;
                return;
            }

            pass_through(signal, info, context);
        }
    }

    // 変換対象外の例外を以前のハンドラへ渡す。
    // デフォルト動作に戻した場合、復帰後に同じ命令が再実行されてプロセスが終了する。
    unsafe fn pass_through(
        signal: libc::c_int,
        info: *mut libc::siginfo_t,
        context: *mut libc::c_void,
    ) {
        let previous = match PREVIOUS_ACTION.get() {
            Some(Some(previous)) => previous,
            _ => {
                unsafe { libc::signal(libc::SIGFPE, libc::SIG_DFL) };
                return;
            }
        };

        let handler = previous.sa_sigaction;
        if handler == libc::SIG_DFL || handler == libc::SIG_IGN {
            unsafe { libc::signal(libc::SIGFPE, libc::SIG_DFL) };
            return;
        }

        unsafe {
            if previous.sa_flags & libc::SA_SIGINFO != 0 {
                let action: extern "C" fn(libc::c_int, *mut libc::siginfo_t, *mut libc::c_void) =
                    std::mem::transmute(handler);
                action(signal, info, context);
            } else {
                let action: extern "C" fn(libc::c_int) = std::mem::transmute(handler);
                action(signal);
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_handler_installs() {
            assert!(handler_installed());
            assert!(PREVIOUS_ACTION.get().is_some());
        }

        #[test]
        fn test_raw_idiv_matches_operator() {
            for (numerator, denominator) in [(42, 2), (-42, 5), (i32::MAX, 7), (i32::MIN, 3)] {
                assert_eq!(raw_idiv(numerator, denominator), numerator / denominator);
            }
        }

        #[test]
        fn test_scope_restores_armed_state() {
            assert!(!ARMED.with(Cell::get));
            {
                let _outer = ArmedScope::enter();
                assert!(ARMED.with(Cell::get));
                {
                    let _inner = ArmedScope::enter();
                    assert!(ARMED.with(Cell::get));
                }
                assert!(ARMED.with(Cell::get));
            }
            assert!(!ARMED.with(Cell::get));
        }

        #[test]
        fn test_fault_is_cleared_between_calls() {
            assert!(handler_installed());
            assert_eq!(guarded_div(1, 0), Err(DivisionError::TrappedDivideByZero));
            assert_eq!(guarded_div(10, 5), Ok(2));
        }
    }
}

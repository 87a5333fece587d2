use bingo_core::CancelToken;
use std::sync::OnceLock;

static INTERRUPT: OnceLock<CancelToken> = OnceLock::new();

/// Routes Ctrl+C into the returned token.
///
/// The first interrupt only sets the token so the simulator can stop between
/// trials; the handler then falls back to the default action, so a second
/// Ctrl+C terminates the process immediately.
pub fn install_interrupt() -> CancelToken {
    let token = INTERRUPT.get_or_init(CancelToken::new).clone();
    #[cfg(unix)]
    unsafe {
        let handler = on_interrupt as extern "C" fn(libc::c_int);
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
    token
}

/// Puts Ctrl+C back to its default action once nothing polls the token.
pub fn restore_interrupt() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
    }
}

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: libc::c_int) {
    if let Some(token) = INTERRUPT.get() {
        token.cancel();
    }
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_DFL);
    }
}

#[cfg(unix)]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

#[cfg(not(unix))]
pub fn stdout_is_tty() -> bool {
    true
}

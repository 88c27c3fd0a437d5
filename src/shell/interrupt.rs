//! Ctrl-C handling. SIGINT raises a flag and, because the handler is
//! installed without `SA_RESTART`, interrupts a blocking stdin read so the
//! loop can notice it.

use std::sync::atomic::{AtomicBool, Ordering};

pub static INTERRUPTED: AtomicBool = AtomicBool::new(false);

pub fn take(flag: &AtomicBool) -> bool {
    flag.swap(false, Ordering::SeqCst)
}

#[cfg(unix)]
pub fn install() -> crate::Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    extern "C" fn on_sigint(_: nix::libc::c_int) {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }

    let action = SigAction::new(SigHandler::Handler(on_sigint), SaFlags::empty(), SigSet::empty());
    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe { sigaction(Signal::SIGINT, &action) }.map_err(std::io::Error::from)?;
    tracing::debug!("SIGINT handler installed");
    Ok(())
}

#[cfg(not(unix))]
pub fn install() -> crate::Result<()> {
    Ok(())
}

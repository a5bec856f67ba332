use nix::unistd::pause;
use tracing::debug;

use crate::{error::Result, reap};

/// Runs the whole program: configure auto-reaping, then sleep.
///
/// Returning `Ok` means a signal was delivered while idling and the process
/// should now exit successfully; there is no other way out of the idle step.
/// Returning `Err` means one of the two disposition calls failed, and nothing
/// was provided to anyone: the caller should exit non-zero immediately.
pub fn run() -> Result<()> {
	reap::enable_autoreap()?;
	debug!("children now reaped by the kernel, settling down");

	// Blocks until any signal is delivered. SIGCHLD no longer needs us, and
	// anything else means we are being torn down, so one wake-up is enough.
	pause();
	debug!("woken by a signal, exiting");

	Ok(())
}

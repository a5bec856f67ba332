//! Configures the kernel to reap our children for us.

use std::{mem::MaybeUninit, ptr};

use nix::errno::Errno;

use crate::error::{Error, Result};

/// Turns on automatic reaping of terminated children.
///
/// Reads the current `SIGCHLD` action record, ors `SA_NOCLDWAIT` into its
/// flags, and writes it back. Handler, mask, and every other flag are
/// preserved as queried. Once this returns, children of this process are
/// collected by the kernel the moment they exit and never appear as zombies,
/// with no `wait(2)` on our side.
///
/// This goes through `libc` rather than `nix::sys::signal::sigaction`: the
/// query step passes a null new-action pointer, which the safe wrapper cannot
/// express without installing something in the same call.
pub fn enable_autoreap() -> Result<()> {
	let mut current = MaybeUninit::<libc::sigaction>::uninit();

	// SAFETY: a null new-action pointer makes this a pure read into `current`.
	if unsafe { libc::sigaction(libc::SIGCHLD, ptr::null(), current.as_mut_ptr()) } != 0 {
		return Err(Error::QueryDisposition(Errno::last()));
	}

	// SAFETY: the query above succeeded, so the record is fully written.
	let mut wanted = unsafe { current.assume_init() };
	wanted.sa_flags |= libc::SA_NOCLDWAIT;

	// SAFETY: `wanted` is the kernel's own record with one extra flag.
	if unsafe { libc::sigaction(libc::SIGCHLD, &wanted, ptr::null_mut()) } != 0 {
		return Err(Error::ApplyDisposition(Errno::last()));
	}

	Ok(())
}

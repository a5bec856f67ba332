//! Error types.

use nix::errno::Errno;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of one of the two `sigaction(2)` calls made at startup.
///
/// Each variant's display string names the call that failed followed by the
/// OS description of the errno, which is the whole of this program's
/// diagnostic surface. Neither call is expected to fail in practice: the
/// signal number is a constant and the action record comes straight from the
/// kernel, so an error here means the environment itself is broken.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
	/// Reading the current `SIGCHLD` disposition failed.
	#[error("sigaction SIGCHLD: {}", .0.desc())]
	QueryDisposition(Errno),

	/// Writing the `SA_NOCLDWAIT`-augmented disposition back failed.
	#[error("sigaction SIGCHLD SA_NOCLDWAIT: {}", .0.desc())]
	ApplyDisposition(Errno),
}

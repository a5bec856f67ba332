//! Reapless: a do-nothing init for containers.
//!
//! When a container runs its workload under a tiny PID 1, that PID 1 inherits
//! every orphaned descendant and is expected to collect their exit statuses.
//! Reapless opts out of that chore entirely: it flips `SA_NOCLDWAIT` on the
//! `SIGCHLD` disposition so the kernel reaps terminated children itself, then
//! sleeps until a signal tears it down.
//!
//! There is deliberately nothing else here. No supervision, no signal
//! forwarding, no restarts: a process that wants those should use a real
//! supervisor.

#[cfg(not(unix))]
compile_error!("reapless requires a Unix-like target: it is built on sigaction(2) and pause(2)");

pub mod error;
mod reap;
mod run;

pub use run::run;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line front end for `lockstep-core`.
//!
//! The binary is a thin wrapper over [`cli::entrypoint`]; everything it does
//! is reachable from [`cli::run`] with an explicit writer, which keeps the
//! commands testable without spawning a process.

pub mod cli;
pub mod eval;

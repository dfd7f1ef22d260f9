// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!            Public API
//!   query.rs  cmd.rs  discovery.rs
//!        \      |      /
//!         v     v     v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation
//!   (gix, read)  (CLI, write)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .checkout/.branch
//!    .branch     .stash/.apply
//!    .ref_exists .commit/.reset
//!                .push --force-with-lease
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for every write, status and diff.
//!
//! Nothing here re-implements diffing or patching; git does the work.

pub mod backend;
pub mod cmd;
pub mod discovery;
pub mod query;
pub mod status;

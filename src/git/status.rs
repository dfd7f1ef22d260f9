// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working tree status snapshot.
//!
//! ```text
//! git status --porcelain=v1 -z --untracked-files=all
//!   "XY path\0"            X = index, Y = worktree
//!   "R  new\0old\0"        renames/copies carry a second path
//!   "?? path\0"            untracked
//! ```
//!
//! Snapshots are never cached; callers re-query at each decision point.

use std::fmt;

/// Counts of changed paths in the working tree and index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    /// Paths modified in the index or the working tree.
    pub modified: usize,
    /// Paths added to the index.
    pub added: usize,
    /// Paths deleted in the index or the working tree.
    pub deleted: usize,
    /// Paths renamed or copied in the index.
    pub renamed: usize,
    /// Paths not known to git.
    pub untracked: usize,
    /// Paths with a change recorded in the index.
    pub staged: usize,
    /// Total number of entries reported.
    pub entries: usize,
}

impl WorkingTreeStatus {
    /// Parse NUL-separated porcelain v1 output.
    #[must_use]
    pub fn parse(porcelain: &str) -> Self {
        let mut status = Self::default();
        let mut fields = porcelain.split('\0');

        while let Some(entry) = fields.next() {
            let mut codes = entry.chars();
            let (Some(x), Some(y)) = (codes.next(), codes.next()) else {
                continue;
            };
            if x == '!' {
                continue;
            }
            status.entries += 1;

            if x == '?' && y == '?' {
                status.untracked += 1;
                continue;
            }

            if x == 'R' || x == 'C' {
                status.renamed += 1;
                // Source path follows as its own field.
                fields.next();
            }
            if x == 'M' || y == 'M' {
                status.modified += 1;
            }
            if x == 'A' {
                status.added += 1;
            }
            if x == 'D' || y == 'D' {
                status.deleted += 1;
            }
            if x != ' ' {
                status.staged += 1;
            }
        }

        status
    }

    /// True when nothing is modified, staged or untracked.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.entries == 0
    }

    /// Paths git already tracks (or has staged) that differ from HEAD.
    #[must_use]
    pub const fn tracked_changes(&self) -> usize {
        self.entries - self.untracked
    }

    /// Number of distinct paths with any change.
    #[must_use]
    pub const fn changed_files(&self) -> usize {
        self.entries
    }
}

impl fmt::Display for WorkingTreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} modified, {} added, {} deleted, {} renamed, {} untracked ({} staged)",
            self.modified, self.added, self.deleted, self.renamed, self.untracked, self.staged
        )
    }
}

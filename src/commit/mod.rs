// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit data model and message inspection.

pub mod message;
mod record;

pub use message::{MessageFormat, ALLOWED_COMMIT_TYPES};
pub use record::CommitRecord;

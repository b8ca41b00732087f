// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Branch policy checks.
//!
//! The [`Evaluator`] runs an ordered list of [`Check`]s over a resolved
//! commit range and turns the first violation into the aggregate
//! [`CheckResult`].

mod builtin;
mod engine;
mod result;

pub use builtin::*;
pub use engine::Evaluator;
pub use result::{CheckResult, Verdict, Violation, ALL_CHECKS_PASSED, NO_COMMITS_TO_CHECK};

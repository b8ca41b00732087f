// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::MergeChecksConfig;

/// Get the default configuration.
pub fn default_config() -> MergeChecksConfig {
    MergeChecksConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# merge-checks configuration

# Commit policy
[policy]
allowed_types = ["chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test"]
# Fail when the same commit message appears twice in the branch
check_duplicates = true

# How commits between base and head are found
[resolver]
# "remote" asks the hosting API, "local" walks the checked out history
strategy = "remote"
remote = "origin"
# base_ref = "main"
fetch = true

# How the verdict is reported
[reporting]
# "status-only" always exits 0, "exit-code" exits 1 when checks fail
mode = "status-only"
status_name = "Merge checks / Result"
pending_description = "Merge checks running"

[hosting]
api_url = "https://api.github.com"
"#
}

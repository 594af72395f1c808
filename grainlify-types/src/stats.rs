/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Read-only landing page statistics.

use serde::{Deserialize, Serialize};

/// Figures shown on the landing page. Missing fields default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingStatsDisplay {
    pub active_projects: u64,
    pub contributors: u64,
    pub grants_distributed: u64,
}

/// Envelope returned by a statistics source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LandingStats {
    pub display: LandingStatsDisplay,
}

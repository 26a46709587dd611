/*
 * Copyright 2024 Fluence DAO
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults::*;
use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of random `(c, n, m)` triples to check
    #[serde(default = "default_random_cases")]
    pub random_cases: u32,
    /// Seed for the random sample, at most `i64::MAX`. Taken from OS entropy when not set
    #[serde(default)]
    pub seed: Option<u64>,
    /// How many values at each end of the range are swept exhaustively
    #[serde(default = "default_boundary_window")]
    pub boundary_window: u32,
    /// Stop at the first violation
    #[serde(default = "default_fail_fast")]
    pub fail_fast: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            random_cases: default_random_cases(),
            seed: None,
            boundary_window: default_boundary_window(),
            fail_fast: default_fail_fast(),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, HarnessError> {
        let config: Self =
            toml::from_str(content).map_err(|err| HarnessError::ParseConfig { err })?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| HarnessError::ReadConfig {
            path: path.to_path_buf(),
            err,
        })?;
        log::debug!("Loaded harness config from {}", path.display());

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.boundary_window > MAX_BOUNDARY_WINDOW {
            return Err(HarnessError::InvalidBoundaryWindow {
                window: self.boundary_window,
                max: MAX_BOUNDARY_WINDOW,
            });
        }
        if let Some(seed) = self.seed.filter(|seed| *seed > MAX_SEED) {
            return Err(HarnessError::InvalidSeed {
                seed,
                max: MAX_SEED,
            });
        }

        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);

        self
    }

    pub fn with_random_cases(mut self, random_cases: u32) -> Self {
        self.random_cases = random_cases;

        self
    }

    pub fn with_boundary_window(mut self, boundary_window: u32) -> Self {
        self.boundary_window = boundary_window;

        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;

        self
    }
}

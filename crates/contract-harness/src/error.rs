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

use std::path::PathBuf;

use counter_contracts::ContractViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Error reading harness config from {path:?}: {err}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("Error parsing harness config: {err}")]
    ParseConfig {
        #[source]
        err: toml::de::Error,
    },
    #[error("Boundary window {window} is larger than allowed maximum {max}")]
    InvalidBoundaryWindow { window: u32, max: u32 },
    #[error("Seed {seed} is larger than allowed maximum {max}")]
    InvalidSeed { seed: u64, max: u64 },
    #[error("{count} contract violations found, first one: {first}")]
    Violations {
        count: usize,
        #[source]
        first: ContractViolation,
    },
}

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

pub fn default_random_cases() -> u32 {
    10_000
}

pub fn default_boundary_window() -> u32 {
    64
}

pub fn default_fail_fast() -> bool {
    false
}

/// Larger windows make the pairwise sweep quadratic in millions
pub const MAX_BOUNDARY_WINDOW: u32 = 4096;

/// TOML integers are `i64`, seeds above this cannot be written back to a config
pub const MAX_SEED: u64 = i64::MAX as u64;

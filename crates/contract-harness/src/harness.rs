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

use std::collections::BTreeSet;

use counter_contracts::{boundary_cases, ContractViolation, Inputs, Law, Operation};
use modular_counter::Counter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HarnessConfig;
use crate::defaults::MAX_SEED;
use crate::error::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    /// Seed the random sample was drawn with, reuse it to reproduce the run
    pub seed: u64,
    /// Number of contract and law evaluations performed
    pub checked: u64,
    pub violations: Vec<ContractViolation>,
}

impl HarnessReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of performed checks, or the first violation
    pub fn into_result(self) -> Result<u64, HarnessError> {
        let count = self.violations.len();
        match self.violations.into_iter().next() {
            None => Ok(self.checked),
            Some(first) => Err(HarnessError::Violations { count, first }),
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    checked: u64,
    violations: Vec<ContractViolation>,
    fail_fast: bool,
}

impl Tally {
    fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            ..Default::default()
        }
    }

    fn record<T>(&mut self, outcome: Result<T, ContractViolation>) {
        self.checked += 1;
        if let Err(violation) = outcome {
            log::warn!("Contract violation: {violation}");
            self.violations.push(violation);
        }
    }

    fn stopped(&self) -> bool {
        self.fail_fast && !self.violations.is_empty()
    }

    /// Checks every operation contract on `(c, n)` and every law on `(c, n, m)`
    fn check_all(&mut self, c: Counter, n: Counter, m: Counter) {
        let inputs = Inputs::binary(c, n);
        for op in Operation::ALL {
            if self.stopped() {
                return;
            }
            self.record(op.check(&inputs));
        }
        for law in Law::ALL {
            if self.stopped() {
                return;
            }
            self.record(law.check(c, n, m));
        }
    }
}

pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Values at both ends of the range, `window` of each
    pub fn boundary_values(&self) -> Vec<Counter> {
        let window = self.config.boundary_window;
        if window == 0 {
            return vec![];
        }

        let low = 0..window;
        let high = (u32::MAX - (window - 1))..=u32::MAX;
        low.chain(high).collect::<BTreeSet<_>>().into_iter().collect()
    }

    pub fn run(&self) -> HarnessReport {
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_SEED));
        log::info!(
            "Starting contract sweep: seed {}, boundary window {}, {} random cases",
            seed,
            self.config.boundary_window,
            self.config.random_cases
        );

        let mut tally = Tally::new(self.config.fail_fast);

        for case in boundary_cases() {
            if tally.stopped() {
                break;
            }
            tally.record(case.check());
        }

        let values = self.boundary_values();
        'sweep: for (i, &c) in values.iter().enumerate() {
            for (j, &n) in values.iter().enumerate() {
                if tally.stopped() {
                    break 'sweep;
                }
                let m = values[(i + j) % values.len()];
                tally.check_all(c, n, m);
            }
        }
        log::debug!(
            "Boundary sweep over {} values done, {} checks so far",
            values.len(),
            tally.checked
        );

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..self.config.random_cases {
            if tally.stopped() {
                break;
            }
            let (c, n, m) = rng.gen::<(u32, u32, u32)>();
            tally.check_all(c, n, m);
        }

        log::info!(
            "Contract sweep finished: {} checks, {} violations",
            tally.checked,
            tally.violations.len()
        );

        HarnessReport {
            seed,
            checked: tally.checked,
            violations: tally.violations,
        }
    }
}

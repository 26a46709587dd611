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

use modular_counter::Counter;
use thiserror::Error;

use crate::law::Law;
use crate::operation::{Inputs, Operation};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("Precondition of {op} does not hold for {inputs}")]
    Precondition { op: Operation, inputs: Inputs },
    #[error("Postcondition of {op} does not hold for {inputs}: got {result}")]
    Postcondition {
        op: Operation,
        inputs: Inputs,
        result: Counter,
    },
    #[error("{op}({inputs}) expected to be {expected}, got {result}")]
    Boundary {
        op: Operation,
        inputs: Inputs,
        expected: Counter,
        result: Counter,
    },
    #[error("Law {law} does not hold for c = {c}, n = {n}, m = {m}")]
    Law {
        law: Law,
        c: Counter,
        n: Counter,
        m: Counter,
    },
}

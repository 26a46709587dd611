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

use crate::error::ContractViolation;
use crate::operation::{Inputs, Operation};

/// A fixed call whose result at the edge of the `u32` range is known up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCase {
    pub op: Operation,
    pub inputs: Inputs,
    pub expected: Counter,
}

impl BoundaryCase {
    pub fn check(&self) -> Result<(), ContractViolation> {
        let result = self.op.check(&self.inputs)?;
        if result == self.expected {
            Ok(())
        } else {
            Err(ContractViolation::Boundary {
                op: self.op,
                inputs: self.inputs,
                expected: self.expected,
                result,
            })
        }
    }
}

/// Wrap-around at both ends of the range
pub fn boundary_cases() -> [BoundaryCase; 4] {
    [
        BoundaryCase {
            op: Operation::Increment,
            inputs: Inputs::unary(u32::MAX),
            expected: 0,
        },
        BoundaryCase {
            op: Operation::Decrement,
            inputs: Inputs::unary(0),
            expected: u32::MAX,
        },
        BoundaryCase {
            op: Operation::Add,
            inputs: Inputs::binary(u32::MAX, 1),
            expected: 0,
        },
        BoundaryCase {
            op: Operation::Subtract,
            inputs: Inputs::binary(0, 1),
            expected: u32::MAX,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_cases_pass() {
        for case in boundary_cases() {
            assert_eq!(case.check(), Ok(()), "{case:?}");
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let case = BoundaryCase {
            op: Operation::Increment,
            inputs: Inputs::unary(u32::MAX),
            expected: u32::MAX,
        };
        assert_eq!(
            case.check(),
            Err(ContractViolation::Boundary {
                op: Operation::Increment,
                inputs: Inputs::unary(u32::MAX),
                expected: u32::MAX,
                result: 0,
            })
        );
    }
}

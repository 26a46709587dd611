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

use std::fmt::{Display, Formatter};

use modular_counter::Counter;

use crate::error::ContractViolation;

/// Arguments of a single operation call. Unary operations read only `c`,
/// `new` reads nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Inputs {
    pub c: Counter,
    pub n: Counter,
}

impl Inputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn unary(c: Counter) -> Self {
        Self { c, n: 0 }
    }

    pub fn binary(c: Counter, n: Counter) -> Self {
        Self { c, n }
    }
}

impl Display for Inputs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c = {}, n = {}", self.c, self.n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    New,
    Increment,
    Decrement,
    Add,
    Subtract,
    Reset,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::New,
        Operation::Increment,
        Operation::Decrement,
        Operation::Add,
        Operation::Subtract,
        Operation::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::New => "new",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Reset => "reset",
        }
    }

    /// Number of counter arguments the operation takes
    pub fn arity(&self) -> usize {
        match self {
            Operation::New => 0,
            Operation::Increment | Operation::Decrement | Operation::Reset => 1,
            Operation::Add | Operation::Subtract => 2,
        }
    }

    /// Precondition. Every operation is total, so this holds for any input.
    pub fn requires(&self, _inputs: &Inputs) -> bool {
        true
    }

    pub fn apply(&self, inputs: &Inputs) -> Counter {
        let Inputs { c, n } = *inputs;
        match self {
            Operation::New => modular_counter::new(),
            Operation::Increment => modular_counter::increment(c),
            Operation::Decrement => modular_counter::decrement(c),
            Operation::Add => modular_counter::add(c, n),
            Operation::Subtract => modular_counter::subtract(c, n),
            Operation::Reset => modular_counter::reset(c),
        }
    }

    /// Postcondition over the inputs and the produced result.
    /// Stated directly in terms of the wrapping primitives, not the operations under check.
    pub fn ensures(&self, inputs: &Inputs, result: Counter) -> bool {
        let Inputs { c, n } = *inputs;
        match self {
            Operation::New | Operation::Reset => result == 0,
            Operation::Increment => result == c.wrapping_add(1),
            Operation::Decrement => result == c.wrapping_sub(1),
            Operation::Add => result == c.wrapping_add(n),
            Operation::Subtract => result == c.wrapping_sub(n),
        }
    }

    /// Evaluates `requires`, the operation itself and then `ensures`
    pub fn check(&self, inputs: &Inputs) -> Result<Counter, ContractViolation> {
        if !self.requires(inputs) {
            return Err(ContractViolation::Precondition {
                op: *self,
                inputs: *inputs,
            });
        }

        let result = self.apply(inputs);
        log::trace!(target: "contracts", "{self}({inputs}) = {result}");

        if self.ensures(inputs, result) {
            Ok(result)
        } else {
            Err(ContractViolation::Postcondition {
                op: *self,
                inputs: *inputs,
                result,
            })
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn arity_and_names() {
        let names: Vec<_> = Operation::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(
            names,
            vec!["new", "increment", "decrement", "add", "subtract", "reset"]
        );

        let arities: Vec<_> = Operation::ALL.iter().map(Operation::arity).collect();
        assert_eq!(arities, vec![0, 1, 1, 2, 2, 1]);
    }

    #[test]
    fn ensures_rejects_wrong_results() {
        assert!(!Operation::New.ensures(&Inputs::none(), 1));
        assert!(!Operation::Reset.ensures(&Inputs::unary(999), 999));
        assert!(!Operation::Increment.ensures(&Inputs::unary(u32::MAX), u32::MAX));
        assert!(!Operation::Decrement.ensures(&Inputs::unary(0), 0));
        assert!(!Operation::Add.ensures(&Inputs::binary(10, 5), 16));
        assert!(!Operation::Subtract.ensures(&Inputs::binary(3, 5), 0));
    }

    #[test]
    fn check_returns_result() {
        assert_eq!(Operation::New.check(&Inputs::none()), Ok(0));
        assert_eq!(Operation::Increment.check(&Inputs::unary(0)), Ok(1));
        assert_eq!(Operation::Add.check(&Inputs::binary(10, 5)), Ok(15));
        assert_eq!(
            Operation::Subtract.check(&Inputs::binary(3, 5)),
            Ok(4294967294)
        );
        assert_eq!(Operation::Reset.check(&Inputs::unary(999)), Ok(0));
    }

    proptest! {
        #[test]
        fn every_contract_holds(c in any::<u32>(), n in any::<u32>()) {
            let inputs = Inputs::binary(c, n);
            for op in Operation::ALL {
                prop_assert!(op.requires(&inputs));
                let result = op.check(&inputs);
                prop_assert!(result.is_ok(), "{} violated: {:?}", op, result);
            }
        }
    }
}

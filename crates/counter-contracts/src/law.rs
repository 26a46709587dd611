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

use modular_counter::{add, decrement, increment, new, reset, subtract, Counter};

use crate::error::ContractViolation;

/// Algebraic property relating counter operations. Every law quantifies over
/// three arbitrary counters `c`, `n` and `m`; laws that need fewer ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `new() == 0`
    NewIsZero,
    /// `reset(c) == 0`
    ResetIsZero,
    /// `add(c, 0) == c`
    AddZeroIdentity,
    /// `subtract(c, 0) == c`
    SubtractZeroIdentity,
    /// `decrement(increment(c)) == c`
    DecrementUndoesIncrement,
    /// `increment(decrement(c)) == c`
    IncrementUndoesDecrement,
    /// `increment(increment(c)) == add(c, 2)`
    DoubleIncrementIsAddTwo,
    /// `add(c, 1) == increment(c)`
    AddOneIsIncrement,
    /// `subtract(c, 1) == decrement(c)`
    SubtractOneIsDecrement,
    /// `add(add(c, n), m) == add(c, n + m)`
    AddAssociates,
    /// `subtract(subtract(c, n), m) == subtract(c, n + m)`
    SubtractAssociates,
    /// Identical inputs yield identical outputs
    Determinism,
}

impl Law {
    pub const ALL: [Law; 12] = [
        Law::NewIsZero,
        Law::ResetIsZero,
        Law::AddZeroIdentity,
        Law::SubtractZeroIdentity,
        Law::DecrementUndoesIncrement,
        Law::IncrementUndoesDecrement,
        Law::DoubleIncrementIsAddTwo,
        Law::AddOneIsIncrement,
        Law::SubtractOneIsDecrement,
        Law::AddAssociates,
        Law::SubtractAssociates,
        Law::Determinism,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Law::NewIsZero => "new_is_zero",
            Law::ResetIsZero => "reset_is_zero",
            Law::AddZeroIdentity => "add_zero_identity",
            Law::SubtractZeroIdentity => "subtract_zero_identity",
            Law::DecrementUndoesIncrement => "decrement_undoes_increment",
            Law::IncrementUndoesDecrement => "increment_undoes_decrement",
            Law::DoubleIncrementIsAddTwo => "double_increment_is_add_two",
            Law::AddOneIsIncrement => "add_one_is_increment",
            Law::SubtractOneIsDecrement => "subtract_one_is_decrement",
            Law::AddAssociates => "add_associates",
            Law::SubtractAssociates => "subtract_associates",
            Law::Determinism => "determinism",
        }
    }

    pub fn holds(&self, c: Counter, n: Counter, m: Counter) -> bool {
        match self {
            Law::NewIsZero => new() == 0,
            Law::ResetIsZero => reset(c) == 0,
            Law::AddZeroIdentity => add(c, 0) == c,
            Law::SubtractZeroIdentity => subtract(c, 0) == c,
            Law::DecrementUndoesIncrement => decrement(increment(c)) == c,
            Law::IncrementUndoesDecrement => increment(decrement(c)) == c,
            Law::DoubleIncrementIsAddTwo => increment(increment(c)) == add(c, 2),
            Law::AddOneIsIncrement => add(c, 1) == increment(c),
            Law::SubtractOneIsDecrement => subtract(c, 1) == decrement(c),
            Law::AddAssociates => add(add(c, n), m) == add(c, n.wrapping_add(m)),
            Law::SubtractAssociates => {
                subtract(subtract(c, n), m) == subtract(c, n.wrapping_add(m))
            }
            Law::Determinism => {
                let first = outputs(c, n);
                let second = outputs(c, n);
                first == second
            }
        }
    }

    pub fn check(&self, c: Counter, n: Counter, m: Counter) -> Result<(), ContractViolation> {
        if self.holds(c, n, m) {
            Ok(())
        } else {
            Err(ContractViolation::Law {
                law: *self,
                c,
                n,
                m,
            })
        }
    }
}

fn outputs(c: Counter, n: Counter) -> [Counter; 6] {
    [
        new(),
        increment(c),
        decrement(c),
        add(c, n),
        subtract(c, n),
        reset(c),
    ]
}

impl Display for Law {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn laws_hold_at_extremes() {
        let extremes = [0, 1, 2, u32::MAX - 1, u32::MAX];
        for law in Law::ALL {
            for c in extremes {
                for n in extremes {
                    for m in extremes {
                        assert_eq!(law.check(c, n, m), Ok(()), "{law} at ({c}, {n}, {m})");
                    }
                }
            }
        }
    }

    #[test]
    fn violation_mentions_law() {
        let violation = ContractViolation::Law {
            law: Law::AddAssociates,
            c: 1,
            n: 2,
            m: 3,
        };
        assert_eq!(
            violation.to_string(),
            "Law add_associates does not hold for c = 1, n = 2, m = 3"
        );
    }

    proptest! {
        #[test]
        fn all_laws_hold(c in any::<u32>(), n in any::<u32>(), m in any::<u32>()) {
            for law in Law::ALL {
                prop_assert!(law.holds(c, n, m), "{} failed", law);
            }
        }
    }
}

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

//! Pure functions over a 32-bit counter. Every operation is total: arithmetic
//! wraps modulo 2^32 instead of overflowing, saturating or panicking.

/// Counter value, the whole `u32` range is valid
pub type Counter = u32;

/// Returns a counter initialized to zero
pub fn new() -> Counter {
    0
}

/// Returns `c + 1`, wrapping `u32::MAX` to zero
pub fn increment(c: Counter) -> Counter {
    let result = c.wrapping_add(1);
    debug_assert_eq!(result, add(c, 1));
    result
}

/// Returns `c - 1`, wrapping zero to `u32::MAX`
pub fn decrement(c: Counter) -> Counter {
    let result = c.wrapping_sub(1);
    debug_assert_eq!(result, subtract(c, 1));
    result
}

/// Adds `n` to the counter modulo 2^32
pub fn add(c: Counter, n: Counter) -> Counter {
    let result = c.wrapping_add(n);
    debug_assert_eq!(result.wrapping_sub(n), c);
    result
}

/// Subtracts `n` from the counter modulo 2^32
pub fn subtract(c: Counter, n: Counter) -> Counter {
    let result = c.wrapping_sub(n);
    debug_assert_eq!(result.wrapping_add(n), c);
    result
}

/// Returns zero regardless of the current value
pub fn reset(_c: Counter) -> Counter {
    let result = new();
    debug_assert_eq!(result, 0);
    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn scenarios() {
        assert_eq!(new(), 0);
        assert_eq!(increment(0), 1);
        assert_eq!(increment(4294967295), 0);
        assert_eq!(add(10, 5), 15);
        assert_eq!(subtract(3, 5), 4294967294);
        assert_eq!(reset(999), 0);
    }

    #[test]
    fn wraps_at_boundaries() {
        assert_eq!(increment(u32::MAX), 0);
        assert_eq!(decrement(0), u32::MAX);
        assert_eq!(add(u32::MAX, 1), 0);
        assert_eq!(subtract(0, 1), u32::MAX);
        assert_eq!(add(u32::MAX, u32::MAX), u32::MAX - 1);
        assert_eq!(subtract(0, u32::MAX), 1);
    }

    #[test]
    fn invariant_checks_hold_at_extremes() {
        let extremes = [0, 1, 2, u32::MAX / 2, u32::MAX - 1, u32::MAX];
        for c in extremes {
            increment(c);
            decrement(c);
            reset(c);
            for n in extremes {
                assert_eq!(subtract(add(c, n), n), c);
                assert_eq!(add(subtract(c, n), n), c);
            }
        }
    }

    #[test]
    fn small_values() {
        assert_eq!(increment(increment(0)), 2);
        assert_eq!(decrement(5), 4);
        assert_eq!(add(5, 3), 8);
        assert_eq!(subtract(5, 3), 2);
        assert_eq!(reset(42), new());
    }

    proptest! {
        #[test]
        fn identities(c in any::<u32>()) {
            prop_assert_eq!(reset(c), 0);
            prop_assert_eq!(add(c, 0), c);
            prop_assert_eq!(subtract(c, 0), c);
        }

        #[test]
        fn increment_and_decrement_are_inverse(c in any::<u32>()) {
            prop_assert_eq!(decrement(increment(c)), c);
            prop_assert_eq!(increment(decrement(c)), c);
        }

        #[test]
        fn add_and_subtract_generalize_step(c in any::<u32>()) {
            prop_assert_eq!(add(c, 1), increment(c));
            prop_assert_eq!(subtract(c, 1), decrement(c));
            prop_assert_eq!(increment(increment(c)), add(c, 2));
        }

        #[test]
        fn composition(c in any::<u32>(), n in any::<u32>(), m in any::<u32>()) {
            prop_assert_eq!(add(add(c, n), m), add(c, n.wrapping_add(m)));
            prop_assert_eq!(subtract(subtract(c, n), m), subtract(c, n.wrapping_add(m)));
            prop_assert_eq!(subtract(add(c, n), n), c);
        }

        #[test]
        fn matches_modular_arithmetic(c in any::<u32>(), n in any::<u32>()) {
            let modulus = 1u64 << 32;
            prop_assert_eq!(add(c, n) as u64, (c as u64 + n as u64) % modulus);
            prop_assert_eq!(subtract(c, n) as u64, (c as u64 + modulus - n as u64) % modulus);
        }

        #[test]
        fn deterministic(c in any::<u32>(), n in any::<u32>()) {
            let first = [increment(c), decrement(c), add(c, n), subtract(c, n), reset(c)];
            let second = [increment(c), decrement(c), add(c, n), subtract(c, n), reset(c)];
            prop_assert_eq!(first, second);
        }
    }
}

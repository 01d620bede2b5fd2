//! Formal verification rules for `sum`.

use crate::sum;

use cvlr::prelude::*;

/// Macro to assume `a + b` stays within `i64`.
#[macro_export]
macro_rules! assume_no_overflow {
    ($a:expr, $b:expr) => {
        cvlr::cvlr_assume!($a.checked_add($b).is_some());
    };
}

/// Macro to assert `sum` agrees with unbounded addition.
/// Only meaningful after `assume_no_overflow!`.
#[macro_export]
macro_rules! assert_exact_sum {
    ($a:expr, $b:expr) => {
        cvlr::cvlr_assert!($crate::sum($a, $b) as i128 == $a as i128 + $b as i128);
    };
}

/// Verifies that `sum` is ordinary addition when nothing overflows.
#[rule]
pub fn rule_sum_matches_exact_addition() {
    let a: i64 = nondet();
    let b: i64 = nondet();
    assume_no_overflow!(a, b);
    assert_exact_sum!(a, b);
}

/// Verifies that operand order does not matter.
#[rule]
pub fn rule_sum_is_commutative() {
    let a: i64 = nondet();
    let b: i64 = nondet();
    cvlr_assert_eq!(sum(a, b), sum(b, a));
}

#[rule]
pub fn rule_sum_zero_is_identity() {
    let a: i64 = nondet();
    cvlr_assert_eq!(sum(a, 0), a);
}

/// Verifies that overflow keeps the low 64 bits of the exact sum.
#[rule]
pub fn rule_sum_wraps_modulo_2_64() {
    let a: i64 = nondet();
    let b: i64 = nondet();
    let wide = a as i128 + b as i128;
    cvlr_assert_eq!(sum(a, b), wide as i64);
}

//   ____                      _            ____                       _
//  / ___| _ __  _   _  _ __  | |_   __ _  / ___|  ___   _   _  _ __  | |_
// | |    | '__|| | | || '_ \ | __| / _` || |     / _ \ | | | || '_ \ | __|
// | |___ | |   | |_| || |_) || |_ | (_| || |___ | (_) || |_| || | | || |_
//  \____||_|    \__, || .__/  \__| \__,_| \____| \___/  \__,_||_| |_| \__|
//               |___/ |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Search-space calculator and entropy function

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::policy::{Policy, PolicyError};

fn factorial(n: usize) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// Multinomial coefficient: `total! / (k1! * k2! * ... * km!)` where
/// `total = k1 + ... + km`. Counts the ways to partition `total` labeled
/// positions into groups of the given sizes.
pub fn multinomial(counts: &[usize]) -> BigUint {
    let total: usize = counts.iter().sum();
    let mut result = factorial(total);
    for &count in counts {
        result /= factorial(count);
    }
    result
}

/// Counts the distinct password strings satisfying the policy.
///
/// The count is the product of two cleanly separated factors: the
/// multinomial number of ways to assign positions to each exact-count class
/// (with the unconstrained remainder as one more group), and the number of
/// ways to fill those positions with concrete symbols. Conflating the two
/// is the classic way to double-count.
///
/// Returns zero for a syntactically valid but combinatorially empty policy
/// (positions left over and no unconstrained class to fill them).
pub fn calculate_search_space(policy: &Policy) -> Result<BigUint, PolicyError> {
    policy.check_exact_sum()?;

    let remaining = policy.remaining();
    let other_pool_size = policy.other_pool_size();
    if remaining > 0 && other_pool_size == 0 {
        return Ok(BigUint::zero());
    }

    // Ways to hand out positions: one group per exact-count class, plus
    // one group for the unconstrained remainder.
    let mut counts: Vec<usize> = policy.exact().values().copied().collect();
    counts.push(remaining);
    let placements = multinomial(&counts);

    // Ways to pick a symbol for each assigned position, independently.
    let mut required_fill = BigUint::one();
    for (cls, &k) in policy.exact() {
        required_fill *= BigUint::from(cls.size()).pow(k as u32);
    }
    let other_fill = if remaining > 0 {
        BigUint::from(other_pool_size).pow(remaining as u32)
    } else {
        BigUint::one()
    };

    Ok(placements * required_fill * other_fill)
}

/// Entropy in bits of a search space of `n` strings: `log2(n)`, with 0.0
/// for the empty (infeasible) and single-string cases.
///
/// Counts wider than `f64` range are shifted down to the top 52 bits and
/// the dropped bit count is added back, so the result stays finite.
pub fn entropy_bits(n: &BigUint) -> f64 {
    if n.is_zero() {
        return 0.0;
    }
    if let Some(value) = n.to_f64() {
        if value.is_finite() {
            return value.log2();
        }
    }
    let shift = n.bits() - 52;
    let top = (n >> shift).to_f64().unwrap_or(f64::MAX);
    top.log2() + shift as f64
}

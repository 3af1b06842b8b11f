use std::collections::BTreeMap;

use cryptacount::charclass::CharClass;
use cryptacount::passgen::{assess_password_strength, generate_password};
use cryptacount::policy::{Policy, PolicyError};

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(length: usize, included: &[CharClass], exact: &[(CharClass, usize)]) -> Policy {
        let exact: BTreeMap<CharClass, usize> = exact.iter().copied().collect();
        Policy::new(length, included.to_vec(), exact).unwrap()
    }

    fn tally(password: &str, cls: CharClass) -> usize {
        password.chars().filter(|ch| cls.symbols().contains(*ch)).count()
    }

    #[test]
    fn test_generated_password_has_policy_length() {
        let p = policy(
            8,
            &[CharClass::Lower, CharClass::Upper, CharClass::Digits],
            &[(CharClass::Digits, 2)],
        );
        let password = generate_password(&p).unwrap();
        assert_eq!(password.chars().count(), 8);
    }

    #[test]
    fn test_exact_counts_are_honored() {
        let p = policy(
            8,
            &[CharClass::Lower, CharClass::Upper, CharClass::Digits],
            &[(CharClass::Digits, 2)],
        );
        for _ in 0..20 {
            let password = generate_password(&p).unwrap();
            assert_eq!(tally(&password, CharClass::Digits), 2);
        }
    }

    #[test]
    fn test_all_characters_come_from_included_classes() {
        let p = policy(
            16,
            &[CharClass::Lower, CharClass::Symbols],
            &[(CharClass::Symbols, 3)],
        );
        let password = generate_password(&p).unwrap();
        assert!(password.chars().all(|ch| {
            CharClass::Lower.symbols().contains(ch) || CharClass::Symbols.symbols().contains(ch)
        }));
        assert_eq!(tally(&password, CharClass::Symbols), 3);
    }

    #[test]
    fn test_zero_exact_count_excludes_class_entirely() {
        // digits pinned to zero: the fill pool is lower only
        let p = policy(
            12,
            &[CharClass::Digits, CharClass::Lower],
            &[(CharClass::Digits, 0)],
        );
        for _ in 0..10 {
            let password = generate_password(&p).unwrap();
            assert_eq!(tally(&password, CharClass::Digits), 0);
            assert_eq!(password.chars().count(), 12);
        }
    }

    #[test]
    fn test_fully_constrained_password_is_all_digits() {
        let p = policy(4, &[CharClass::Digits], &[(CharClass::Digits, 4)]);
        let password = generate_password(&p).unwrap();
        assert_eq!(password.chars().count(), 4);
        assert!(password.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn test_zero_length_password_is_empty() {
        let p = policy(0, &[CharClass::Lower], &[]);
        let password = generate_password(&p).unwrap();
        assert!(password.is_empty());
    }

    #[test]
    fn test_exact_sum_exceeding_length_is_rejected() {
        let p = policy(3, &[CharClass::Digits], &[(CharClass::Digits, 5)]);
        let result = generate_password(&p);
        assert!(matches!(
            result,
            Err(PolicyError::ExactSumExceedsLength { exact_sum: 5, length: 3 })
        ));
    }

    #[test]
    fn test_empty_fill_pool_is_rejected() {
        // 2 positions left over, no unconstrained class to draw from
        let p = policy(5, &[CharClass::Digits], &[(CharClass::Digits, 3)]);
        let result = generate_password(&p);
        assert!(matches!(
            result,
            Err(PolicyError::EmptyFillPool { remaining: 2 })
        ));
    }

    #[test]
    fn test_assess_password_strength_scores_in_range() {
        let (rating, score, _feedback) = assess_password_strength("password");
        assert!(score <= 4);
        assert!(!rating.is_empty());
    }
}

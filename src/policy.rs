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
// Policy value type and validation

use std::collections::BTreeMap;
use std::fmt;

use crate::charclass::CharClass;

/// An immutable password-generation policy: target length, allowed
/// character classes, and optional exact per-class counts.
///
/// The calculator and generator take `&Policy` and never mutate it, so one
/// value can be shared across any number of calls.
#[derive(Debug, Clone)]
pub struct Policy {
    length: usize,
    included: Vec<CharClass>,
    exact: BTreeMap<CharClass, usize>,
}

impl Policy {
    /// Builds a policy. Duplicate entries in `included` are collapsed
    /// (first occurrence wins); every exact-count class must be one of the
    /// included classes.
    ///
    /// The exact-sum-vs-length invariant is deliberately NOT checked here:
    /// it is data-dependent and re-validated by both the calculator and the
    /// generator via [`Policy::check_exact_sum`].
    pub fn new(
        length: usize,
        included: Vec<CharClass>,
        exact: BTreeMap<CharClass, usize>,
    ) -> Result<Self, PolicyError> {
        // 去重，保持原有顺序
        let mut deduped = Vec::with_capacity(included.len());
        for cls in included {
            if !deduped.contains(&cls) {
                deduped.push(cls);
            }
        }

        for cls in exact.keys() {
            if !deduped.contains(cls) {
                return Err(PolicyError::ExactNotIncluded(*cls));
            }
        }

        Ok(Self {
            length,
            included: deduped,
            exact,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn included(&self) -> &[CharClass] {
        &self.included
    }

    pub fn exact(&self) -> &BTreeMap<CharClass, usize> {
        &self.exact
    }

    pub fn exact_sum(&self) -> usize {
        self.exact.values().sum()
    }

    /// Validates that the exact counts fit into the password length.
    pub fn check_exact_sum(&self) -> Result<(), PolicyError> {
        let exact_sum = self.exact_sum();
        if exact_sum > self.length {
            return Err(PolicyError::ExactSumExceedsLength {
                exact_sum,
                length: self.length,
            });
        }
        Ok(())
    }

    /// Positions left over after the exact counts are placed.
    pub fn remaining(&self) -> usize {
        self.length.saturating_sub(self.exact_sum())
    }

    /// Included classes with no exact count, in inclusion order.
    pub fn other_classes(&self) -> Vec<CharClass> {
        self.included
            .iter()
            .copied()
            .filter(|cls| !self.exact.contains_key(cls))
            .collect()
    }

    /// Union of the symbols of all unconstrained classes.
    pub fn other_pool(&self) -> String {
        self.other_classes()
            .iter()
            .map(|cls| cls.symbols())
            .collect()
    }

    pub fn other_pool_size(&self) -> usize {
        self.other_classes().iter().map(|cls| cls.size()).sum()
    }
}

/// Parses a character class name as given on the command line.
pub fn parse_class(name: &str) -> Result<CharClass, PolicyError> {
    CharClass::from_name(name).ok_or_else(|| PolicyError::UnknownClass(name.to_string()))
}

/// Parses one `--exact` token of the form `name=count`.
pub fn parse_exact_token(token: &str) -> Result<(CharClass, usize), PolicyError> {
    let Some((name, count)) = token.split_once('=') else {
        return Err(PolicyError::MalformedExactToken(token.to_string()));
    };
    let class = parse_class(name)?;
    let count = count
        .parse::<usize>()
        .map_err(|_| PolicyError::MalformedExactToken(token.to_string()))?;
    Ok((class, count))
}

#[derive(Debug)]
pub enum PolicyError {
    UnknownClass(String),
    MalformedExactToken(String),
    ExactNotIncluded(CharClass),
    ExactSumExceedsLength { exact_sum: usize, length: usize },
    EmptyFillPool { remaining: usize },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::UnknownClass(name) => {
                write!(f, "Unknown character class: {}", name)
            }
            PolicyError::MalformedExactToken(token) => {
                write!(f, "Invalid format for --exact: {}. Expected key=value", token)
            }
            PolicyError::ExactNotIncluded(cls) => {
                write!(f, "Exact count for '{}' requires it to be included", cls.name())
            }
            PolicyError::ExactSumExceedsLength { exact_sum, length } => {
                write!(
                    f,
                    "Sum of exact counts ({}) exceeds password length ({})",
                    exact_sum, length
                )
            }
            PolicyError::EmptyFillPool { remaining } => {
                write!(
                    f,
                    "No unconstrained character class available to fill {} remaining position(s)",
                    remaining
                )
            }
        }
    }
}

impl std::error::Error for PolicyError {}

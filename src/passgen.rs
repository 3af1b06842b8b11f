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
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::policy::{Policy, PolicyError};

/// Generates one password satisfying the policy.
///
/// Every exact-count class contributes exactly its count of symbols, drawn
/// uniformly with replacement from that class; the remaining positions are
/// drawn from the union pool of the unconstrained classes. A final
/// Fisher-Yates shuffle erases any positional pattern, so only the counts
/// are guaranteed, not the positions.
///
/// All draws and the shuffle use the OS CSPRNG.
pub fn generate_password(policy: &Policy) -> Result<String, PolicyError> {
    policy.check_exact_sum()?;

    let remaining = policy.remaining();
    let other_pool: Vec<char> = policy.other_pool().chars().collect();
    if remaining > 0 && other_pool.is_empty() {
        // Same infeasibility the calculator reports as N = 0; never sample
        // from an empty pool.
        return Err(PolicyError::EmptyFillPool { remaining });
    }

    let mut rng = OsRng::default();
    let mut password_chars = Vec::with_capacity(policy.length());

    // Draw the exact-count symbols from their own classes
    for (cls, &count) in policy.exact() {
        let class_chars: Vec<char> = cls.symbols().chars().collect();
        for _ in 0..count {
            // catalog classes are never empty
            password_chars.push(*class_chars.choose(&mut rng).unwrap());
        }
    }

    // Fill the remaining positions from the union pool
    for _ in 0..remaining {
        password_chars.push(*other_pool.choose(&mut rng).unwrap());
    }

    // Shuffle the characters to avoid predictable pattern
    password_chars.shuffle(&mut rng);

    Ok(password_chars.into_iter().collect())
}

/// 评估密码强度
pub fn assess_password_strength(password: &str) -> (String, u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        || String::new(),
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let rating = match score {
        Score::Zero => "Very weak",
        Score::One => "Weak",
        Score::Two => "Fair",
        Score::Three => "Strong",
        Score::Four => "Very strong",
        _ => "Unknown",
    }.to_string();

    (rating, score as u8, feedback)
}

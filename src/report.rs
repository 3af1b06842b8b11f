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
// Analysis report formatting

use num_bigint::BigUint;

use crate::policy::Policy;

/// Renders a count with thousands separators, e.g. `33,554,432`.
pub fn format_count(n: &BigUint) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn class_list(policy: &Policy) -> String {
    policy
        .included()
        .iter()
        .map(|cls| cls.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn exact_list(policy: &Policy) -> String {
    if policy.exact().is_empty() {
        return "(none)".to_string();
    }
    policy
        .exact()
        .iter()
        .map(|(cls, count)| format!("{}={}", cls.name(), count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_report(policy: &Policy, search_space: &BigUint, entropy: f64, password: &str) {
    println!("Length: {}", policy.length());
    println!("Included classes: {}", class_list(policy));
    println!("Exact counts: {}", exact_list(policy));
    println!("Search space (N): {}", format_count(search_space));
    println!("Entropy: {:.2} bits", entropy);
    println!("Sample password: {}", password);
}

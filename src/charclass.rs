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
// Character class catalog

/// A named, fixed set of password symbols. The catalog is static and
/// read-only for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    /// The symbols belonging to this class. Every class is non-empty.
    pub fn symbols(&self) -> &'static str {
        match self {
            CharClass::Lower => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Digits => "0123456789",
            CharClass::Symbols => "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        }
    }

    /// All classes are ASCII, so the byte length is the symbol count.
    pub fn size(&self) -> usize {
        self.symbols().len()
    }

    pub fn from_name(name: &str) -> Option<CharClass> {
        match name {
            "lower" => Some(CharClass::Lower),
            "upper" => Some(CharClass::Upper),
            "digits" => Some(CharClass::Digits),
            "symbols" => Some(CharClass::Symbols),
            _ => None,
        }
    }
}

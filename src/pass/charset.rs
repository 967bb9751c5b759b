//! Character classes for generation and classification.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

/// Characters dropped when similar-looking characters are excluded.
pub const SIMILAR: &[char] = &['O', '0', 'I', 'l', '1'];

/// Alphabet sizes used for the entropy estimate. Symbols count every ASCII
/// punctuation character since audited passwords are not limited to `SYMBOLS`.
pub const LOWER_SIZE: usize = 26;
pub const UPPER_SIZE: usize = 26;
pub const DIGIT_SIZE: usize = 10;
pub const SYMBOL_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
    Other,
}

/// Fixed, locale-independent classification.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_ascii_punctuation() {
        CharClass::Symbol
    } else {
        CharClass::Other
    }
}

/// The four generation classes after the exclude-similar transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charsets {
    upper: Vec<char>,
    lower: Vec<char>,
    digit: Vec<char>,
    symbol: Vec<char>,
}

impl Charsets {
    pub fn new(exclude_similar: bool) -> Self {
        let all = Self {
            upper: UPPERCASE.chars().collect(),
            lower: LOWERCASE.chars().collect(),
            digit: DIGITS.chars().collect(),
            symbol: SYMBOLS.chars().collect(),
        };
        if exclude_similar {
            all.without(SIMILAR)
        } else {
            all
        }
    }

    /// Remove `chars` from every class.
    pub fn without(mut self, chars: &[char]) -> Self {
        for set in [
            &mut self.upper,
            &mut self.lower,
            &mut self.digit,
            &mut self.symbol,
        ] {
            set.retain(|c| !chars.contains(c));
        }
        self
    }

    pub fn upper(&self) -> &[char] {
        &self.upper
    }

    pub fn lower(&self) -> &[char] {
        &self.lower
    }

    pub fn digit(&self) -> &[char] {
        &self.digit
    }

    pub fn symbol(&self) -> &[char] {
        &self.symbol
    }

    /// Class by generation category. `Other` has no generation set.
    pub fn class(&self, class: CharClass) -> &[char] {
        match class {
            CharClass::Upper => &self.upper,
            CharClass::Lower => &self.lower,
            CharClass::Digit => &self.digit,
            CharClass::Symbol => &self.symbol,
            CharClass::Other => &[],
        }
    }

    /// Union of all four classes, used for the unconstrained positions.
    pub fn fill(&self) -> Vec<char> {
        let mut chars = Vec::with_capacity(self.len());
        chars.extend(&self.lower);
        chars.extend(&self.upper);
        chars.extend(&self.digit);
        chars.extend(&self.symbol);
        chars
    }

    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len() + self.digit.len() + self.symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, c: char) -> bool {
        self.class(classify(c)).contains(&c)
    }
}

/// Observed alphabet size: the sum of the sizes of the classes present.
pub fn observed_alphabet(password: &str) -> usize {
    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);
    for c in password.chars() {
        match classify(c) {
            CharClass::Upper => upper = true,
            CharClass::Lower => lower = true,
            CharClass::Digit => digit = true,
            CharClass::Symbol => symbol = true,
            CharClass::Other => {}
        }
    }
    let mut size = 0;
    if lower {
        size += LOWER_SIZE;
    }
    if upper {
        size += UPPER_SIZE;
    }
    if digit {
        size += DIGIT_SIZE;
    }
    if symbol {
        size += SYMBOL_SIZE;
    }
    size
}

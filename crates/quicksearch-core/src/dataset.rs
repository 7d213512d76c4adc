// crates/quicksearch-core/src/dataset.rs

//! # Bundled Dataset
//!
//! The static lists the search screen browses: the NATO phonetic alphabet
//! and the numbers zero to one hundred spelled out in English.
//!
//! Built once per process and shared as `&'static` data.

use crate::model::SectionedList;
use once_cell::sync::Lazy;

pub const LETTERS_TITLE: &str = "Letters";
pub const NUMBERS_TITLE: &str = "Numbers";

/// Highest number in the bundled `Numbers` section.
pub const MAX_BUNDLED_NUMBER: u32 = 100;

pub const PHONETIC_ALPHABET: [&str; 26] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Largest value [`spell_out`] accepts.
pub const MAX_SPELLABLE: u32 = 999_999;

fn spell_below_hundred(n: u32) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{tens}-{}", ONES[unit as usize]),
    }
}

fn spell_below_thousand(n: u32) -> String {
    debug_assert!(n < 1000);
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, _) => spell_below_hundred(rest),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred {}", ONES[h as usize], spell_below_hundred(r)),
    }
}

/// Lowercase English words for `n` (`21` → `"twenty-one"`), or `None` above
/// [`MAX_SPELLABLE`].
///
/// # Examples
///
/// ```rust
/// use quicksearch_core::dataset::spell_out;
///
/// assert_eq!(spell_out(0).as_deref(), Some("zero"));
/// assert_eq!(spell_out(100).as_deref(), Some("one hundred"));
/// assert_eq!(spell_out(1_205).as_deref(), Some("one thousand two hundred five"));
/// ```
pub fn spell_out(n: u32) -> Option<String> {
    if n > MAX_SPELLABLE {
        return None;
    }
    let (thousands, rest) = (n / 1000, n % 1000);
    let words = match (thousands, rest) {
        (0, _) => spell_below_thousand(rest),
        (t, 0) => format!("{} thousand", spell_below_thousand(t)),
        (t, r) => format!(
            "{} thousand {}",
            spell_below_thousand(t),
            spell_below_thousand(r)
        ),
    };
    Some(words)
}

/// Uppercase the first letter of every whitespace-delimited word and
/// lowercase the rest. Hyphenated compounds count as one word
/// (`"twenty-one"` → `"Twenty-one"`).
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Numbers `0..=max` spelled out and capitalized, as display strings.
pub fn spelled_numbers(max: u32) -> Vec<String> {
    (0..=max.min(MAX_SPELLABLE))
        .filter_map(spell_out)
        .map(|words| capitalize_words(&words))
        .collect()
}

static DEFAULT_SECTIONS: Lazy<Vec<SectionedList>> = Lazy::new(|| {
    vec![
        SectionedList::new(LETTERS_TITLE, PHONETIC_ALPHABET),
        SectionedList::new(NUMBERS_TITLE, spelled_numbers(MAX_BUNDLED_NUMBER)),
    ]
});

/// The bundled `Letters` and `Numbers` sections.
pub fn default_sections() -> &'static [SectionedList] {
    &DEFAULT_SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spells_teens_tens_and_compounds() {
        assert_eq!(spell_out(13).unwrap(), "thirteen");
        assert_eq!(spell_out(40).unwrap(), "forty");
        assert_eq!(spell_out(99).unwrap(), "ninety-nine");
        assert_eq!(spell_out(342).unwrap(), "three hundred forty-two");
        assert_eq!(spell_out(20_000).unwrap(), "twenty thousand");
        assert_eq!(spell_out(MAX_SPELLABLE).unwrap(), "nine hundred ninety-nine thousand nine hundred ninety-nine");
        assert!(spell_out(MAX_SPELLABLE + 1).is_none());
    }

    #[test]
    fn capitalizes_whitespace_words_only() {
        assert_eq!(capitalize_words("one hundred"), "One Hundred");
        assert_eq!(capitalize_words("twenty-one"), "Twenty-one");
        assert_eq!(capitalize_words("X-RAY"), "X-ray");
    }

    #[test]
    fn bundled_sections_have_expected_shape() {
        let sections = default_sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Letters");
        assert_eq!(sections[0].len(), 26);
        assert_eq!(sections[1].title, "Numbers");
        assert_eq!(sections[1].len(), 101);
        assert_eq!(sections[1].items[0], "Zero");
        assert_eq!(sections[1].items[21], "Twenty-one");
        assert_eq!(sections[1].items[100], "One Hundred");
    }
}

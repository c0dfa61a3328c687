//! Placeholder copy for news items, alerts and analyst notes.

use rand::Rng;

use crate::rng::{pick, uniform_int};

const WORDS: &[&str] = &[
    "alias", "amet", "aperiam", "atque", "beatae", "commodi", "consequatur", "corporis",
    "culpa", "cumque", "debitis", "delectus", "deserunt", "dicta", "dolor", "dolore",
    "doloribus", "ducimus", "earum", "eius", "enim", "error", "esse", "eveniet", "facere",
    "fugiat", "harum", "illum", "impedit", "incidunt", "ipsa", "ipsum", "iure", "labore",
    "laboriosam", "laudantium", "magnam", "maxime", "minima", "modi", "molestiae", "nemo",
    "nihil", "nobis", "numquam", "officia", "omnis", "optio", "pariatur", "perferendis",
    "placeat", "possimus", "quaerat", "quibusdam", "quidem", "quis", "ratione", "recusandae",
    "rem", "repellat", "saepe", "sapiente", "sequi", "similique", "sint", "soluta", "suscipit",
    "tempora", "tenetur", "ullam", "unde", "vel", "velit", "veniam", "veritatis", "vitae",
    "voluptas", "voluptatem",
];

const SURNAMES: &[&str] = &[
    "Abbott", "Barton", "Crist", "Dickens", "Ernser", "Feest", "Gleason", "Hahn", "Hermiston",
    "Jacobs", "Kuhn", "Larkin", "Mertz", "Nolan", "Okuneva", "Pfeffer", "Quigley", "Rutherford",
    "Schmitt", "Towne", "Upton", "Volkman", "Wisoky", "Yundt", "Zieme",
];

const COMPANY_SUFFIXES: &[&str] = &["Group", "Inc", "LLC", "and Sons", "Ventures", "Partners"];

const DOMAIN_TLDS: &[&str] = &["com", "net", "org", "info", "biz"];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A capitalised sentence of `min..=max` words ending in a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, min_words: usize, max_words: usize) -> String {
    let count = uniform_int(rng, min_words.max(1) as u64, max_words.max(min_words).max(1) as u64);
    let words: Vec<&str> = (0..count).map(|_| *pick(rng, WORDS)).collect();
    format!("{}.", capitalize(&words.join(" ")))
}

/// `count` sentences of 3 to 10 words joined by spaces.
pub fn sentences<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| sentence(rng, 3, 10))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A company name such as "Feest LLC" or "Hahn, Mertz and Upton".
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let a = pick(rng, SURNAMES);
    match uniform_int(rng, 0, 2) {
        0 => format!("{a} {}", pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{a} - {}", pick(rng, SURNAMES)),
        _ => format!("{a}, {} and {}", pick(rng, SURNAMES), pick(rng, SURNAMES)),
    }
}

pub fn url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let host = pick(rng, SURNAMES).to_lowercase();
    format!("https://{host}.{}/", pick(rng, DOMAIN_TLDS))
}

use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::model::trip::TripDraft;

pub const TRIP_KEYS: [&str; 7] = ["date", "from", "to", "purpose", "fuel", "toll", "km"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub words: String,
    pub metadata: HashMap<String, String>,
}

/// Splits `key:value` tokens from free words.
///
/// Only the first `:` separates, so `from:Seoul:Station` keeps `Seoul:Station`
/// as the value. A token with an empty key (`:foo`) is treated as a word.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        words.push(arg.as_str());
    }

    ParsedInput {
        words: words.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Builds a draft from `key:value` arguments. Keys may be abbreviated to any
/// unambiguous prefix; free words become the purpose unless `purpose:` is given.
pub fn draft_from_args(args: &[String]) -> Result<TripDraft> {
    let parsed = parse_args(args);
    let mut draft = TripDraft::default();

    for (key, value) in parsed.metadata {
        let field = match expand_key(&key, &TRIP_KEYS)?.as_str() {
            "date" => &mut draft.date,
            "from" => &mut draft.from,
            "to" => &mut draft.to,
            "purpose" => &mut draft.purpose,
            "fuel" => &mut draft.fuel_cost,
            "toll" => &mut draft.toll_cost,
            _ => &mut draft.distance_km,
        };
        *field = value;
    }

    if draft.purpose.is_empty() {
        draft.purpose = parsed.words;
    }
    Ok(draft)
}

/// Turns user-entered amount text into a number. Decimal and exponent
/// forms parse as usual, unsigned `0x`/`0o`/`0b` literals by their radix.
/// Anything that does not parse to a finite value counts as zero.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let parsed = match parse_prefixed(trimmed) {
        Some(n) => Some(n),
        None => trimmed.parse::<f64>().ok(),
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

fn parse_prefixed(text: &str) -> Option<f64> {
    let radix = match text.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        // "0x" alone is not a number
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Splits an input line into words. Single or double quotes group words,
/// so `from:"Seoul Station"` stays one argument; the quotes are dropped.
pub fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    // An unclosed quote runs to the end of the line
    if in_word {
        words.push(current);
    }
    words
}

//! Environment variable validation with typo suggestions
//!
//! Invalid values never abort a deploy: they produce a warning naming the
//! variable, a "did you mean" hint, and the default is used instead.

use std::io::Write;

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, writing a warning to `writer` and returning `default` on failure
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, default: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let hint = closest_match(&value.to_lowercase(), self.valid_values)
            .map(|candidate| format!(". Did you mean '{}'?", candidate))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }
}

/// Closest candidate within two edits, excluding exact matches
pub fn closest_match<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(input, candidate)))
        .filter(|(_, dist)| (1..=2).contains(dist))
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein edit distance over chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = Vec::with_capacity(b.len() + 1);
        curr.push(i + 1);
        for (j, bc) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != *bc);
            curr.push(substitution.min(prev[j + 1] + 1).min(curr[j] + 1));
        }
        prev = curr;
    }

    prev[b.len()]
}

//! Environment variable validation with helpful error messages
//!
//! Invalid values produce a warning with a typo suggestion and fall back to
//! the default instead of aborting.

use std::io::Write;

/// Checks one `SITEPUSH_*` variable against its accepted values.
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

    /// Parse `value`; on failure write a warning to `warn` and return `default`.
    pub fn parse_or_warn<T>(
        &self,
        value: &str,
        parse: impl Fn(&str) -> Option<T>,
        default: T,
        warn: &mut impl Write,
    ) -> T {
        if let Some(parsed) = parse(value) {
            return parsed;
        }

        let hint = closest(&value.to_lowercase(), self.valid_values)
            .map(|s| format!(". Did you mean '{s}'?"))
            .unwrap_or_default();
        let _ = writeln!(warn, "Warning: Invalid {} value '{value}'{hint}", self.var_name);
        let _ = writeln!(warn, "Valid values: {}", self.valid_values.join(", "));
        default
    }
}

/// The candidate within two edits of `input`, if any. Exact matches are not
/// suggestions.
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .filter(|&(_, dist)| (1..=2).contains(&dist))
        .min_by_key(|&(_, dist)| dist)
        .map(|(c, _)| c)
}

/// Edit distance over chars, one row at a time.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}

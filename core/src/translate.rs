//! Solver-claim translation back to named variables.
//!
//! The external toolchain numbers variables for DIMACS; its resolve file
//! maps each number back to a name (`1  signifies a_0`). A satisfying claim
//! lists signed literals on its second line. Translation stops at the first
//! literal whose magnitude has no name: everything past it is
//! solver-internal auxiliary state, and the silent truncation is how callers
//! detect the end of the named assignment.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

/// Header lines preceding the assignments in a resolve file.
const RESOLVE_HEADER_LINES: usize = 5;

static RESOLVE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+signifies\s+(.+)$").unwrap());

/// DIMACS-number-to-name map parsed from a solver resolve file.
#[derive(Debug, Default, Clone)]
pub struct ResolveMap {
    names: HashMap<u64, String>,
}

impl ResolveMap {
    /// Parses resolve-file text, skipping the header lines. Lines that do
    /// not match the `N signifies name` shape are ignored.
    pub fn parse(text: &str) -> Self {
        let mut names = HashMap::new();
        for line in text.lines().skip(RESOLVE_HEADER_LINES) {
            if let Some(caps) = RESOLVE_LINE.captures(line)
                && let Ok(number) = caps[1].parse::<u64>()
            {
                names.insert(number, caps[2].to_string());
            }
        }
        Self { names }
    }

    /// Name of the given DIMACS variable number, if mapped.
    pub fn get(&self, number: u64) -> Option<&str> {
        self.names.get(&number).map(String::as_str)
    }

    /// Number of mapped variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u64, String)> for ResolveMap {
    fn from_iter<I: IntoIterator<Item = (u64, String)>>(iter: I) -> Self {
        Self { names: iter.into_iter().collect() }
    }
}

/// Translates a claim file's assignment line into `name=0` / `name=1` lines.
///
/// Reads the second line of `claim` and walks its whitespace-separated
/// signed literals: a negative mapped literal yields `name=0`, a positive
/// mapped literal yields `name=1`, and the first unmapped literal ends the
/// translation (the DIMACS terminating `0` is never mapped, so a
/// well-formed claim line terminates itself).
pub fn translate_claim(claim: &str, map: &ResolveMap) -> Result<Vec<String>, Error> {
    let line = claim.lines().nth(1).ok_or(Error::MissingClaimLine)?;
    let mut assignments = Vec::new();
    for token in line.split_whitespace() {
        let literal: i64 = token
            .parse()
            .map_err(|_| Error::InvalidClaimToken(token.to_string()))?;
        match map.get(literal.unsigned_abs()) {
            Some(name) if literal < 0 => assignments.push(format!("{name}=0")),
            Some(name) => assignments.push(format!("{name}=1")),
            None => break,
        }
    }
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> ResolveMap {
        [(1, "a_0".to_string()), (2, "a_1".to_string())].into_iter().collect()
    }

    #[test]
    fn claim_round_trip() {
        let out = translate_claim("SAT\n-1 2\n", &small_map()).unwrap();
        assert_eq!(out.join("\n"), "a_0=0\na_1=1");
    }

    #[test]
    fn translation_stops_at_first_unmapped_literal() {
        let out = translate_claim("SAT\n-1 3 2\n", &small_map()).unwrap();
        assert_eq!(out, ["a_0=0"]);
    }

    #[test]
    fn dimacs_terminator_ends_translation() {
        let out = translate_claim("SAT\n1 -2 0\n", &small_map()).unwrap();
        assert_eq!(out, ["a_0=1", "a_1=0"]);
    }

    #[test]
    fn claim_without_assignment_line_is_an_error() {
        assert!(matches!(
            translate_claim("SAT\n", &small_map()),
            Err(Error::MissingClaimLine)
        ));
    }

    #[test]
    fn non_integer_token_is_an_error() {
        assert!(matches!(
            translate_claim("SAT\n-1 x2\n", &small_map()),
            Err(Error::InvalidClaimToken(_))
        ));
    }

    #[test]
    fn resolve_parsing_skips_header_and_junk() {
        let text = "c resolve\nc\nc\nc\nc\n1  signifies a_0\nnot a mapping\n2\tsignifies q_3\n";
        let map = ResolveMap::parse(text);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1), Some("a_0"));
        assert_eq!(map.get(2), Some("q_3"));
    }

    #[test]
    fn resolve_header_hides_early_mappings() {
        // A mapping inside the five header lines is part of the header.
        let text = "1  signifies a_0\nc\nc\nc\nc\n2  signifies a_1\n";
        let map = ResolveMap::parse(text);
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(2), Some("a_1"));
    }
}

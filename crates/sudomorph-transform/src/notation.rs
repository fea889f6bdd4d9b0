//! Notation parsers for permutation pairs.
//!
//! Users describe permutations in one of two small grammars:
//!
//! - **Pair lists**: comma-separated `from to` or `from-to` chunks, e.g.
//!   `"6 8,5-7"`.
//! - **Cycle notation**: parenthesized groups, e.g. `"(1 2 3)(4 5)"`, where
//!   a cycle `(a b c)` emits `a→b, b→c, c→a`.
//!
//! Each parser reports a single user-displayable error for the whole input;
//! a malformed field is fatal to that field only, never to other,
//! independently specified fields.

use crate::pair::{PairSeq, PermutationPair};

/// Errors produced by the notation parsers and the permutation validity
/// check. Each message is displayed to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NotationError {
    /// A pair-list chunk did not match `digit (whitespace | -) digit`.
    #[display("Use comma-separated pairs like 1 2,3-4.")]
    PairSyntax,
    /// No parenthesized groups, unbalanced or nested parentheses, a bad
    /// token inside a group, or stray text outside all groups.
    #[display("Use cycle notation like (1 2 3)(4 5).")]
    CycleSyntax,
    /// A source index appeared in more than one pair.
    #[display("Each source index can only appear once.")]
    DuplicateSource,
    /// A destination index appeared in more than one pair.
    #[display("Each destination index can only appear once.")]
    DuplicateDestination,
}

/// Parses a comma-separated pair list such as `"6 8,5-7"`.
///
/// Each non-empty trimmed chunk must be a digit 1-9, then either one or
/// more whitespace characters or a literal `-`, then a digit 1-9. Empty
/// input yields an empty sequence.
///
/// # Errors
///
/// Returns [`NotationError::PairSyntax`] if any chunk fails to match.
///
/// # Examples
///
/// ```
/// use sudomorph_transform::{PermutationPair, parse_pair_list};
///
/// let pairs = parse_pair_list("6 8,5-7")?;
/// assert_eq!(pairs.as_slice(), &[
///     PermutationPair::new(6, 8),
///     PermutationPair::new(5, 7),
/// ]);
///
/// assert!(parse_pair_list("").unwrap().is_empty());
/// assert!(parse_pair_list("12").is_err());
/// # Ok::<(), sudomorph_transform::NotationError>(())
/// ```
pub fn parse_pair_list(input: &str) -> Result<PairSeq, NotationError> {
    let mut pairs = PairSeq::new();
    for chunk in input.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let pair = parse_pair_chunk(chunk).ok_or(NotationError::PairSyntax)?;
        pairs.push(pair);
    }
    Ok(pairs)
}

/// Parses one trimmed pair chunk: digit, whitespace-run or `-`, digit.
fn parse_pair_chunk(chunk: &str) -> Option<PermutationPair> {
    let mut chars = chunk.chars();
    let from = digit_1_9(chars.next()?)?;

    let rest = chars.as_str();
    let rest = if let Some(stripped) = rest.strip_prefix('-') {
        stripped
    } else {
        let stripped = rest.trim_start();
        if stripped.len() == rest.len() {
            return None; // no separator between the digits
        }
        stripped
    };

    let mut chars = rest.chars();
    let to = digit_1_9(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(PermutationPair::new(from, to))
}

/// Parses cycle notation such as `"(1 2 3)(4 5)"`.
///
/// Every parenthesized group is a cycle whose elements are single digits
/// 1-9 separated by whitespace or commas. A cycle `(a b c)` emits one pair
/// per adjacent element including the wrap-around pair, so `a→b, b→c, c→a`.
/// A group with fewer than two distinct values is an identity and emits
/// nothing. Text outside all groups must reduce to nothing after stripping
/// commas and whitespace.
///
/// # Errors
///
/// Returns [`NotationError::CycleSyntax`] if there are no groups, the
/// parentheses are unbalanced or nested, a group token is not a single
/// digit 1-9, or stray text remains outside the groups.
///
/// # Examples
///
/// ```
/// use sudomorph_transform::{PermutationPair, parse_cycles};
///
/// let pairs = parse_cycles("(1 2 3)(4 5)")?;
/// assert_eq!(pairs.as_slice(), &[
///     PermutationPair::new(1, 2),
///     PermutationPair::new(2, 3),
///     PermutationPair::new(3, 1),
///     PermutationPair::new(4, 5),
///     PermutationPair::new(5, 4),
/// ]);
/// # Ok::<(), sudomorph_transform::NotationError>(())
/// ```
pub fn parse_cycles(input: &str) -> Result<PairSeq, NotationError> {
    let mut groups: Vec<&str> = Vec::new();
    let mut outside_ok = true;
    let mut group_start: Option<usize> = None;

    for (i, ch) in input.char_indices() {
        match ch {
            '(' => {
                if group_start.is_some() {
                    return Err(NotationError::CycleSyntax);
                }
                group_start = Some(i + 1);
            }
            ')' => {
                let Some(start) = group_start.take() else {
                    return Err(NotationError::CycleSyntax);
                };
                groups.push(&input[start..i]);
            }
            _ => {
                if group_start.is_none() && !ch.is_whitespace() && ch != ',' {
                    outside_ok = false;
                }
            }
        }
    }
    if group_start.is_some() || groups.is_empty() || !outside_ok {
        return Err(NotationError::CycleSyntax);
    }

    let mut pairs = PairSeq::new();
    for group in groups {
        let values = parse_cycle_group(group)?;

        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 2 {
            continue; // a 1-cycle is the identity
        }

        for (i, &from) in values.iter().enumerate() {
            let to = values[(i + 1) % values.len()];
            pairs.push(PermutationPair::new(from, to));
        }
    }
    Ok(pairs)
}

/// Splits a group body into single-digit elements.
fn parse_cycle_group(group: &str) -> Result<Vec<u8>, NotationError> {
    let mut values = Vec::new();
    for token in group.split(|ch: char| ch.is_whitespace() || ch == ',') {
        if token.is_empty() {
            continue;
        }
        let mut chars = token.chars();
        let value = chars
            .next()
            .and_then(digit_1_9)
            .ok_or(NotationError::CycleSyntax)?;
        if chars.next().is_some() {
            return Err(NotationError::CycleSyntax);
        }
        values.push(value);
    }
    Ok(values)
}

fn digit_1_9(ch: char) -> Option<u8> {
    match ch {
        '1'..='9' => Some(ch as u8 - b'0'),
        _ => None,
    }
}

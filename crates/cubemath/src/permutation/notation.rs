//! Parser for disjoint-cycle notation.

use nom::character::complete::{char, digit1, multispace0, multispace1};
use nom::combinator::{all_consuming, cut, map_res};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};

use super::PermutationError;

/// Parses cycle notation such as `(0 1 2)(5 6)` into a list of cycles,
/// without checking whether the cycles are disjoint.
///
/// Whitespace is allowed between cycles and around the contents of each
/// cycle. The empty string parses to an empty list.
pub fn parse_cycles(s: &str) -> Result<Vec<Vec<usize>>, PermutationError> {
    match all_consuming(delimited(multispace0, many0(terminated(cycle, multispace0)), multispace0))
        .parse(s)
    {
        Ok((_remaining_input, cycles)) => Ok(cycles),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(syntax_error(s, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(syntax_error(s, "")),
    }
}

fn syntax_error(full_input: &str, remaining_input: &str) -> PermutationError {
    PermutationError::Syntax {
        offset: full_input.len() - remaining_input.len(),
        found: match remaining_input.chars().next() {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        },
    }
}

/// Parser for one parenthesized cycle. Example: `(0 1 2)`
///
/// Errors after the opening parenthesis are reported where they occur.
fn cycle(s: &str) -> IResult<&str, Vec<usize>> {
    delimited(
        terminated(char('('), multispace0),
        cut(separated_list1(multispace1, index)),
        cut(preceded(multispace0, char(')'))),
    )
    .parse(s)
}

/// Parser for a nonnegative decimal index.
fn index(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(s)
}

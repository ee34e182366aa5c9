//! Parser for move notation such as `R U2 R' U'`.

use nom::character::complete::{char, digit1, multispace0, multispace1, satisfy};
use nom::combinator::{all_consuming, map_opt, map_res, opt};
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use thiserror::Error;

use crate::{BaseMove, Move};

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The notation could not be parsed.
    #[error("invalid move notation at byte {offset}: unexpected {found}")]
    Syntax {
        /// Byte offset of the first unparsable character.
        offset: usize,
        /// Description of what was found there.
        found: String,
    },
}

/// Parses a whitespace-separated sequence of moves. Each move gets a fresh
/// [`crate::MoveId`].
pub fn parse_moves(s: &str) -> Result<Vec<Move>, NotationError> {
    run(s, delimited(multispace0, separated_list0(multispace1, move_token), multispace0))
}

/// Parses a single move, surrounded by optional whitespace.
pub(crate) fn parse_move(s: &str) -> Result<Move, NotationError> {
    run(s, delimited(multispace0, move_token, multispace0))
}

fn run<'a, O>(
    s: &'a str,
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> Result<O, NotationError> {
    match all_consuming(parser).parse(s) {
        Ok((_remaining_input, output)) => Ok(output),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(syntax_error(s, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(syntax_error(s, "")),
    }
}

fn syntax_error(full_input: &str, remaining_input: &str) -> NotationError {
    NotationError::Syntax {
        offset: full_input.len() - remaining_input.len(),
        found: match remaining_input.chars().next() {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        },
    }
}

/// Parser for one move. Examples: `R`, `U'`, `M2`, `x3'`
fn move_token(s: &str) -> IResult<&str, Move> {
    (base_move, opt(count), opt(char('\'')))
        .map(|(base, count, prime)| {
            let exponent = count.unwrap_or(1);
            Move::new(base, if prime.is_some() { -exponent } else { exponent })
        })
        .parse(s)
}

fn base_move(s: &str) -> IResult<&str, BaseMove> {
    map_opt(satisfy(|c| c.is_ascii_alphabetic()), BaseMove::from_symbol).parse(s)
}

fn count(s: &str) -> IResult<&str, i32> {
    map_res(digit1, str::parse::<i32>).parse(s)
}

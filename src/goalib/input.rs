use std::str::FromStr;

use nom::{
    branch::alt,
    character::complete::multispace1,
    combinator::{eof, peek},
    sequence::terminated,
    IResult,
};

use crate::error::SelectError;
use crate::triplet::{Quotas, Triplet};

/// A parsed instance: the three quotas and the triplets in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub quotas: Quotas,
    pub triplets: Vec<Triplet>,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn parse_integer(s: &str) -> IResult<&str, i64> {
    terminated(
        nom::character::complete::i64,
        peek(alt((multispace1, eof))),
    )(s)
}

struct Tokens<'a> {
    source: &'a str,
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn next_integer(&mut self, what: &str) -> Result<i64, SelectError> {
        self.rest = self.rest.trim_start_matches(is_separator);
        let offset = self.offset();
        if self.rest.is_empty() {
            return Err(SelectError::Parse {
                offset,
                message: format!("expected {}, found end of input", what),
            });
        }
        match parse_integer(self.rest) {
            Ok((rest, value)) => {
                self.rest = rest;
                Ok(value)
            }
            Err(_) => {
                let token = self.rest.split(is_separator).next().unwrap_or(self.rest);
                Err(SelectError::Parse {
                    offset,
                    message: format!("expected integer for {}, found {:?}", what, token),
                })
            }
        }
    }

    fn unconsumed(&self) -> &'a str {
        self.rest.trim_matches(is_separator)
    }
}

impl Problem {
    pub fn new(quotas: Quotas, triplets: Vec<Triplet>) -> Self {
        Self { quotas, triplets }
    }

    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// Reads `n`, then `x y z`, then `n` triplets `a b c`. Anything after the
    /// last triplet is ignored.
    pub fn parse(s: &str) -> Result<Self, SelectError> {
        let mut tokens = Tokens::new(s);
        let n = tokens.next_integer("n")?;
        let n = usize::try_from(n).map_err(|_| {
            SelectError::InvalidArgument(format!("n must be non-negative, got {}", n))
        })?;
        let quotas = Quotas::new(
            tokens.next_integer("quota x")?,
            tokens.next_integer("quota y")?,
            tokens.next_integer("quota z")?,
        );
        let mut triplets = Vec::new();
        for i in 0..n {
            let a = tokens.next_integer(&format!("field a of triplet {}", i))?;
            let b = tokens.next_integer(&format!("field b of triplet {}", i))?;
            let c = tokens.next_integer(&format!("field c of triplet {}", i))?;
            triplets.push(Triplet::new(a, b, c));
        }
        let leftover = tokens.unconsumed();
        if !leftover.is_empty() {
            log::debug!("ignoring {} bytes after the last triplet", leftover.len());
        }
        Ok(Self { quotas, triplets })
    }
}

impl FromStr for Problem {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Problem;
    use crate::error::SelectError;
    use crate::triplet::{Quotas, Triplet};

    #[test]
    fn test_parse_lines() {
        let problem = "3\n1 1 1\n5 1 1\n1 5 1\n1 1 5\n"
            .parse::<Problem>()
            .unwrap();
        assert_eq!(problem.quotas, Quotas::new(1, 1, 1));
        assert_eq!(
            problem.triplets,
            vec![
                Triplet::new(5, 1, 1),
                Triplet::new(1, 5, 1),
                Triplet::new(1, 1, 5)
            ]
        );
    }

    #[test]
    fn test_parse_any_whitespace() {
        let problem = Problem::parse("  2 \t 2 0 -1 4 0 0\r\n\n4 0 0 trailing junk").unwrap();
        assert_eq!(problem.quotas, Quotas::new(2, 0, -1));
        assert_eq!(problem.len(), 2);
        assert_eq!(problem.triplets[1], Triplet::new(4, 0, 0));
    }

    #[test]
    fn test_parse_empty() {
        let problem = Problem::parse("0 5 5 5").unwrap();
        assert!(problem.is_empty());
    }

    #[test]
    fn test_negative_n() {
        assert!(matches!(
            Problem::parse("-1 1 1 1"),
            Err(SelectError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_token() {
        match Problem::parse("2 1 1 1 4 0 0 4 0") {
            Err(SelectError::Parse { offset, message }) => {
                assert_eq!(offset, 17);
                assert!(message.contains("field c of triplet 1"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_token() {
        match Problem::parse("1 1 x 1 7 2 3") {
            Err(SelectError::Parse { offset, message }) => {
                assert_eq!(offset, 4);
                assert!(message.contains("\"x\""), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Problem::parse("1 1 0 0 7 2 3z"),
            Err(SelectError::Parse { offset: 12, .. })
        ));
    }
}

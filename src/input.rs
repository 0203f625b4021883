//! Reading problems from JSON or from plain whitespace-separated tokens.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Problem, Unit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemFile<T> {
    pub supply: Vec<T>,
    pub demand: Vec<T>,
    pub cost: Vec<Vec<T>>,
}

impl<T: Unit> ProblemFile<T> {
    pub fn into_problem(self) -> Result<Problem<T>> {
        Problem::from_rows(self.supply, self.demand, self.cost)
    }
}

impl<T: Unit> From<&Problem<T>> for ProblemFile<T> {
    fn from(problem: &Problem<T>) -> Self {
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            cost: problem
                .cost()
                .row_iter()
                .map(|r| r.iter().copied().collect())
                .collect(),
        }
    }
}

pub fn parse_json<T>(text: &str) -> Result<Problem<T>>
where
    T: Unit + for<'de> Deserialize<'de>,
{
    let file: ProblemFile<T> = serde_json::from_str(text)?;
    file.into_problem()
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn next<V: FromStr>(&mut self, what: &str) -> Result<V> {
        let position = self.position;
        self.position += 1;
        match self.inner.next() {
            Some(token) => token.parse().map_err(|_| Error::Parse {
                position,
                reason: format!("expected {what}, found {token:?}"),
            }),
            None => Err(Error::Parse {
                position,
                reason: format!("input ended while reading {what}"),
            }),
        }
    }

    fn many<V: FromStr>(&mut self, count: usize, what: &str) -> Result<Vec<V>> {
        (0..count).map(|_| self.next(what)).collect()
    }
}

/// Parses the plain token format.
pub fn parse_plain<T: Unit + FromStr>(text: &str) -> Result<Problem<T>> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
        position: 0,
    };
    let sources: usize = tokens.next("number of supply points")?;
    let supply = tokens.many(sources, "supply value")?;
    let destinations: usize = tokens.next("number of demand points")?;
    let demand = tokens.many(destinations, "demand value")?;
    let cost = (0..sources)
        .map(|_| tokens.many(destinations, "cost value"))
        .collect::<Result<Vec<_>>>()?;
    Problem::from_rows(supply, demand, cost)
}

/// Reads a problem file, choosing the format by the `.json` extension.
pub fn read<T>(path: impl AsRef<Path>) -> Result<Problem<T>>
where
    T: Unit + FromStr + for<'de> Deserialize<'de>,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
        parse_json(&text)
    } else {
        parse_plain(&text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_in_prompt_order() {
        let text = "3\n20 30 25\n3\n10 25 40\n8 6 10\n9 12 13\n14 9 16\n";
        let problem: Problem<i64> = parse_plain(text).unwrap();
        assert_eq!(problem.supply(), &[20, 30, 25]);
        assert_eq!(problem.demand(), &[10, 25, 40]);
        assert_eq!(problem.cost()[(2, 1)], 9);
    }

    #[test]
    fn plain_reports_bad_token() {
        let err = parse_plain::<i64>("2 5 x").unwrap_err();
        match err {
            Error::Parse { position, reason } => {
                assert_eq!(position, 2);
                assert!(reason.contains("\"x\""));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn plain_reports_truncated_input() {
        let err = parse_plain::<i64>("1 5 1 5").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn json_problem() {
        let problem: Problem<i32> =
            parse_json(r#"{"supply": [5, 5], "demand": [4, 6], "cost": [[1, 2], [3, 4]]}"#)
                .unwrap();
        assert_eq!(problem.sources(), 2);
        assert_eq!(ProblemFile::from(&problem).cost, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn json_ragged_table_is_rejected() {
        let err = parse_json::<i32>(r#"{"supply": [5, 5], "demand": [4, 6], "cost": [[1, 2], [3]]}"#)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}

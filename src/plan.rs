use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::{Config, Method, Problem, Solution, Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct Plan<T: Unit> {
    solutions: Vec<Solution<T>>,
}

impl<T: Unit> Plan<T> {
    pub fn solutions(&self) -> &[Solution<T>] {
        &self.solutions
    }

    pub fn get(&self, method: Method) -> Option<&Solution<T>> {
        self.solutions.iter().find(|s| s.method() == method)
    }

    /// Cheapest solution that ships everything; ties keep the earlier method.
    pub fn best(&self, problem: &Problem<T>) -> Option<&Solution<T>> {
        self.solutions
            .iter()
            .filter(|s| s.is_complete(problem))
            .fold(None, |best: Option<&Solution<T>>, s| match best {
                Some(b) if b.total_cost() <= s.total_cost() => Some(b),
                _ => Some(s),
            })
    }

    pub fn into_solutions(self) -> Vec<Solution<T>> {
        self.solutions
    }
}

/// Checks balance, then runs each configured method on its own copy of supply and demand.
///
/// An unbalanced problem runs no method at all.
pub fn solve<T: Unit>(problem: &Problem<T>, config: &Config) -> Result<Plan<T>> {
    if !problem.is_balanced() {
        let (supply, demand) = (problem.total_supply(), problem.total_demand());
        warn!("problem is not balanced: supply {supply}, demand {demand}");
        return Err(Error::Unbalanced {
            supply: supply.to_string(),
            demand: demand.to_string(),
        });
    }

    info!(
        "solving {}x{} problem with {} methods",
        problem.sources(),
        problem.destinations(),
        config.methods.len()
    );
    let solutions = config
        .methods
        .iter()
        .map(|&method| {
            let solution = method.solve(problem);
            debug!("{method}: total cost {}", solution.total_cost());
            solution
        })
        .collect();
    Ok(Plan { solutions })
}

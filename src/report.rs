use std::fmt::{self, Display, Formatter};

use nalgebra::DMatrix;

use crate::{Plan, Problem, Solution, Unit};

pub const UNBALANCED_NOTICE: &str = "The problem is not balanced!";

fn table<T: Unit>(f: &mut Formatter<'_>, cells: &DMatrix<T>, problem: &Problem<T>) -> fmt::Result {
    for (row, supply) in cells.row_iter().zip(problem.supply()) {
        for c in row.iter() {
            write!(f, "{c:>5} ")?;
        }
        writeln!(f, "| {supply:>5}")?;
    }
    writeln!(f, "{}---------", "-----".repeat(cells.ncols()))?;
    for d in problem.demand() {
        write!(f, "{d:>5} ")?;
    }
    writeln!(f)?;
    writeln!(f)
}

/// The cost table with supplies and demands in the margins.
pub struct CostTable<'a, T: Unit>(pub &'a Problem<T>);

impl<T: Unit> Display for CostTable<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transportation problem:")?;
        table(f, self.0.cost(), self.0)
    }
}

/// One solution's header, total cost and allocation table.
pub struct SolutionTable<'a, T: Unit>(pub &'a Problem<T>, pub &'a Solution<T>);

impl<T: Unit> Display for SolutionTable<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let SolutionTable(problem, solution) = self;
        writeln!(f, "{}", solution.method())?;
        writeln!(f, "Total distribution cost: {}", solution.total_cost())?;
        if solution.allocation().is_empty() {
            return writeln!(f, "No solution available.");
        }
        writeln!(f, "Solution:")?;
        table(f, solution.allocation(), problem)
    }
}

/// The cost table followed by every solution in the plan.
pub struct PlanReport<'a, T: Unit>(pub &'a Problem<T>, pub &'a Plan<T>);

impl<T: Unit> Display for PlanReport<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let PlanReport(problem, plan) = self;
        write!(f, "{}", CostTable(problem))?;
        for solution in plan.solutions() {
            write!(f, "{}", SolutionTable(problem, solution))?;
        }
        Ok(())
    }
}

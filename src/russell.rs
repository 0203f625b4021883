//! Russell's approximation method.

use log::{debug, trace, warn};

use crate::tableau::Tableau;
use crate::{Axis, Method, Problem, Scanner, Solution, Termination, Unit};

/// Best saving among open cells, or `None` when no open cell has one.
fn max_saving<T: Unit>(
    scanner: &Scanner<'_, T>,
    problem: &Problem<T>,
    tableau: &Tableau<T>,
) -> Option<(usize, usize, T)> {
    let rows_done = tableau.done(Axis::Row);
    let cols_done = tableau.done(Axis::Column);
    let mut best: Option<(usize, usize, T)> = None;
    for row in tableau.open(Axis::Row) {
        for col in tableau.open(Axis::Column) {
            let (Some(row_min), Some(col_min)) = (
                scanner.min_excluding(Axis::Row, row, col, cols_done),
                scanner.min_excluding(Axis::Column, col, row, rows_done),
            ) else {
                continue;
            };
            // Problem bounds twice the largest cost by T::MAX
            let saving = row_min + col_min - problem.cost()[(row, col)];
            if best.map_or(true, |(_, _, b)| saving > b) {
                best = Some((row, col, saving));
            }
        }
    }
    best
}

pub fn solve<T: Unit>(problem: &Problem<T>) -> Solution<T> {
    let scanner = Scanner::new(problem.cost());
    let mut tableau = Tableau::new(problem);
    let mut termination = Termination::Exhausted;

    while !tableau.is_done() {
        let Some((row, col, saving)) = max_saving(&scanner, problem, &tableau) else {
            warn!(
                "russell stalled with {} rows and {} columns open",
                tableau.open(Axis::Row).count(),
                tableau.open(Axis::Column).count()
            );
            termination = Termination::Stalled;
            break;
        };
        trace!("({row}, {col}) wins with saving {saving}");
        tableau.ship(row, col);
    }

    let (allocation, shipments) = tableau.into_parts();
    debug!("russell placed {} shipments", shipments.len());
    Solution::new(
        Method::Russell,
        allocation,
        shipments,
        termination,
        problem.cost(),
    )
}

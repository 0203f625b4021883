use log::trace;
use nalgebra::DMatrix;

use crate::{Axis, Problem, Shipment, Unit};

/// Working state of one iterative solver run.
///
/// Holds its own copies of supply and demand; the problem itself is never touched.
#[derive(Debug, Clone)]
pub(crate) struct Tableau<T: Unit> {
    supply: Vec<T>,
    demand: Vec<T>,
    rows_done: Vec<bool>,
    cols_done: Vec<bool>,
    allocation: DMatrix<T>,
    shipments: Vec<Shipment<T>>,
}

impl<T: Unit> Tableau<T> {
    pub(crate) fn new(problem: &Problem<T>) -> Self {
        let (m, n) = (problem.sources(), problem.destinations());
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            rows_done: vec![false; m],
            cols_done: vec![false; n],
            allocation: DMatrix::zeros(m, n),
            shipments: Vec::with_capacity(m + n),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.rows_done.iter().chain(&self.cols_done).all(|&d| d)
    }

    /// Exhaustion flags of every line along `axis`.
    pub(crate) fn done(&self, axis: Axis) -> &[bool] {
        match axis {
            Axis::Row => &self.rows_done,
            Axis::Column => &self.cols_done,
        }
    }

    /// Indices of the lines along `axis` that are still open.
    pub(crate) fn open(&self, axis: Axis) -> impl Iterator<Item = usize> + '_ {
        self.done(axis)
            .iter()
            .enumerate()
            .filter(|(_, &d)| !d)
            .map(|(k, _)| k)
    }

    /// Ships as much as possible on `(row, col)` and retires whichever side runs out.
    pub(crate) fn ship(&mut self, row: usize, col: usize) -> T {
        let quantity = self.supply[row].min(self.demand[col]);
        self.allocation[(row, col)] = quantity;
        self.supply[row] = self.supply[row] - quantity;
        self.demand[col] = self.demand[col] - quantity;
        if self.supply[row].is_zero() {
            self.rows_done[row] = true;
        }
        if self.demand[col].is_zero() {
            self.cols_done[col] = true;
        }
        trace!("ship {quantity} on ({row}, {col})");
        self.shipments.push(Shipment { row, col, quantity });
        quantity
    }

    /// Marks a line exhausted without shipping anything on it.
    pub(crate) fn retire(&mut self, axis: Axis, index: usize) {
        let remaining = match axis {
            Axis::Row => self.supply[index],
            Axis::Column => self.demand[index],
        };
        trace!("retire {axis:?} {index} with {remaining} left");
        match axis {
            Axis::Row => self.rows_done[index] = true,
            Axis::Column => self.cols_done[index] = true,
        }
    }

    pub(crate) fn into_parts(self) -> (DMatrix<T>, Vec<Shipment<T>>) {
        (self.allocation, self.shipments)
    }
}

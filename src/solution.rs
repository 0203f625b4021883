use nalgebra::DMatrix;
use serde::{Serialize, Serializer};

use crate::{cost, Method, Problem, Unit};

/// One allocation step, in the order a solver made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shipment<T> {
    pub row: usize,
    pub col: usize,
    pub quantity: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every row and column was exhausted.
    Exhausted,
    /// No cell had a defined saving while lines were still open. Only
    /// Russell's method stops this way; the allocation may be short.
    Stalled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "T: Unit + Serialize")]
pub struct Solution<T: Unit> {
    method: Method,
    #[serde(serialize_with = "by_rows")]
    allocation: DMatrix<T>,
    shipments: Vec<Shipment<T>>,
    termination: Termination,
    total_cost: T,
}

fn by_rows<T, S>(matrix: &DMatrix<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Unit + Serialize,
    S: Serializer,
{
    let rows: Vec<Vec<T>> = matrix
        .row_iter()
        .map(|r| r.iter().copied().collect())
        .collect();
    rows.serialize(serializer)
}

impl<T: Unit> Solution<T> {
    pub(crate) fn new(
        method: Method,
        allocation: DMatrix<T>,
        shipments: Vec<Shipment<T>>,
        termination: Termination,
        costs: &DMatrix<T>,
    ) -> Self {
        let total_cost = cost::total_cost(&allocation, costs);
        Self {
            method,
            allocation,
            shipments,
            termination,
            total_cost,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn allocation(&self) -> &DMatrix<T> {
        &self.allocation
    }

    pub fn shipments(&self) -> &[Shipment<T>] {
        &self.shipments
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Quantity shipped out of each source.
    pub fn row_sums(&self) -> Vec<T> {
        self.allocation
            .row_iter()
            .map(|r| r.iter().fold(T::zero(), |acc, &q| acc + q))
            .collect()
    }

    /// Quantity delivered to each destination.
    pub fn col_sums(&self) -> Vec<T> {
        self.allocation
            .column_iter()
            .map(|c| c.iter().fold(T::zero(), |acc, &q| acc + q))
            .collect()
    }

    /// No source ships more than its supply and no destination receives more than its demand.
    pub fn is_feasible(&self, problem: &Problem<T>) -> bool {
        self.allocation.iter().all(|q| !q.is_negative())
            && self.row_sums().iter().zip(problem.supply()).all(|(s, cap)| s <= cap)
            && self.col_sums().iter().zip(problem.demand()).all(|(s, req)| s <= req)
    }

    /// Every supply shipped and every demand met exactly.
    pub fn is_complete(&self, problem: &Problem<T>) -> bool {
        self.row_sums() == problem.supply() && self.col_sums() == problem.demand()
    }

    /// Number of cells carrying a positive quantity.
    pub fn occupied_cells(&self) -> usize {
        self.allocation.iter().filter(|q| q.is_positive()).count()
    }

    /// Fewer occupied cells than the `m + n - 1` of a non-degenerate basic solution.
    pub fn is_degenerate(&self) -> bool {
        let (m, n) = self.allocation.shape();
        self.occupied_cells() < (m + n).saturating_sub(1)
    }
}

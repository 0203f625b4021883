use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::{balance, Unit};

/// Supplies, demands and the per-unit cost of every route.
///
/// Validated on construction and never mutated afterwards; solvers only read it.
///
/// Both totals, twice the largest cost and the larger total times the largest
/// cost all fit in `T`, so no saving, row or column sum, or total cost of a
/// feasible allocation can overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<T: Unit> {
    supply: DVector<T>,
    demand: DVector<T>,
    cost: DMatrix<T>,
    total_supply: T,
    total_demand: T,
}

impl<T: Unit> Problem<T> {
    pub fn new(supply: DVector<T>, demand: DVector<T>, cost: DMatrix<T>) -> Result<Self> {
        let (rows, cols) = cost.shape();
        if supply.is_empty() || demand.is_empty() {
            return Err(Error::Empty);
        }
        if rows != supply.len() || cols != demand.len() {
            return Err(Error::Shape {
                rows,
                cols,
                sources: supply.len(),
                destinations: demand.len(),
            });
        }

        let negative = |what, at: String, value: T| Error::Negative {
            what,
            at,
            value: value.to_string(),
        };
        if let Some((i, &s)) = supply.iter().enumerate().find(|(_, s)| s.is_negative()) {
            return Err(negative("supply", format!("source {i}"), s));
        }
        if let Some((j, &d)) = demand.iter().enumerate().find(|(_, d)| d.is_negative()) {
            return Err(negative("demand", format!("destination {j}"), d));
        }
        let mut max_cost = T::zero();
        for i in 0..rows {
            for j in 0..cols {
                let c = cost[(i, j)];
                if c.is_negative() {
                    return Err(negative("cost", format!("({i}, {j})"), c));
                }
                max_cost = max_cost.max(c);
            }
        }

        let overflow = |what| Error::Overflow { what };
        let total_supply = balance::total(supply.as_slice()).ok_or(overflow("total supply"))?;
        let total_demand = balance::total(demand.as_slice()).ok_or(overflow("total demand"))?;
        // a Russell saving adds two costs before subtracting a third
        max_cost
            .checked_add(&max_cost)
            .ok_or(overflow("twice the largest cost"))?;
        total_supply
            .max(total_demand)
            .checked_mul(&max_cost)
            .ok_or(overflow("total cost bound"))?;

        Ok(Self {
            supply,
            demand,
            cost,
            total_supply,
            total_demand,
        })
    }

    /// Builds a problem from plain vectors, rejecting a ragged cost table.
    pub fn from_rows(supply: Vec<T>, demand: Vec<T>, cost: Vec<Vec<T>>) -> Result<Self> {
        let expected = demand.len();
        if let Some((row, r)) = cost.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::Ragged {
                row,
                len: r.len(),
                expected,
            });
        }
        let flat: Vec<T> = cost.into_iter().flatten().collect();
        let rows = if expected == 0 { 0 } else { flat.len() / expected };
        Self::new(
            DVector::from_vec(supply),
            DVector::from_vec(demand),
            DMatrix::from_row_slice(rows, expected, &flat),
        )
    }

    pub fn supply(&self) -> &[T] {
        self.supply.as_slice()
    }

    pub fn demand(&self) -> &[T] {
        self.demand.as_slice()
    }

    pub fn cost(&self) -> &DMatrix<T> {
        &self.cost
    }

    /// Number of sources, `m`.
    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations, `n`.
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }

    pub fn is_balanced(&self) -> bool {
        self.total_supply == self.total_demand
    }

    pub fn total_supply(&self) -> T {
        self.total_supply
    }

    pub fn total_demand(&self) -> T {
        self.total_demand
    }
}

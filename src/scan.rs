use nalgebra::DMatrix;

use crate::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The axis that crosses this one.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// `(row, col)` of the cell at `offset` along line `index`.
    pub fn cell(self, index: usize, offset: usize) -> (usize, usize) {
        match self {
            Axis::Row => (index, offset),
            Axis::Column => (offset, index),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a, T: Unit> {
    cost: &'a DMatrix<T>,
}

impl<'a, T: Unit> Scanner<'a, T> {
    pub fn new(cost: &'a DMatrix<T>) -> Self {
        Self { cost }
    }

    /// Length of a line along `axis`, i.e. the extent of the crossing axis.
    fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.cost.ncols(),
            Axis::Column => self.cost.nrows(),
        }
    }

    /// `(offset, cost)` for every cell on the line whose crossing line is not excluded.
    fn eligible<'b>(
        &'b self,
        axis: Axis,
        index: usize,
        excluded: &'b [bool],
    ) -> impl Iterator<Item = (usize, T)> + 'b {
        let cost: &'b DMatrix<T> = self.cost;
        (0..self.len(axis))
            .filter(move |&k| !excluded[k])
            .map(move |k| (k, cost[axis.cell(index, k)]))
    }

    /// Second-smallest minus smallest eligible cost on the line.
    ///
    /// Zero when fewer than two cells are eligible. Equal minima give zero.
    pub fn penalty(&self, axis: Axis, index: usize, excluded: &[bool]) -> T {
        let mut first: Option<T> = None;
        let mut second: Option<T> = None;
        for (_, c) in self.eligible(axis, index, excluded) {
            if first.map_or(true, |f| c < f) {
                second = first;
                first = Some(c);
            } else if second.map_or(true, |s| c < s) {
                second = Some(c);
            }
        }
        match (first, second) {
            (Some(f), Some(s)) => s - f,
            _ => T::zero(),
        }
    }

    /// Smallest eligible cost on the line other than the one at `skip`.
    pub fn min_excluding(
        &self,
        axis: Axis,
        index: usize,
        skip: usize,
        excluded: &[bool],
    ) -> Option<T> {
        self.eligible(axis, index, excluded)
            .filter(|&(k, _)| k != skip)
            .map(|(_, c)| c)
            .min()
    }

    /// Offset of the cheapest eligible cell; the lowest offset wins ties.
    pub fn argmin(&self, axis: Axis, index: usize, excluded: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;
        for (k, c) in self.eligible(axis, index, excluded) {
            if best.map_or(true, |(_, b)| c < b) {
                best = Some((k, c));
            }
        }
        best.map(|(k, _)| k)
    }
}

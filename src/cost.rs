use nalgebra::DMatrix;

use crate::Unit;

/// Sum of `allocation[(i, j)] * cost[(i, j)]` over every cell.
///
/// Cannot overflow for a feasible allocation of a [`Problem`](crate::Problem),
/// whose construction bounds total supply times the largest cost.
///
/// # Panics
///
/// When the two matrices differ in shape.
pub fn total_cost<T: Unit>(allocation: &DMatrix<T>, cost: &DMatrix<T>) -> T {
    assert_eq!(
        allocation.shape(),
        cost.shape(),
        "allocation and cost must have the same shape"
    );
    allocation
        .iter()
        .zip(cost.iter())
        .fold(T::zero(), |acc, (&q, &c)| acc + q * c)
}

#[cfg(test)]
mod test {
    use nalgebra::DMatrix;

    use super::*;

    #[test]
    fn diagonal() {
        let allocation = DMatrix::from_row_slice(2, 2, &[2, 0, 0, 3]);
        let cost = DMatrix::from_row_slice(2, 2, &[1, 5, 5, 1]);
        assert_eq!(total_cost(&allocation, &cost), 5);
    }

    #[test]
    fn rectangular() {
        #[rustfmt::skip]
        let allocation = DMatrix::from_row_slice(2, 3, &[
            1, 0, 4,
            0, 2, 0,
        ]);
        #[rustfmt::skip]
        let cost = DMatrix::from_row_slice(2, 3, &[
            3, 9, 2,
            7, 5, 1,
        ]);
        assert_eq!(total_cost(&allocation, &cost), 3 + 8 + 10);
    }

    #[test]
    fn empty_allocation_costs_nothing() {
        let allocation = DMatrix::<i64>::zeros(3, 2);
        let cost = DMatrix::from_element(3, 2, 9);
        assert_eq!(total_cost(&allocation, &cost), 0);
    }

    #[test]
    #[should_panic]
    fn shape_mismatch() {
        let allocation = DMatrix::<i64>::zeros(2, 2);
        let cost = DMatrix::<i64>::zeros(2, 3);
        total_cost(&allocation, &cost);
    }
}

use log::{debug, trace};
use nalgebra::DMatrix;

use crate::{Method, Problem, Shipment, Solution, Termination, Unit};

/// Fills cells from the top-left corner without looking at costs.
pub fn solve<T: Unit>(problem: &Problem<T>) -> Solution<T> {
    let (m, n) = (problem.sources(), problem.destinations());
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut allocation = DMatrix::zeros(m, n);
    let mut shipments = Vec::with_capacity(m + n);

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        let quantity = supply[i].min(demand[j]);
        allocation[(i, j)] = quantity;
        supply[i] = supply[i] - quantity;
        demand[j] = demand[j] - quantity;
        trace!("ship {quantity} on ({i}, {j})");
        shipments.push(Shipment {
            row: i,
            col: j,
            quantity,
        });

        // both cursors move on an exact tie, leaving a degenerate solution
        if supply[i].is_zero() {
            i += 1;
        }
        if demand[j].is_zero() {
            j += 1;
        }
    }

    debug!("north-west corner placed {} shipments", shipments.len());
    Solution::new(
        Method::NorthWestCorner,
        allocation,
        shipments,
        Termination::Exhausted,
        problem.cost(),
    )
}

#[cfg(test)]
mod test {
    use nalgebra::DMatrix;

    use super::*;

    #[test]
    fn staircase() {
        let problem = Problem::from_rows(
            vec![20, 30, 25],
            vec![10, 25, 40],
            vec![vec![8, 6, 10], vec![9, 12, 13], vec![14, 9, 16]],
        )
        .unwrap();
        let solution = solve(&problem);
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(3, 3, &[
            10, 10,  0,
             0, 15, 15,
             0,  0, 25,
        ]);
        assert_eq!(solution.allocation(), &expected);
        assert_eq!(solution.row_sums(), vec![20, 30, 25]);
        assert_eq!(solution.col_sums(), vec![10, 25, 40]);
        assert_eq!(solution.total_cost(), 915);
        assert!(solution.is_complete(&problem));
        assert!(!solution.is_degenerate());
    }

    #[test]
    fn tie_advances_both_cursors() {
        let problem =
            Problem::from_rows(vec![5, 5], vec![5, 5], vec![vec![1, 2], vec![3, 4]]).unwrap();
        let solution = solve(&problem);
        assert_eq!(
            solution.allocation(),
            &DMatrix::from_row_slice(2, 2, &[5, 0, 0, 5])
        );
        assert_eq!(solution.shipments().len(), 2);
        assert!(solution.is_degenerate());
        assert!(solution.is_complete(&problem));
    }

    #[test]
    fn textbook_instance() {
        let problem = Problem::from_rows(
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
            vec![
                vec![19, 30, 50, 10],
                vec![70, 30, 40, 60],
                vec![40, 8, 70, 20],
            ],
        )
        .unwrap();
        let solution = solve(&problem);
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(3, 4, &[
            5, 2, 0,  0,
            0, 6, 3,  0,
            0, 0, 4, 14,
        ]);
        assert_eq!(solution.allocation(), &expected);
        assert_eq!(solution.total_cost(), 1015);
        assert_eq!(solution.termination(), Termination::Exhausted);
    }

    #[test]
    fn repeated_runs_match() {
        let problem =
            Problem::from_rows(vec![3, 7], vec![6, 4], vec![vec![2, 9], vec![4, 1]]).unwrap();
        let first = solve(&problem);
        let second = solve(&problem);
        assert_eq!(first, second);
        assert_eq!(problem.supply(), &[3, 7]);
    }
}

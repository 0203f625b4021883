use log::{debug, trace};

use crate::tableau::Tableau;
use crate::{Axis, Method, Problem, Scanner, Solution, Termination, Unit};

pub fn solve<T: Unit>(problem: &Problem<T>) -> Solution<T> {
    let scanner = Scanner::new(problem.cost());
    let mut tableau = Tableau::new(problem);

    while !tableau.is_done() {
        // rows before columns; only a strictly larger penalty displaces the pick
        let mut best: Option<(Axis, usize, T)> = None;
        for axis in [Axis::Row, Axis::Column] {
            for index in tableau.open(axis) {
                let penalty = scanner.penalty(axis, index, tableau.done(axis.cross()));
                if best.map_or(true, |(_, _, b)| penalty > b) {
                    best = Some((axis, index, penalty));
                }
            }
        }
        let Some((axis, index, penalty)) = best else {
            break;
        };
        trace!("{axis:?} {index} wins with penalty {penalty}");

        let cheapest = scanner.argmin(axis, index, tableau.done(axis.cross()));
        match cheapest {
            Some(offset) => {
                let (row, col) = axis.cell(index, offset);
                tableau.ship(row, col);
            }
            // only a line with nothing left can lose every counterpart
            None => tableau.retire(axis, index),
        }
    }

    let (allocation, shipments) = tableau.into_parts();
    debug!("vogel placed {} shipments", shipments.len());
    Solution::new(
        Method::Vogel,
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
    use crate::Shipment;

    fn textbook() -> Problem<i64> {
        Problem::from_rows(
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
            vec![
                vec![19, 30, 50, 10],
                vec![70, 30, 40, 60],
                vec![40, 8, 70, 20],
            ],
        )
        .unwrap()
    }

    #[test]
    fn textbook_instance() {
        let problem = textbook();
        let solution = solve(&problem);
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(3, 4, &[
            5, 0, 0,  2,
            0, 0, 7,  2,
            0, 8, 0, 10,
        ]);
        assert_eq!(solution.allocation(), &expected);
        assert_eq!(solution.total_cost(), 779);
        assert!(solution.is_complete(&problem));
        assert_eq!(
            solution.shipments()[0],
            Shipment {
                row: 2,
                col: 1,
                quantity: 8
            }
        );
    }

    #[test]
    fn four_by_five() {
        let problem = Problem::from_rows(
            vec![50, 60, 50, 50],
            vec![30, 20, 70, 30, 60],
            vec![
                vec![16, 16, 13, 22, 17],
                vec![14, 14, 13, 19, 15],
                vec![19, 19, 20, 23, 50],
                vec![50, 12, 50, 15, 11],
            ],
        )
        .unwrap();
        let solution = solve(&problem);
        #[rustfmt::skip]
        let expected = DMatrix::from_row_slice(4, 5, &[
             0,  0, 50,  0,  0,
             0,  0, 20,  0, 40,
            30, 20,  0,  0,  0,
             0,  0,  0, 30, 20,
        ]);
        assert_eq!(solution.allocation(), &expected);
        assert_eq!(solution.total_cost(), 3130);
        assert!(solution.is_complete(&problem));
    }

    #[test]
    fn row_wins_tied_penalty() {
        // row 1 and column 0 both have penalty 4
        let problem =
            Problem::from_rows(vec![6, 4], vec![5, 5], vec![vec![1, 4], vec![5, 1]]).unwrap();
        let solution = solve(&problem);
        assert_eq!(
            solution.shipments()[0],
            Shipment {
                row: 1,
                col: 1,
                quantity: 4
            }
        );
        assert_eq!(
            solution.allocation(),
            &DMatrix::from_row_slice(2, 2, &[5, 1, 0, 4])
        );
    }

    #[test]
    fn zero_demand_column_is_retired() {
        let problem = Problem::from_rows(vec![5], vec![5, 0], vec![vec![1, 2]]).unwrap();
        let solution = solve(&problem);
        assert_eq!(solution.allocation(), &DMatrix::from_row_slice(1, 2, &[5, 0]));
        assert_eq!(solution.shipments().len(), 1);
        assert!(solution.is_complete(&problem));
    }

    #[test]
    fn repeated_runs_match() {
        let problem = textbook();
        assert_eq!(solve(&problem), solve(&problem));
    }
}

use crate::Unit;

/// Sum of a slice of quantities, `None` if it overflows `T`.
pub fn total<T: Unit>(quantities: &[T]) -> Option<T> {
    quantities
        .iter()
        .try_fold(T::zero(), |acc, q| acc.checked_add(q))
}

/// Whether total supply equals total demand. Every solver requires this.
///
/// A side whose total overflows `T` never balances.
pub fn is_balanced<T: Unit>(supply: &[T], demand: &[T]) -> bool {
    match (total(supply), total(demand)) {
        (Some(s), Some(d)) => s == d,
        _ => false,
    }
}

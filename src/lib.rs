pub mod balance;
pub mod config;
pub mod cost;
pub mod error;
pub mod input;
pub mod method;
pub mod northwest;
pub mod plan;
pub mod problem;
pub mod report;
pub mod russell;
pub mod scan;
pub mod solution;
mod tableau;
pub mod vogel;

pub use balance::is_balanced;
pub use config::Config;
pub use cost::total_cost;
pub use error::{Error, Result};
pub use method::Method;
pub use plan::Plan;
pub use problem::Problem;
pub use scan::{Axis, Scanner};
pub use solution::{Shipment, Solution, Termination};

/// Element type for supplies, demands, costs and shipped quantities.
///
/// Signed so that Russell savings, which go negative, stay representable.
pub trait Unit:
    nalgebra::Scalar + num_traits::PrimInt + num_traits::Signed + std::fmt::Display
{
}

impl<T> Unit for T where
    T: nalgebra::Scalar + num_traits::PrimInt + num_traits::Signed + std::fmt::Display
{
}

use ahash::RandomState;

pub(crate) type HashSet<T> = std::collections::HashSet<T, RandomState>;

#[cfg(feature = "c001")]
pub mod inversion;
#[cfg(feature = "c001")]
pub use inversion as c001;
#[cfg(feature = "c002")]
pub mod knapsack;
#[cfg(feature = "c002")]
pub use knapsack as c002;
#[cfg(feature = "c003")]
pub mod lcs;
#[cfg(feature = "c003")]
pub use lcs as c003;

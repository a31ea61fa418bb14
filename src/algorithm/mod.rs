/// Fixed-size bitsets for candidate tile sets
pub mod bitset;
/// Collapse driver with retry-on-divergence and the seeded random source
pub mod executor;
/// Single-pass neighbor constraint propagation
pub mod propagation;
/// Entropy ranking and weighted cell collapse
pub mod selection;

/// Bitset of grid cells for constant-time path membership
pub mod bitset;
/// Randomized recursive backtracking generation
pub mod generation;
/// Depth-first search solving
pub mod solver;

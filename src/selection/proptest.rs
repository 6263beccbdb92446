//! Property-based tests for strategy selection using proptest.
//!
//! Random matrices are generated as class sizes plus, per strategy, an
//! optional solve time for every problem. The tests check that:
//!
//! - Both policies assign every class exactly once
//! - The greedy pass only assigns strategies that reach the class optimum
//! - Refinement never lowers the solved count of a large class
//! - Selection is a pure function of the matrix

//! Coercion and generic-operator engine.
//!
//! Generated native code hands this module already-classified scalar values
//! ([`Value`]) and gets back a single coerced or combined scalar. Every
//! operation is a pure function over its arguments: no state is retained
//! across calls, nothing is mutated in place, and no operation can fail.
//!
//! String values use `Rc` for cheap sharing, so cloning a coerced string is
//! O(1). Concatenation always allocates a fresh string.

pub mod binary_ops;
pub mod value;

#[cfg(test)]
mod binary_ops_test;

pub use binary_ops::{generic_minus, generic_plus, generic_times, string_plus};
pub use value::Value;

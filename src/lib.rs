pub mod runtime;

pub use runtime::value::Value;
pub use runtime::{generic_minus, generic_plus, generic_times, string_plus};

pub mod algorithms;

pub use algorithms::{pool, pooled, radix};

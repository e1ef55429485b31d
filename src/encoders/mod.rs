pub mod algorithms;

pub use algorithms::radix;

pub mod cascade;

pub use cascade::recalculate;

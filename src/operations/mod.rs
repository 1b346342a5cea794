pub mod flatten;
pub mod offset;
pub mod simplify;

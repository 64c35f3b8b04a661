pub(crate) mod bound;
pub(crate) mod core;
pub(crate) mod error;

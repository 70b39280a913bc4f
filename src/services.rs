pub mod resolver;
pub mod snapshot;
pub mod validate;

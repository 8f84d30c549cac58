pub mod definition;
pub mod spec;

pub mod resolver;
pub mod samples;

pub use resolver::{flatten_event, EventResolver};

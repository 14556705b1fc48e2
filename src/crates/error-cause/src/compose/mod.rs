//! Message and stack composition over a cause chain

mod message;
mod stack;

pub use message::message_with_causes;
pub use stack::stack_with_causes;

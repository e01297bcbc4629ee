//! Measurement dispatcher.
//!
//! Stateless recording functions. Each one looks up its instrument by name,
//! returns silently when it is not registered, and otherwise computes the
//! amount and records it. None of them fail.

pub mod duration;
pub mod recorders;

pub use duration::record_callable_duration;
pub use recorders::{
    record_command_generator_metrics, record_cpu_usage, record_memory_usage,
    record_prompt_token_length, record_request_size,
};

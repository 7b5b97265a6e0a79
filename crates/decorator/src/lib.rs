//! Handler abstractions and the observability decorator pipeline.
//!
//! Commands and queries are handled by objects implementing a single-method
//! async trait. `apply_command_decorators` / `apply_query_decorators` wrap
//! any such handler with logging, metrics, and tracing without changing its
//! interface, so callers cannot distinguish wrapped from unwrapped instances.

pub mod handler;
pub mod pipeline;
pub mod sink;

pub use handler::{CommandHandler, QueryHandler};
pub use pipeline::{Logging, Metrics, Tracing, apply_command_decorators, apply_query_decorators};
pub use sink::{MetricsSink, NullSink, PrometheusSink};

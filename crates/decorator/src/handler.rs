//! Command and query handler traits.

use async_trait::async_trait;
use common::Context;

/// Handler for a state-changing request.
///
/// `C` is the command, `R` the result, `E` the error. Handlers take the
/// command by value and propagate errors verbatim; cross-cutting behavior
/// belongs in decorators, not here.
#[async_trait]
pub trait CommandHandler<C, R, E>: Send + Sync {
    async fn handle(&self, ctx: &Context, cmd: C) -> Result<R, E>;
}

/// Handler for a read-only request. Never mutates state.
#[async_trait]
pub trait QueryHandler<Q, R, E>: Send + Sync {
    async fn handle(&self, ctx: &Context, query: Q) -> Result<R, E>;
}

/// Display name for a handler, derived from its input type.
pub(crate) fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

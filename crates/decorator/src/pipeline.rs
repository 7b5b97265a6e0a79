//! Observability decorators and their composition.
//!
//! Composition order is fixed: the base handler is innermost, logging wraps
//! it, metrics wraps logging, tracing wraps metrics. Every layer passes the
//! result or error through unmodified and records only side-channel data.

use std::fmt::{Debug, Display};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use common::Context;
use tracing::Instrument;

use crate::handler::{CommandHandler, QueryHandler, short_type_name};
use crate::sink::MetricsSink;

/// Composes the full pipeline around a command handler.
pub fn apply_command_decorators<C, R, E>(
    handler: impl CommandHandler<C, R, E> + 'static,
    sink: Arc<dyn MetricsSink>,
) -> Box<dyn CommandHandler<C, R, E>>
where
    C: Debug + Send + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
{
    Box::new(Tracing::new(Metrics::new(Logging::new(handler), sink)))
}

/// Composes the full pipeline around a query handler.
pub fn apply_query_decorators<Q, R, E>(
    handler: impl QueryHandler<Q, R, E> + 'static,
    sink: Arc<dyn MetricsSink>,
) -> Box<dyn QueryHandler<Q, R, E>>
where
    Q: Debug + Send + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
{
    Box::new(Tracing::new(Metrics::new(Logging::new(handler), sink)))
}

/// Logs the input, the outcome, and the elapsed duration of each call.
pub struct Logging<H> {
    inner: H,
}

impl<H> Logging<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C, R, E, H> CommandHandler<C, R, E> for Logging<H>
where
    C: Debug + Send + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
    H: CommandHandler<C, R, E>,
{
    async fn handle(&self, ctx: &Context, cmd: C) -> Result<R, E> {
        let name = short_type_name::<C>();
        tracing::debug!(command = name, body = ?cmd, "executing command");

        let start = Instant::now();
        let result = self.inner.handle(ctx, cmd).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::info!(command = name, elapsed_ms, "command succeeded"),
            Err(err) => tracing::error!(command = name, elapsed_ms, error = %err, "command failed"),
        }
        result
    }
}

#[async_trait]
impl<Q, R, E, H> QueryHandler<Q, R, E> for Logging<H>
where
    Q: Debug + Send + 'static,
    R: Send + 'static,
    E: Display + Send + 'static,
    H: QueryHandler<Q, R, E>,
{
    async fn handle(&self, ctx: &Context, query: Q) -> Result<R, E> {
        let name = short_type_name::<Q>();
        tracing::debug!(query = name, body = ?query, "executing query");

        let start = Instant::now();
        let result = self.inner.handle(ctx, query).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::info!(query = name, elapsed_ms, "query succeeded"),
            Err(err) => tracing::error!(query = name, elapsed_ms, error = %err, "query failed"),
        }
        result
    }
}

/// Records request count and duration to the injected sink.
pub struct Metrics<H> {
    inner: H,
    sink: Arc<dyn MetricsSink>,
}

impl<H> Metrics<H> {
    pub fn new(inner: H, sink: Arc<dyn MetricsSink>) -> Self {
        Self { inner, sink }
    }
}

#[async_trait]
impl<C, R, E, H> CommandHandler<C, R, E> for Metrics<H>
where
    C: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    H: CommandHandler<C, R, E>,
{
    async fn handle(&self, ctx: &Context, cmd: C) -> Result<R, E> {
        let start = Instant::now();
        let result = self.inner.handle(ctx, cmd).await;
        let outcome = if result.is_ok() { "success" } else { "failure" };
        self.sink
            .record("command", short_type_name::<C>(), outcome, start.elapsed());
        result
    }
}

#[async_trait]
impl<Q, R, E, H> QueryHandler<Q, R, E> for Metrics<H>
where
    Q: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    H: QueryHandler<Q, R, E>,
{
    async fn handle(&self, ctx: &Context, query: Q) -> Result<R, E> {
        let start = Instant::now();
        let result = self.inner.handle(ctx, query).await;
        let outcome = if result.is_ok() { "success" } else { "failure" };
        self.sink
            .record("query", short_type_name::<Q>(), outcome, start.elapsed());
        result
    }
}

/// Runs the wrapped handler inside a span, marking it on failure.
pub struct Tracing<H> {
    inner: H,
}

impl<H> Tracing<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C, R, E, H> CommandHandler<C, R, E> for Tracing<H>
where
    C: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    H: CommandHandler<C, R, E>,
{
    async fn handle(&self, ctx: &Context, cmd: C) -> Result<R, E> {
        let span = tracing::info_span!(
            "handle_command",
            handler = short_type_name::<C>(),
            failed = tracing::field::Empty,
        );
        async {
            let result = self.inner.handle(ctx, cmd).await;
            if result.is_err() {
                tracing::Span::current().record("failed", true);
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<Q, R, E, H> QueryHandler<Q, R, E> for Tracing<H>
where
    Q: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    H: QueryHandler<Q, R, E>,
{
    async fn handle(&self, ctx: &Context, query: Q) -> Result<R, E> {
        let span = tracing::info_span!(
            "handle_query",
            handler = short_type_name::<Q>(),
            failed = tracing::field::Empty,
        );
        async {
            let result = self.inner.handle(ctx, query).await;
            if result.is_err() {
                tracing::Span::current().record("failed", true);
            }
            result
        }
        .instrument(span)
        .await
    }
}

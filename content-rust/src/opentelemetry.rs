use crate::{Category, ContentError, ContentItem, ContentKind, ContentResult};
use opentelemetry::trace::Status;
use std::{future::Future, time::Instant};
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct LoadSpan {
    span: Span,
    items: Option<usize>,
    start_time: Instant,
}

impl LoadSpan {
    pub fn new(source: &str, kind: ContentKind, category: &Category) -> Self {
        let span = info_span!("portfolio_content.load", kind = %kind, category = %category);
        span.set_attribute("portfolio.content.source", source.to_string());
        span.set_attribute("portfolio.content.kind", kind.as_str());
        span.set_attribute("portfolio.content.category", category.to_string());

        Self {
            span,
            items: None,
            start_time: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_items(&mut self, items: &[ContentItem]) {
        self.items = Some(items.len());
    }

    pub fn on_error(&mut self, error: &ContentError) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(items) = self.items {
            self.span.set_attribute(
                "portfolio.content.items",
                i64::try_from(items).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute(
            "portfolio.content.duration",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

/// Run one retrieval inside a load span and record its outcome.
pub async fn trace_load<Fut>(
    source: &str,
    kind: ContentKind,
    category: &Category,
    future: Fut,
) -> ContentResult<Vec<ContentItem>>
where
    Fut: Future<Output = ContentResult<Vec<ContentItem>>>,
{
    let mut span = LoadSpan::new(source, kind, category);
    let result = future.instrument(span.span()).await;

    match &result {
        Ok(items) => span.on_items(items),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}

use crate::{Outcome, View};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct IntentSpan {
    span: Span,
    start_time: Instant,
}

impl IntentSpan {
    pub fn new(intent: &'static str) -> Self {
        let span = info_span!("portfolio_view.dispatch", intent);
        span.set_attribute("portfolio.view.intent", intent);

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_end(&mut self, outcome: Outcome, view: View) {
        let outcome_name = match outcome {
            Outcome::Applied => "applied",
            Outcome::Ignored => "ignored",
            Outcome::Stale => "stale",
            Outcome::Failed => "failed",
        };
        self.span
            .set_attribute("portfolio.view.outcome", outcome_name);
        self.span
            .set_attribute("portfolio.view.page", view.page().id());
        self.span
            .set_attribute("portfolio.view.container", view.container_id());
        self.span.set_attribute(
            "portfolio.view.duration",
            self.start_time.elapsed().as_secs_f64(),
        );

        if outcome == Outcome::Failed {
            self.span
                .set_status(Status::error("content could not be loaded"));
        }
    }
}

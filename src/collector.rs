use std::time::Duration;

/// Terminal sink for exported span batches.
///
/// Exporters are driven entirely by the span collector; the trace core only
/// carries them from construction into the collector.
pub trait SpanExporter<S>: Send {
    /// Deliver one batch of finished spans.
    fn export(&mut self, batch: Vec<S>);

    /// Release any resources held by the exporter. Called once, when the
    /// collector closes.
    fn shutdown(&mut self);
}

/// Contract of the external batching engine that buffers finished spans and
/// flushes them to its exporters on a time or count threshold.
///
/// [`TraceCore`](crate::TraceCore) constructs the collector once, from the
/// configured exporters and thresholds, and afterwards treats it as an opaque
/// sink: `feed` to ingest, `close` to flush and release.
pub trait SpanCollector<S> {
    /// Wire a collector against the given exporters and flush thresholds.
    ///
    /// Zero thresholds leave the flush policy to the collector's own default.
    fn new(
        exporters: Vec<Box<dyn SpanExporter<S>>>,
        max_batch_age: Duration,
        max_batch_count: usize,
    ) -> Self
    where
        Self: Sized;

    /// Ingest one finished span.
    ///
    /// Non-blocking; eventual delivery or drop is the collector's
    /// responsibility. Ordering is only guaranteed per caller, and only to the
    /// extent the collector preserves it.
    fn feed(&self, span: S);

    /// Flush all pending spans and release the exporters.
    ///
    /// Blocks until pending work has been handed to the exporters.
    fn close(&mut self);
}

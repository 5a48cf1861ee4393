use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::collector::{SpanCollector, SpanExporter};
use crate::options::{Config, ConfigError, TraceOption};
use crate::randomizer::{new_span_id, new_trace_id, Randomizer};
use crate::resource::Resource;

/// Coordinates identifier generation and the hand-off of finished spans to a
/// batching collector `C`.
///
/// Construction wires the collector against the given exporters and the
/// configured thresholds. The core lives for the application lifetime;
/// [`close`](TraceCore::close) consumes it and flushes whatever the collector
/// still holds, so spans cannot be dispatched after shutdown.
pub struct TraceCore<S, C> {
    collector: C,
    rand: Box<dyn Randomizer + Send + Sync>,
    _span: PhantomData<S>,
}

impl<S, C: SpanCollector<S>> TraceCore<S, C> {
    /// Create a trace core dispatching spans to the given exporters.
    ///
    /// Fails only if applying the options fails, e.g. when no randomizer was
    /// supplied and the default entropy source cannot be seeded. No partial
    /// core is returned on error.
    pub fn new(
        exporters: Vec<Box<dyn SpanExporter<S>>>,
        options: Vec<TraceOption>,
    ) -> Result<Self, ConfigError> {
        let cfg = Config::from_options(options)?;
        let collector = C::new(exporters, cfg.batch_time, cfg.batch_count);
        debug!(
            batch_time_ms = cfg.batch_time.as_millis() as u64,
            batch_count = cfg.batch_count,
            "trace core initialized"
        );

        Ok(TraceCore {
            collector,
            rand: cfg.rand,
            _span: PhantomData,
        })
    }

    /// Build service metadata describing the exporting service.
    pub fn create_resource(&self, service_name: &str) -> Resource {
        Resource::new(service_name)
    }

    /// Create a new 8-byte span id from the configured randomness capability.
    pub fn create_span_id(&self) -> [u8; 8] {
        new_span_id(self.rand.as_ref())
    }

    /// Create a new 16-byte trace id from the configured randomness
    /// capability.
    pub fn create_trace_id(&self) -> [u8; 16] {
        new_trace_id(self.rand.as_ref())
    }

    /// Hand one finished span to the collector for batched export.
    ///
    /// Fire-and-forget: eventual delivery or drop is the collector's concern.
    pub fn dispatch_span(&self, span: S) {
        self.collector.feed(span);
    }

    /// Flush pending spans and release the collector's exporters.
    ///
    /// Consumes the core; blocks until the collector has drained.
    pub fn close(mut self) {
        debug!("closing trace core");
        self.collector.close();
    }
}

impl<S, C> fmt::Debug for TraceCore<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceCore").finish_non_exhaustive()
    }
}

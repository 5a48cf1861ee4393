#![deny(warnings, missing_debug_implementations, missing_docs)]

//! This crate provides:
//! - A strict codec for the W3C Trace Context `traceparent` header
//! - Fixed-width trace/span identifier generation from an injectable randomness capability
//! - `TraceCore`, a coordinator that hands finished spans to a batching collector
//!
//! The batching collector itself is an external collaborator: `TraceCore` constructs
//! one against the configured exporters and thresholds and only ever calls its
//! `feed` and `close` entry points.
//!
//! ```
//! use tracing_dispatch::{decode_traceparent, encode_traceparent, TraceInfo};
//!
//! let header = encode_traceparent(0x00, [0x2a; 16], [0x07; 8], 0x01);
//! assert_eq!(header.len(), 55);
//!
//! let (version, trace_id, parent_id, flags) = decode_traceparent(&header).unwrap();
//! assert_eq!((version, flags), (0x00, 0x01));
//!
//! let info = TraceInfo::new(trace_id, parent_id, [0x08; 8]);
//! let (trace_hex, _, _) = info.hex_ids();
//! assert_eq!(trace_hex, "2a".repeat(16));
//! ```

mod collector;
mod dispatch;
mod options;
mod randomizer;
mod resource;
mod trace_info;
mod traceparent;

pub use crate::collector::{SpanCollector, SpanExporter};
pub use crate::dispatch::TraceCore;
pub use crate::options::{ConfigError, TraceOption};
pub use crate::randomizer::{
    generate_span_id, generate_trace_id, new_span_id, new_trace_id, EntropyRandomizer, Randomizer,
};
pub use crate::resource::{Resource, SERVICE_NAME_KEY};
pub use crate::trace_info::TraceInfo;
pub use crate::traceparent::{
    decode_traceparent, encode_traceparent, TraceparentError, TRACEPARENT_LEN,
};

//! An incremental, zero-copy HTTP/1.x message-head parser.
//!
//! This crate recognises the request line and header block of an HTTP/1.x
//! request directly against the bytes a transport hands it, without
//! requiring them to be contiguous and without copying them out — except
//! for the rare line that straddles two input segments, which is copied
//! into a small reusable scratch buffer just long enough to parse it.
//!
//! # In scope:
//!
//! * Request-line recognition: method, request-target (path + query),
//!   HTTP version
//! * Header-field recognition, in wire order, with leading/trailing OWS
//!   stripped
//! * Resumable parsing: a call short on bytes reports need-more rather than
//!   erroring, and can be re-invoked once more bytes arrive
//! * A segmented-buffer abstraction so callers backed by a ring buffer or
//!   several unconsolidated `recv()` results don't need to compact first
//!
//! # Out of scope:
//!
//! * Transport I/O (opening sockets, TLS)
//! * Message body framing (`Content-Length`, `transfer-encoding: chunked`)
//! * Response-side parsing or request/response writing
//! * HTTP/2 and later
//!
//! This crate is a companion to a connection pipeline, in the same spirit
//! as [hoot](https://crates.io/crates/hoot) is a companion to
//! [ureq](https://crates.io/crates/ureq): it has no opinion on what reads
//! the socket or what happens after a head is recognised.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::uninlined_format_args)]

mod buffer;
mod error;
mod handler;
mod headers;
mod method;
mod parser;
mod reqline;
mod scan;
mod tables;
mod token;
mod version;

#[cfg(test)]
mod test;

pub use buffer::{ChunkedBuffer, ReadCursor, SegmentedBuffer, SliceBuffer};
pub use error::{Detail, Rejection, Result};
pub use handler::Handler;
pub use headers::{parse_headers, HeaderParseStatus};
pub use method::HttpMethod;
pub use parser::MessageHeadParser;
pub use reqline::{parse_request_line, RequestLineStatus};
pub use version::HttpVersion;

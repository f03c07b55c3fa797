//! Top-level entry point gluing the request-line and header parsers
//! together with their shared scratch buffer.

use crate::buffer::SegmentedBuffer;
use crate::error::Result;
use crate::handler::Handler;
use crate::headers::{parse_headers, HeaderParseStatus};
use crate::reqline::{parse_request_line, RequestLineStatus};

/// Drives a message head through its two stages: the request line, then
/// the header block.
///
/// Holds the scratch region used when a line straddles a segment boundary,
/// reused across calls so a worst-case straddling line only grows the
/// allocation once per connection.
#[derive(Default)]
pub struct MessageHeadParser {
    scratch: Vec<u8>,
}

impl MessageHeadParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`crate::reqline::parse_request_line`].
    pub fn parse_request_line<B, H>(
        &mut self,
        handler: &mut H,
        buf: &B,
    ) -> Result<RequestLineStatus>
    where
        B: SegmentedBuffer + ?Sized,
        H: Handler,
    {
        parse_request_line(handler, buf, &mut self.scratch)
    }

    /// See [`crate::headers::parse_headers`].
    pub fn parse_headers<B, H>(&mut self, handler: &mut H, buf: &B) -> Result<HeaderParseStatus>
    where
        B: SegmentedBuffer + ?Sized,
        H: Handler,
    {
        parse_headers(handler, buf, &mut self.scratch)
    }

    /// No-op. The parser holds no per-request state beyond the scratch
    /// buffer, which is already safe to reuse as-is for the next request;
    /// this method exists only for symmetry with callers that model a
    /// per-request lifecycle explicitly.
    pub fn reset(&mut self) {}
}

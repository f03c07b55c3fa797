//! The callback surface a caller implements to receive parsed tokens.

use crate::method::HttpMethod;
use crate::version::HttpVersion;

/// Sink for tokens recognised by [`crate::reqline::parse_request_line`] and
/// [`crate::headers::parse_headers`].
///
/// Every byte slice passed to these methods is a non-owning view into the
/// input buffer (or, for a line that straddled a segment boundary, into the
/// parser's own scratch region) — it is only valid for the duration of the
/// call. Implementations must not retain any of these slices past it.
pub trait Handler {
    /// Called exactly once per request, before any [`Handler::on_header`]
    /// call for the same request.
    ///
    /// `custom_method` is empty unless `method == `[`HttpMethod::Custom`],
    /// in which case it carries the method's raw bytes (which have no other
    /// representation, since [`HttpMethod`] has no allocator to own them).
    fn on_start_line(
        &mut self,
        method: HttpMethod,
        version: HttpVersion,
        target: &[u8],
        path: &[u8],
        query: &[u8],
        custom_method: &[u8],
    );

    /// Called once per header field line, in wire order.
    fn on_header(&mut self, name: &[u8], value: &[u8]);
}

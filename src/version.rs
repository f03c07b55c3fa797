/// HTTP version recognised on the request line.
///
/// [`Unknown`][HttpVersion::Unknown] is a transient value used only while a
/// request line is being assembled; it never escapes a successful parse and
/// is never passed to [`Handler::on_start_line`][crate::Handler::on_start_line].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVersion {
    Http10,
    Http11,
    /// Transient only — never emitted to a handler.
    Unknown,
}

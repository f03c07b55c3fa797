//! Header-field recognition: `field-name ":" OWS field-value OWS CRLF`,
//! terminated by a bare CRLF.

use crate::buffer::{distance, materialise_line, seek, Line, ReadCursor, SegmentedBuffer};
use crate::error::{detail_if_enabled, Rejection, Result};
use crate::handler::Handler;
use crate::scan::{contains, index_of};

/// Outcome of [`parse_headers`].
pub struct HeaderParseStatus {
    /// `true` once the terminating empty line has been seen.
    pub complete: bool,
    pub consumed: ReadCursor,
    pub examined: ReadCursor,
    /// Bytes advanced across however many complete header lines were
    /// emitted this call (excludes the incomplete line, if any).
    pub consumed_bytes: usize,
}

/// Recognise zero or more header lines from `buf`, starting at
/// `buf.start()`, stopping at the first fully-consumed empty line.
///
/// Calls `handler.on_header(..)` once per field, in wire order. On
/// need-more, `consumed` is the cursor at the start of the first
/// incompletely-seen line — nothing from that line has been consumed, so
/// the caller can safely re-invoke with the same prefix plus more bytes.
pub fn parse_headers<B, H>(
    handler: &mut H,
    buf: &B,
    scratch: &mut Vec<u8>,
) -> Result<HeaderParseStatus>
where
    B: SegmentedBuffer + ?Sized,
    H: Handler,
{
    let end = buf.end();
    let mut cursor = buf.start();
    let mut consumed_bytes = 0usize;

    loop {
        // `cursor` is only ever advanced below once a full line has been
        // both located and successfully field-parsed, so on any need-more
        // path here it already serves as the checkpoint to rewind to.
        match buf.byte_at(cursor) {
            None => return Ok(need_more(cursor, end, consumed_bytes)),
            Some(b'\r') => {
                let after_cr = buf.advance(cursor, 1);
                match buf.byte_at(after_cr) {
                    None => return Ok(need_more(cursor, end, consumed_bytes)),
                    Some(b'\n') => {
                        let line_end = buf.advance(after_cr, 1);
                        return Ok(HeaderParseStatus {
                            complete: true,
                            consumed: line_end,
                            examined: line_end,
                            consumed_bytes: consumed_bytes + 2,
                        });
                    }
                    Some(_) => {
                        let detail = buf.segment_tail(cursor);
                        return Err(reject_invalid_sequence(detail));
                    }
                }
            }
            Some(b' ') | Some(b'\t') => {
                let detail = buf.segment_tail(cursor);
                return Err(reject_whitespace_in_name(detail));
            }
            Some(_) => {
                let (line_end, line) = match find_line(buf, cursor, end, scratch) {
                    Some(v) => v,
                    None => return Ok(need_more(cursor, end, consumed_bytes)),
                };
                let line: &[u8] = &line;
                parse_field(line, handler)?;
                consumed_bytes += distance(buf, cursor, line_end);
                cursor = line_end;
            }
        }
    }
}

fn need_more(consumed: ReadCursor, end: ReadCursor, consumed_bytes: usize) -> HeaderParseStatus {
    HeaderParseStatus {
        complete: false,
        consumed,
        examined: end,
        consumed_bytes,
    }
}

/// Locate the LF terminating the header line starting at `start`, trying
/// the current segment first before falling back to a cross-segment seek
/// plus materialisation.
fn find_line<'b, 's, B: SegmentedBuffer + ?Sized>(
    buf: &'b B,
    start: ReadCursor,
    end: ReadCursor,
    scratch: &'s mut Vec<u8>,
) -> Option<(ReadCursor, Line<'b, 's>)> {
    let tail = buf.segment_tail(start);
    if let Some(lf) = index_of(tail, b'\n') {
        let line_end = buf.advance(start, lf + 1);
        return Some((line_end, Line::Borrowed(&tail[..=lf])));
    }

    let (lf_cursor, _) = seek(buf, start, end, b'\n')?;
    let line_end = buf.advance(lf_cursor, 1);
    Some((line_end, materialise_line(buf, start, line_end, scratch)))
}

/// Parse one complete header-field line (including its terminating LF) and
/// emit it to the handler.
fn parse_field(line: &[u8], handler: &mut impl Handler) -> Result<()> {
    let n = line.len();

    // 1. name, up to the colon. Bounded to exclude the line's own
    // terminating CRLF, so a header line with no colon at all (e.g.
    // "NotAHeader\r\n") runs out of name bytes and falls through to
    // "no colon" instead of misreading its own CRLF as stray whitespace.
    let mut name_end = None;
    let mut i = 0usize;
    let name_scan_end = n.saturating_sub(2);
    while i < name_scan_end {
        match line[i] {
            b':' => {
                name_end = Some(i);
                break;
            }
            b' ' | b'\t' | b'\r' => return Err(reject_whitespace_in_name(line)),
            _ => i += 1,
        }
    }
    let name_end = match name_end {
        Some(v) => v,
        None => return Err(reject_no_colon(line)),
    };

    // 2. terminator.
    if n < 2 || line[n - 2] != b'\r' {
        return Err(reject_missing_cr(line));
    }
    if line[n - 1] != b'\n' {
        return Err(reject_value_cr(line));
    }

    // 3. leading OWS.
    let mut value_start = name_end + 1;
    loop {
        match line.get(value_start) {
            Some(b' ') | Some(b'\t') => value_start += 1,
            Some(b'\r') => return Err(reject_value_cr(line)),
            _ => break,
        }
    }

    // 4. no bare CR inside the value.
    let value_region_end = n - 2;
    if value_start + 1 < value_region_end && contains(&line[value_start + 1..value_region_end], b'\r') {
        return Err(reject_value_cr(line));
    }

    // 5. trailing OWS.
    let mut value_end = n as isize - 3;
    while value_end >= value_start as isize
        && matches!(line.get(value_end as usize), Some(b' ') | Some(b'\t'))
    {
        value_end -= 1;
    }

    // 6. emit.
    let name = &line[..name_end];
    let value: &[u8] = if value_end < value_start as isize {
        &[]
    } else {
        &line[value_start..=value_end as usize]
    };
    handler.on_header(name, value);
    Ok(())
}

#[cold]
#[inline(never)]
fn reject_invalid_sequence(detail_src: &[u8]) -> Rejection {
    let cap = detail_src.len().min(32);
    Rejection::HeadersCorruptedInvalidHeaderSequence(detail_if_enabled(&detail_src[..cap]))
}

#[cold]
#[inline(never)]
fn reject_whitespace_in_name(detail_src: &[u8]) -> Rejection {
    let cap = detail_src.len().min(32);
    Rejection::WhitespaceIsNotAllowedInHeaderName(detail_if_enabled(&detail_src[..cap]))
}

#[cold]
#[inline(never)]
fn reject_no_colon(line: &[u8]) -> Rejection {
    let cap = line.len().min(32);
    Rejection::NoColonCharacterFoundInHeaderLine(detail_if_enabled(&line[..cap]))
}

#[cold]
#[inline(never)]
fn reject_missing_cr(line: &[u8]) -> Rejection {
    let cap = line.len().min(32);
    Rejection::MissingCrInHeaderLine(detail_if_enabled(&line[..cap]))
}

#[cold]
#[inline(never)]
fn reject_value_cr(line: &[u8]) -> Rejection {
    let cap = line.len().min(32);
    Rejection::HeaderValueMustNotContainCr(detail_if_enabled(&line[..cap]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::buffer::SliceBuffer;

    #[derive(Default)]
    struct Recorder {
        headers: Vec<(Vec<u8>, Vec<u8>)>,
    }

    impl Handler for Recorder {
        fn on_start_line(
            &mut self,
            _method: crate::method::HttpMethod,
            _version: crate::version::HttpVersion,
            _target: &[u8],
            _path: &[u8],
            _query: &[u8],
            _custom_method: &[u8],
        ) {
            unreachable!("headers parsing must not emit a start line")
        }

        fn on_header(&mut self, name: &[u8], value: &[u8]) {
            self.headers.push((name.to_vec(), value.to_vec()));
        }
    }

    #[test]
    fn parses_single_header_and_terminates() {
        let buf = SliceBuffer::new(b"Host: x\r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let status = parse_headers(&mut h, &buf, &mut scratch).unwrap();
        assert!(status.complete);
        assert_eq!(h.headers, vec![(b"Host".to_vec(), b"x".to_vec())]);
    }

    #[test]
    fn strips_leading_and_trailing_ows() {
        let buf = SliceBuffer::new(b"Accept:   text/plain   \r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        parse_headers(&mut h, &buf, &mut scratch).unwrap();
        assert_eq!(h.headers, vec![(b"Accept".to_vec(), b"text/plain".to_vec())]);
    }

    #[test]
    fn rejects_whitespace_before_colon() {
        let buf = SliceBuffer::new(b"Bad Header: v\r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let err = parse_headers(&mut h, &buf, &mut scratch).unwrap_err();
        assert!(matches!(err, Rejection::WhitespaceIsNotAllowedInHeaderName(_)));
    }

    #[test]
    fn rejects_missing_colon() {
        let buf = SliceBuffer::new(b"NotAHeader\r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let err = parse_headers(&mut h, &buf, &mut scratch).unwrap_err();
        assert!(matches!(err, Rejection::NoColonCharacterFoundInHeaderLine(_)));
    }

    #[test]
    fn rejects_bare_cr_not_followed_by_lf() {
        let buf = SliceBuffer::new(b"Host: x\rY: 1\r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let err = parse_headers(&mut h, &buf, &mut scratch).unwrap_err();
        assert!(matches!(err, Rejection::HeaderValueMustNotContainCr(_)));
    }

    #[test]
    fn need_more_does_not_consume_partial_line() {
        let buf = SliceBuffer::new(b"Host: exam");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let status = parse_headers(&mut h, &buf, &mut scratch).unwrap();
        assert!(!status.complete);
        assert_eq!(status.consumed, buf.start());
        assert_eq!(status.examined, buf.end());
        assert!(h.headers.is_empty());
    }

    #[test]
    fn need_more_after_some_complete_headers_preserves_progress() {
        let buf = SliceBuffer::new(b"A: 1\r\nB: 2\r\nC: inc");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let status = parse_headers(&mut h, &buf, &mut scratch).unwrap();
        assert!(!status.complete);
        assert_eq!(h.headers.len(), 2);
        assert_eq!(status.consumed_bytes, 12); // "A: 1\r\n" + "B: 2\r\n"
    }

    #[test]
    fn empty_value_with_immediate_cr_is_rejected() {
        // No OWS before CR: the leading-whitespace scan hits CR directly.
        let buf = SliceBuffer::new(b"X-Empty:\r\n\r\n");
        let mut scratch = Vec::new();
        let mut h = Recorder::default();
        let err = parse_headers(&mut h, &buf, &mut scratch).unwrap_err();
        assert!(matches!(err, Rejection::HeaderValueMustNotContainCr(_)));
    }
}

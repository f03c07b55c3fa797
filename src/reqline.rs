//! Request-line recognition: `method SP request-target SP HTTP-version CRLF`.

use crate::buffer::{materialise_line, seek, Line, ReadCursor, SegmentedBuffer};
use crate::error::{detail_if_enabled, Rejection, Result};
use crate::handler::Handler;
use crate::method::HttpMethod;
use crate::scan::index_of;
use crate::tables::{known_method, known_version};
use crate::token::is_token_char;
use crate::version::HttpVersion;

/// Outcome of [`parse_request_line`].
pub struct RequestLineStatus {
    /// `true` once the request line has been fully recognised and the
    /// handler invoked; `false` means more bytes are needed.
    pub complete: bool,
    pub consumed: ReadCursor,
    pub examined: ReadCursor,
}

/// Try to recognise one request line from `buf`, starting at `buf.start()`.
///
/// On success, calls `handler.on_start_line(..)` exactly once and returns
/// `consumed == examined == position right after the trailing LF`. On
/// need-more, returns `consumed == buf.start()`, `examined == buf.end()`.
/// Malformed input is reported as `Err(Rejection)`; no handler callback is
/// made in that case.
pub fn parse_request_line<B, H>(
    handler: &mut H,
    buf: &B,
    scratch: &mut Vec<u8>,
) -> Result<RequestLineStatus>
where
    B: SegmentedBuffer + ?Sized,
    H: Handler,
{
    let start = buf.start();
    let end = buf.end();

    let (line_end, line): (ReadCursor, Line<'_, '_>) = if buf.is_single_segment() {
        let tail = buf.segment_tail(start);
        match index_of(tail, b'\n') {
            Some(lf) => {
                let line_end = buf.advance(start, lf + 1);
                (line_end, Line::Borrowed(&tail[..=lf]))
            }
            None => {
                return Ok(RequestLineStatus {
                    complete: false,
                    consumed: start,
                    examined: end,
                })
            }
        }
    } else {
        match seek(buf, start, end, b'\n') {
            Some((lf_cursor, _)) => {
                let line_end = buf.advance(lf_cursor, 1);
                (line_end, materialise_line(buf, start, line_end, scratch))
            }
            None => {
                return Ok(RequestLineStatus {
                    complete: false,
                    consumed: start,
                    examined: end,
                })
            }
        }
    };

    let line: &[u8] = &line;

    match parse_line(line) {
        Ok(parsed) => {
            handler.on_start_line(
                parsed.method,
                parsed.version,
                &line[parsed.path_start..parsed.query_end],
                &line[parsed.path_start..parsed.path_end],
                &line[parsed.query_start..parsed.query_end],
                parsed.custom_method.map(|r| &line[r]).unwrap_or(&[]),
            );
            Ok(RequestLineStatus {
                complete: true,
                consumed: line_end,
                examined: line_end,
            })
        }
        Err(e) => Err(e),
    }
}

struct Parsed {
    method: HttpMethod,
    version: HttpVersion,
    custom_method: Option<core::ops::Range<usize>>,
    path_start: usize,
    path_end: usize,
    query_start: usize,
    query_end: usize,
}

/// Walk one complete request line (ending in LF) and pull out its fields.
/// `line` is never retained past this call.
fn parse_line(line: &[u8]) -> Result<Parsed> {
    let mut i = 0usize;

    // --- 1. method ---
    let (method, custom_method) = match known_method(&line[i..]) {
        Some((m, len)) => {
            i += len + 1;
            (m, None)
        }
        None => {
            let method_start = i;
            loop {
                match line.get(i) {
                    Some(b' ') => break,
                    Some(&c) if is_token_char(c) => i += 1,
                    _ => return Err(reject_invalid_request_line(line)),
                }
            }
            if i == method_start {
                return Err(reject_invalid_request_line(line));
            }
            let range = method_start..i;
            i += 1; // past the space
            (HttpMethod::Custom, Some(range))
        }
    };

    // --- 2./3. target: path and optional query ---
    let mut path_start: Option<usize> = None;
    let path_end;
    let query_start;
    let query_end;

    loop {
        match line.get(i) {
            Some(b' ') => {
                path_end = i;
                if path_start.is_none() {
                    return Err(reject_invalid_request_line(line));
                }
                query_start = i;
                query_end = i;
                i += 1;
                break;
            }
            Some(b'?') => {
                path_end = i;
                if path_start.is_none() {
                    return Err(reject_invalid_request_line(line));
                }
                query_start = i;
                i += 1;

                // --- 3. query ---
                loop {
                    match line.get(i) {
                        Some(b' ') => {
                            query_end = i;
                            i += 1;
                            break;
                        }
                        Some(_) => i += 1,
                        None => return Err(reject_invalid_request_line(line)),
                    }
                }
                break;
            }
            Some(b'%') => {
                if path_start.is_none() {
                    return Err(reject_invalid_request_line(line));
                }
                i += 1;
            }
            Some(_) => {
                if path_start.is_none() {
                    path_start = Some(i);
                }
                i += 1;
            }
            None => return Err(reject_invalid_request_line(line)),
        }
    }
    let path_start = path_start.unwrap();

    // --- 4. version ---
    let version = match known_version(&line[i..]) {
        Some((v, len)) => {
            i += len + 1;
            v
        }
        None => {
            let version_start = i;
            let cr = match index_of(&line[i..], b'\r') {
                Some(off) => i + off,
                None => return Err(reject_invalid_request_line(line)),
            };
            let candidate = &line[version_start..cr];
            return Err(if candidate.is_empty() {
                reject_invalid_request_line(line)
            } else {
                reject_unrecognized_version(candidate)
            });
        }
    };

    // --- 5. LF ---
    match line.get(i) {
        Some(b'\n') => {}
        _ => return Err(reject_invalid_request_line(line)),
    }

    Ok(Parsed {
        method,
        version,
        custom_method,
        path_start,
        path_end,
        query_start,
        query_end,
    })
}

#[cold]
#[inline(never)]
fn reject_invalid_request_line(line: &[u8]) -> Rejection {
    let cap = line.len().min(32);
    Rejection::InvalidRequestLine(detail_if_enabled(&line[..cap]))
}

#[cold]
#[inline(never)]
fn reject_unrecognized_version(candidate: &[u8]) -> Rejection {
    Rejection::UnrecognizedHttpVersion(detail_if_enabled(candidate))
}

use core::fmt;

/// Bounded, escaped-ASCII detail attached to a [`Rejection`].
///
/// Holds at most 32 printable-ASCII bytes. Non-ASCII / non-printable input
/// bytes are escaped as `\xNN` when the detail is built (see
/// [`Detail::from_escaped`]), so the stored bytes are always safe to log
/// verbatim without further sanitisation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    buf: [u8; Detail::CAP],
    len: u8,
}

impl Detail {
    const CAP: usize = 32;

    /// An empty detail — used when informational logging is disabled, so
    /// the escaping work in [`Detail::from_escaped`] is skipped entirely.
    pub const fn empty() -> Self {
        Detail {
            buf: [0; Self::CAP],
            len: 0,
        }
    }

    /// Build a detail string from raw input bytes, escaping any byte
    /// outside printable ASCII (`0x20..=0x7e`) as `\xNN`, and truncating to
    /// [`Detail::CAP`] bytes of *output*.
    pub fn from_escaped(raw: &[u8]) -> Self {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let mut buf = [0u8; Self::CAP];
        let mut len = 0usize;

        for &b in raw {
            if len >= Self::CAP {
                break;
            }
            if (0x20..=0x7e).contains(&b) {
                buf[len] = b;
                len += 1;
            } else {
                // \xNN is 4 bytes; skip it entirely if it wouldn't fit,
                // rather than emitting a truncated escape.
                if len + 4 > Self::CAP {
                    break;
                }
                buf[len] = b'\\';
                buf[len + 1] = b'x';
                buf[len + 2] = HEX[(b >> 4) as usize];
                buf[len + 3] = HEX[(b & 0x0f) as usize];
                len += 4;
            }
        }

        Detail {
            buf,
            len: len as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        // Every byte written above is either printable ASCII or one of the
        // fixed ASCII characters in `\xNN` — always valid UTF-8.
        core::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reason a request head was rejected as malformed.
///
/// Rejection is fatal for the current request: the caller is expected to
/// close the connection after reporting it (typically as an HTTP 400). This
/// is a closed set mirroring RFC 7230's request-line and header-field
/// grammar; there is no variant for "need more bytes" because that is not
/// an error (see [`crate::reqline::parse_request_line`] /
/// [`crate::headers::parse_headers`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    /// The request line did not match `method SP request-target SP
    /// HTTP-version CRLF`.
    InvalidRequestLine(Detail),

    /// The request line's version token was syntactically a version but not
    /// one this parser recognises (only HTTP/1.0 and HTTP/1.1 are).
    UnrecognizedHttpVersion(Detail),

    /// A header line's CR was not immediately followed by LF.
    HeadersCorruptedInvalidHeaderSequence(Detail),

    /// A header line started with SPACE or TAB (obsolete line folding is
    /// not accepted), or whitespace appeared before the colon in a header
    /// name.
    WhitespaceIsNotAllowedInHeaderName(Detail),

    /// No `:` was found in a header line.
    NoColonCharacterFoundInHeaderLine(Detail),

    /// A header line was missing its terminating CR.
    MissingCrInHeaderLine(Detail),

    /// A CR appeared inside a header value (or its leading whitespace)
    /// where only the terminating CRLF is allowed.
    HeaderValueMustNotContainCr(Detail),
}

impl Rejection {
    /// The bounded, escaped-ASCII detail carried by this rejection. Empty
    /// unless informational logging was enabled at the time of rejection.
    pub fn detail(&self) -> &Detail {
        use Rejection::*;
        match self {
            InvalidRequestLine(d)
            | UnrecognizedHttpVersion(d)
            | HeadersCorruptedInvalidHeaderSequence(d)
            | WhitespaceIsNotAllowedInHeaderName(d)
            | NoColonCharacterFoundInHeaderLine(d)
            | MissingCrInHeaderLine(d)
            | HeaderValueMustNotContainCr(d) => d,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rejection::*;
        let s = match self {
            InvalidRequestLine(_) => "invalid request line",
            UnrecognizedHttpVersion(_) => "unrecognized HTTP version",
            HeadersCorruptedInvalidHeaderSequence(_) => {
                "headers corrupted: invalid header sequence"
            }
            WhitespaceIsNotAllowedInHeaderName(_) => "whitespace is not allowed in header name",
            NoColonCharacterFoundInHeaderLine(_) => "no colon character found in header line",
            MissingCrInHeaderLine(_) => "missing CR in header line",
            HeaderValueMustNotContainCr(_) => "header value must not contain CR",
        };
        let detail = self.detail();
        if detail.as_str().is_empty() {
            write!(f, "{}", s)
        } else {
            write!(f, "{}: {}", s, detail)
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Rejection {}

/// Result type for the rejection channel: `Ok` is a (possibly incomplete)
/// parse, `Err` is a fatal [`Rejection`].
pub type Result<T> = core::result::Result<T, Rejection>;

/// Build a [`Detail`] from `raw`, but only if informational logging is
/// enabled — this is the realisation of the spec's `is_enabled(Information)`
/// trace-sink gate, so the escaping work is skipped entirely on a quiet
/// logger.
#[cold]
#[inline(never)]
pub(crate) fn detail_if_enabled(raw: &[u8]) -> Detail {
    if log::log_enabled!(log::Level::Info) {
        Detail::from_escaped(raw)
    } else {
        Detail::empty()
    }
}

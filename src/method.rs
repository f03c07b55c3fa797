/// HTTP request method.
///
/// This is a closed set of the well-known methods this parser recognises by
/// name, plus a [`Custom`][HttpMethod::Custom] sentinel for anything else
/// that is syntactically a valid method token. The actual bytes of a custom
/// method are never carried on this type — they are emitted alongside it as
/// a separate byte slice (see [`Handler::on_start_line`][crate::Handler::on_start_line]),
/// since this type has no allocator to own them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HttpMethod {
    GET,
    PUT,
    POST,
    HEAD,
    TRACE,
    PATCH,
    DELETE,
    CONNECT,
    OPTIONS,
    /// Any method token not in the well-known set above. The bytes are
    /// carried separately, not on this variant.
    Custom,
}

impl HttpMethod {
    /// The canonical wire bytes for a well-known method, or `None` for
    /// [`Custom`][HttpMethod::Custom] (whose bytes live elsewhere).
    pub fn as_bytes(&self) -> Option<&'static [u8]> {
        use HttpMethod::*;
        Some(match self {
            GET => b"GET",
            PUT => b"PUT",
            POST => b"POST",
            HEAD => b"HEAD",
            TRACE => b"TRACE",
            PATCH => b"PATCH",
            DELETE => b"DELETE",
            CONNECT => b"CONNECT",
            OPTIONS => b"OPTIONS",
            Custom => return None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn custom_has_no_bytes() {
        assert_eq!(HttpMethod::Custom.as_bytes(), None);
    }

    #[test]
    fn known_methods_round_trip() {
        assert_eq!(HttpMethod::GET.as_bytes(), Some(&b"GET"[..]));
        assert_eq!(HttpMethod::CONNECT.as_bytes(), Some(&b"CONNECT"[..]));
    }
}

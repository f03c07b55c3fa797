#![no_main]

use httphead::{ChunkedBuffer, Handler, HttpMethod, HttpVersion, MessageHeadParser};
use libfuzzer_sys::fuzz_target;

struct NoOp;

impl Handler for NoOp {
    fn on_start_line(
        &mut self,
        _method: HttpMethod,
        _version: HttpVersion,
        _target: &[u8],
        _path: &[u8],
        _query: &[u8],
        _custom_method: &[u8],
    ) {
    }

    fn on_header(&mut self, _name: &[u8], _value: &[u8]) {}
}

// Splits `data` into two segments at an arbitrary point (taken from the
// first byte) so every run exercises the segmented-cursor paths, not just
// the single-segment fast path. The only property checked here is the
// absence of a panic: a rejection or a need-more are both valid outcomes
// for arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize) % (rest.len() + 1);
    let (a, b) = rest.split_at(split);
    let segs: &[&[u8]] = &[a, b];
    let buf = ChunkedBuffer::new(segs);

    let mut parser = MessageHeadParser::new();
    let mut handler = NoOp;
    let _ = parser.parse_request_line(&mut handler, &buf);

    // Headers are fuzzed independently of the request line above (a
    // segmented buffer can't cheaply be re-sliced from an arbitrary
    // interior cursor), but against the same kind of split input so the
    // segmented cursor in `parse_headers` gets exercised too.
    let mut parser = MessageHeadParser::new();
    let _ = parser.parse_headers(&mut handler, &buf);
});

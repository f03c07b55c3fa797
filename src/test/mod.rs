
use crate::handler::Handler;
use crate::method::HttpMethod;
use crate::version::HttpVersion;

trait TestSliceExt {
    fn as_str(&self) -> &str;
}

impl TestSliceExt for [u8] {
    fn as_str(&self) -> &str {
        std::str::from_utf8(self).unwrap()
    }
}

/// A `Handler` that records every event it sees, in order, for assertion.
#[derive(Default)]
pub(crate) struct Recording {
    pub(crate) start_line: Option<StartLine>,
    pub(crate) headers: Vec<(Vec<u8>, Vec<u8>)>,
}

pub(crate) struct StartLine {
    pub(crate) method: HttpMethod,
    pub(crate) version: HttpVersion,
    pub(crate) target: Vec<u8>,
    pub(crate) path: Vec<u8>,
    pub(crate) query: Vec<u8>,
    pub(crate) custom_method: Vec<u8>,
}

impl Handler for Recording {
    fn on_start_line(
        &mut self,
        method: HttpMethod,
        version: HttpVersion,
        target: &[u8],
        path: &[u8],
        query: &[u8],
        custom_method: &[u8],
    ) {
        assert!(
            self.start_line.is_none(),
            "on_start_line must fire exactly once per request"
        );
        assert!(
            self.headers.is_empty(),
            "on_start_line must precede every on_header call"
        );
        self.start_line = Some(StartLine {
            method,
            version,
            target: target.to_vec(),
            path: path.to_vec(),
            query: query.to_vec(),
            custom_method: custom_method.to_vec(),
        });
    }

    fn on_header(&mut self, name: &[u8], value: &[u8]) {
        assert!(
            self.start_line.is_some(),
            "on_header must not fire before on_start_line"
        );
        self.headers.push((name.to_vec(), value.to_vec()));
    }
}

/// Immutable record of the trace id, parent id and span id for one unit of work.
///
/// Constructed once from raw bytes, either freshly generated or parsed from a
/// traceparent header, and read via raw-byte or hex-string accessors.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct TraceInfo {
    tid: [u8; 16],
    pid: [u8; 8],
    sid: [u8; 8],
}

impl TraceInfo {
    /// Create a `TraceInfo` from raw trace id, parent id and span id bytes.
    ///
    /// No validation is performed; the traceparent codec is where all-zero
    /// ids are rejected.
    pub fn new(tid: [u8; 16], pid: [u8; 8], sid: [u8; 8]) -> Self {
        TraceInfo { tid, pid, sid }
    }

    /// The raw trace id, parent id and span id.
    pub fn ids(&self) -> ([u8; 16], [u8; 8], [u8; 8]) {
        (self.tid, self.pid, self.sid)
    }

    /// The trace id, parent id and span id as lower-case hex strings.
    pub fn hex_ids(&self) -> (String, String, String) {
        (
            hex::encode(self.tid),
            hex::encode(self.pid),
            hex::encode(self.sid),
        )
    }

    /// The 16-byte trace id shared by every span in the trace.
    pub fn trace_id(&self) -> [u8; 16] {
        self.tid
    }

    /// The 8-byte span id of the caller.
    pub fn parent_id(&self) -> [u8; 8] {
        self.pid
    }

    /// The 8-byte span id of the current unit of work.
    pub fn span_id(&self) -> [u8; 8] {
        self.sid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors_return_construction_bytes() {
        let tid = [0xau8; 16];
        let pid = [0xbu8; 8];
        let sid = [0xcu8; 8];
        let info = TraceInfo::new(tid, pid, sid);
        assert_eq!(info.ids(), (tid, pid, sid));
        assert_eq!(info.trace_id(), tid);
        assert_eq!(info.parent_id(), pid);
        assert_eq!(info.span_id(), sid);
    }

    #[test]
    fn hex_ids_are_lower_case_fixed_width() {
        let info = TraceInfo::new([0xab; 16], [0x01; 8], [0xff; 8]);
        let (tid, pid, sid) = info.hex_ids();
        assert_eq!(tid, "ab".repeat(16));
        assert_eq!(pid, "01".repeat(8));
        assert_eq!(sid, "ff".repeat(8));
    }
}

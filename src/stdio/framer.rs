//! Line framing for the input stream

/// Accumulates raw input bytes and yields complete, trimmed candidate lines.
///
/// The buffer is unbounded; a line that is never terminated accumulates for
/// as long as input keeps arriving.
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: Vec<u8>,
}

impl LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and drains every complete line it closes off.
    ///
    /// Lines are split on `\n` and decoded only once complete, so a UTF-8
    /// sequence straddling two chunks stays intact. Lines that are empty
    /// after trimming are skipped. This stage never fails.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(index) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=index).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines
    }
}

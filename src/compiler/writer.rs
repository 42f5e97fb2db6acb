/// Small append-only buffer for SQL text.
#[derive(Debug, Default)]
pub(crate) struct SqlWriter {
    buf: String,
}

impl SqlWriter {
    pub fn new() -> Self {
        SqlWriter::default()
    }

    pub fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn blank(&mut self) {
        self.buf.push(' ');
    }

    pub fn comma(&mut self) {
        self.buf.push_str(", ");
    }

    pub fn line_break(&mut self) {
        self.buf.push('\n');
    }

    pub fn open_paren(&mut self) {
        self.buf.push('(');
    }

    pub fn close_paren(&mut self) {
        self.buf.push(')');
    }

    pub fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push('\t');
        }
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

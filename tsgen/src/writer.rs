/// Indentation-aware string sink that generated source is appended to.
pub struct CodeWriter {
    buf: String,
    depth: usize,
    indent: String,
    line_end: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_layout("  ", "\n", 0)
    }

    /// A writer with a custom indent unit, line terminator and starting depth.
    pub fn with_layout(indent: &str, line_end: &str, depth: usize) -> Self {
        Self {
            buf: String::new(),
            depth,
            indent: indent.to_string(),
            line_end: line_end.to_string(),
        }
    }

    /// Append text verbatim.
    pub fn write(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Append one indent unit per level of the current depth.
    pub fn write_indent(&mut self) {
        self.write_indent_at(self.depth);
    }

    /// Append indentation for an explicit level, leaving the depth alone.
    pub fn write_indent_at(&mut self, level: usize) {
        for _ in 0..level {
            self.buf.push_str(&self.indent);
        }
    }

    /// Append the configured line terminator.
    pub fn line_end(&mut self) {
        self.buf.push_str(&self.line_end);
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape a string for embedding in a JS double-quoted string literal.
pub fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

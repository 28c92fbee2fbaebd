use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Append-style AsciiDoc document builder.
///
/// Every append returns `&mut Self` so calls chain. The buffer is plain
/// UTF-8 text; [`AsciiDoc::to_file`] writes it verbatim.
#[derive(Debug, Clone, Default)]
pub struct AsciiDoc {
    buf: String,
}

impl AsciiDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document title (`= Title`).
    pub fn document_title(&mut self, title: &str) -> &mut Self {
        self.buf.push_str("= ");
        self.buf.push_str(title);
        self.buf.push_str("\n\n");
        self
    }

    /// Section heading at the given depth. `level` must be in `1..=5`,
    /// matching AsciiDoc's `==` through `======` markers.
    pub fn section_title(&mut self, title: &str, level: usize) -> &mut Self {
        assert!(
            (1..=5).contains(&level),
            "section level {level} out of range 1..=5"
        );
        for _ in 0..=level {
            self.buf.push('=');
        }
        self.buf.push(' ');
        self.buf.push_str(title);
        self.buf.push_str("\n\n");
        self
    }

    pub fn section_title1(&mut self, title: &str) -> &mut Self {
        self.section_title(title, 1)
    }

    pub fn section_title2(&mut self, title: &str) -> &mut Self {
        self.section_title(title, 2)
    }

    pub fn section_title3(&mut self, title: &str) -> &mut Self {
        self.section_title(title, 3)
    }

    /// Appends text verbatim, with no trailing newline.
    pub fn raw_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Block title (`.Title`) attached to the next block.
    pub fn block_title(&mut self, title: &str) -> &mut Self {
        self.buf.push('.');
        self.buf.push_str(title);
        self.buf.push('\n');
        self
    }

    /// Delimited listing block (`----`). A trailing newline is added to the
    /// content if missing so the closing delimiter sits on its own line.
    pub fn listing_block(&mut self, content: &str) -> &mut Self {
        self.buf.push_str("----\n");
        self.buf.push_str(content);
        if !content.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf.push_str("----\n\n");
        self
    }

    /// Table with a header row. Rows shorter than the header are padded with
    /// empty cells.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> &mut Self {
        self.buf.push_str("[options=\"header\"]\n|===\n");
        for header in headers {
            self.buf.push('|');
            self.buf.push_str(header);
            self.buf.push(' ');
        }
        self.buf.push('\n');
        for row in rows {
            self.buf.push('\n');
            for index in 0..headers.len() {
                self.buf.push('|');
                if let Some(cell) = row.get(index) {
                    self.buf.push_str(cell);
                }
                self.buf.push('\n');
            }
        }
        self.buf.push_str("|===\n\n");
        self
    }

    /// Include directive (`include::file[]`) referencing a sibling document.
    pub fn include(&mut self, filename: &str) -> &mut Self {
        self.buf.push_str("include::");
        self.buf.push_str(filename);
        self.buf.push_str("[]\n\n");
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Writes the document to `dir/filename`, replacing any existing file.
    pub fn to_file(&self, dir: &Path, filename: &str) -> io::Result<()> {
        fs::write(dir.join(filename), self.buf.as_bytes())
    }
}

impl fmt::Display for AsciiDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Renders text as an inline monospace span.
pub fn mono(text: &str) -> String {
    format!("`{text}`")
}

/// Renders text as an inline bold span.
pub fn bold(text: &str) -> String {
    format!("*{text}*")
}

//! Paginated plain-text renderer.

use std::path::{Path, PathBuf};

use super::{Block, DocumentRenderer, RenderError, TripDocument};

/// Default page length, footer included.
pub const DEFAULT_LINES_PER_PAGE: usize = 50;

const WIDTH: usize = 78;
const PAGE_BREAK: char = '\u{c}';

/// Writes documents as plain text pages separated by form feeds, each page
/// ending with a "Page N of M" footer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    dir: PathBuf,
    lines_per_page: usize,
}

impl TextRenderer {
    /// Render into `dir`, which is created on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }

    /// Set the page length. Pages always hold at least one body line.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(3);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The full text of a document, pages included.
    pub fn to_text(&self, document: &TripDocument) -> String {
        let lines = layout(&document.blocks);
        let body = self.lines_per_page - 2;
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![&lines[..]]
        } else {
            lines.chunks(body).collect()
        };

        let total = pages.len();
        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
                out.push('\n');
            }
            for line in *page {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&format!("{:>WIDTH$}\n", format!("Page {} of {total}", i + 1)));
        }
        out
    }
}

impl DocumentRenderer for TextRenderer {
    fn render(&self, document: &TripDocument, filename: &str) -> Result<PathBuf, RenderError> {
        let name = Path::new(filename);
        let is_plain = name.file_name().is_some_and(|f| f == name.as_os_str());
        if filename.trim().is_empty() || !is_plain {
            return Err(RenderError::InvalidFilename(filename.to_string()));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, self.to_text(document))?;
        Ok(path)
    }
}

fn layout(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Title(text) => {
                lines.push(text.to_uppercase());
                lines.push("=".repeat(text.chars().count()));
            }
            Block::Heading(text) => {
                lines.push(text.clone());
                lines.push("-".repeat(text.chars().count()));
            }
            Block::Subheading(text) | Block::Label(text) => lines.push(text.clone()),
            Block::Paragraph(text) => lines.extend(wrap(text, WIDTH, "")),
            Block::Bullet(text) => {
                let mut wrapped = wrap(text, WIDTH - 2, "  ").into_iter();
                if let Some(first) = wrapped.next() {
                    lines.push(format!("• {first}"));
                }
                lines.extend(wrapped);
            }
            Block::Spacer => lines.push(String::new()),
        }
    }
    lines
}

/// Greedy word wrap. Continuation lines get `indent`.
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let len = current.chars().count();
        if len > 0 && len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if current.is_empty() {
            if !lines.is_empty() {
                current.push_str(indent);
            }
        } else {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

//! Page layout stage: turns a poster snapshot into positioned text lines.
//!
//! Coordinates are millimetres from the top-left of an A4 portrait page; the
//! paint stage flips the y axis for PDF space. Wrapping uses a fixed average
//! glyph width for the built-in Helvetica faces, which is plenty for poster
//! text and keeps the layout deterministic.

use posterboard_engine::{BlockKind, ImageSide, PosterSnapshot};
use serde::Serialize;

/// A4 portrait.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

const MARGIN_MM: f64 = 18.0;
const PT_TO_MM: f64 = 0.352_778;
/// Average advance width of builtin Helvetica, as a fraction of font size.
const GLYPH_WIDTH_FACTOR: f64 = 0.5;
const LINE_SPACING: f64 = 1.35;
/// Vertical gap between blocks, in millimetres.
const BLOCK_GAP_MM: f64 = 4.0;

const TITLE_SIZE_PT: f64 = 24.0;
const BODY_SIZE_PT: f64 = 12.0;
const CAPTION_SIZE_PT: f64 = 10.0;

/// Which face a line is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontRole {
    /// Helvetica Bold, for title blocks.
    Title,
    /// Helvetica, for text blocks.
    Body,
    /// Helvetica Oblique, for image references.
    Caption,
}

/// One wrapped line placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub role: FontRole,
    pub size_pt: f64,
    /// Left edge, mm from the left page edge.
    pub x_mm: f64,
    /// Baseline, mm from the top page edge.
    pub y_mm: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanPage {
    pub lines: Vec<PlacedLine>,
}

/// The full paginated layout for one poster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub pages: Vec<PlanPage>,
}

struct PageCursor {
    done: Vec<PlanPage>,
    current: PlanPage,
    /// Distance from the top of the current page to the next baseline.
    y_mm: f64,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: PlanPage::default(),
            y_mm: MARGIN_MM,
        }
    }

    /// Place one line, breaking to a new page when the baseline would land in
    /// the bottom margin.
    fn push_line(&mut self, text: String, role: FontRole, size_pt: f64, x_mm: f64) {
        let advance = size_pt * LINE_SPACING * PT_TO_MM;
        if self.y_mm + advance > PAGE_HEIGHT_MM - MARGIN_MM {
            self.done.push(std::mem::take(&mut self.current));
            self.y_mm = MARGIN_MM;
        }
        self.y_mm += advance;
        self.current.lines.push(PlacedLine {
            text,
            role,
            size_pt,
            x_mm,
            y_mm: self.y_mm,
        });
    }

    fn gap(&mut self) {
        self.y_mm += BLOCK_GAP_MM;
    }

    fn finish(mut self) -> Vec<PlanPage> {
        self.done.push(self.current);
        self.done
    }
}

/// Lay out the snapshot's blocks, in committed order, onto A4 pages.
pub fn plan_poster(snapshot: &PosterSnapshot) -> RenderPlan {
    let mut cursor = PageCursor::new();
    let usable_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

    for block in &snapshot.blocks {
        match &block.kind {
            BlockKind::Title { text } => {
                for line in wrap(text, max_chars(usable_width, TITLE_SIZE_PT)) {
                    cursor.push_line(line, FontRole::Title, TITLE_SIZE_PT, MARGIN_MM);
                }
            }
            BlockKind::Text { text } => {
                for line in wrap(text, max_chars(usable_width, BODY_SIZE_PT)) {
                    cursor.push_line(line, FontRole::Body, BODY_SIZE_PT, MARGIN_MM);
                }
            }
            BlockKind::Image { url, side } => {
                // Images are rendered as a captioned reference, indented to
                // the side the block hangs on.
                let x_mm = match side {
                    ImageSide::Left => MARGIN_MM,
                    ImageSide::Right => PAGE_WIDTH_MM / 2.0,
                };
                let column_width = PAGE_WIDTH_MM - MARGIN_MM - x_mm;
                let label = format!("[image {}]", side.as_str());
                cursor.push_line(label, FontRole::Caption, CAPTION_SIZE_PT, x_mm);
                for line in wrap(url, max_chars(column_width, CAPTION_SIZE_PT)) {
                    cursor.push_line(line, FontRole::Caption, CAPTION_SIZE_PT, x_mm);
                }
            }
        }
        cursor.gap();
    }

    RenderPlan {
        pages: cursor.finish(),
    }
}

fn max_chars(width_mm: f64, size_pt: f64) -> usize {
    let glyph_mm = size_pt * GLYPH_WIDTH_FACTOR * PT_TO_MM;
    ((width_mm / glyph_mm) as usize).max(1)
}

/// Greedy word wrap; words longer than a line are hard-split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split oversized words (long URLs mostly)
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        // Keep empty blocks visible as an empty slot
        lines.push(String::new());
    }
    lines
}

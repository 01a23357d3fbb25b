//! Paint stage: renders a [`RenderPlan`] through `printpdf`.
//!
//! Uses the built-in Helvetica faces so export needs no font files, and
//! serializes the whole document to memory; writing it out is the caller's
//! job.

use crate::error::ExportError;
use crate::plan::{FontRole, RenderPlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

const DOCUMENT_TITLE: &str = "poster";
const LAYER_NAME: &str = "poster";

struct Fonts {
    title: IndirectFontRef,
    body: IndirectFontRef,
    caption: IndirectFontRef,
}

impl Fonts {
    fn for_role(&self, role: FontRole) -> &IndirectFontRef {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::Caption => &self.caption,
        }
    }
}

/// Serialize the plan to PDF bytes. A4 portrait, one PDF page per plan page.
pub fn render_plan(plan: &RenderPlan) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        LAYER_NAME,
    );
    let fonts = Fonts {
        title: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        body: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        caption: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
    };

    for (index, page) in plan.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in &page.lines {
            if line.text.is_empty() {
                continue;
            }
            // Plan measures from the top edge, PDF space from the bottom
            layer.use_text(
                line.text.clone(),
                line.size_pt as f32,
                Mm(line.x_mm as f32),
                Mm((PAGE_HEIGHT_MM - line.y_mm) as f32),
                fonts.for_role(line.role),
            );
        }
    }

    Ok(doc.save_to_bytes()?)
}

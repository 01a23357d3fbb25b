//! # Export adapter
//!
//! Renders a committed [`PosterSnapshot`] to a paginated A4 portrait PDF and
//! writes it under the fixed name `report.pdf`.
//!
//! The adapter is split in two stages so the interesting part stays testable
//! without parsing PDF output:
//!
//! - [`plan`] lays the snapshot out into a [`plan::RenderPlan`]: pages of
//!   positioned, wrapped text lines in millimetre coordinates measured from
//!   the top-left of the page.
//! - [`pdf`] paints a plan through `printpdf` with built-in Helvetica fonts
//!   and serializes the document to memory.
//!
//! The document is fully serialized before anything touches the filesystem,
//! and the final write goes through a temp file + rename, so a failed export
//! never leaves a partial `report.pdf` behind.
//!
//! Callers are responsible for the drag guard: take the snapshot via
//! `PosterEditor::export_snapshot`, which refuses to produce one mid-drag.

pub mod error;
pub mod pdf;
pub mod plan;

pub use error::ExportError;

use posterboard_engine::PosterSnapshot;
use std::path::{Path, PathBuf};

/// Fixed output file name. Re-exports overwrite the previous report.
pub const REPORT_FILE_NAME: &str = "report.pdf";

/// Render `snapshot` to `<export_dir>/report.pdf`.
///
/// Returns the path of the written file. On failure no file (partial or
/// otherwise) is left at the destination.
pub fn export_poster(snapshot: &PosterSnapshot, export_dir: &Path) -> Result<PathBuf, ExportError> {
    let render_plan = plan::plan_poster(snapshot);
    let bytes = pdf::render_plan(&render_plan)?;

    let path = export_dir.join(REPORT_FILE_NAME);
    let tmp_path = export_dir.join(format!("{REPORT_FILE_NAME}.tmp"));

    std::fs::write(&tmp_path, &bytes)?;
    if let Err(e) = std::fs::rename(&tmp_path, &path) {
        // Rename failed: clean up the temp file rather than leaving it around
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    log::info!(
        "exported {} blocks over {} pages to {}",
        snapshot.blocks.len(),
        render_plan.pages.len(),
        path.display()
    );
    Ok(path)
}

use std::fs;
use std::path::{Path, PathBuf};

/// Where a recipient's PDF is expected to live, and whether it is there.
///
/// Computed per recipient at send time, so the directory may change between
/// batch start and row processing; the lookup reflects whatever is on disk
/// at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentReference {
    pub expected_filename: String,
    pub resolved_path: PathBuf,
    pub exists: bool,
}

/// Resolve the PDF expected for `display_name` inside `directory`.
///
/// The filename is the display name with `.pdf` appended, byte for byte.
/// No case, whitespace or accent normalization is applied: the dataset and
/// the files on disk must agree exactly. A missing file is a normal outcome,
/// never an error.
pub fn resolve(display_name: &str, directory: &Path) -> AttachmentReference {
    let expected_filename = format!("{}.pdf", display_name);
    let resolved_path = directory.join(&expected_filename);
    let exists = resolved_path.is_file();

    AttachmentReference {
        expected_filename,
        resolved_path,
        exists,
    }
}

/// Count the PDF files directly inside `directory`.
///
/// Used for the pre-batch folder feedback; an unreadable directory counts
/// as zero rather than failing.
pub fn count_pdfs(directory: &Path) -> usize {
    match fs::read_dir(directory) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
            })
            .count(),
        Err(_) => 0,
    }
}

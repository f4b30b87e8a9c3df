//! Font resolution: probe an ordered list of candidate files.

use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, PxScale};
use walkdir::WalkDir;

use crate::error::{CardError, Result};

use super::bitmap;
use super::Face;

/// Platform font files tried after any configured ones.
const DEFAULT_CANDIDATES: &[&str] = &[
    "/Library/Fonts/Luminari.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Where glyphs come from for the whole run.
#[derive(Clone)]
pub enum FontSource {
    File { font: FontArc, path: PathBuf },
    Builtin,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::File { path, .. } => write!(f, "FontSource::File({})", path.display()),
            FontSource::Builtin => write!(f, "FontSource::Builtin"),
        }
    }
}

impl FontSource {
    /// First candidate that reads and parses wins; the builtin font otherwise.
    pub fn resolve(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::load(path) {
                Ok(font) => {
                    log::debug!("using font {}", path.display());
                    return FontSource::File {
                        font,
                        path: path.clone(),
                    };
                }
                Err(e) => log::debug!("skipping font candidate: {}", e),
            }
        }
        log::warn!("no usable font file found, falling back to the builtin bitmap font");
        FontSource::Builtin
    }

    /// Load a single font file.
    pub fn load(path: &Path) -> Result<FontArc> {
        let data = std::fs::read(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;
        FontArc::try_from_vec(data).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to parse font: {}", e),
        })
    }

    /// The face for a requested pixel size.
    ///
    /// The builtin font only scales in whole multiples of its 8px cell, so
    /// its size approximates the request.
    pub fn face(&self, px: u32) -> Face {
        match self {
            FontSource::File { font, .. } => Face::Vector {
                font: font.clone(),
                scale: PxScale::from(px.max(1) as f32),
            },
            FontSource::Builtin => Face::Bitmap {
                scale: ((px as f32 / bitmap::CELL_HEIGHT as f32).round() as u32).max(1),
            },
        }
    }

    /// Human-readable description for status output.
    pub fn describe(&self) -> String {
        match self {
            FontSource::File { path, .. } => path.display().to_string(),
            FontSource::Builtin => "builtin bitmap font".to_string(),
        }
    }
}

/// The platform candidate list.
pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// Font files under the given directories, sorted per directory for a stable order.
pub fn scan_font_dirs(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in dirs {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_font_file(p))
            .collect();
        files.sort();
        found.extend(files);
    }

    found
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| FONT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_skips_missing_and_invalid() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"not a font").unwrap();

        let source = FontSource::resolve(&[dir.path().join("missing.ttf"), bogus]);
        assert!(matches!(source, FontSource::Builtin));
    }

    #[test]
    fn test_builtin_face_scale_tracks_request() {
        let source = FontSource::Builtin;
        assert!(matches!(source.face(4), Face::Bitmap { scale: 1 }));
        assert!(matches!(source.face(16), Face::Bitmap { scale: 2 }));
        assert!(matches!(source.face(28), Face::Bitmap { scale: 4 }));
    }

    #[test]
    fn test_scan_font_dirs_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.ttf"), b"").unwrap();
        fs::write(dir.path().join("a.OTF"), b"").unwrap();
        fs::write(dir.path().join("nested").join("c.ttc"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();

        let found = scan_font_dirs(&[dir.path().to_path_buf()]);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.OTF", "b.ttf", "c.ttc"]);
    }

    #[test]
    fn test_default_candidates_not_empty() {
        assert!(!default_candidates().is_empty());
    }
}

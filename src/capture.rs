//! PNG export and import for the drawing surface.
//!
//! Export encodes the surface's pixel snapshot as a PNG, written either to an
//! explicit path or into a configured directory under a timestamped filename.
//! A data-URL encoder covers frontends that download the image instead of
//! touching the filesystem. Import goes the other way: decode a PNG and paint
//! it onto the surface at the origin, replacing the current content.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Local;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::draw::{Snapshot, Surface};

/// Errors that can occur while exporting or importing drawings.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to access image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Inkpad"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

impl FileSaveConfig {
    /// Builds the save configuration from the `[export]` config section.
    pub fn from_export_config(export: &crate::config::ExportConfig) -> Self {
        let defaults = Self::default();
        Self {
            save_directory: export
                .directory
                .as_deref()
                .map(expand_tilde)
                .unwrap_or(defaults.save_directory),
            filename_template: export.filename_template.clone(),
            format: export.format.clone(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Arguments
/// * `directory` - Path to the directory
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CaptureError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Encodes a pixel snapshot as PNG bytes.
pub fn encode_png(snapshot: &Snapshot) -> Result<Vec<u8>, CaptureError> {
    let image = RgbaImage::from_raw(
        snapshot.width(),
        snapshot.height(),
        snapshot.pixels().to_vec(),
    )
    .expect("snapshot buffer matches its dimensions");

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes a pixel snapshot as a `data:image/png;base64,` URL.
///
/// This is the download path frontends use when they never touch the
/// filesystem.
pub fn to_data_url(snapshot: &Snapshot) -> Result<String, CaptureError> {
    let bytes = encode_png(snapshot)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(bytes)))
}

/// Saves a pixel snapshot as a PNG at an explicit path.
pub fn export_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), CaptureError> {
    let bytes = encode_png(snapshot)?;
    log::info!("Saving drawing to: {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, bytes)?;
    log::info!("Drawing saved successfully: {}", path.display());
    Ok(())
}

/// Saves a pixel snapshot into the configured export directory.
///
/// The directory is created if needed; the filename comes from the chrono
/// template in the save configuration.
///
/// # Returns
/// Path to the saved file
pub fn export_to_directory(
    snapshot: &Snapshot,
    config: &FileSaveConfig,
) -> Result<PathBuf, CaptureError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    export_to_path(snapshot, &file_path)?;
    Ok(file_path)
}

/// Loads a PNG and paints it onto the surface at the origin.
///
/// The surface is cleared first, so the import replaces the current content.
/// Images larger than the surface are clipped; smaller ones leave the rest of
/// the surface at the background color.
pub fn import_png<S: Surface>(surface: &mut S, path: &Path) -> Result<(), CaptureError> {
    let decoded = image::open(path)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    let snapshot = Snapshot::from_rgba(width, height, decoded.into_raw())
        .expect("decoded image buffer matches its dimensions");

    log::info!(
        "Imported {} ({}x{}) onto a {}x{} surface",
        path.display(),
        width,
        height,
        surface.width(),
        surface.height()
    );

    surface.clear();
    surface.draw_image(&snapshot, 0.0, 0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RasterSurface};
    use tempfile::TempDir;

    #[test]
    fn generate_filename_applies_the_template() {
        let filename = generate_filename("test_%Y%m%d", "png");
        assert!(filename.starts_with("test_"));
        assert!(filename.ends_with(".png"));
        // Check that it contains a valid date (4 digits for year)
        assert!(filename.contains("202"));
    }

    #[test]
    fn expand_tilde_resolves_home() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn default_save_config_targets_inkpad_directory() {
        let config = FileSaveConfig::default();
        assert_eq!(config.format, "png");
        assert!(config.save_directory.to_string_lossy().contains("Inkpad"));
    }

    #[test]
    fn data_url_carries_the_png_header() {
        let surface = RasterSurface::new(8, 8);
        let url = to_data_url(&surface.snapshot()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        // PNG magic bytes are 0x89 P N G, "iVBOR" in base64.
        assert!(url["data:image/png;base64,".len()..].starts_with("iVBOR"));
    }

    #[test]
    fn export_then_import_round_trips_pixels() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("drawing.png");

        let mut surface = RasterSurface::new(24, 24);
        surface.set_stroke_color(BLACK);
        surface.stroke_rect(4.0, 4.0, 12.0, 12.0);
        let original = surface.snapshot();

        export_to_path(&original, &path).unwrap();

        let mut restored = RasterSurface::new(24, 24);
        import_png(&mut restored, &path).unwrap();
        assert_eq!(restored.snapshot(), original);
    }

    #[test]
    fn import_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blank.png");
        export_to_path(&RasterSurface::new(16, 16).snapshot(), &path).unwrap();

        let mut surface = RasterSurface::new(16, 16);
        surface.stroke_rect(2.0, 2.0, 10.0, 10.0);
        import_png(&mut surface, &path).unwrap();
        // Previous strokes are gone: the import starts from a cleared surface.
        assert_eq!(
            surface.snapshot().pixel(2, 2).unwrap(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn export_to_directory_creates_the_directory() {
        let temp = TempDir::new().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("nested").join("out"),
            filename_template: "pad_%Y".to_string(),
            format: "png".to_string(),
        };
        let surface = RasterSurface::new(8, 8);
        let saved = export_to_directory(&surface.snapshot(), &config).unwrap();
        assert!(saved.exists());
        assert_eq!(saved.extension().unwrap(), "png");
    }

    #[test]
    fn import_missing_file_is_an_error() {
        let mut surface = RasterSurface::new(8, 8);
        let err = import_png(&mut surface, Path::new("/nonexistent/missing.png")).unwrap_err();
        assert!(matches!(err, CaptureError::Io(_) | CaptureError::Image(_)));
    }
}

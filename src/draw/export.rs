//! Off-screen bitmap rendering and PNG file export.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Cairo surface data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to save image: {0}")]
    Io(#[from] std::io::Error),
}

/// Rendered pixels in Cairo's premultiplied ARGB32 layout.
///
/// Each pixel is a native-endian `u32` of the form `0xAARRGGBB`; rows are
/// `stride` bytes apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Bitmap with no pixels, produced for zero-size surfaces.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            stride: 0,
            data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Reads the packed `0xAARRGGBB` value at `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride as usize + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Renders into a new ARGB32 surface of the given size and copies the pixels out.
    ///
    /// Non-positive dimensions yield [`Bitmap::empty`] without touching Cairo.
    pub fn render<F>(width: i32, height: i32, draw: F) -> Result<Self, ExportError>
    where
        F: FnOnce(&cairo::Context),
    {
        if width <= 0 || height <= 0 {
            log::debug!("Skipping export of zero-size surface {}x{}", width, height);
            return Ok(Self::empty());
        }

        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            draw(&ctx);
        }
        surface.flush();

        let stride = surface.stride();
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Encodes the bitmap as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        if self.is_empty() {
            // Cairo cannot encode a zero-size image; write a 1x1 transparent pixel.
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)?;
            surface.write_to_png(&mut buffer)?;
            return Ok(buffer);
        }

        let surface = cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?;
        surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

/// Configuration for exported image files.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Scribblepad"),
            filename_template: "sketch_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encode the bitmap as PNG and write it into the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_png(bitmap: &Bitmap, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let filename = generate_filename(&config.filename_template, &config.format);
    write_png(bitmap, &directory.join(filename))
}

/// Encode the bitmap as PNG and write it to an explicit path.
pub fn write_png(bitmap: &Bitmap, path: &Path) -> Result<PathBuf, ExportError> {
    let image_data = bitmap.to_png()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(path, &image_data)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(path.to_path_buf())
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

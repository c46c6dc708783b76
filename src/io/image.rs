//! PNG export of boolean grids with per-cell upscaling

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::MAX_IMAGE_PIXELS;
use crate::io::error::{Result, SpriteError, invalid_parameter};
use crate::spatial::{Coordinate, Grid};

/// Colours for empty (`[0]`) and filled (`[1]`) cells
pub type Palette = [[u8; 4]; 2];

/// Render the grid to an RGBA image, one `scale x scale` block per cell
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero, the scaled image would
/// not fit in `u32` pixel dimensions, or it holds more than
/// `MAX_IMAGE_PIXELS` pixels
pub fn rasterize(
    grid: &Grid<bool>,
    palette: &Palette,
    scale: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(|| {
                invalid_parameter(
                    "scale",
                    &scale,
                    &format!("{cells} cells do not fit in an image at this scale"),
                )
            })
    };
    let width = scaled(grid.width())?;
    let height = scaled(grid.height())?;

    let pixels = (width as usize)
        .checked_mul(height as usize)
        .filter(|&pixels| pixels <= MAX_IMAGE_PIXELS)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!("a {width}x{height} image exceeds {MAX_IMAGE_PIXELS} pixels"),
            )
        })?;
    log::trace!("rasterizing {} grid into {pixels} pixels", grid.dimensions());

    let [empty, filled] = *palette;
    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        let coord = Coordinate::new((px / scale) as usize, (py / scale) as usize);
        if grid.cell(coord).copied().unwrap_or(false) {
            Rgba(filled)
        } else {
            Rgba(empty)
        }
    }))
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or too large for the grid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid<bool>,
    palette: &Palette,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = rasterize(grid, palette, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SpriteError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SpriteError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

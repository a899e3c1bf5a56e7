//! PNG export of the assembled picture with marker cells highlighted

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::algorithm::bitset::CellMask;
use crate::io::configuration::{MARKER_COLOUR, SET_COLOUR, UNSET_COLOUR};
use crate::io::error::{PuzzleError, Result, WithPath, invalid_parameter};
use crate::spatial::picture::Picture;

fn cell_colour(picture: &Picture, covered: Option<&CellMask>, row: usize, col: usize) -> Rgba<u8> {
    if covered.is_some_and(|mask| mask.contains(row, col)) {
        Rgba(MARKER_COLOUR)
    } else if picture.is_set(row, col) {
        Rgba(SET_COLOUR)
    } else {
        Rgba(UNSET_COLOUR)
    }
}

/// Render a picture as an RGBA image, `cell_pixels` pixels per cell
///
/// # Errors
///
/// Returns an invalid parameter error if `cell_pixels` is zero or the
/// picture is empty
pub fn render_picture(
    picture: &Picture,
    covered: Option<&CellMask>,
    cell_pixels: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"must be positive",
        ));
    }
    if picture.rows() == 0 || picture.cols() == 0 {
        return Err(invalid_parameter(
            "picture",
            &format!("{}x{}", picture.rows(), picture.cols()),
            &"cannot export an empty picture",
        ));
    }

    let width = picture.cols() as u32 * cell_pixels;
    let height = picture.rows() as u32 * cell_pixels;
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / cell_pixels) as usize;
        let col = (x / cell_pixels) as usize;
        cell_colour(picture, covered, row, col)
    }))
}

/// Export a picture as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The picture is empty or `cell_pixels` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_picture_as_png(
    picture: &Picture,
    covered: Option<&CellMask>,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_picture(picture, covered, cell_pixels)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    Ok(())
}

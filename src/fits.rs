//! FITS file I/O for exported images.
//!
//! Writes one 2D pixel array per file as the primary HDU, the minimal
//! single-image layout the downstream classification tools read back.

use crate::error::ExportError;
use fitsio::hdu::HduInfo;
use fitsio::images::{ImageDescription, ImageType};
use fitsio::FitsFile;
use ndarray::{Array2, ArrayView2};
use std::path::Path;

/// Write `image` as the primary HDU of a new FITS file at `path`,
/// overwriting any existing file.
///
/// Pixels are stored in their natural row order (no axis flip).
pub fn write_image(path: &Path, image: ArrayView2<'_, u8>) -> Result<(), ExportError> {
    let (rows, cols) = image.dim();
    let description = ImageDescription {
        data_type: ImageType::UnsignedByte,
        dimensions: &[rows, cols],
    };

    let mut fptr = FitsFile::create(path)
        .with_custom_primary(&description)
        .overwrite()
        .open()?;
    let hdu = fptr.primary_hdu()?;

    let pixels: Vec<u8> = image.iter().copied().collect();
    hdu.write_image(&mut fptr, &pixels)?;
    Ok(())
}

/// Read the primary HDU of a FITS file back as a 2D `u8` array.
pub fn read_image(path: &Path) -> Result<Array2<u8>, ExportError> {
    let mut fptr = FitsFile::open(path)?;
    let hdu = fptr.primary_hdu()?;

    let shape = match &hdu.info {
        HduInfo::ImageInfo { shape, .. } => shape.clone(),
        _ => {
            return Err(ExportError::FitsLayout(
                "primary HDU holds no image".to_string(),
            ))
        }
    };
    if shape.len() != 2 {
        return Err(ExportError::FitsLayout(format!(
            "expected a 2D image, got {} axes",
            shape.len()
        )));
    }

    let pixels: Vec<u8> = hdu.read_image(&mut fptr)?;
    Array2::from_shape_vec((shape[0], shape[1]), pixels)
        .map_err(|err| ExportError::FitsLayout(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("img.fits");

        let image = Array2::from_shape_fn((28, 28), |(row, col)| (row * 28 + col) as u8);
        write_image(&path, image.view()).unwrap();

        let restored = read_image(&path).unwrap();
        assert_eq!(restored, image);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("img.fits");

        let first = Array2::from_elem((4, 4), 1u8);
        let second = Array2::from_elem((4, 4), 2u8);
        write_image(&path, first.view()).unwrap();
        write_image(&path, second.view()).unwrap();

        assert_eq!(read_image(&path).unwrap(), second);
    }
}

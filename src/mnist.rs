//! MNIST dataset loading.
//!
//! Reads the pre-downloaded IDX files (`train-images-idx3-ubyte` etc.) from a
//! base directory via the `mnist` crate and exposes both splits as `ndarray`
//! arrays. Downloading is an external step; a missing file is an error here.

use crate::error::ExportError;
use mnist::MnistBuilder;
use ndarray::{Array1, Array3};
use std::path::Path;

/// Image height in pixels.
pub const IMAGE_ROWS: usize = 28;
/// Image width in pixels.
pub const IMAGE_COLS: usize = 28;

const TRAIN_LEN: usize = 60_000;
const TEST_LEN: usize = 10_000;

const IDX_FILES: &[&str] = &[
    "train-images-idx3-ubyte",
    "train-labels-idx1-ubyte",
    "t10k-images-idx3-ubyte",
    "t10k-labels-idx1-ubyte",
];

/// Both MNIST splits, images as `[n, 28, 28]` arrays of `u8` pixels.
#[derive(Debug)]
pub struct MnistDataset {
    pub train_images: Array3<u8>,
    pub train_labels: Array1<u8>,
    pub test_images: Array3<u8>,
    pub test_labels: Array1<u8>,
}

impl MnistDataset {
    /// Images and labels of one split: the test split when `read_test` is
    /// set, the training split otherwise.
    pub fn split(&self, read_test: bool) -> (&Array3<u8>, &Array1<u8>) {
        if read_test {
            (&self.test_images, &self.test_labels)
        } else {
            (&self.train_images, &self.train_labels)
        }
    }
}

/// Load both MNIST splits from the IDX files under `data_dir`.
///
/// All four files are checked up front so a missing dataset surfaces as
/// [`ExportError::DatasetNotFound`] instead of a panic inside the loader.
pub fn load_dataset(data_dir: &Path) -> Result<MnistDataset, ExportError> {
    for name in IDX_FILES {
        let path = data_dir.join(name);
        if !path.is_file() {
            return Err(ExportError::DatasetNotFound(path));
        }
    }

    // The loader concatenates base_path and filename verbatim.
    let base_path = format!("{}/", data_dir.display());
    let raw = MnistBuilder::new()
        .base_path(&base_path)
        .label_format_digit()
        .training_set_length(TRAIN_LEN as u32)
        .validation_set_length(0)
        .test_set_length(TEST_LEN as u32)
        .finalize();

    Ok(MnistDataset {
        train_images: into_images(raw.trn_img, TRAIN_LEN)?,
        train_labels: Array1::from_vec(raw.trn_lbl),
        test_images: into_images(raw.tst_img, TEST_LEN)?,
        test_labels: Array1::from_vec(raw.tst_lbl),
    })
}

fn into_images(pixels: Vec<u8>, count: usize) -> Result<Array3<u8>, ExportError> {
    Array3::from_shape_vec((count, IMAGE_ROWS, IMAGE_COLS), pixels)
        .map_err(|err| ExportError::DatasetLayout(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_idx_files_are_reported() {
        let tmp = TempDir::new().unwrap();
        match load_dataset(tmp.path()) {
            Err(ExportError::DatasetNotFound(path)) => {
                assert!(path.ends_with("train-images-idx3-ubyte"));
            }
            other => panic!("expected DatasetNotFound, got {other:?}"),
        }
    }
}

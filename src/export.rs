//! MNIST-to-FITS export.
//!
//! Selects samples from one dataset split by class and count, then writes
//! each image as an individual single-HDU FITS file.

use crate::error::ExportError;
use crate::fits;
use crate::mnist::MnistDataset;
use ndarray::Axis;
use std::path::PathBuf;
use tracing::info;

/// Configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Digit class to export; -1 exports every class.
    pub sel_class: i64,
    /// Maximum number of images to export; -1 exports all matches.
    pub nmax: i64,
    /// Export the test split instead of the training split.
    pub read_test: bool,
    /// Directory receiving the FITS files.
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sel_class: -1,
            nmax: -1,
            read_test: false,
            out_dir: PathBuf::from("."),
        }
    }
}

/// One planned output file: sample index in the split plus file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExport {
    pub index: usize,
    pub filename: String,
}

/// Zero-padding tag for the 1-based export counter.
///
/// Counters below 1000 come out exactly four characters wide; 1000-9999 are
/// written bare. Larger counters fall back to the "000" prefix. Downstream
/// consumers depend on the literal file names, so the boundary behavior is
/// kept exactly as-is.
pub fn counter_tag(counter: usize) -> String {
    let prefix = match counter {
        10..=99 => "00",
        100..=999 => "0",
        1000..=9999 => "",
        // 1-9 and the >= 10000 fall-through share the widest prefix
        _ => "000",
    };
    format!("{prefix}{counter}")
}

/// Select the samples to export, in split order, with their file names.
///
/// When `sel_class >= 0` only samples with that label are kept; iteration
/// stops entirely once `nmax` samples were selected (when `nmax > 0`).
pub fn plan_exports(labels: &[u8], sel_class: i64, nmax: i64) -> Vec<PlannedExport> {
    let mut planned = Vec::new();
    let mut counter = 0usize;

    for (index, &label) in labels.iter().enumerate() {
        if sel_class >= 0 && i64::from(label) != sel_class {
            continue;
        }
        if nmax > 0 && counter as i64 >= nmax {
            info!("Max number of images reached ({counter}), exiting loop ...");
            break;
        }

        counter += 1;
        planned.push(PlannedExport {
            index,
            filename: format!("mnist_class{}_{}.fits", label, counter_tag(counter)),
        });
    }
    planned
}

/// Export the selected split of `dataset` as individual FITS files.
///
/// Returns the number of files written. A failure mid-loop aborts the run
/// and leaves already-written files on disk.
pub fn export_dataset(dataset: &MnistDataset, opts: &ExportOptions) -> Result<usize, ExportError> {
    let (images, labels) = dataset.split(opts.read_test);
    let planned = plan_exports(&labels.to_vec(), opts.sel_class, opts.nmax);

    for item in &planned {
        let out_path = opts.out_dir.join(&item.filename);
        info!(
            "Converting image {} to FITS file {} ...",
            item.index,
            out_path.display()
        );
        fits::write_image(&out_path, images.index_axis(Axis(0), item.index))?;
    }

    Ok(planned.len())
}

// InferenceDataset — single-domain listing for evaluation passes
//
// Scans `<root>/test/A` once and serves each file's transformed tensor
// together with its raw filename, so outputs can be written back under the
// name they came in with.

use std::path::{Path, PathBuf};

use crate::dataset::{Dataset, InferenceSample};
use crate::error::{Error, Result};
use crate::manifest;
use crate::transform::Pipeline;

/// A read-only view over `<root>/test/A`.
///
/// Filenames are kept in filesystem enumeration order, unsorted; cross-run
/// ordering is platform-dependent and not guaranteed. An empty directory is
/// a valid zero-length dataset.
#[derive(Debug)]
pub struct InferenceDataset {
    dir: PathBuf,
    names: Vec<String>,
    pipeline: Pipeline,
}

impl InferenceDataset {
    /// Scan `<root>/test/A`. Fails with [`Error::NotADirectory`] if the
    /// directory is absent.
    pub fn new<P: AsRef<Path>>(root: P, pipeline: Pipeline) -> Result<Self> {
        let dir = root.as_ref().join("test").join("A");
        let names = manifest::scan_names(&dir)?;
        Ok(InferenceDataset {
            dir,
            names,
            pipeline,
        })
    }

    /// The raw filenames as enumerated.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Dataset for InferenceDataset {
    type Item = InferenceSample;

    fn len(&self) -> usize {
        self.names.len()
    }

    fn get(&self, index: usize) -> Result<InferenceSample> {
        let name = self.names.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.names.len(),
        })?;
        let image = self.pipeline.load(&self.dir.join(name))?;
        Ok(InferenceSample {
            name: name.clone(),
            image,
        })
    }

    fn name(&self) -> &str {
        "inference"
    }
}

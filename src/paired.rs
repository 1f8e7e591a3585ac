// DomainPairDataset — paired/unpaired two-domain image dataset
//
// Scans `<root>/<mode>/A` and `<root>/<mode>/B` once at construction and
// serves a transformed (A, B) tensor pair per index:
//
//   root/
//     train/
//       A/  img_001.png ...
//       B/  img_050.png ...
//
// Length is the larger of the two manifests; the shorter domain wraps via
// modulo, so its files are revisited within an epoch. In unaligned mode the
// B image is drawn uniformly at random instead of by matched index.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::{Dataset, PairSample};
use crate::error::{Error, Result};
use crate::manifest;
use crate::transform::Pipeline;

/// Builder for [`DomainPairDataset`].
pub struct DomainPairBuilder {
    root: PathBuf,
    mode: String,
    pipeline: Pipeline,
    unaligned: bool,
    seed: Option<u64>,
}

impl DomainPairBuilder {
    /// Create a builder rooted at the given directory, defaulting to the
    /// "train" split, the standard 512-edge pipeline, and aligned sampling.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DomainPairBuilder {
            root: root.as_ref().to_path_buf(),
            mode: "train".to_string(),
            pipeline: Pipeline::standard(512),
            unaligned: false,
            seed: None,
        }
    }

    /// Split name under the root ("train", "test", ...).
    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    /// Replace the preprocessing pipeline.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Sample domain B uniformly at random instead of by matched index.
    pub fn unaligned(mut self, yes: bool) -> Self {
        self.unaligned = yes;
        self
    }

    /// Seed the unaligned-sampling RNG for a reproducible draw stream.
    /// Unseeded datasets draw from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Scan both domain directories and build the dataset.
    ///
    /// Fails with [`Error::NotADirectory`] if either directory is absent and
    /// [`Error::EmptyDomain`] if either holds zero files, so index
    /// wraparound never divides by zero.
    pub fn build(self) -> Result<DomainPairDataset> {
        let dir_a = self.root.join(&self.mode).join("A");
        let dir_b = self.root.join(&self.mode).join("B");
        let files_a = manifest::scan_sorted(&dir_a)?;
        let files_b = manifest::scan_sorted(&dir_b)?;
        if files_a.is_empty() {
            return Err(Error::EmptyDomain(dir_a));
        }
        if files_b.is_empty() {
            return Err(Error::EmptyDomain(dir_b));
        }
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(DomainPairDataset {
            files_a,
            files_b,
            pipeline: self.pipeline,
            unaligned: self.unaligned,
            rng: Mutex::new(rng),
        })
    }
}

/// A two-domain image dataset for translation training.
///
/// The manifests are sorted lexicographically at construction and never
/// change afterward; files added or removed later are not reflected.
#[derive(Debug)]
pub struct DomainPairDataset {
    files_a: Vec<PathBuf>,
    files_b: Vec<PathBuf>,
    pipeline: Pipeline,
    unaligned: bool,
    // Owned RNG for unaligned draws. Each draw is independent and
    // order-insensitive, so a plain lock per call suffices.
    rng: Mutex<StdRng>,
}

impl DomainPairDataset {
    /// Convenience entry-point: `DomainPairDataset::new(root)` returns a builder.
    pub fn new<P: AsRef<Path>>(root: P) -> DomainPairBuilder {
        DomainPairBuilder::new(root)
    }

    /// The sorted domain-A manifest.
    pub fn files_a(&self) -> &[PathBuf] {
        &self.files_a
    }

    /// The sorted domain-B manifest.
    pub fn files_b(&self) -> &[PathBuf] {
        &self.files_b
    }

    fn b_index(&self, index: usize) -> usize {
        if self.unaligned {
            self.rng.lock().unwrap().gen_range(0..self.files_b.len())
        } else {
            index % self.files_b.len()
        }
    }
}

impl Dataset for DomainPairDataset {
    type Item = PairSample;

    fn len(&self) -> usize {
        self.files_a.len().max(self.files_b.len())
    }

    fn get(&self, index: usize) -> Result<PairSample> {
        let path_a = &self.files_a[index % self.files_a.len()];
        let path_b = &self.files_b[self.b_index(index)];
        let a = self.pipeline.load(path_a)?;
        let b = self.pipeline.load(path_b)?;
        Ok(PairSample { a, b })
    }

    fn name(&self) -> &str {
        "domain-pair"
    }
}

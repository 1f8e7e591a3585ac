// DataLoader — batching, shuffling, iteration
//
// The datasets only hand out one sample per index; this wraps any of them
// with epoch shuffling and fixed-size batches for a training loop.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use rayon::prelude::*;

use crate::dataset::Dataset;
use crate::error::Result;

/// Configuration for the DataLoader.
#[derive(Debug, Clone)]
pub struct DataLoaderConfig {
    /// Number of samples per batch.
    pub batch_size: usize,
    /// Whether to shuffle indices each epoch.
    pub shuffle: bool,
    /// Whether to drop the last incomplete batch.
    pub drop_last: bool,
    /// Number of parallel workers for sample fetching (0 = sequential).
    pub num_workers: usize,
    /// Optional random seed for reproducible shuffling.
    pub seed: Option<u64>,
}

impl Default for DataLoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            shuffle: true,
            drop_last: false,
            num_workers: 0,
            seed: None,
        }
    }
}

impl DataLoaderConfig {
    pub fn batch_size(mut self, bs: usize) -> Self {
        self.batch_size = bs;
        self
    }

    pub fn shuffle(mut self, s: bool) -> Self {
        self.shuffle = s;
        self
    }

    pub fn drop_last(mut self, d: bool) -> Self {
        self.drop_last = d;
        self
    }

    pub fn num_workers(mut self, n: usize) -> Self {
        self.num_workers = n;
        self
    }

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }
}

/// Wraps a [`Dataset`] and produces batches of its items.
///
/// A batch is a `Vec<D::Item>`; stacking into framework tensors is the
/// consumer's business.
pub struct DataLoader<'a, D: Dataset> {
    dataset: &'a D,
    config: DataLoaderConfig,
    indices: Vec<usize>,
}

impl<'a, D: Dataset> DataLoader<'a, D>
where
    D::Item: Send,
{
    /// Create a new DataLoader over a dataset.
    pub fn new(dataset: &'a D, config: DataLoaderConfig) -> Self {
        let indices: Vec<usize> = (0..dataset.len()).collect();
        Self {
            dataset,
            config,
            indices,
        }
    }

    /// The number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        if self.config.drop_last {
            self.dataset.len() / self.config.batch_size
        } else {
            self.dataset.len().div_ceil(self.config.batch_size)
        }
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Reshuffle indices (call at the start of each epoch).
    pub fn reshuffle(&mut self) {
        if self.config.shuffle {
            match self.config.seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    self.indices.shuffle(&mut rng);
                }
                None => {
                    let mut rng = thread_rng();
                    self.indices.shuffle(&mut rng);
                }
            }
        }
    }

    /// Fetch a slice of samples, optionally in parallel via rayon. The
    /// first error aborts the batch.
    fn fetch_samples(&self, indices: &[usize]) -> Result<Vec<D::Item>> {
        if self.config.num_workers > 0 && indices.len() > 1 {
            indices
                .par_iter()
                .map(|&i| self.dataset.get(i))
                .collect()
        } else {
            indices.iter().map(|&i| self.dataset.get(i)).collect()
        }
    }

    /// Iterate over one epoch's batches, reshuffling first.
    pub fn iter_batches(&mut self) -> BatchIterator<'_, 'a, D> {
        self.reshuffle();
        BatchIterator {
            loader: self,
            batch_idx: 0,
        }
    }
}

/// Iterator that yields one batch at a time.
pub struct BatchIterator<'l, 'a, D: Dataset> {
    loader: &'l DataLoader<'a, D>,
    batch_idx: usize,
}

impl<'l, 'a, D: Dataset> Iterator for BatchIterator<'l, 'a, D>
where
    D::Item: Send,
{
    type Item = Result<Vec<D::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        let bs = self.loader.config.batch_size;
        let n = self.loader.dataset.len();
        let start = self.batch_idx * bs;

        if start >= n {
            return None;
        }

        if self.loader.config.drop_last && start + bs > n {
            return None;
        }

        let end = (start + bs).min(n);
        self.batch_idx += 1;

        let batch_indices: Vec<usize> = (start..end).map(|i| self.loader.indices[i]).collect();
        Some(self.loader.fetch_samples(&batch_indices))
    }
}

// Dataset trait — indexed access over an immutable file manifest

use crate::error::Result;
use crate::tensor::ImageTensor;

/// One training sample: a pair of independently transformed tensors, one
/// from each domain. There is no shared identity beyond index
/// correspondence.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSample {
    pub a: ImageTensor,
    pub b: ImageTensor,
}

/// One inference sample: the transformed tensor plus the raw filename as
/// enumerated, kept verbatim so outputs can be correlated back to inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceSample {
    pub name: String,
    pub image: ImageTensor,
}

/// An indexed collection of samples over a read-only filesystem scan.
///
/// Implementations must be `Send + Sync`: the consuming batching layer may
/// call `get` from multiple worker threads, out of order. `get` must be a
/// function of the index and the immutable manifest/pipeline state alone
/// (file I/O aside), so concurrent calls need no coordination.
pub trait Dataset: Send + Sync {
    /// The record type produced per index.
    type Item;

    /// Total number of samples.
    fn len(&self) -> usize;

    /// Fetch the sample at `index`. Opens and decodes from disk on every
    /// call; repeated access re-reads the file.
    fn get(&self, index: usize) -> Result<Self::Item>;

    /// Whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Optional human-readable name.
    fn name(&self) -> &str {
        "dataset"
    }
}

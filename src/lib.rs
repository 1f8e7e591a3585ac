//! # pairset
//!
//! Dataset loading for two-domain image-to-image translation training.
//!
//! This crate provides:
//! - [`Dataset`] trait — indexed access over an immutable filesystem scan
//! - [`DomainPairDataset`] — `<root>/<mode>/A` + `<root>/<mode>/B` pairs,
//!   with optional unaligned (random-B) sampling
//! - [`InferenceDataset`] — `<root>/test/A` with original filenames kept
//! - [`Pipeline`] — typed resize → tensor → normalize preprocessing
//! - [`DataLoader`] — batching and shuffling over any dataset
//!
//! The datasets are thin, read-only views: manifests are scanned once at
//! construction, every `get` re-reads and re-decodes from disk, and all
//! failures propagate as [`Error`] to the caller.
//!
//! ```no_run
//! use pairset::{Dataset, DomainPairDataset, Pipeline};
//!
//! let ds = DomainPairDataset::new("data/horse2zebra")
//!     .mode("train")
//!     .pipeline(Pipeline::standard(512))
//!     .unaligned(true)
//!     .build()?;
//! let sample = ds.get(0)?;
//! assert_eq!(sample.a.shape(), [3, 512, 512]);
//! # Ok::<(), pairset::Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod inference;
pub mod loader;
pub mod manifest;
pub mod paired;
pub mod tensor;
pub mod transform;

pub use dataset::{Dataset, InferenceSample, PairSample};
pub use error::{Error, Result};
pub use inference::InferenceDataset;
pub use loader::{BatchIterator, DataLoader, DataLoaderConfig};
pub use paired::{DomainPairBuilder, DomainPairDataset};
pub use tensor::ImageTensor;
pub use transform::{Pipeline, TransformOp};

// Transform pipeline — resize / tensor conversion / normalization

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{Error, Result};
use crate::tensor::ImageTensor;

/// One preprocessing operation.
///
/// Ops run in two stages: image-space ops (`Resize`) apply before the
/// `ToTensor` conversion, tensor-space ops (`Normalize`) after it. Applying
/// an op at the wrong stage is a [`Error::StageMismatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Resize to an exact `edge × edge` square (Lanczos3).
    Resize { edge: u32 },
    /// Decode to RGB and scale to `[0, 1]` f32 in `[C, H, W]` planar layout.
    ToTensor,
    /// Per-element `(v - mean) / std`.
    Normalize { mean: f32, std: f32 },
}

/// An ordered, deterministic image → tensor pipeline.
///
/// The pipeline carries no state beyond its op parameters: the same input
/// image always yields the same output tensor, so a pipeline is safe to
/// share across concurrent readers.
#[derive(Debug, Clone)]
pub struct Pipeline {
    ops: Vec<TransformOp>,
}

enum Stage {
    Image(DynamicImage),
    Tensor(ImageTensor),
}

impl Pipeline {
    pub fn new(ops: Vec<TransformOp>) -> Self {
        Self { ops }
    }

    /// The fixed training pipeline: resize to `edge × edge`, convert to a
    /// `[0, 1]` tensor, then normalize with mean 0.5 / std 0.5 so values
    /// land in `[-1, 1]`.
    pub fn standard(edge: u32) -> Self {
        Self::new(vec![
            TransformOp::Resize { edge },
            TransformOp::ToTensor,
            TransformOp::Normalize { mean: 0.5, std: 0.5 },
        ])
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Run the pipeline over an already-decoded image.
    pub fn apply(&self, image: DynamicImage) -> Result<ImageTensor> {
        let mut stage = Stage::Image(image);
        for op in &self.ops {
            stage = match (op, stage) {
                (TransformOp::Resize { edge }, Stage::Image(img)) => {
                    Stage::Image(img.resize_exact(*edge, *edge, FilterType::Lanczos3))
                }
                (TransformOp::Resize { .. }, Stage::Tensor(_)) => {
                    return Err(Error::StageMismatch {
                        op: "Resize",
                        expected: "image",
                    })
                }
                (TransformOp::ToTensor, Stage::Image(img)) => Stage::Tensor(to_tensor(&img)?),
                (TransformOp::ToTensor, Stage::Tensor(_)) => {
                    return Err(Error::StageMismatch {
                        op: "ToTensor",
                        expected: "image",
                    })
                }
                (TransformOp::Normalize { mean, std }, Stage::Tensor(t)) => {
                    let [c, h, w] = t.shape();
                    let data = t.into_vec().iter().map(|v| (v - mean) / std).collect();
                    Stage::Tensor(ImageTensor::from_parts(data, c, h, w)?)
                }
                (TransformOp::Normalize { .. }, Stage::Image(_)) => {
                    return Err(Error::StageMismatch {
                        op: "Normalize",
                        expected: "tensor",
                    })
                }
            };
        }
        match stage {
            Stage::Tensor(t) => Ok(t),
            Stage::Image(_) => Err(Error::NoTensorOutput),
        }
    }

    /// Open, decode, and transform the image at `path`. Decode failures
    /// surface as [`Error::ImageDecode`] and abort the fetch.
    pub fn load(&self, path: &Path) -> Result<ImageTensor> {
        let img = image::open(path).map_err(|source| Error::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply(img)
    }
}

/// Convert interleaved RGB8 to planar `[3, H, W]` f32 in `[0, 1]`.
fn to_tensor(img: &DynamicImage) -> Result<ImageTensor> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let raw = rgb.as_raw();
    let npix = (w * h) as usize;
    let mut data = vec![0.0f32; 3 * npix];
    for i in 0..npix {
        data[i] = raw[i * 3] as f32 / 255.0;
        data[npix + i] = raw[i * 3 + 1] as f32 / 255.0;
        data[2 * npix + i] = raw[i * 3 + 2] as f32 / 255.0;
    }
    ImageTensor::from_parts(data, 3, h as usize, w as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(w: u32, h: u32, px: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(px)))
    }

    #[test]
    fn standard_pipeline_shape_and_range() {
        let p = Pipeline::standard(8);
        let t = p.apply(solid(20, 10, [7, 130, 250])).unwrap();
        assert_eq!(t.shape(), [3, 8, 8]);
        for &v in t.as_slice() {
            assert!((-1.0..=1.0).contains(&v), "value {v} not in [-1, 1]");
        }
    }

    #[test]
    fn normalize_maps_extremes() {
        let p = Pipeline::standard(4);
        let white = p.apply(solid(4, 4, [255, 255, 255])).unwrap();
        let black = p.apply(solid(4, 4, [0, 0, 0])).unwrap();
        for &v in white.as_slice() {
            assert!((v - 1.0).abs() < 1e-6);
        }
        for &v in black.as_slice() {
            assert!((v + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn to_tensor_is_planar() {
        // No resize: a 1x2 image with distinct pixels keeps channel planes
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        let p = Pipeline::new(vec![TransformOp::ToTensor]);
        let t = p.apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(t.shape(), [3, 1, 2]);
        assert_eq!(t.as_slice(), &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn deterministic_for_same_input() {
        let p = Pipeline::standard(8);
        let a = p.apply(solid(16, 16, [10, 20, 30])).unwrap();
        let b = p.apply(solid(16, 16, [10, 20, 30])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn normalize_before_to_tensor_is_rejected() {
        let p = Pipeline::new(vec![TransformOp::Normalize { mean: 0.5, std: 0.5 }]);
        let err = p.apply(solid(4, 4, [0, 0, 0])).unwrap_err();
        assert!(matches!(err, Error::StageMismatch { op: "Normalize", .. }));
    }

    #[test]
    fn resize_after_to_tensor_is_rejected() {
        let p = Pipeline::new(vec![TransformOp::ToTensor, TransformOp::Resize { edge: 4 }]);
        let err = p.apply(solid(4, 4, [0, 0, 0])).unwrap_err();
        assert!(matches!(err, Error::StageMismatch { op: "Resize", .. }));
    }

    #[test]
    fn pipeline_without_to_tensor_is_rejected() {
        let p = Pipeline::new(vec![TransformOp::Resize { edge: 4 }]);
        let err = p.apply(solid(8, 8, [0, 0, 0])).unwrap_err();
        assert!(matches!(err, Error::NoTensorOutput));
    }
}

use std::path::Path;

use image::{imageops::FilterType, io::Reader as ImageReader, DynamicImage, ImageError, ImageResult};

const NORMALIZE_MEAN: f32 = 0.5;
const NORMALIZE_STD: f32 = 0.5;

/// Memory order of the input tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TensorLayout {
    /// `[1, 3, size, size]`, the order the network was trained with.
    #[default]
    Nchw,
    /// `[1, size, size, 3]`
    Nhwc,
}

impl TensorLayout {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "nchw" => Some(TensorLayout::Nchw),
            "nhwc" => Some(TensorLayout::Nhwc),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputTensor {
    pub shape: [u64; 4],
    pub data: Vec<f32>,
}

#[derive(Clone, Copy, Debug)]
pub struct Preprocessor {
    size: u32,
    layout: TensorLayout,
}

impl Preprocessor {
    pub fn new(size: u32, layout: TensorLayout) -> Self {
        Self { size, layout }
    }

    // uploads are always stored as .jpg, so the format comes from the contents
    pub fn load(&self, path: &Path) -> ImageResult<InputTensor> {
        let image = ImageReader::open(path)
            .map_err(ImageError::IoError)?
            .with_guessed_format()
            .map_err(ImageError::IoError)?
            .decode()?;

        Ok(self.to_tensor(&image))
    }

    pub fn to_tensor(&self, image: &DynamicImage) -> InputTensor {
        let size = self.size;
        let resized = DynamicImage::ImageRgb8(image.to_rgb8())
            .resize_exact(size, size, FilterType::Triangle)
            .to_rgb8();

        let mut data = Vec::with_capacity((size * size * 3) as usize);
        let shape = match self.layout {
            TensorLayout::Nchw => {
                for channel in 0..3 {
                    data.extend(resized.pixels().map(|pixel| normalize(pixel[channel])));
                }
                [1, 3, size as u64, size as u64]
            }
            TensorLayout::Nhwc => {
                for pixel in resized.pixels() {
                    data.extend(pixel.0.iter().map(|&value| normalize(value)));
                }
                [1, size as u64, size as u64, 3]
            }
        };

        InputTensor { shape, data }
    }
}

fn normalize(value: u8) -> f32 {
    (value as f32 / 255.0 - NORMALIZE_MEAN) / NORMALIZE_STD
}

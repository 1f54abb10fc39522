use std::fmt;

use image::imageops::FilterType;

// Pixel extension policy for padding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderType {
    Constant,
    Edge,
    Reflect,
    Symmetric,
}

impl BorderType {
    // Maps a possibly out-of-range coordinate onto [0, len).
    // None means "use the fill value". `len` must be non-zero.
    pub fn map_index(&self, index: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&index) {
            return Some(index as usize);
        }
        match self {
            BorderType::Constant => None,
            BorderType::Edge => Some(index.clamp(0, n - 1) as usize),
            // abc|ba (edge pixel not repeated)
            BorderType::Reflect => {
                if n == 1 {
                    return Some(0);
                }
                let period = 2 * (n - 1);
                let i = index.rem_euclid(period);
                let mapped = if i < n { i } else { period - i };
                Some(mapped as usize)
            }
            // abc|cb (edge pixel repeated)
            BorderType::Symmetric => {
                let period = 2 * n;
                let i = index.rem_euclid(period);
                let mapped = if i < n { i } else { period - 1 - i };
                Some(mapped as usize)
            }
        }
    }
}

impl fmt::Display for BorderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorderType::Constant => "constant",
            BorderType::Edge => "edge",
            BorderType::Reflect => "reflect",
            BorderType::Symmetric => "symmetric",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    Nearest,
    Bilinear,
    Bicubic,
}

impl InterpolationMode {
    pub fn filter_type(&self) -> FilterType {
        match self {
            InterpolationMode::Nearest => FilterType::Nearest,
            InterpolationMode::Bilinear => FilterType::Triangle,
            InterpolationMode::Bicubic => FilterType::CatmullRom,
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        };
        write!(f, "{}", name)
    }
}

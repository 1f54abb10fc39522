// Parameter checks and expansions shared by several descriptors

use crate::error::ParamError;

pub(crate) fn check_len(field: &'static str, len: usize, allowed: &[usize]) -> Result<(), ParamError> {
    if allowed.contains(&len) {
        Ok(())
    } else {
        Err(ParamError::InvalidLength { field, len })
    }
}

pub(crate) fn check_one_or_two(field: &'static str, len: usize) -> Result<(), ParamError> {
    if len == 1 || len == 2 {
        Ok(())
    } else {
        Err(ParamError::ExpectedOneOrTwo { field, len })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: i32) -> Result<(), ParamError> {
    if value < 0 {
        Err(ParamError::Negative { field, value })
    } else {
        Ok(())
    }
}

// [h] -> (h, 0), [h, w] -> (h, w). The 0 width tells the kernel "same as height".
pub(crate) fn size_to_hw(size: &[i32]) -> (i32, i32) {
    let height = size[0];
    let width = if size.len() == 2 { size[1] } else { 0 };
    (height, width)
}

// [v] -> (v, v, v), [r, g, b] -> (r, g, b)
pub(crate) fn expand_fill(fill: &[u8]) -> [u8; 3] {
    if fill.len() == 3 {
        [fill[0], fill[1], fill[2]]
    } else {
        [fill[0]; 3]
    }
}

pub(crate) struct PadSides {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

// [all], [left_right, top_bottom] or [left, top, right, bottom]
pub(crate) fn expand_padding(padding: &[i32]) -> PadSides {
    match padding.len() {
        1 => PadSides {
            top: padding[0],
            bottom: padding[0],
            left: padding[0],
            right: padding[0],
        },
        2 => PadSides {
            top: padding[1],
            bottom: padding[1],
            left: padding[0],
            right: padding[0],
        },
        _ => PadSides {
            top: padding[1],
            bottom: padding[3],
            left: padding[0],
            right: padding[2],
        },
    }
}

// [v] -> (v, v), [lb, ub] -> (lb, ub)
pub(crate) fn expand_range(values: &[f32]) -> (f32, f32) {
    let lb = values[0];
    let ub = if values.len() == 2 { values[1] } else { values[0] };
    (lb, ub)
}

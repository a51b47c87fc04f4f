//! 將取樣影像依列優先順序貼到黑色畫布上

use super::grid_layout::GridLayout;
use crate::error::{MosaicError, Result};
use crate::tools::{Frame, frame_shape};
use log::debug;
use ndarray::s;

/// 合成馬賽克
///
/// 所有影像必須與第一張同尺寸，且張數不超過 `grid_side²`。
/// 檢查都在配置畫布前完成；未填滿的格子保持黑色。
pub fn compose(images: &[Frame], grid_side: usize) -> Result<Frame> {
    let layout = GridLayout::with_side(grid_side);
    let (tile_height, tile_width) = validate(images, &layout)?;

    let mut canvas = Frame::zeros(layout.canvas_shape(tile_height, tile_width));

    for (index, image) in images.iter().enumerate() {
        let (row, col) = layout.cell_of(index);
        let top = row * tile_height;
        let left = col * tile_width;
        canvas
            .slice_mut(s![top..top + tile_height, left..left + tile_width, ..])
            .assign(image);
    }

    debug!(
        "合成 {} 張影像為 {grid_side}x{grid_side} 網格，畫布 {:?}",
        images.len(),
        canvas.dim()
    );

    Ok(canvas)
}

fn validate(images: &[Frame], layout: &GridLayout) -> Result<(usize, usize)> {
    let first = images.first().ok_or(MosaicError::EmptySequence)?;

    if images.len() > layout.capacity() {
        return Err(MosaicError::GridTooSmall {
            tiles: images.len(),
            capacity: layout.capacity(),
        });
    }

    let expected = frame_shape(first);
    if let Some((index, actual)) = images
        .iter()
        .map(frame_shape)
        .enumerate()
        .find(|(_, shape)| *shape != expected)
    {
        return Err(MosaicError::ShapeMismatch {
            index,
            expected,
            actual,
        });
    }

    Ok(expected)
}

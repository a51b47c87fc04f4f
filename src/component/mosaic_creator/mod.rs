//! 影像馬賽克元件
//!
//! 五階段流程：
//! A. 依檔名編號載入影像
//! B. 均勻取樣到指定張數
//! C. 計算正方形網格邊長
//! D. 依列優先順序合成畫布
//! E. 編碼並寫入輸出檔

mod compositor;
mod grid_layout;
mod image_source;
mod main;
mod pipeline;
mod sampler;

pub use compositor::compose;
pub use grid_layout::{GridLayout, grid_side};
pub use image_source::{ImageSource, LoadedImages};
pub use main::MosaicCreator;
pub use pipeline::{MosaicOptions, MosaicPipeline, MosaicReport, create_mosaic};
pub use sampler::{sample_uniformly, uniform_indices};

use crate::tools::RGB_CHANNELS;

/// 可容納 `n` 張的最小正方形邊長，即 `ceil(sqrt(n))`
///
/// `n = 0` 回傳 0。
#[must_use]
pub fn grid_side(n: usize) -> usize {
    // 以浮點數估計後用整數修正，避免大數時的誤差
    let mut side = (n as f64).sqrt() as usize;
    while side.saturating_mul(side) < n {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= n {
        side -= 1;
    }
    side
}

/// 正方形網格配置，依列優先順序填入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    side: usize,
}

impl GridLayout {
    #[must_use]
    pub fn for_count(n: usize) -> Self {
        Self { side: grid_side(n) }
    }

    #[must_use]
    pub const fn with_side(side: usize) -> Self {
        Self { side }
    }

    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.side * self.side
    }

    /// 第 `index` 張所在的 (列, 欄)
    #[must_use]
    pub const fn cell_of(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// 畫布形狀 (G*H, G*W, 3)
    #[must_use]
    pub const fn canvas_shape(&self, tile_height: usize, tile_width: usize) -> (usize, usize, usize) {
        (self.side * tile_height, self.side * tile_width, RGB_CHANNELS)
    }
}

//! 均勻取樣器
//!
//! 以實數步長 `len / count` 在整個序列上等距取樣，第 `i` 張取索引 `floor(i * step)`。
//! 第一張一定會被選到，最後一張則不保證。

/// 計算取樣索引
///
/// `len <= count` 時回傳全部索引 `0..len`。
#[must_use]
pub fn uniform_indices(len: usize, count: usize) -> Vec<usize> {
    if len <= count {
        return (0..len).collect();
    }

    let step = len as f64 / count as f64;
    (0..count)
        .map(|i| ((i as f64 * step).floor() as usize).min(len - 1))
        .collect()
}

/// 從有序序列中均勻取出 `count` 個元素，保留原本順序
///
/// 元素不足時原樣回傳；是否接受張數不足由呼叫端決定。
#[must_use]
pub fn sample_uniformly<T>(items: Vec<T>, count: usize) -> Vec<T> {
    if items.len() <= count {
        return items;
    }

    let indices = uniform_indices(items.len(), count);
    let mut wanted = indices.iter().copied().peekable();

    // step > 1 時索引嚴格遞增，一次走訪即可
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if wanted.peek() == Some(&index) {
                wanted.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_items_returned_unchanged() {
        let items = vec!["a", "b", "c"];
        assert_eq!(sample_uniformly(items.clone(), 3), items);
        assert_eq!(sample_uniformly(items.clone(), 16), items);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(sample_uniformly(items, 4).is_empty());
        assert!(uniform_indices(0, 4).is_empty());
    }

    #[test]
    fn test_known_indices() {
        // step = 2.5
        assert_eq!(uniform_indices(10, 4), vec![0, 2, 5, 7]);
        // step = 3
        assert_eq!(uniform_indices(12, 4), vec![0, 3, 6, 9]);
        // step = 100/16 = 6.25
        assert_eq!(
            uniform_indices(100, 16),
            vec![0, 6, 12, 18, 25, 31, 37, 43, 50, 56, 62, 68, 75, 81, 87, 93]
        );
    }

    #[test]
    fn test_sampled_length_and_order() {
        for len in 1..60 {
            for count in 1..20 {
                let items: Vec<usize> = (0..len).collect();
                let sampled = sample_uniformly(items, count);

                assert_eq!(sampled.len(), len.min(count), "len={len} count={count}");
                assert_eq!(sampled[0], 0);
                assert!(sampled.windows(2).all(|w| w[0] < w[1]));
                assert!(sampled.iter().all(|&i| i < len));
            }
        }
    }

    #[test]
    fn test_last_element_not_guaranteed() {
        let items: Vec<usize> = (0..10).collect();
        let sampled = sample_uniformly(items, 5);
        assert_eq!(sampled, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_deterministic() {
        let first = uniform_indices(1234, 37);
        let second = uniform_indices(1234, 37);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_count() {
        assert!(sample_uniformly(vec![1, 2, 3], 0).is_empty());
    }
}

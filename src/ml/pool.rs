// ============================================================
// Layer 5 — Adaptive Max Pooling
// ============================================================
// Reduces the last axis of a [batch, channels, length] tensor to
// a fixed number of bins, taking the maximum inside each bin.
// Bin i covers [floor(i * L / n), ceil((i + 1) * L / n)), so bins
// overlap when L isn't a multiple of n and repeat values when
// n > L.

use std::ops::Range;

use burn::prelude::*;

/// Index range of bin `index` when pooling `length` steps into `output_size` bins.
pub fn bin_bounds(index: usize, length: usize, output_size: usize) -> Range<usize> {
    let start = index * length / output_size;
    let end   = ((index + 1) * length).div_ceil(output_size);
    start..end
}

/// input: [batch, channels, length] → [batch, channels, output_size]
///
/// `output_size` must be non-zero; the network configuration rejects zero
/// before any module is built.
pub fn adaptive_max_pool1d<B: Backend>(input: Tensor<B, 3>, output_size: usize) -> Tensor<B, 3> {
    let [batch, channels, length] = input.dims();
    if length == output_size {
        return input;
    }

    let bins: Vec<Tensor<B, 3>> = (0..output_size)
        .map(|i| {
            input
                .clone()
                .slice([0..batch, 0..channels, bin_bounds(i, length, output_size)])
                .max_dim(2)
        })
        .collect();

    Tensor::cat(bins, 2)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_bin_bounds_cover_the_sequence() {
        assert_eq!(bin_bounds(0, 5, 2), 0..3);
        assert_eq!(bin_bounds(1, 5, 2), 2..5);
        assert_eq!(bin_bounds(0, 200, 100), 0..2);
        assert_eq!(bin_bounds(99, 200, 100), 198..200);
    }

    #[test]
    fn test_bin_bounds_repeat_when_upsampling() {
        let bins: Vec<_> = (0..4).map(|i| bin_bounds(i, 2, 4)).collect();
        assert_eq!(bins, vec![0..1, 0..1, 1..2, 1..2]);
    }

    #[test]
    fn test_pools_to_per_bin_maxima() {
        let device = Default::default();
        let input  = Tensor::<TestBackend, 3>::from_floats([[[1.0, 5.0, 2.0, 4.0, 3.0]]], &device);

        let out = adaptive_max_pool1d(input, 2);
        assert_eq!(out.dims(), [1, 1, 2]);
        assert_eq!(out.into_data().to_vec::<f32>().unwrap(), vec![5.0, 4.0]);
    }

    #[test]
    fn test_pools_each_channel_independently() {
        let device = Default::default();
        let input  = Tensor::<TestBackend, 3>::from_floats(
            [[[0.0, 1.0, 2.0, 3.0], [7.0, 6.0, 5.0, 4.0]]],
            &device,
        );

        let out = adaptive_max_pool1d(input, 2);
        assert_eq!(out.into_data().to_vec::<f32>().unwrap(), vec![1.0, 3.0, 7.0, 5.0]);
    }

    #[test]
    fn test_same_length_is_identity() {
        let device = Default::default();
        let input  = Tensor::<TestBackend, 3>::from_floats([[[3.0, -1.0, 2.0]]], &device);

        let out = adaptive_max_pool1d(input, 3);
        assert_eq!(out.into_data().to_vec::<f32>().unwrap(), vec![3.0, -1.0, 2.0]);
    }
}

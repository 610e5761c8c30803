//! Centered FIR smoothing with zero padding.
//!
//! Both kernels here are applied in "same" alignment: output `i` is the full
//! convolution at index `i + (len - 1) / 2`, samples outside the buffer count
//! as zero, and the output has the input's length.

/// Symmetric Hann window of `len` points, `0.5 - 0.5 cos(2πn / (len - 1))`.
pub fn hann_window(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (len - 1) as f64;
            (0..len)
                .map(|n| 0.5 - 0.5 * (std::f64::consts::TAU * n as f64 / denom).cos())
                .collect()
        }
    }
}

/// Input index range `[lo, hi]` touched by output `i` for a kernel of `len`.
///
/// May extend past either end of the buffer.
#[inline]
fn kernel_span(i: usize, len: usize) -> (isize, isize) {
    let hi = (i + (len - 1) / 2) as isize;
    (hi - (len as isize - 1), hi)
}

/// Convolves a 0/1 gate with a unit-sum Hann kernel of `kernel_len` points.
///
/// Gate stretches that are entirely on or entirely off under the kernel
/// resolve through a prefix count instead of a full dot product.
pub fn smooth_gate(gate: &[f64], kernel_len: usize) -> Vec<f64> {
    if kernel_len == 0 || gate.is_empty() {
        return gate.to_vec();
    }

    let mut kernel = hann_window(kernel_len);
    let sum: f64 = kernel.iter().sum();
    if sum > 0.0 {
        for k in kernel.iter_mut() {
            *k /= sum;
        }
    }

    let n = gate.len();
    let mut on_count = Vec::with_capacity(n + 1);
    on_count.push(0usize);
    for &g in gate {
        let last = on_count[on_count.len() - 1];
        on_count.push(last + usize::from(g != 0.0));
    }

    let mut out = vec![0.0; n];
    for (i, out_sample) in out.iter_mut().enumerate() {
        let (lo, hi) = kernel_span(i, kernel_len);
        let first = lo.max(0) as usize;
        let last = (hi.min(n as isize - 1)) as usize;
        let ones = on_count[last + 1] - on_count[first];

        if ones == 0 {
            continue;
        }
        if ones == kernel_len {
            *out_sample = 1.0;
            continue;
        }

        // Full convolution index j = hi; input k pairs with kernel[j - k].
        let mut acc = 0.0;
        for k in first..=last {
            let g = gate[k];
            if g != 0.0 {
                acc += g * kernel[(hi - k as isize) as usize];
            }
        }
        *out_sample = acc;
    }
    out
}

/// Centered moving average with a box of `window` samples.
///
/// The sum is always divided by `window`, so averages near the edges are
/// pulled toward zero by the padding.
pub fn moving_average(samples: &[f64], window: usize) -> Vec<f64> {
    let n = samples.len();
    if window == 0 || n == 0 {
        return vec![0.0; n];
    }

    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    let mut running = 0.0;
    for &s in samples {
        running += s;
        prefix.push(running);
    }

    let scale = 1.0 / window as f64;
    (0..n)
        .map(|i| {
            let (lo, hi) = kernel_span(i, window);
            let first = lo.max(0) as usize;
            let last = hi.min(n as isize - 1) as usize;
            (prefix[last + 1] - prefix[first]) * scale
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_window_shape() {
        let w = hann_window(5);
        assert_eq!(w.len(), 5);
        assert!(w[0].abs() < 1e-15);
        assert!((w[2] - 1.0).abs() < 1e-15);
        assert!(w[4].abs() < 1e-15);
        assert!((w[1] - w[3]).abs() < 1e-15);
    }

    #[test]
    fn test_smooth_gate_constant_regions() {
        let mut gate = vec![0.0; 200];
        for g in gate.iter_mut().skip(50).take(100) {
            *g = 1.0;
        }
        let smoothed = smooth_gate(&gate, 10);
        assert_eq!(smoothed.len(), 200);
        assert_eq!(smoothed[0], 0.0);
        assert_eq!(smoothed[100], 1.0);
        assert_eq!(smoothed[199], 0.0);
        // Edge is softened, not hard.
        let edge = smoothed[50];
        assert!(edge > 0.0 && edge < 1.0, "edge = {edge}");
        assert!(smoothed.iter().all(|s| (0.0..=1.0 + 1e-12).contains(s)));
    }

    #[test]
    fn test_smooth_gate_matches_direct_convolution() {
        let gate: Vec<f64> = (0..64).map(|i| if (i / 7) % 2 == 0 { 1.0 } else { 0.0 }).collect();
        let len = 8;
        let smoothed = smooth_gate(&gate, len);

        let mut kernel = hann_window(len);
        let sum: f64 = kernel.iter().sum();
        kernel.iter_mut().for_each(|k| *k /= sum);

        // numpy.convolve(gate, kernel, "same")
        let full_len = gate.len() + len - 1;
        let mut full = vec![0.0; full_len];
        for (k, g) in gate.iter().enumerate() {
            for (m, h) in kernel.iter().enumerate() {
                full[k + m] += g * h;
            }
        }
        let offset = (len - 1) / 2;
        for (i, s) in smoothed.iter().enumerate() {
            assert!((s - full[i + offset]).abs() < 1e-12, "index {i}");
        }
    }

    #[test]
    fn test_moving_average_same_alignment() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        // Window 3: center aligned, zero padded at the edges.
        let avg = moving_average(&samples, 3);
        let expected = [1.0, 2.0, 3.0, 4.0, 3.0];
        for (a, e) in avg.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_moving_average_even_window() {
        // numpy.convolve([1,1,1,1], ones(2)/2, "same") == [0.5, 1, 1, 1]
        let avg = moving_average(&[1.0, 1.0, 1.0, 1.0], 2);
        assert_eq!(avg, vec![0.5, 1.0, 1.0, 1.0]);
    }
}

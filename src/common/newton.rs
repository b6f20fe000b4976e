//! ニュートン法による z³ + 1 の根の探索

use num_complex::Complex;

/// z³ + 1 = 0 の3つの根（-1 の立方根）
pub const ROOTS: [Complex<f64>; 3] = [
    Complex { re: -1.0, im: 0.0 },
    Complex {
        re: 0.5,
        im: 0.866_025_403_784_438_6,
    },
    Complex {
        re: 0.5,
        im: -0.866_025_403_784_438_6,
    },
];

/// 1点分のニュートン反復の結果
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceResult {
    /// 収束までに適用した更新の回数。収束しなかった場合は `max_iter`
    pub iterations: u32,
    /// 反復を止めた時点の z
    pub final_point: Complex<f64>,
    /// f'(z) が 0（または有限でない）になり、更新できなかった
    pub degenerate: bool,
}

impl ConvergenceResult {
    pub fn converged(&self, max_iter: u32) -> bool {
        self.iterations < max_iter
    }
}

/// ニュートン法で z³ + 1 の根を探す
///
/// # Arguments
/// * `start` - 初期値
/// * `max_iter` - 最大反復回数
/// * `tolerance` - f(z) の実部・虚部がともにこの値を下回れば収束とみなす
///
/// 収束判定は更新の前に行うため、初期値がすでに根の近くなら
/// `iterations` は 0 になる。
pub fn solve(start: Complex<f64>, max_iter: u32, tolerance: f64) -> ConvergenceResult {
    let mut zx = start.re;
    let mut zy = start.im;

    for i in 0..max_iter {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        // f(z) = z^3 + 1
        let fz_re = zx2 * zx - 3.0 * zx * zy2 + 1.0;
        let fz_im = 3.0 * zx2 * zy - zy2 * zy;

        // f'(z) = 3z^2
        let fp_re = 3.0 * zx2 - 3.0 * zy2;
        let fp_im = 6.0 * zx * zy;

        if fz_re.abs() < tolerance && fz_im.abs() < tolerance {
            return ConvergenceResult {
                iterations: i,
                final_point: Complex::new(zx, zy),
                degenerate: false,
            };
        }

        let fp_norm_sqr = fp_re * fp_re + fp_im * fp_im;
        if fp_norm_sqr == 0.0 || !fp_norm_sqr.is_finite() {
            return ConvergenceResult {
                iterations: max_iter,
                final_point: Complex::new(zx, zy),
                degenerate: true,
            };
        }

        // z = z - f(z) / f'(z)
        zx -= (fz_re * fp_re + fz_im * fp_im) / fp_norm_sqr;
        zy -= (fz_im * fp_re - fz_re * fp_im) / fp_norm_sqr;
    }

    ConvergenceResult {
        iterations: max_iter,
        final_point: Complex::new(zx, zy),
        degenerate: false,
    }
}

/// `point` から `max_distance` 以内にある根の番号（[`ROOTS`] の添字）
pub fn nearest_root(point: Complex<f64>, max_distance: f64) -> Option<usize> {
    ROOTS
        .iter()
        .enumerate()
        .map(|(i, root)| (i, (point - root).norm()))
        .filter(|&(_, d)| d <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::colors::convergence_to_color_u32;

    #[test]
    fn roots_are_cube_roots_of_minus_one() {
        for root in ROOTS {
            let z3 = root * root * root;
            assert!((z3.re + 1.0).abs() < 1e-12, "{:?}", z3);
            assert!(z3.im.abs() < 1e-12, "{:?}", z3);
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let starts = [
            Complex::new(0.3, -1.7),
            Complex::new(-12.5, 4.25),
            Complex::new(1e-3, 1e-3),
        ];
        for start in starts {
            let a = solve(start, 100, 1e-6);
            let b = solve(start, 100, 1e-6);
            assert_eq!(a.iterations, b.iterations);
            assert_eq!(a.final_point.re.to_bits(), b.final_point.re.to_bits());
            assert_eq!(a.final_point.im.to_bits(), b.final_point.im.to_bits());
        }
    }

    #[test]
    fn starts_near_each_root_converge_quickly() {
        for (i, root) in ROOTS.iter().enumerate() {
            let start = root + Complex::new(0.01, -0.01);
            let result = solve(start, 100, 1e-6);
            assert!(result.iterations <= 10, "root {}: {:?}", i, result);
            assert!(result.converged(100));
            // |f'(root)| = 3 なので |z - root| は許容誤差より小さい
            assert!((result.final_point - root).norm() < 1e-6, "root {}", i);
            assert_eq!(nearest_root(result.final_point, 1e-3), Some(i));
        }
    }

    #[test]
    fn start_on_root_needs_no_update() {
        let result = solve(Complex::new(-1.0, 0.0), 50, 1e-6);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_point, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn origin_is_degenerate_and_exhausts_budget() {
        let result = solve(Complex::new(0.0, 0.0), 100, 1e-6);
        assert_eq!(result.iterations, 100);
        assert!(result.degenerate);
        assert!(!result.converged(100));
        assert!(result.final_point.re.is_finite());
        assert!(result.final_point.im.is_finite());
    }

    #[test]
    fn overflowing_and_non_finite_starts_are_degenerate() {
        let starts = [
            Complex::new(1e200, 1e200),
            Complex::new(f64::NAN, 0.0),
            Complex::new(f64::INFINITY, 0.0),
            Complex::new(0.0, f64::NEG_INFINITY),
        ];
        for start in starts {
            let result = solve(start, 100, 1e-6);
            assert_eq!(result.iterations, 100, "{:?}", start);
            assert!(result.degenerate, "{:?}", start);
            assert_eq!(convergence_to_color_u32(&result, 100), 0x000000);
        }
    }

    #[test]
    fn underflowing_derivative_is_degenerate() {
        // z² が 0 にアンダーフローするので f'(z) も 0 になる
        let start = Complex::new(1e-200, 1e-200);
        let result = solve(start, 100, 1e-6);
        assert_eq!(result.iterations, 100);
        assert!(result.degenerate);
        assert_eq!(result.final_point, start);
        assert_eq!(convergence_to_color_u32(&result, 100), 0x000000);
    }

    #[test]
    fn tiny_budget_is_exhausted() {
        let result = solve(Complex::new(30.0, 20.0), 2, 1e-7);
        assert_eq!(result.iterations, 2);
        assert!(!result.degenerate);
    }

    #[test]
    fn zero_budget_returns_start() {
        let start = Complex::new(2.0, 1.0);
        let result = solve(start, 0, 1e-6);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_point, start);
    }

    #[test]
    fn far_points_still_converge() {
        let result = solve(Complex::new(-100.0, 75.0), 200, 1e-7);
        assert!(result.converged(200), "{:?}", result);
        assert!(nearest_root(result.final_point, 1e-4).is_some());
    }

    #[test]
    fn nearest_root_rejects_points_far_from_every_root() {
        assert_eq!(nearest_root(Complex::new(0.0, 0.0), 0.5), None);
        assert_eq!(nearest_root(Complex::new(0.49, 0.87), 0.05), Some(1));
    }
}

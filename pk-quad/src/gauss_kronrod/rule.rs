//! The 21-point Gauss-Kronrod rule and its error estimate.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::Integrand;

/// Kronrod abscissae on `[0, 1]`, largest first.
///
/// Odd indices are the 10-point Gauss abscissae; even indices are the
/// abscissae added by the Kronrod extension. The last entry is the centre.
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_600_525_452_978,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Weights of the embedded 10-point Gauss rule, for `XGK[1], XGK[3], ..., XGK[9]`.
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Number of integrand evaluations made by one application of the rule.
pub(super) const EVALUATIONS: usize = 21;

/// Result of applying the rule on a single interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Estimate {
    /// Kronrod approximation of the integral.
    pub value: f64,
    /// Estimated absolute error of `value`.
    pub abs_error: f64,
    /// Approximation of the integral of `|f|`.
    pub abs_value: f64,
    /// Approximation of the integral of `|f - mean(f)|`.
    pub asc: f64,
}

/// Applies the 21-point Gauss-Kronrod rule to `f` over `[a, b]`.
///
/// The error estimate follows the classic QUADPACK scaling: the raw
/// Kronrod-Gauss difference is sharpened by `(200 * diff / asc)^1.5` and
/// floored at the level where roundoff dominates.
pub(super) fn kronrod21<F: Integrand + ?Sized>(f: &F, a: f64, b: f64) -> Estimate {
    let centre = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);
    let abs_half_length = half_length.abs();

    let f_centre = f.eval(centre);
    let mut result_gauss = 0.0;
    let mut result_kronrod = WGK[10] * f_centre;
    let mut result_abs = result_kronrod.abs();

    let mut f_left = [0.0; 10];
    let mut f_right = [0.0; 10];

    for (j, &x) in XGK.iter().take(10).enumerate() {
        let offset = half_length * x;
        let lo = f.eval(centre - offset);
        let hi = f.eval(centre + offset);
        f_left[j] = lo;
        f_right[j] = hi;

        let sum = lo + hi;
        result_kronrod += WGK[j] * sum;
        result_abs += WGK[j] * (lo.abs() + hi.abs());
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * sum;
        }
    }

    let mean = 0.5 * result_kronrod;
    let mut result_asc = WGK[10] * (f_centre - mean).abs();
    for j in 0..10 {
        result_asc += WGK[j] * ((f_left[j] - mean).abs() + (f_right[j] - mean).abs());
    }

    let value = result_kronrod * half_length;
    let abs_value = result_abs * abs_half_length;
    let asc = result_asc * abs_half_length;
    let mut abs_error = ((result_kronrod - result_gauss) * half_length).abs();

    if asc != 0.0 && abs_error != 0.0 {
        abs_error = asc * (200.0 * abs_error / asc).powf(1.5).min(1.0);
    }
    if abs_value > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        abs_error = abs_error.max(50.0 * f64::EPSILON * abs_value);
    }

    Estimate {
        value,
        abs_error,
        abs_value,
        asc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn weights_integrate_constants_exactly() {
        let kronrod: f64 = WGK[10] + 2.0 * WGK[..10].iter().sum::<f64>();
        let gauss: f64 = 2.0 * WG.iter().sum::<f64>();

        assert_relative_eq!(kronrod, 2.0, epsilon = 1e-14);
        assert_relative_eq!(gauss, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn exact_for_low_degree_polynomials() {
        let estimate = kronrod21(&|x: f64| 5.0 * x.powi(4) - 3.0 * x * x + 1.0, -1.0, 2.0);

        // x^5 - x^3 + x from -1 to 2
        assert_relative_eq!(estimate.value, 27.0, epsilon = 1e-12);
        assert!(estimate.abs_error < 1e-10);
    }

    #[test]
    fn reversed_interval_flips_sign() {
        let forward = kronrod21(&f64::exp, 0.0, 1.0);
        let backward = kronrod21(&f64::exp, 1.0, 0.0);

        assert_relative_eq!(forward.value, -backward.value, epsilon = 1e-15);
        assert_relative_eq!(forward.value, 1.0_f64.exp() - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn square_root_edge_reports_nonzero_error() {
        let estimate = kronrod21(&|x: f64| (1.0 - x * x).max(0.0).sqrt(), -1.0, 1.0);

        assert_relative_eq!(estimate.value, std::f64::consts::FRAC_PI_2, epsilon = 1e-3);
        assert!(estimate.abs_error > 1e-8);
    }
}

//! Lunar ecliptic position from a truncated main-problem series.
//!
//! Mean longitude plus the largest periodic terms (Meeus, *Astronomical
//! Algorithms* 2nd ed., Chapter 47, Tables 47.A/47.B, truncated). The
//! truncation error is a few hundredths of a degree, far inside one
//! 5.625 deg gate sector, and the Moon is not part of the solver path.

/// Mean Earth-Moon distance in km, used as the series base term.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Fundamental arguments for the lunar series, in radians.
///
/// Returns `[D, M, M', F]`: mean elongation, solar mean anomaly, lunar
/// mean anomaly, argument of latitude. `t` = Julian centuries since J2000.
fn fundamental_args(t: f64) -> [f64; 4] {
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t;
    [
        normalize_360(d).to_radians(),
        normalize_360(m).to_radians(),
        normalize_360(mp).to_radians(),
        normalize_360(f).to_radians(),
    ]
}

/// Mean longitude of the Moon in degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t)
}

/// Largest longitude terms: `[nD, nM, nM', nF, amplitude_deg]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 13] = [
    // nD    nM    nM'   nF    amplitude (deg)
    [ 0.0,  0.0,  1.0,  0.0,  6.288_774],
    [ 2.0,  0.0, -1.0,  0.0,  1.274_027],
    [ 2.0,  0.0,  0.0,  0.0,  0.658_314],
    [ 0.0,  0.0,  2.0,  0.0,  0.213_618],
    [ 0.0,  1.0,  0.0,  0.0, -0.185_116],
    [ 0.0,  0.0,  0.0,  2.0, -0.114_332],
    [ 2.0,  0.0, -2.0,  0.0,  0.058_793],
    [ 2.0, -1.0, -1.0,  0.0,  0.057_066],
    [ 2.0,  0.0,  1.0,  0.0,  0.053_322],
    [ 2.0, -1.0,  0.0,  0.0,  0.045_758],
    [ 0.0,  1.0, -1.0,  0.0, -0.040_923],
    [ 1.0,  0.0,  0.0,  0.0, -0.034_720],
    [ 0.0,  1.0,  1.0,  0.0, -0.030_383],
];

/// Largest latitude terms: `[nD, nM, nM', nF, amplitude_deg]`.
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 4] = [
    [ 0.0,  0.0,  0.0,  1.0,  5.128_122],
    [ 0.0,  0.0,  1.0,  1.0,  0.280_602],
    [ 0.0,  0.0,  1.0, -1.0,  0.277_693],
    [ 2.0,  0.0,  0.0, -1.0,  0.173_237],
];

/// Largest distance terms (cosine series): `[nD, nM, nM', nF, amplitude_km]`.
#[rustfmt::skip]
static DISTANCE_TERMS: [[f64; 5]; 4] = [
    [ 0.0,  0.0,  1.0,  0.0, -20_905.355],
    [ 2.0,  0.0, -1.0,  0.0,  -3_699.111],
    [ 2.0,  0.0,  0.0,  0.0,  -2_955.968],
    [ 0.0,  0.0,  2.0,  0.0,    -569.925],
];

fn sum_terms(terms: &[[f64; 5]], args: &[f64; 4], use_cos: bool) -> f64 {
    let mut total = 0.0_f64;
    for term in terms {
        let angle =
            term[0] * args[0] + term[1] * args[1] + term[2] * args[2] + term[3] * args[3];
        total += term[4] * if use_cos { angle.cos() } else { angle.sin() };
    }
    total
}

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = fundamental_args(t);
    normalize_360(mean_longitude_deg(t) + sum_terms(&LONGITUDE_TERMS, &args, false))
}

/// Geocentric ecliptic latitude of the Moon in degrees.
pub fn moon_latitude_deg(t: f64) -> f64 {
    let args = fundamental_args(t);
    sum_terms(&LATITUDE_TERMS, &args, false)
}

/// Earth-Moon distance in AU.
pub fn moon_distance_au(t: f64) -> f64 {
    let args = fundamental_args(t);
    (MEAN_DISTANCE_KM + sum_terms(&DISTANCE_TERMS, &args, true)) / KM_PER_AU
}

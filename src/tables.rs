//! Periodic-series coefficient tables.
//!
//! Rows are transcribed from Meeus, *Astronomical Algorithms* (tables 27.B,
//! 27.C, 47.A, 47.B, chapter 49) and Bretagnon & Simon's solar longitude
//! series as given by Reingold and Dershowitz.

/// Solar longitude series: `[x, y, z]` for `x · sin(y + z·c)`.
#[rustfmt::skip]
pub(crate) const SOLAR_LONGITUDE_TERMS: [[f64; 3]; 49] = [
    [403406.0, 270.54861, 0.9287892],
    [195207.0, 340.19128, 35999.1376958],
    [119433.0, 63.91854, 35999.4089666],
    [112392.0, 331.26220, 35998.7287385],
    [3891.0, 317.843, 71998.20261],
    [2819.0, 86.631, 71998.4403],
    [1721.0, 240.052, 36000.35726],
    [660.0, 310.26, 71997.4812],
    [350.0, 247.23, 32964.4678],
    [334.0, 260.87, -19.4410],
    [314.0, 297.82, 445267.1117],
    [268.0, 343.14, 45036.8840],
    [242.0, 166.79, 3.1008],
    [234.0, 81.53, 22518.4434],
    [158.0, 3.50, -19.9739],
    [132.0, 132.75, 65928.9345],
    [129.0, 182.95, 9038.0293],
    [114.0, 162.03, 3034.7684],
    [99.0, 29.8, 33718.148],
    [93.0, 266.4, 3034.448],
    [86.0, 249.2, -2280.773],
    [78.0, 157.6, 29929.992],
    [72.0, 257.8, 31556.493],
    [68.0, 185.1, 149.588],
    [64.0, 69.9, 9037.750],
    [46.0, 8.0, 107997.405],
    [38.0, 197.1, -4444.176],
    [37.0, 250.4, 151.771],
    [32.0, 65.3, 67555.316],
    [29.0, 162.7, 31556.080],
    [28.0, 341.5, -4561.540],
    [27.0, 291.6, 107996.706],
    [27.0, 98.5, 1221.655],
    [25.0, 146.7, 62894.167],
    [24.0, 110.0, 31437.369],
    [21.0, 5.2, 14578.298],
    [21.0, 342.6, -31931.757],
    [20.0, 230.9, 34777.243],
    [18.0, 256.1, 1221.999],
    [17.0, 45.3, 62894.511],
    [14.0, 242.9, -4442.039],
    [13.0, 115.2, 107997.909],
    [13.0, 151.8, 119.066],
    [13.0, 285.3, 16859.071],
    [12.0, 53.3, -4.578],
    [10.0, 126.6, 26895.292],
    [10.0, 205.7, -39.127],
    [10.0, 85.9, 12297.536],
    [10.0, 146.1, 90073.778],
];

/// Moon longitude and distance (Meeus table 47.A):
/// `[D, M, M′, F, Σl (1e-6 degrees), Σr (metres)]`.
#[rustfmt::skip]
pub(crate) const LUNAR_LONGITUDE_DISTANCE_TERMS: [[f64; 6]; 60] = [
    [0.0, 0.0, 1.0, 0.0, 6288774.0, -20905355.0],
    [2.0, 0.0, -1.0, 0.0, 1274027.0, -3699111.0],
    [2.0, 0.0, 0.0, 0.0, 658314.0, -2955968.0],
    [0.0, 0.0, 2.0, 0.0, 213618.0, -569925.0],
    [0.0, 1.0, 0.0, 0.0, -185116.0, 48888.0],
    [0.0, 0.0, 0.0, 2.0, -114332.0, -3149.0],
    [2.0, 0.0, -2.0, 0.0, 58793.0, 246158.0],
    [2.0, -1.0, -1.0, 0.0, 57066.0, -152138.0],
    [2.0, 0.0, 1.0, 0.0, 53322.0, -170733.0],
    [2.0, -1.0, 0.0, 0.0, 45758.0, -204586.0],
    [0.0, 1.0, -1.0, 0.0, -40923.0, -129620.0],
    [1.0, 0.0, 0.0, 0.0, -34720.0, 108743.0],
    [0.0, 1.0, 1.0, 0.0, -30383.0, 104755.0],
    [2.0, 0.0, 0.0, -2.0, 15327.0, 10321.0],
    [0.0, 0.0, 1.0, 2.0, -12528.0, 0.0],
    [0.0, 0.0, 1.0, -2.0, 10980.0, 79661.0],
    [4.0, 0.0, -1.0, 0.0, 10675.0, -34782.0],
    [0.0, 0.0, 3.0, 0.0, 10034.0, -23210.0],
    [4.0, 0.0, -2.0, 0.0, 8548.0, -21636.0],
    [2.0, 1.0, -1.0, 0.0, -7888.0, 24208.0],
    [2.0, 1.0, 0.0, 0.0, -6766.0, 30824.0],
    [1.0, 0.0, -1.0, 0.0, -5163.0, -8379.0],
    [1.0, 1.0, 0.0, 0.0, 4987.0, -16675.0],
    [2.0, -1.0, 1.0, 0.0, 4036.0, -12831.0],
    [2.0, 0.0, 2.0, 0.0, 3994.0, -10445.0],
    [4.0, 0.0, 0.0, 0.0, 3861.0, -11650.0],
    [2.0, 0.0, -3.0, 0.0, 3665.0, 14403.0],
    [0.0, 1.0, -2.0, 0.0, -2689.0, -7003.0],
    [2.0, 0.0, -1.0, 2.0, -2602.0, 0.0],
    [2.0, -1.0, -2.0, 0.0, 2390.0, 10056.0],
    [1.0, 0.0, 1.0, 0.0, -2348.0, 6322.0],
    [2.0, -2.0, 0.0, 0.0, 2236.0, -9884.0],
    [0.0, 1.0, 2.0, 0.0, -2120.0, 5751.0],
    [0.0, 2.0, 0.0, 0.0, -2069.0, 0.0],
    [2.0, -2.0, -1.0, 0.0, 2048.0, -4950.0],
    [2.0, 0.0, 1.0, -2.0, -1773.0, 4130.0],
    [2.0, 0.0, 0.0, 2.0, -1595.0, 0.0],
    [4.0, -1.0, -1.0, 0.0, 1215.0, -3958.0],
    [0.0, 0.0, 2.0, 2.0, -1110.0, 0.0],
    [3.0, 0.0, -1.0, 0.0, -892.0, 3258.0],
    [2.0, 1.0, 1.0, 0.0, -810.0, 2616.0],
    [4.0, -1.0, -2.0, 0.0, 759.0, -1897.0],
    [0.0, 2.0, -1.0, 0.0, -713.0, -2117.0],
    [2.0, 2.0, -1.0, 0.0, -700.0, 2354.0],
    [2.0, 1.0, -2.0, 0.0, 691.0, 0.0],
    [2.0, -1.0, 0.0, -2.0, 596.0, 0.0],
    [4.0, 0.0, 1.0, 0.0, 549.0, -1423.0],
    [0.0, 0.0, 4.0, 0.0, 537.0, -1117.0],
    [4.0, -1.0, 0.0, 0.0, 520.0, -1571.0],
    [1.0, 0.0, -2.0, 0.0, -487.0, -1739.0],
    [2.0, 1.0, 0.0, -2.0, -399.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, -381.0, -4421.0],
    [1.0, 1.0, 1.0, 0.0, 351.0, 0.0],
    [3.0, 0.0, -2.0, 0.0, -340.0, 0.0],
    [4.0, 0.0, -3.0, 0.0, 330.0, 0.0],
    [2.0, -1.0, 2.0, 0.0, 327.0, 0.0],
    [0.0, 2.0, 1.0, 0.0, -323.0, 1165.0],
    [1.0, 1.0, -1.0, 0.0, 299.0, 0.0],
    [2.0, 0.0, 3.0, 0.0, 294.0, 0.0],
    [2.0, 0.0, -1.0, -2.0, 0.0, 8752.0],
];

/// Moon latitude (Meeus table 47.B): `[D, M, M′, F, Σb (1e-6 degrees)]`.
#[rustfmt::skip]
pub(crate) const LUNAR_LATITUDE_TERMS: [[f64; 5]; 60] = [
    [0.0, 0.0, 0.0, 1.0, 5128122.0],
    [0.0, 0.0, 1.0, 1.0, 280602.0],
    [0.0, 0.0, 1.0, -1.0, 277693.0],
    [2.0, 0.0, 0.0, -1.0, 173237.0],
    [2.0, 0.0, -1.0, 1.0, 55413.0],
    [2.0, 0.0, -1.0, -1.0, 46271.0],
    [2.0, 0.0, 0.0, 1.0, 32573.0],
    [0.0, 0.0, 2.0, 1.0, 17198.0],
    [2.0, 0.0, 1.0, -1.0, 9266.0],
    [0.0, 0.0, 2.0, -1.0, 8822.0],
    [2.0, -1.0, 0.0, -1.0, 8216.0],
    [2.0, 0.0, -2.0, -1.0, 4324.0],
    [2.0, 0.0, 1.0, 1.0, 4200.0],
    [2.0, 1.0, 0.0, -1.0, -3359.0],
    [2.0, -1.0, -1.0, 1.0, 2463.0],
    [2.0, -1.0, 0.0, 1.0, 2211.0],
    [2.0, -1.0, -1.0, -1.0, 2065.0],
    [0.0, 1.0, -1.0, -1.0, -1870.0],
    [4.0, 0.0, -1.0, -1.0, 1828.0],
    [0.0, 1.0, 0.0, 1.0, -1794.0],
    [0.0, 0.0, 0.0, 3.0, -1749.0],
    [0.0, 1.0, -1.0, 1.0, -1565.0],
    [1.0, 0.0, 0.0, 1.0, -1491.0],
    [0.0, 1.0, 1.0, 1.0, -1475.0],
    [0.0, 1.0, 1.0, -1.0, -1410.0],
    [0.0, 1.0, 0.0, -1.0, -1344.0],
    [1.0, 0.0, 0.0, -1.0, -1335.0],
    [0.0, 0.0, 3.0, 1.0, 1107.0],
    [4.0, 0.0, 0.0, -1.0, 1021.0],
    [4.0, 0.0, -1.0, 1.0, 833.0],
    [0.0, 0.0, 1.0, -3.0, 777.0],
    [4.0, 0.0, -2.0, 1.0, 671.0],
    [2.0, 0.0, 0.0, -3.0, 607.0],
    [2.0, 0.0, 2.0, -1.0, 596.0],
    [2.0, -1.0, 1.0, -1.0, 491.0],
    [2.0, 0.0, -2.0, 1.0, -451.0],
    [0.0, 0.0, 3.0, -1.0, 439.0],
    [2.0, 0.0, 2.0, 1.0, 422.0],
    [2.0, 0.0, -3.0, -1.0, 421.0],
    [2.0, 1.0, -1.0, 1.0, -366.0],
    [2.0, 1.0, 0.0, 1.0, -351.0],
    [4.0, 0.0, 0.0, 1.0, 331.0],
    [2.0, -1.0, 1.0, 1.0, 315.0],
    [2.0, -2.0, 0.0, -1.0, 302.0],
    [0.0, 0.0, 1.0, 3.0, -283.0],
    [2.0, 1.0, 1.0, -1.0, -229.0],
    [1.0, 1.0, 0.0, -1.0, 223.0],
    [1.0, 1.0, 0.0, 1.0, 223.0],
    [0.0, 1.0, -2.0, -1.0, -220.0],
    [2.0, 1.0, -1.0, -1.0, -220.0],
    [1.0, 0.0, 1.0, 1.0, -185.0],
    [2.0, -1.0, -2.0, -1.0, 181.0],
    [0.0, 1.0, 2.0, 1.0, -177.0],
    [4.0, 0.0, -2.0, -1.0, 176.0],
    [4.0, -1.0, -1.0, -1.0, 166.0],
    [1.0, 0.0, 1.0, -1.0, -164.0],
    [4.0, 0.0, 1.0, -1.0, 132.0],
    [1.0, 0.0, -1.0, -1.0, -119.0],
    [4.0, -1.0, 0.0, -1.0, 115.0],
    [2.0, -2.0, 0.0, 1.0, 107.0],
];

/// New-moon periodic correction (Meeus chapter 49):
/// `[amplitude (days), power of E, M, M′, F]`.
#[rustfmt::skip]
pub(crate) const NEW_MOON_TERMS: [[f64; 5]; 24] = [
    [-0.40720, 0.0, 0.0, 1.0, 0.0],
    [0.17241, 1.0, 1.0, 0.0, 0.0],
    [0.01608, 0.0, 0.0, 2.0, 0.0],
    [0.01039, 0.0, 0.0, 0.0, 2.0],
    [0.00739, 1.0, -1.0, 1.0, 0.0],
    [-0.00514, 1.0, 1.0, 1.0, 0.0],
    [0.00208, 2.0, 2.0, 0.0, 0.0],
    [-0.00111, 0.0, 0.0, 1.0, -2.0],
    [-0.00057, 0.0, 0.0, 1.0, 2.0],
    [0.00056, 1.0, 1.0, 2.0, 0.0],
    [-0.00042, 0.0, 0.0, 3.0, 0.0],
    [0.00042, 1.0, 1.0, 0.0, 2.0],
    [0.00038, 1.0, 1.0, 0.0, -2.0],
    [-0.00024, 1.0, -1.0, 2.0, 0.0],
    [-0.00007, 0.0, 2.0, 1.0, 0.0],
    [0.00004, 0.0, 0.0, 2.0, -2.0],
    [0.00004, 0.0, 3.0, 0.0, 0.0],
    [0.00003, 0.0, 1.0, 1.0, -2.0],
    [0.00003, 0.0, 0.0, 2.0, 2.0],
    [-0.00003, 0.0, 1.0, 1.0, 2.0],
    [0.00003, 0.0, -1.0, 1.0, 2.0],
    [-0.00002, 0.0, -1.0, 1.0, -2.0],
    [-0.00002, 0.0, 1.0, 3.0, 0.0],
    [0.00002, 0.0, 0.0, 4.0, 0.0],
];

/// Planetary arguments A2..A14 for new moons: `[constant, rate per lunation, amplitude]`.
#[rustfmt::skip]
pub(crate) const NEW_MOON_ADDITIONAL_TERMS: [[f64; 3]; 13] = [
    [251.88, 0.016321, 0.000165],
    [251.83, 26.651886, 0.000164],
    [349.42, 36.412478, 0.000126],
    [84.66, 18.206239, 0.000110],
    [141.74, 53.303771, 0.000062],
    [207.14, 2.453732, 0.000060],
    [154.84, 7.306860, 0.000056],
    [34.52, 27.261239, 0.000047],
    [207.19, 0.121824, 0.000042],
    [291.34, 1.844379, 0.000040],
    [161.72, 24.198154, 0.000037],
    [239.56, 25.513099, 0.000035],
    [331.55, 3.592518, 0.000023],
];

/// Mean equinox/solstice instants for years 1000..=3000 (Meeus table 27.B):
/// JDE0 polynomial coefficients in `Y = (year - 2000) / 1000`, lowest degree first.
#[rustfmt::skip]
pub(crate) const SEASON_MEAN_TERMS: [[f64; 5]; 4] = [
    // March equinox
    [2451623.80984, 365242.37404, 0.05169, -0.00411, -0.00057],
    // June solstice
    [2451716.56767, 365241.62603, 0.00325, 0.00888, -0.00030],
    // September equinox
    [2451810.21715, 365242.01767, -0.11575, 0.00337, 0.00078],
    // December solstice
    [2451900.05952, 365242.74049, -0.06223, -0.00823, 0.00032],
];

/// Periodic terms for equinoxes and solstices (Meeus table 27.C): `[A, B, C]`.
#[rustfmt::skip]
pub(crate) const SEASON_PERIODIC_TERMS: [[f64; 3]; 24] = [
    [485.0, 324.96, 1934.136],
    [203.0, 337.23, 32964.467],
    [199.0, 342.08, 20.186],
    [182.0, 27.85, 445267.112],
    [156.0, 73.14, 45036.886],
    [136.0, 171.52, 22518.443],
    [77.0, 222.54, 65928.934],
    [74.0, 296.72, 3034.906],
    [70.0, 243.58, 9037.513],
    [58.0, 119.81, 33718.147],
    [52.0, 297.17, 150.678],
    [50.0, 21.02, 2281.226],
    [45.0, 247.54, 29929.562],
    [44.0, 325.15, 31555.956],
    [29.0, 60.93, 4443.417],
    [18.0, 155.12, 67555.328],
    [17.0, 288.79, 4562.452],
    [16.0, 198.04, 62894.029],
    [14.0, 199.76, 31436.921],
    [12.0, 95.39, 14577.848],
    [12.0, 287.11, 31931.756],
    [12.0, 320.81, 34777.259],
    [9.0, 227.73, 1222.114],
    [8.0, 15.45, 16859.074],
];

/// First year covered by [`DELTA_T_TABLE`].
pub(crate) const DELTA_T_FIRST_YEAR: i32 = 1620;

/// ΔT in seconds for the even years 1620..=2002 (Meeus table 10.A, extended).
#[rustfmt::skip]
pub(crate) const DELTA_T_TABLE: [f64; 192] = [
    121.0, 112.0, 103.0, 95.0, 88.0, 82.0, 77.0, 72.0, 68.0, 63.0,
    60.0, 56.0, 53.0, 51.0, 48.0, 46.0, 44.0, 42.0, 40.0, 38.0,
    35.0, 33.0, 31.0, 29.0, 26.0, 24.0, 22.0, 20.0, 18.0, 16.0,
    14.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 7.0, 7.0, 7.0,
    7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 10.0,
    10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 11.0,
    11.0, 11.0, 12.0, 12.0, 12.0, 12.0, 13.0, 13.0, 13.0, 14.0,
    14.0, 14.0, 14.0, 15.0, 15.0, 15.0, 15.0, 15.0, 16.0, 16.0,
    16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 15.0, 15.0, 14.0, 13.0,
    13.1, 12.5, 12.2, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0, 11.9,
    11.6, 11.0, 10.2, 9.2, 8.2, 7.1, 6.2, 5.6, 5.4, 5.3,
    5.4, 5.6, 5.9, 6.2, 6.5, 6.8, 7.1, 7.3, 7.5, 7.6,
    7.7, 7.3, 6.2, 5.2, 2.7, 1.4, -1.2, -2.8, -3.8, -4.8,
    -5.5, -5.3, -5.6, -5.7, -5.9, -6.0, -6.3, -6.5, -6.2, -4.7,
    -2.8, -0.1, 2.6, 5.3, 7.7, 10.4, 13.3, 16.0, 18.2, 20.2,
    21.1, 22.4, 23.5, 23.8, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
    24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
    33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
    50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3, 60.0, 61.6, 63.0,
    63.8, 64.3,
];

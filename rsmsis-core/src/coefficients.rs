//! Coefficient tables of the NRLMSISE-00 model
//!
//! Each harmonic row is indexed the way the expansion in
//! `rsmsis_components::harmonics` reads it: slot 0 is the scale of the row,
//! slot 30 the additive mean used by the upper-thermosphere expansion, and the
//! remaining slots the amplitudes and phases of the individual terms. Rows are
//! stored zero-padded to their full published length so that positional
//! indices line up with the literature. Entries past the last listed value of
//! a row read as zero.

/// Copy the leading non-zero coefficients of a row into a zero-padded array.
const fn padded<const N: usize>(values: &[f64]) -> [f64; N] {
    let mut out = [0.0; N];
    let mut i = 0;
    while i < values.len() {
        out[i] = values[i];
        i += 1;
    }
    out
}

/// Exospheric temperature
pub static PT: [f64; 150] = padded(&[
    9.86573E-01, 1.62228E-02, 1.55270E-02, -1.04323E-01, -3.75801E-03,
    -1.18538E-03, -1.24043E-01, 4.56820E-03, 8.76018E-03, -1.36235E-01,
    -3.52427E-02, 8.84181E-03, -8.23094E-03, -1.87256E+01, -1.18335E-03,
    -1.39434E-02, -1.08130E-02, 1.93373E+02, 8.41869E-03, 1.61740E-03,
    -4.41545E-06, 3.08216E-03, 0.00000E+00, 0.00000E+00, -3.79226E-03,
    1.00000E+00, 1.69633E-02, 0.00000E+00, 0.00000E+00, -1.28446E-06,
    0.00000E+00, -1.01004E+02, 1.61502E-03, 0.00000E+00, 3.44740E-04,
    0.00000E+00, 0.00000E+00, 3.07545E-03, -6.66426E+01, 0.00000E+00,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 1.21000E-01, 1.50000E+00,
    7.56000E-04, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
    1.50000E-03, 2.00000E-05,
]);

/// Lower-boundary densities, plus the lower-boundary temperature in row 3
pub static PD: [[f64; 150]; 9] = [
    // He
    padded(&[
        1.09979E+00, -4.88060E-02, -1.97501E-01, -9.10280E-02, -6.96558E-03,
        2.42136E-02, 3.91333E-01, -7.20068E-03, -3.22718E-02, 1.41508E+00,
        1.68194E-01, 1.85282E-02, 1.09384E-01, -7.24282E+00, 0.00000E+00,
        2.96377E-01, -4.97210E-02, 1.04114E+02, -8.61108E-02, -7.29177E-04,
        1.48998E-06, 1.08629E-03, 0.00000E+00, 0.00000E+00, 8.31090E-02,
        1.12818E-01, -5.75005E-02, -1.29919E-02, -1.78849E-02, -2.86343E-06,
        0.00000E+00, -1.51187E+02, -6.65902E-03, 0.00000E+00, -2.02069E-03,
        0.00000E+00, 0.00000E+00, 4.32264E-02, -2.80444E+01, -3.26789E-03,
        2.47461E-03, 0.00000E+00, 0.00000E+00, 9.82100E-02, 1.22714E-01,
        -3.96450E-02, 0.00000E+00, -2.76489E-03, 0.00000E+00, 1.87723E-03,
        -8.09813E-03, 4.34428E-05, -7.70932E-03, 0.00000E+00, -2.28894E-03,
        -5.69070E-03, -5.22193E-03, 6.00692E-03, -7.80434E+03, -3.48336E-03,
        -6.38362E-03, -1.82190E-03, 0.00000E+00, -7.58976E+01, -2.17875E-02,
        -1.72524E-02, -9.06287E-03, 0.00000E+00, 2.44725E-02, 8.66040E-02,
        1.05712E-01, 3.02543E+04, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        -6.01364E+03, -5.64668E-03, -2.54157E-03, 0.00000E+00, 3.15611E+02,
        -5.69158E-03, 0.00000E+00, 0.00000E+00, -4.47216E-03, -4.49523E-03,
        4.64428E-03, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        4.51236E-02, 2.46520E-02, 6.17794E-03, 0.00000E+00, 0.00000E+00,
        -3.62944E-01, -4.80022E-02, -7.57230E+01, -1.99656E-03, 0.00000E+00,
        -5.18780E-03, -1.73990E-02, -9.03485E-03, 7.48465E-03, 1.53267E-02,
        1.06296E-02, 1.18655E-02, 2.55569E-03, 1.69020E-03, 3.51936E-02,
        -1.81242E-02, 0.00000E+00, -1.00529E-01, -5.10574E-03, 0.00000E+00,
        2.10228E-03, 0.00000E+00, 0.00000E+00, -1.73255E+02, 5.07833E-01,
        -2.41408E-01, 8.75414E-03, 2.77527E-02,
    ]),
    // O
    padded(&[
        1.02315E+00, -1.59710E-01, -1.06630E-01, -1.77074E-02, -4.42726E-03,
        3.44803E-02, 4.45613E-02, -3.33751E-02, -5.73598E-02, 3.50360E-01,
        6.33053E-02, 2.16221E-02, 5.42577E-02, -5.74193E+00, 0.00000E+00,
        1.90891E-01, -1.39194E-02, 1.01102E+02, 8.16363E-02, 1.33717E-04,
        6.54403E-06, 3.10295E-03, 0.00000E+00, 0.00000E+00, 5.38205E-02,
        1.23910E-01, -1.39831E-02, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, -3.95915E+02, -3.34218E-03, 0.00000E+00, -7.58734E-04,
        0.00000E+00, 0.00000E+00, -1.33812E-02, -1.37093E+02, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.06160E-01, 5.00000E-01,
    ]),
    // N2
    padded(&[
        1.16112E+00, 0.00000E+00, 0.00000E+00, 3.33725E-02, 0.00000E+00,
        3.48637E-02, -5.44368E-03, 0.00000E+00, -6.73940E-02, 1.74754E-01,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.74712E+02, 0.00000E+00,
        1.26733E-01, 0.00000E+00, 1.03154E+02, 5.52075E-02, 0.00000E+00,
        0.00000E+00, 8.13525E-04, 0.00000E+00, 0.00000E+00, 8.66784E-02,
        1.58727E-01, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, -2.50482E+01, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, -2.48894E-03, 6.16053E-04, -5.79716E-04,
        2.95482E-03, 8.47001E-02, 1.70147E-01, 1.22631E-01, 1.00000E+00,
    ]),
    // TLB
    padded(&[
        9.44846E-01, 0.00000E+00, 0.00000E+00, -3.08617E-02, 0.00000E+00,
        -2.44019E-02, 6.48607E-03, 0.00000E+00, 3.08181E-02, 4.59392E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.74712E+02, 0.00000E+00,
        2.13260E-02, 0.00000E+00, -3.56958E+02, 0.00000E+00, 1.82278E-04,
        0.00000E+00, 3.07472E-04, 0.00000E+00, 0.00000E+00, 8.66784E-02,
        1.58727E-01, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 3.83054E-03, 0.00000E+00, 0.00000E+00,
        -1.93065E-03, -1.45090E-03, 0.00000E+00, 0.00000E+00, -1.23493E-03,
        1.36736E-03, 8.47001E-02, 1.70147E-01, 3.71469E-03, 1.00000E+00,
    ]),
    // O2
    padded(&[
        1.35580E+00, 1.44816E-01, 0.00000E+00, 6.07767E-02, 0.00000E+00,
        2.94777E-02, 7.46900E-02, 0.00000E+00, -9.23822E-02, 8.57342E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 2.38636E+01, 0.00000E+00,
        7.71653E-02, 0.00000E+00, 8.18751E+01, 1.87736E-02, 0.00000E+00,
        0.00000E+00, 1.49667E-02, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, -3.67874E+02, 5.48158E-03, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.22631E-01, 1.00000E+00,
    ]),
    // Ar
    padded(&[
        1.04761E+00, 2.00165E-01, 2.37697E-01, 3.68552E-02, 0.00000E+00,
        3.57202E-02, -2.14075E-01, 0.00000E+00, -1.08018E-01, -3.73981E-01,
        0.00000E+00, 3.10022E-02, -1.16305E-03, -2.07596E+01, 0.00000E+00,
        8.64502E-02, 0.00000E+00, 9.74908E+01, 5.16707E-02, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 3.46193E+02, 1.34297E-02, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.22631E-01, 1.00000E+00,
    ]),
    // H
    padded(&[
        1.26376E+00, -2.14304E-01, -1.20000E-01, 0.00000E+00, 0.00000E+00,
        -3.00000E-02, 0.00000E+00, 0.00000E+00, 5.00000E-02, -4.97436E-01,
        0.00000E+00, 0.00000E+00, 0.00000E+00, -7.24282E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 1.04114E+02, -1.00000E-01, 0.00000E+00,
        0.00000E+00, -1.50000E-03, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, -1.51187E+02, -5.00000E-03, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.00000E-01, 1.00000E+00,
    ]),
    // N
    padded(&[
        7.09557E+01, -3.26740E-01, 0.00000E+00, -5.16829E-01, -1.71664E-03,
        9.09310E-02, -6.71500E-01, -1.47771E-01, -9.27471E-02, -2.30862E-01,
        -1.56410E-01, 1.34455E-02, -1.19717E-01, -7.24282E+00, 0.00000E+00,
        1.00000E-01, 0.00000E+00, 1.04114E+02, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 7.00000E-03, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.00000E-01, 1.00000E+00,
    ]),
    // Hot O
    padded(&[
        6.04050E-02, 1.57034E+00, 2.99387E-02, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, -1.51018E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, -8.61650E+00, 1.26454E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.00000E-01, 1.00000E+00,
    ]),
];

/// Temperature gradient at the lower boundary
pub static PS: [f64; 150] = padded(&[
    9.56827E-01, 6.20637E-02, 3.18433E-02, 0.00000E+00, 0.00000E+00,
    3.94900E-02, 0.00000E+00, 0.00000E+00, -9.24882E-03, -7.94023E-03,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 1.74712E+02, 0.00000E+00,
    2.74677E-03, 0.00000E+00, 1.54951E+02, 8.97568E-03, 0.00000E+00,
    0.00000E+00, 2.04650E-03, 0.00000E+00, 0.00000E+00, 0.00000E+00,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
    0.00000E+00, 0.00000E+00, 0.00000E+00, 1.00000E-01, 1.00000E+00,
]);

/// Turbopause and chemistry corrections
pub static PDL: [[f64; 25]; 2] = [
    // N, O2 chemistry and the turbopause latitude term
    padded(&[
        1.09930E+00, 3.90631E+00, 3.07165E+00, 9.86161E-01, 1.63536E+01,
        4.63830E+00, 1.93025E+00, 1.06880E+00, 7.25120E-01, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 2.33000E+00, 5.00000E-03, 5.00000E-02,
    ]),
    // Turbopause heights and scale heights
    padded(&[
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.20000E+02, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
        1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00, 1.00000E+00,
    ]),
];

/// Lower-thermosphere node temperatures at 110, 100, 90 and 72.5 km
pub static PTL: [[f64; 100]; 4] = [
    // 110 km
    padded(&[
        1.00858E+00, 4.56011E-02, -2.22972E-02, -5.44388E-02, 5.23136E-04,
        -1.88849E-02, 5.23707E-02, -9.43646E-03, 6.31707E-03, -7.80460E-02,
        -4.88430E-02, 0.00000E+00, 0.00000E+00, -7.60250E+00, 0.00000E+00,
        -1.44635E-02, -1.76843E-02, -1.21517E+02, 2.85647E-02, 0.00000E+00,
        0.00000E+00, 6.31792E-04, 0.00000E+00, 5.77197E-03, 8.51524E-03,
    ]),
    // 100 km
    padded(&[
        9.39664E-01, 8.56514E-02, -6.79989E-03, 2.65929E-02, -4.74283E-03,
        1.21855E-02, -2.14905E-02, 6.49651E-03, -2.05477E-02, -4.24952E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.19148E+01, 0.00000E+00,
        1.18777E-02, -7.28230E-02, -8.15965E+01, 1.73887E-02, 0.00000E+00,
        0.00000E+00, 1.00000E-03,
    ]),
    // 90 km
    padded(&[
        1.00858E+00, 4.56011E-02, -2.22972E-02, -5.44388E-02, 5.23136E-04,
        -1.88849E-02, 5.23707E-02, -9.43646E-03, 6.31707E-03, -7.80460E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, -7.60250E+00, 0.00000E+00,
        -1.44635E-02, -1.76843E-02, -1.21517E+02, 2.85647E-02, 0.00000E+00,
        0.00000E+00, 6.31792E-04,
    ]),
    // 72.5 km
    padded(&[
        9.83580E-01, 7.40000E-02, -4.45000E-02, -2.55000E-02, 0.00000E+00,
        -1.86000E-02, 2.56000E-02, 0.00000E+00, 0.00000E+00, -4.50000E-02,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.50000E-02, 0.00000E+00,
        0.00000E+00, 1.00000E-03,
    ]),
];

/// Middle- and lower-atmosphere node temperatures and gradients
pub static PMA: [[f64; 100]; 10] = [
    // 55 km
    padded(&[
        1.01000E+00, 4.00000E-02, -1.00000E-02, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00, 0.00000E+00,
        0.00000E+00, 0.00000E+00, 0.00000E+00, 1.00000E-02,
    ]),
    // 45 km
    padded(&[
        1.00000E+00, 4.00000E-02, -1.00000E-02,
    ]),
    // 32.5 km
    padded(&[
        1.00000E+00, 2.00000E-02, -1.00000E-02,
    ]),
    // 20 km
    padded(&[
        1.00000E+00, 1.50000E-02,
    ]),
    // 15 km
    padded(&[
        1.00000E+00, 1.50000E-02,
    ]),
    // 10 km
    padded(&[
        1.00000E+00, 2.00000E-02,
    ]),
    // 0 km
    padded(&[
        1.00000E+00, 1.00000E-02,
    ]),
    // Gradient at 0 km
    padded(&[
        1.00000E+00,
    ]),
    // Gradient at 72.5 km
    padded(&[
        1.00000E+00,
    ]),
    // Gradient at 32.5 km
    padded(&[
        1.00000E+00,
    ]),
];

/// Mean lower-boundary parameters: T∞, TLB, node temperatures, boundary altitude and gradients
pub static PTM: [f64; 10] = padded(&[
    1.04130E+03, 3.86000E+02, 1.95000E+02, 1.66728E+01, 2.13000E+02,
    1.20000E+02, 2.40000E+02, 1.87000E+02, -2.00000E+00,
]);

/// Per-species boundary densities, turbopause heights and correction scales
pub static PDM: [[f64; 10]; 8] = [
    // He
    padded(&[
        2.45600E+07, 6.71072E-06, 1.00000E+02, 0.00000E+00, 1.10000E+02,
        1.00000E+01,
    ]),
    // O
    padded(&[
        8.59400E+10, 1.00000E+00, 1.05000E+02, -8.00000E+00, 1.10000E+02,
        1.00000E+01, 9.00000E+01, 2.00000E+00,
    ]),
    // N2
    padded(&[
        2.81000E+11, 0.00000E+00, 1.05000E+02, 2.80000E+01, 2.89500E+01,
    ]),
    // O2
    padded(&[
        3.30000E+10, 2.68270E-01, 1.05000E+02, 1.00000E+00, 1.10000E+02,
        1.00000E+01, 1.10000E+02, -1.00000E+01,
    ]),
    // Ar
    padded(&[
        1.33000E+09, 1.19615E-02, 1.05000E+02, 0.00000E+00, 1.10000E+02,
        1.00000E+01,
    ]),
    // H
    padded(&[
        1.76100E+05, 1.00000E+00, 9.50000E+01, -8.00000E+00, 1.10000E+02,
        1.00000E+01, 9.00000E+01, 2.00000E+00,
    ]),
    // N
    padded(&[
        1.00000E+07, 1.00000E+00, 1.05000E+02, -8.00000E+00, 1.10000E+02,
        1.00000E+01, 9.00000E+01, 2.00000E+00,
    ]),
    // Hot O
    padded(&[
        1.00000E+06, 1.00000E+00, 1.05000E+02, -8.00000E+00, 5.50000E+02,
        7.60000E+01, 9.00000E+01, 2.00000E+00, 0.00000E+00, 4.00000E+03,
    ]),
];

/// Mean middle-atmosphere node temperatures and gradients
pub static PAVGM: [f64; 10] = padded(&[
    2.61000E+02, 2.64000E+02, 2.29000E+02, 2.17000E+02, 2.17000E+02,
    2.23000E+02, 2.86760E+02, -2.93940E+00, 2.50000E+00,
]);

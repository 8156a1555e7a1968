//! Vertical profile primitives
//!
//! Altitudes are in km, densities in cm⁻³ and temperatures in K. Heights are
//! mapped to a geopotential-like coordinate by [`Gravity::zeta`] before any
//! profile is integrated.
//!
//! Two temperature profiles are used:
//!
//! - Above the lower-thermosphere top node the Bates profile
//!   $$ T(z) = T_\infty - (T_\infty - T_{lb}) e^{-\sigma \zeta(z, z_{lb})} $$
//!   whose density follows in closed form.
//! - Below it, a cubic spline of $1/T$ through a set of
//!   [`TemperatureNodes`], integrated numerically for the hydrostatic density.

use rsmsis_core::constants::{DEG_TO_RAD, RGAS};
use rsmsis_core::spline::CubicSpline;

/// Largest exponent allowed in the hydrostatic factor
const MAX_EXPONENT: f64 = 50.0;

/// Surface gravity and effective Earth radius at a latitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gravity {
    /// Surface gravity
    /// unit: cm/s²
    pub surface: f64,
    /// Effective radius for the inverse-square fall-off
    /// unit: km
    pub effective_radius: f64,
}

impl Gravity {
    pub fn at_latitude(lat_deg: f64) -> Self {
        let c2 = (2.0 * DEG_TO_RAD * lat_deg).cos();
        let surface = 980.616 * (1.0 - 0.0026373 * c2);
        let effective_radius = 2.0 * surface / (3.085462E-6 + 2.27E-9 * c2) * 1.0E-5;
        Self {
            surface,
            effective_radius,
        }
    }

    /// Gravity at altitude (cm/s²)
    pub fn at_altitude(&self, alt: f64) -> f64 {
        self.surface / (1.0 + alt / self.effective_radius).powi(2)
    }

    /// Geopotential height of `zz` above `zl`
    pub fn zeta(&self, zz: f64, zl: f64) -> f64 {
        let re = self.effective_radius;
        (zz - zl) * (re + zl) / (re + zz)
    }

    /// Scale height (km) of a gas of molecular mass `xm` at temperature `temp`
    pub fn scale_height(&self, alt: f64, xm: f64, temp: f64) -> f64 {
        RGAS * temp / (self.at_altitude(alt) * xm)
    }
}

/// Chemistry/dissociation correction.
///
/// `r` is the log of the correction well below `zh`; `h1` the transition
/// scale height.
pub fn ccor(alt: f64, r: f64, h1: f64, zh: f64) -> f64 {
    let e = (alt - zh) / h1;
    if e > 70.0 {
        1.0
    } else if e < -70.0 {
        r.exp()
    } else {
        (r / (1.0 + e.exp())).exp()
    }
}

/// Chemistry/dissociation correction with two transition scale heights.
pub fn ccor2(alt: f64, r: f64, h1: f64, zh: f64, h2: f64) -> f64 {
    let e1 = (alt - zh) / h1;
    let e2 = (alt - zh) / h2;
    if e1 > 70.0 || e2 > 70.0 {
        1.0
    } else if e1 < -70.0 && e2 < -70.0 {
        r.exp()
    } else {
        (r / (1.0 + 0.5 * (e1.exp() + e2.exp()))).exp()
    }
}

/// Blend a diffusive density `dd` with a fully mixed density `dm`.
///
/// `zhm` is the transition scale height, `xmm` the mean mass of the mixed
/// atmosphere and `xm` the species mass.
pub fn dnet(dd: f64, dm: f64, zhm: f64, xmm: f64, xm: f64) -> f64 {
    let a = zhm / (xmm - xm);
    if !(dm > 0.0 && dd > 0.0) {
        if dd == 0.0 && dm == 0.0 {
            return 1.0;
        }
        if dm == 0.0 {
            return dd;
        }
        if dd == 0.0 {
            return dm;
        }
    }

    let ylog = a * (dm / dd).ln();
    if ylog < -10.0 {
        dd
    } else if ylog > 10.0 {
        dm
    } else {
        dd * (1.0 + ylog.exp()).powf(1.0 / a)
    }
}

/// Temperatures at a descending set of node altitudes, with the temperature
/// gradients at the first and last node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemperatureNodes<const N: usize> {
    /// Node altitudes, highest first
    /// unit: km
    pub altitudes: [f64; N],
    /// unit: K
    pub temperatures: [f64; N],
    /// dT/dz at the first and last node
    /// unit: K/km
    pub gradients: [f64; 2],
}

/// Position within a node segment
struct SegmentPoint {
    /// Temperature at the point
    tz: f64,
    /// Hydrostatic exponent between the first node and the point, before
    /// scaling by molecular mass
    column: f64,
}

impl<const N: usize> TemperatureNodes<N> {
    /// Fit 1/T through the nodes in normalised geopotential height and
    /// evaluate it at `z`.
    fn evaluate(&self, gravity: &Gravity, z: f64) -> SegmentPoint {
        let re = gravity.effective_radius;
        let z1 = self.altitudes[0];
        let z2 = self.altitudes[N - 1];
        let t1 = self.temperatures[0];
        let t2 = self.temperatures[N - 1];

        let zgdif = gravity.zeta(z2, z1);
        let xs = self.altitudes.map(|zn| gravity.zeta(zn, z1) / zgdif);
        let ys = self.temperatures.map(|tn| 1.0 / tn);
        let yd1 = -self.gradients[0] / (t1 * t1) * zgdif;
        let yd2 = -self.gradients[1] / (t2 * t2) * zgdif * ((re + z2) / (re + z1)).powi(2);

        let spline = CubicSpline::new(xs, ys, Some(yd1), Some(yd2));
        let x = gravity.zeta(z, z1) / zgdif;
        let glb = gravity.at_altitude(z1);

        SegmentPoint {
            tz: 1.0 / spline.interpolate(x),
            column: glb * zgdif / RGAS * spline.integrate(x),
        }
    }
}

/// The lower-thermosphere nodes: the join altitude, then 110, 100, 90 and
/// 72.5 km.
pub type ThermosphereNodes = TemperatureNodes<5>;

/// Bates temperature profile above the join altitude, with a spline of node
/// temperatures below it.
///
/// The first node temperature and gradient are taken from the Bates profile
/// so that the two pieces meet in value and slope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatesProfile {
    /// Exospheric temperature (K)
    pub tinf: f64,
    /// Temperature at the lower boundary (K)
    pub tlb: f64,
    /// Lower boundary altitude (km)
    pub zlb: f64,
    /// Shape parameter (1/km)
    pub sigma: f64,
    /// Node temperatures below the join altitude. The first node temperature
    /// and gradient are overwritten from the Bates profile.
    pub nodes: ThermosphereNodes,
}

impl BatesProfile {
    /// Altitude where the Bates profile hands over to the node spline
    pub fn join_altitude(&self) -> f64 {
        self.nodes.altitudes[0]
    }

    /// Copy of the profile with a fixed isothermal temperature, as used by
    /// the hot oxygen component.
    pub fn isothermal(&self, temperature: f64) -> Self {
        Self {
            tinf: temperature,
            tlb: temperature,
            ..*self
        }
    }

    pub fn temperature(&self, gravity: &Gravity, alt: f64) -> f64 {
        self.evaluate(gravity, alt, 1.0, 0.0, 0.0).1
    }

    /// Diffusive-equilibrium density of a species of mass `xm` with lower
    /// boundary density `dlb` and thermal diffusion coefficient `alpha`.
    pub fn density(&self, gravity: &Gravity, alt: f64, dlb: f64, xm: f64, alpha: f64) -> f64 {
        self.evaluate(gravity, alt, dlb, xm, alpha).0
    }

    /// Density and temperature at `alt`
    fn evaluate(&self, gravity: &Gravity, alt: f64, dlb: f64, xm: f64, alpha: f64) -> (f64, f64) {
        let re = gravity.effective_radius;
        let za = self.join_altitude();
        let z = alt.max(za);

        let zg2 = gravity.zeta(z, self.zlb);
        let tt = self.tinf - (self.tinf - self.tlb) * (-self.sigma * zg2).exp();

        let below = if alt < za {
            let mut nodes = self.nodes;
            nodes.temperatures[0] = tt;
            nodes.gradients[0] =
                (self.tinf - tt) * self.sigma * ((re + self.zlb) / (re + za)).powi(2);
            let z = alt.max(nodes.altitudes[4]);
            Some((nodes.temperatures[0], nodes.evaluate(gravity, z)))
        } else {
            None
        };
        let tz = below.as_ref().map_or(tt, |(_, point)| point.tz);

        if xm == 0.0 {
            return (tz, tz);
        }

        let glb = gravity.at_altitude(self.zlb);
        let gamma = xm * glb / (self.sigma * RGAS * self.tinf);
        let expl = if tt <= 0.0 {
            MAX_EXPONENT
        } else {
            (-self.sigma * gamma * zg2).exp().min(MAX_EXPONENT)
        };
        let dens = dlb * (self.tlb / tt).powf(1.0 + alpha + gamma) * expl;

        match below {
            None => (dens, tz),
            Some((ta, point)) => {
                let expl = if point.tz <= 0.0 {
                    MAX_EXPONENT
                } else {
                    (xm * point.column).min(MAX_EXPONENT)
                };
                (dens * (ta / point.tz).powf(1.0 + alpha) * (-expl).exp(), tz)
            }
        }
    }
}

/// Temperature and density below the thermosphere, by hydrostatic
/// integration of `d0` (the density at the top of `upper`) through the
/// mesosphere nodes and, below their last node, the lower nodes.
///
/// Returns `(density, temperature)`. Above the top node the density is
/// returned unchanged with the top node temperature.
pub fn densm(
    gravity: &Gravity,
    alt: f64,
    d0: f64,
    xm: f64,
    upper: &TemperatureNodes<4>,
    lower: &TemperatureNodes<5>,
) -> (f64, f64) {
    if alt > upper.altitudes[0] {
        return (d0, upper.temperatures[0]);
    }

    let mut dens = d0;
    let z = alt.max(upper.altitudes[3]);
    let point = upper.evaluate(gravity, z);
    let mut tz = point.tz;
    if xm != 0.0 {
        let expl = (xm * point.column).min(MAX_EXPONENT);
        dens *= (upper.temperatures[0] / tz) * (-expl).exp();
    }

    if alt > lower.altitudes[0] {
        return (dens, tz);
    }

    let point = lower.evaluate(gravity, alt);
    tz = point.tz;
    if xm != 0.0 {
        let expl = (xm * point.column).min(MAX_EXPONENT);
        dens *= (lower.temperatures[0] / tz) * (-expl).exp();
    }

    (dens, tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    fn profile() -> BatesProfile {
        BatesProfile {
            tinf: 1000.0,
            tlb: 386.0,
            zlb: 120.0,
            sigma: 0.02,
            nodes: TemperatureNodes {
                altitudes: [120.0, 110.0, 100.0, 90.0, 72.5],
                temperatures: [0.0, 240.0, 190.0, 185.0, 210.0],
                gradients: [0.0, -1.0],
            },
        }
    }

    #[test]
    fn test_gravity_at_45_degrees() {
        let g = Gravity::at_latitude(45.0);
        // cos(90°) is not quite zero with the model's degree conversion
        assert!(is_close!(g.surface, 980.616, rel_tol = 1e-6));
        assert!(g.effective_radius > 6300.0 && g.effective_radius < 6400.0);
    }

    #[test]
    fn test_gravity_stronger_at_pole() {
        assert!(Gravity::at_latitude(90.0).surface > Gravity::at_latitude(0.0).surface);
    }

    #[test]
    fn test_zeta() {
        let g = Gravity::at_latitude(45.0);
        assert_eq!(g.zeta(120.0, 120.0), 0.0);
        let z = g.zeta(400.0, 120.0);
        assert!(z > 0.0 && z < 280.0);
    }

    #[test]
    fn test_ccor_limits() {
        assert_eq!(ccor(1000.0, 0.5, 5.0, 100.0), 1.0);
        assert!(is_close!(ccor(-1000.0, 0.5, 5.0, 100.0), 0.5_f64.exp()));
        assert!(is_close!(ccor(100.0, 0.5, 5.0, 100.0), 0.25_f64.exp()));
        assert_eq!(ccor2(1000.0, 0.5, 5.0, 100.0, 10.0), 1.0);
        assert!(is_close!(ccor2(100.0, 0.5, 5.0, 100.0, 10.0), 0.25_f64.exp()));
    }

    #[test]
    fn test_dnet_zero_inputs() {
        assert_eq!(dnet(0.0, 0.0, 28.0, 28.95, 4.0), 1.0);
        assert_eq!(dnet(5.0, 0.0, 28.0, 28.95, 4.0), 5.0);
        assert_eq!(dnet(0.0, 7.0, 28.0, 28.95, 4.0), 7.0);
    }

    #[test]
    fn test_dnet_saturates() {
        // Light species: a > 0, so a much larger mixed density wins
        assert_eq!(dnet(1.0, 1.0E10, 28.0, 28.95, 4.0), 1.0E10);
        assert_eq!(dnet(1.0E10, 1.0, 28.0, 28.95, 4.0), 1.0E10);
        let blended = dnet(1.0, 1.2, 28.0, 28.95, 4.0);
        assert!(blended > 1.2);
    }

    #[test]
    fn test_bates_temperature_limits() {
        let g = Gravity::at_latitude(45.0);
        let p = profile();
        assert!(is_close!(p.temperature(&g, 120.0), 386.0));
        assert!(is_close!(p.temperature(&g, 3000.0), 1000.0, rel_tol = 1e-6));
    }

    #[test]
    fn test_temperature_continuous_at_join() {
        let g = Gravity::at_latitude(45.0);
        let p = profile();
        let above = p.temperature(&g, 120.0 + 1e-7);
        let below = p.temperature(&g, 120.0 - 1e-7);
        assert!(is_close!(above, below, rel_tol = 1e-7));
    }

    #[test]
    fn test_temperature_slope_continuous_at_join() {
        let g = Gravity::at_latitude(45.0);
        let p = profile();
        let h = 1e-4;
        let up = (p.temperature(&g, 120.0 + h) - p.temperature(&g, 120.0)) / h;
        let down = (p.temperature(&g, 120.0) - p.temperature(&g, 120.0 - h)) / h;
        assert!(is_close!(up, down, rel_tol = 1e-3), "{} vs {}", up, down);
    }

    #[test]
    fn test_density_continuous_at_join() {
        let g = Gravity::at_latitude(45.0);
        let p = profile();
        let above = p.density(&g, 120.0 + 1e-7, 1.0E11, 28.0, 0.0);
        let below = p.density(&g, 120.0 - 1e-7, 1.0E11, 28.0, 0.0);
        assert!(is_close!(above, below, rel_tol = 1e-6));
        assert!(is_close!(p.density(&g, 120.0, 1.0E11, 28.0, 0.0), 1.0E11));
    }

    #[test]
    fn test_heavier_species_fall_off_faster() {
        let g = Gravity::at_latitude(45.0);
        let p = profile();
        let n2 = p.density(&g, 400.0, 1.0E11, 28.0, 0.0);
        let he = p.density(&g, 400.0, 1.0E11, 4.0, 0.0);
        assert!(he > n2);
        assert!(n2 < 1.0E11);
    }

    #[test]
    fn test_densm_isothermal_matches_barometric() {
        let g = Gravity::at_latitude(45.0);
        let t = 250.0;
        let upper = TemperatureNodes {
            altitudes: [72.5, 55.0, 45.0, 32.5],
            temperatures: [t; 4],
            gradients: [0.0, 0.0],
        };
        let lower = TemperatureNodes {
            altitudes: [32.5, 20.0, 15.0, 10.0, 0.0],
            temperatures: [t; 5],
            gradients: [0.0, 0.0],
        };

        let (dens, tz) = densm(&g, 50.0, 1.0, 28.0, &upper, &lower);
        assert!(is_close!(tz, t, rel_tol = 1e-12));

        // exp(-Δζ / H) with the gravity of the top node; Δζ is negative
        let h = g.scale_height(72.5, 28.0, t);
        let expected = (-g.zeta(50.0, 72.5) / h).exp();
        assert!(is_close!(dens, expected, rel_tol = 1e-9));
        assert!(dens > 1.0);
    }
}

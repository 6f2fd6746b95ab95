//! Heliocentric and geocentric ecliptic longitudes for the planets.
//!
//! The pipeline per body: evaluate current-epoch elements, solve Kepler
//! for the eccentric anomaly, derive the true anomaly, then either project
//! the in-orbital-plane longitude onto the ecliptic (heliocentric) or
//! difference 2-D Cartesian positions against Earth (geocentric). The
//! geocentric conversion is planar: ecliptic latitude is ignored, which
//! is adequate for sign and house placement.

use natal_time::{julian_centuries, normalize_360};

use crate::body::Body;
use crate::elements::{self, OrbitalElements, orbital_elements};
use crate::error::OrbitError;
use crate::kepler::solve_kepler;

/// Elements evaluated at a specific epoch. Angles in degrees.
struct CurrentElements {
    mean_longitude: f64,
    eccentricity: f64,
    perihelion: f64,
    node: f64,
    inclination: f64,
}

/// Linear extrapolation of the J2000.0 elements to T Julian centuries.
///
/// Inclination is left unnormalized; it is only used inside trig calls.
fn evaluate(el: &OrbitalElements, t: f64) -> CurrentElements {
    CurrentElements {
        mean_longitude: normalize_360(el.l0 + el.l1 * t),
        eccentricity: el.e0 + el.e1 * t,
        perihelion: normalize_360(el.peri0 + el.peri1 * t),
        node: normalize_360(el.node0 + el.node1 * t),
        inclination: el.i0 + el.i1 * t,
    }
}

/// True anomaly in degrees and orbital radius in AU from current elements.
///
/// `v = atan2(sqrt(1-e^2)*sin(E), cos(E) - e)`, `r = a*(1 - e*cos(E))`.
fn true_anomaly_and_radius(cur: &CurrentElements, a: f64) -> (f64, f64) {
    let e = cur.eccentricity;
    let m = normalize_360(cur.mean_longitude - cur.perihelion).to_radians();
    let e_anom = solve_kepler(m, e);

    let v = f64::atan2((1.0 - e * e).sqrt() * e_anom.sin(), e_anom.cos() - e).to_degrees();
    let r = a * (1.0 - e * e_anom.cos());
    (v, r)
}

/// In-orbital-plane longitude (degrees) and radius (AU), used by the
/// planar geocentric conversion.
fn in_plane_position(el: &OrbitalElements, t: f64) -> (f64, f64) {
    let cur = evaluate(el, t);
    let (v, r) = true_anomaly_and_radius(&cur, el.a);
    (normalize_360(v + cur.perihelion), r)
}

/// Heliocentric ecliptic longitude of a planet, degrees [0, 360).
///
/// Fails with [`OrbitError::NoElements`] for the Sun and Moon.
pub fn heliocentric_longitude(body: Body, jd: f64) -> Result<f64, OrbitError> {
    let el = orbital_elements(body).ok_or(OrbitError::NoElements(body))?;
    let t = julian_centuries(jd);
    let cur = evaluate(el, t);
    let (v, _) = true_anomaly_and_radius(&cur, el.a);

    // Longitude in the orbital plane, measured from the ascending node.
    let plane_lon = normalize_360(v + cur.perihelion - cur.node).to_radians();
    let incl = cur.inclination.to_radians();

    let ecliptic = f64::atan2(plane_lon.sin() * incl.cos(), plane_lon.cos()).to_degrees();
    Ok(normalize_360(ecliptic + cur.node))
}

/// Geocentric ecliptic longitude of a planet as seen from Earth, degrees
/// [0, 360).
///
/// Both Earth and the target are placed in the ecliptic plane by their
/// in-plane longitudes and radii; the apparent longitude is the direction
/// of the difference vector. Fails with [`OrbitError::EarthObserver`] for
/// Earth and [`OrbitError::NoElements`] for the luminaries.
pub fn geocentric_longitude(body: Body, jd: f64) -> Result<f64, OrbitError> {
    if body == Body::Earth {
        return Err(OrbitError::EarthObserver);
    }
    let el = orbital_elements(body).ok_or(OrbitError::NoElements(body))?;
    let t = julian_centuries(jd);

    let (earth_lon, earth_r) = in_plane_position(&elements::EARTH, t);
    let (planet_lon, planet_r) = in_plane_position(el, t);

    let earth_rad = earth_lon.to_radians();
    let planet_rad = planet_lon.to_radians();

    let x = planet_r * planet_rad.cos() - earth_r * earth_rad.cos();
    let y = planet_r * planet_rad.sin() - earth_r * earth_rad.sin();

    Ok(normalize_360(f64::atan2(y, x).to_degrees()))
}

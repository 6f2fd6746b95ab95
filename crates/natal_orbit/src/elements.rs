//! Keplerian orbital elements at the J2000.0 epoch with secular rates.
//!
//! Values follow Standish (1992) as tabulated in Meeus. Each record holds
//! the element value at J2000.0 and its rate per Julian century; current
//! elements are obtained by linear extrapolation in T. The Sun and Moon
//! have no entry here; their longitudes come from closed-form series in
//! [`crate::luminaries`].

use crate::body::Body;

/// Orbital elements for one planet. Angles in degrees, semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude at J2000.0.
    pub l0: f64,
    /// Mean longitude rate per Julian century.
    pub l1: f64,
    /// Semi-major axis.
    pub a: f64,
    /// Eccentricity at J2000.0.
    pub e0: f64,
    /// Eccentricity rate per century.
    pub e1: f64,
    /// Inclination at J2000.0.
    pub i0: f64,
    /// Inclination rate per century.
    pub i1: f64,
    /// Longitude of the ascending node at J2000.0.
    pub node0: f64,
    /// Ascending node rate per century.
    pub node1: f64,
    /// Longitude of perihelion at J2000.0.
    pub peri0: f64,
    /// Longitude of perihelion rate per century.
    pub peri1: f64,
}

pub(crate) const MERCURY: OrbitalElements = OrbitalElements {
    l0: 252.250_323_50,
    l1: 149_472.674_111_75,
    a: 0.387_099_27,
    e0: 0.205_635_93,
    e1: 0.000_019_06,
    i0: 7.004_979_02,
    i1: -0.005_947_49,
    node0: 48.330_765_93,
    node1: -0.125_340_81,
    peri0: 77.457_796_28,
    peri1: 0.160_476_89,
};

pub(crate) const VENUS: OrbitalElements = OrbitalElements {
    l0: 181.979_099_50,
    l1: 58_517.815_387_29,
    a: 0.723_335_66,
    e0: 0.006_776_72,
    e1: -0.000_041_07,
    i0: 3.394_676_05,
    i1: -0.000_788_90,
    node0: 76.679_842_55,
    node1: -0.277_694_18,
    peri0: 131.602_467_18,
    peri1: 0.002_683_29,
};

pub(crate) const EARTH: OrbitalElements = OrbitalElements {
    l0: 100.464_571_66,
    l1: 35_999.372_449_81,
    a: 1.000_002_61,
    e0: 0.016_711_23,
    e1: -0.000_043_92,
    i0: 0.000_015_31,
    i1: -0.012_946_68,
    node0: 0.0,
    node1: 0.0,
    peri0: 102.937_681_93,
    peri1: 0.323_273_64,
};

pub(crate) const MARS: OrbitalElements = OrbitalElements {
    l0: 355.446_562_99,
    l1: 19_140.302_684_99,
    a: 1.523_710_34,
    e0: 0.093_394_10,
    e1: 0.000_078_82,
    i0: 1.849_691_42,
    i1: -0.008_131_31,
    node0: 49.559_538_91,
    node1: -0.292_573_43,
    peri0: 336.056_370_41,
    peri1: 0.444_410_88,
};

pub(crate) const JUPITER: OrbitalElements = OrbitalElements {
    l0: 34.396_440_51,
    l1: 3_034.746_127_75,
    a: 5.202_887_00,
    e0: 0.048_386_24,
    e1: -0.000_132_53,
    i0: 1.304_396_95,
    i1: -0.001_837_14,
    node0: 100.473_909_09,
    node1: 0.204_691_06,
    peri0: 14.728_479_83,
    peri1: 0.212_526_68,
};

pub(crate) const SATURN: OrbitalElements = OrbitalElements {
    l0: 49.954_244_23,
    l1: 1_222.493_622_01,
    a: 9.536_675_94,
    e0: 0.053_861_79,
    e1: -0.000_509_91,
    i0: 2.485_991_87,
    i1: 0.001_936_09,
    node0: 113.662_424_48,
    node1: -0.288_677_94,
    peri0: 92.598_878_31,
    peri1: -0.418_972_16,
};

pub(crate) const URANUS: OrbitalElements = OrbitalElements {
    l0: 313.238_104_51,
    l1: 428.482_027_85,
    a: 19.189_164_64,
    e0: 0.047_257_44,
    e1: -0.000_043_97,
    i0: 0.772_637_83,
    i1: -0.002_429_39,
    node0: 74.016_925_03,
    node1: 0.042_405_89,
    peri0: 170.954_276_30,
    peri1: 0.408_052_81,
};

pub(crate) const NEPTUNE: OrbitalElements = OrbitalElements {
    l0: 304.879_970_31,
    l1: 218.459_453_25,
    a: 30.069_922_76,
    e0: 0.008_590_48,
    e1: 0.000_051_05,
    i0: 1.770_043_47,
    i1: 0.000_353_72,
    node0: 131.784_225_74,
    node1: -0.012_996_30,
    peri0: 44.964_762_27,
    peri1: -0.322_414_64,
};

pub(crate) const PLUTO: OrbitalElements = OrbitalElements {
    l0: 238.929_038_33,
    l1: 145.207_805_15,
    a: 39.482_116_75,
    e0: 0.248_827_30,
    e1: 0.000_051_70,
    i0: 17.140_012_06,
    i1: 0.000_048_18,
    node0: 110.303_936_84,
    node1: -0.011_834_82,
    peri0: 224.068_916_29,
    peri1: -0.040_629_42,
};

/// Orbital elements for a body, or `None` for the luminaries (closed-form
/// series); there is no Keplerian record for the Sun or Moon.
pub const fn orbital_elements(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Earth => Some(&EARTH),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}

//! The 27 nakshatras (lunar mansions) and their Vimshottari rulers.
//!
//! The ecliptic divides into 27 equal mansions of 13°20′ (48 000″). The
//! ruler sequence repeats the nine-body Vimshottari cycle three times,
//! starting with Ketu at Ashwini; the ruler of the Moon's birth
//! nakshatra seeds the daśā schedule.

use crate::body::{Body, VIMSHOTTARI_CYCLE};
use crate::dms::{Dms, deg_to_dms};

/// Span of one nakshatra: 360/27 = 13.333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one nakshatra in arcseconds: 48 000″.
pub const NAKSHATRA_SPAN_ARCSEC: f64 = 48_000.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The ruling body, following the thrice-repeated Vimshottari cycle.
    pub fn ruler(self) -> Body {
        VIMSHOTTARI_CYCLE[self.index() as usize % 9]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Where a sidereal longitude falls within its nakshatra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// Decimal degrees into the mansion, [0, 13.333...).
    pub degrees_in: f64,
    /// The same offset as degrees/minutes/seconds.
    pub dms: Dms,
}

impl NakshatraPosition {
    /// Offset into the mansion in arcseconds, [0, 48 000).
    pub fn elapsed_arcsec(&self) -> f64 {
        self.degrees_in * 3_600.0
    }

    /// Fraction of the mansion already traversed, [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.elapsed_arcsec() / NAKSHATRA_SPAN_ARCSEC
    }
}

/// Locate a sidereal ecliptic longitude in its nakshatra.
pub fn nakshatra_position(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = sidereal_lon_deg.rem_euclid(360.0);
    let idx = ((lon / NAKSHATRA_SPAN_DEG) as usize).min(26);
    let degrees_in = lon - idx as f64 * NAKSHATRA_SPAN_DEG;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[idx],
        degrees_in,
        dms: deg_to_dms(degrees_in),
    }
}

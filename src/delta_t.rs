//! Date-based ΔT used when converting equinox and solstice instants from
//! terrestrial time to UT.
//!
//! Independent of [`crate::time::ephemeris_correction`], the piecewise
//! polynomial over moments that feeds the position series. This one is keyed
//! by calendar year and backed by the historical table.
use chrono::{Datelike, NaiveDate};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::polynomial;
use crate::tables::{DELTA_T_FIRST_YEAR, DELTA_T_TABLE};

const DELTA_T_LAST_YEAR: i32 = DELTA_T_FIRST_YEAR + 2 * (DELTA_T_TABLE.len() as i32 - 1);

/// ΔT (TT − UT) in seconds for a date.
pub fn delta_t(date: NaiveDate) -> f64 {
    delta_t_for_year(date.year())
}

/// ΔT (TT − UT) in seconds for a calendar year.
///
/// Even years inside 1620..=2002 come straight from the table; odd years
/// take the mean of their neighbours. Outside the table Meeus' long-term
/// parabolas apply, with the usual correction for 2000..=2100.
pub fn delta_t_for_year(year: i32) -> f64 {
    if (DELTA_T_FIRST_YEAR..=DELTA_T_LAST_YEAR).contains(&year) {
        let offset = (year - DELTA_T_FIRST_YEAR) as usize;
        let index = offset / 2;
        return if offset % 2 == 0 {
            DELTA_T_TABLE[index]
        } else {
            (DELTA_T_TABLE[index] + DELTA_T_TABLE[index + 1]) / 2.0
        };
    }

    tracing::debug!(year, "ΔT outside tabulated range, using polynomial");
    let y = f64::from(year);
    let t = (y - 2000.0) / 100.0;
    if year < 948 {
        polynomial(&[2177.0, 497.0, 44.1], t)
    } else if (2000..=2100).contains(&year) {
        polynomial(&[102.0, 102.0, 25.3], t) + 0.37 * (y - 2100.0)
    } else {
        polynomial(&[102.0, 102.0, 25.3], t)
    }
}

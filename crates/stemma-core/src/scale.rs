use crate::error::{Error, Result};
use crate::model::Person;
use chrono::Datelike;

/// Affine birth-year → pixel mapping for the vertical axis.
///
/// The domain spans the minimum birth year to the maximum of all birth and
/// death years. A single-year domain degenerates to a factor of 0, collapsing
/// every year onto `pixel_low`.
#[derive(Debug, Clone, Copy)]
pub struct YearScale {
    min_year: i32,
    max_year: i32,
    pixel_low: f64,
    factor: f64,
}

impl YearScale {
    pub fn build(persons: &[Person], pixel_low: f64, pixel_high: f64) -> Result<Self> {
        let mut min_year: Option<i32> = None;
        let mut max_year: Option<i32> = None;
        for p in persons {
            let birth = p.birth.year();
            let latest = p.death.map_or(birth, |d| d.year().max(birth));
            min_year = Some(min_year.map_or(birth, |m| m.min(birth)));
            max_year = Some(max_year.map_or(latest, |m| m.max(latest)));
        }
        let (Some(min_year), Some(max_year)) = (min_year, max_year) else {
            return Err(Error::EmptyChart);
        };

        let factor = if max_year > min_year {
            (pixel_high - pixel_low) / f64::from(max_year - min_year)
        } else {
            0.0
        };
        Ok(Self {
            min_year,
            max_year,
            pixel_low,
            factor,
        })
    }

    pub fn map(&self, year: i32) -> f64 {
        f64::from(year - self.min_year) * self.factor + self.pixel_low
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }
}

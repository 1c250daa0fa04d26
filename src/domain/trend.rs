// Trend model domain types
use super::error::TrendError;

/// Least-squares line `value = slope * year + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
    pub n_observations: usize,
}

impl TrendModel {
    pub fn new(slope: f64, intercept: f64, n_observations: usize) -> Self {
        Self {
            slope,
            intercept,
            n_observations,
        }
    }

    pub fn predict(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}

/// Goodness-of-fit byproducts of a regression. Informational only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics {
    pub r_value: f64,
    pub p_value: f64,
    pub std_err: f64,
}

/// Inclusive year range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionRange {
    start: i32,
    end: i32,
}

impl ProjectionRange {
    pub fn new(start: i32, end: i32) -> Result<Self, TrendError> {
        if start > end {
            return Err(TrendError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub year: i32,
    pub value: f64,
}

impl ProjectedPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_range_rejects_reversed_bounds() {
        assert_eq!(
            ProjectionRange::new(2050, 2000),
            Err(TrendError::InvalidRange {
                start: 2050,
                end: 2000
            })
        );
    }

    #[test]
    fn test_projection_range_single_year() {
        let range = ProjectionRange::new(2050, 2050).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2050]);
    }

    #[test]
    fn test_predict() {
        let model = TrendModel::new(0.5, -1000.0, 2);
        assert_eq!(model.predict(2000), 0.0);
    }
}

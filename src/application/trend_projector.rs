// Trend projector - Ordinary least squares fit and linear extrapolation
use crate::domain::error::TrendError;
use crate::domain::observation::Observation;
use crate::domain::trend::{FitStatistics, ProjectedPoint, ProjectionRange, TrendModel};
use statrs::distribution::{ContinuousCDF, StudentsT};

const MIN_OBSERVATIONS: usize = 2;

/// Centred sums shared by the model and its statistics.
struct Moments {
    n: usize,
    mean_year: f64,
    mean_value: f64,
    ss_year: f64,
    ss_value: f64,
    sp_year_value: f64,
}

impl Moments {
    fn compute(observations: &[Observation]) -> Result<Self, TrendError> {
        if observations.len() < MIN_OBSERVATIONS {
            return Err(TrendError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: observations.len(),
            });
        }
        if let Some(bad) = observations.iter().find(|o| !o.value.is_finite()) {
            return Err(TrendError::NonFiniteValue { year: bad.year });
        }

        let n = observations.len();
        let count = n as f64;
        let mean_year = observations.iter().map(|o| f64::from(o.year)).sum::<f64>() / count;
        let mean_value = observations.iter().map(|o| o.value).sum::<f64>() / count;

        let mut ss_year = 0.0;
        let mut ss_value = 0.0;
        let mut sp_year_value = 0.0;
        for o in observations {
            let dx = f64::from(o.year) - mean_year;
            let dy = o.value - mean_value;
            ss_year += dx * dx;
            ss_value += dy * dy;
            sp_year_value += dx * dy;
        }

        if ss_year == 0.0 {
            return Err(TrendError::DegenerateInput);
        }

        Ok(Self {
            n,
            mean_year,
            mean_value,
            ss_year,
            ss_value,
            sp_year_value,
        })
    }

    fn model(&self) -> TrendModel {
        let slope = self.sp_year_value / self.ss_year;
        let intercept = self.mean_value - slope * self.mean_year;
        TrendModel::new(slope, intercept, self.n)
    }

    fn statistics(&self) -> FitStatistics {
        let r_value = if self.ss_value == 0.0 {
            0.0
        } else {
            (self.sp_year_value / (self.ss_year * self.ss_value).sqrt()).clamp(-1.0, 1.0)
        };

        let df = self.n - MIN_OBSERVATIONS;
        if df == 0 {
            // Two points always lie on the line.
            let p_value = if self.ss_value == 0.0 { 1.0 } else { 0.0 };
            return FitStatistics {
                r_value,
                p_value,
                std_err: 0.0,
            };
        }

        let df = df as f64;
        let unexplained = (1.0 - r_value) * (1.0 + r_value);
        let std_err = (unexplained.max(0.0) * self.ss_value / self.ss_year / df).sqrt();
        let p_value = if unexplained <= 0.0 {
            0.0
        } else {
            let t = r_value * (df / unexplained).sqrt();
            match StudentsT::new(0.0, 1.0, df) {
                Ok(dist) => (2.0 * dist.sf(t.abs())).min(1.0),
                Err(_) => f64::NAN,
            }
        };

        FitStatistics {
            r_value,
            p_value,
            std_err,
        }
    }
}

/// Fits `value = slope * year + intercept` by ordinary least squares.
///
/// Requires at least two observations with distinct years and finite values.
pub fn fit(observations: &[Observation]) -> Result<TrendModel, TrendError> {
    Moments::compute(observations).map(|m| m.model())
}

/// Same as [`fit`], also returning the correlation coefficient, the two-sided
/// p-value for a zero slope and the standard error of the slope.
pub fn fit_with_statistics(
    observations: &[Observation],
) -> Result<(TrendModel, FitStatistics), TrendError> {
    let moments = Moments::compute(observations)?;
    Ok((moments.model(), moments.statistics()))
}

/// Evaluates `model` for every year of `[start, end]`.
pub fn project(model: &TrendModel, start: i32, end: i32) -> Result<Vec<ProjectedPoint>, TrendError> {
    let range = ProjectionRange::new(start, end)?;
    Ok(project_range(model, &range))
}

fn project_range(model: &TrendModel, range: &ProjectionRange) -> Vec<ProjectedPoint> {
    let mut projected = Vec::with_capacity(range.len());
    projected.extend(
        range
            .years()
            .map(|year| ProjectedPoint::new(year, model.predict(year))),
    );
    projected
}

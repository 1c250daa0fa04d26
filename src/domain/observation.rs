// Observation domain model

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Earliest year in the sequence, or `None` when it is empty.
pub fn min_year(observations: &[Observation]) -> Option<i32> {
    observations.iter().map(|o| o.year).min()
}

/// Observations whose year is at or after `cutoff_year`, in source order.
pub fn since_year(observations: &[Observation], cutoff_year: i32) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| o.year >= cutoff_year)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_year_keeps_order_and_boundary() {
        let observations = vec![
            Observation::new(1999, 1.0),
            Observation::new(2001, 3.0),
            Observation::new(2000, 2.0),
        ];

        let recent = since_year(&observations, 2000);

        assert_eq!(recent, vec![Observation::new(2001, 3.0), Observation::new(2000, 2.0)]);
    }

    #[test]
    fn test_min_year() {
        assert_eq!(min_year(&[]), None);

        let observations = vec![Observation::new(1900, 1.0), Observation::new(1880, 0.0)];
        assert_eq!(min_year(&observations), Some(1880));
    }
}

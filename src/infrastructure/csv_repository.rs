// CSV repository implementation
use crate::application::observation_repository::ObservationRepository;
use crate::domain::observation::Observation;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvObservationRepository {
    path: PathBuf,
    year_column: String,
    value_column: String,
}

impl CsvObservationRepository {
    pub fn new(path: PathBuf, year_column: String, value_column: String) -> Self {
        Self {
            path,
            year_column,
            value_column,
        }
    }

    fn column_index(&self, headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("Column '{}' not found in {}", name, self.path.display()))
    }
}

impl ObservationRepository for CsvObservationRepository {
    fn load_observations(&self) -> Result<Vec<Observation>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", self.path.display()))?
            .clone();
        let year_idx = self.column_index(&headers, &self.year_column)?;
        let value_idx = self.column_index(&headers, &self.value_column)?;

        let mut observations = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result.with_context(|| format!("Malformed row in {}", self.path.display()))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let value_cell = record.get(value_idx).unwrap_or("").trim();
            if value_cell.is_empty() {
                skipped += 1;
                continue;
            }

            let year_cell = record.get(year_idx).unwrap_or("").trim();
            let year = parse_year(year_cell).with_context(|| {
                format!(
                    "Invalid {} '{}' on line {} of {}",
                    self.year_column,
                    year_cell,
                    line,
                    self.path.display()
                )
            })?;
            let value: f64 = value_cell.parse().with_context(|| {
                format!(
                    "Invalid {} '{}' on line {} of {}",
                    self.value_column,
                    value_cell,
                    line,
                    self.path.display()
                )
            })?;

            observations.push(Observation::new(year, value));
        }

        if skipped > 0 {
            tracing::warn!(
                "Skipped {} rows without '{}' in {}",
                skipped,
                self.value_column,
                self.path.display()
            );
        }
        tracing::debug!(
            "Loaded {} observations from {}",
            observations.len(),
            self.path.display()
        );

        Ok(observations)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Accepts "1880" as well as spreadsheet-style "1880.0".
fn parse_year(cell: &str) -> Result<i32> {
    if let Ok(year) = cell.parse::<i32>() {
        return Ok(year);
    }
    let float: f64 = cell.parse()?;
    if float.fract() != 0.0 || float < f64::from(i32::MIN) || float > f64::from(i32::MAX) {
        anyhow::bail!("not a whole year");
    }
    Ok(float as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str =
        "Year,CSIRO Adjusted Sea Level,Lower Error Bound,Upper Error Bound,NOAA Adjusted Sea Level\n";

    fn repository_for(contents: &str) -> (tempfile::TempDir, CsvObservationRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sea-level.csv");
        fs::write(&path, contents).unwrap();
        let repository = CsvObservationRepository::new(
            path,
            "Year".to_string(),
            "CSIRO Adjusted Sea Level".to_string(),
        );
        (dir, repository)
    }

    #[test]
    fn test_loads_named_columns_in_source_order() {
        let csv = format!(
            "{HEADER}1881,0.220472441,-0.732283464,1.173228345,\n1880,0,-0.952755905,0.952755905,\n"
        );
        let (_dir, repository) = repository_for(&csv);

        let observations = repository.load_observations().unwrap();

        assert_eq!(
            observations,
            vec![Observation::new(1881, 0.220472441), Observation::new(1880, 0.0)]
        );
    }

    #[test]
    fn test_skips_rows_without_measurement() {
        let csv = format!("{HEADER}2013,8.980314951,8.622047235,9.338582667,8.546648227\n2014,,,,8.6\n");
        let (_dir, repository) = repository_for(&csv);

        let observations = repository.load_observations().unwrap();

        assert_eq!(observations, vec![Observation::new(2013, 8.980314951)]);
    }

    #[test]
    fn test_accepts_fractional_year_notation() {
        let (_dir, repository) = repository_for("Year,CSIRO Adjusted Sea Level\n1990.0,5.5\n");
        let observations = repository.load_observations().unwrap();
        assert_eq!(observations, vec![Observation::new(1990, 5.5)]);
    }

    #[test]
    fn test_missing_column() {
        let (_dir, repository) = repository_for("Year,Level\n1880,0\n");

        let err = repository.load_observations().unwrap_err();

        assert!(err.to_string().contains("Column 'CSIRO Adjusted Sea Level' not found"));
    }

    #[test]
    fn test_non_numeric_value_reports_line() {
        let (_dir, repository) =
            repository_for("Year,CSIRO Adjusted Sea Level\n1880,0\n1881,abc\n");

        let err = repository.load_observations().unwrap_err();
        let message = err.to_string();

        assert!(message.contains("'abc'"), "{message}");
        assert!(message.contains("line 3"), "{message}");
    }

    #[test]
    fn test_missing_file() {
        let repository = CsvObservationRepository::new(
            PathBuf::from("/nonexistent/sea-level.csv"),
            "Year".to_string(),
            "CSIRO Adjusted Sea Level".to_string(),
        );
        let err = repository.load_observations().unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}

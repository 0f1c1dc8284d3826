//! Synthetic employment survey: record generation and grouped statistics.

use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Number of respondents in one survey run.
pub const RESPONDENTS: usize = 10;

/// Salary bounds for employed respondents.
pub const SALARY_RANGE: RangeInclusive<i64> = 600..=2000;

/// Respondent gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Coded as 1.
    Male,
    /// Coded as 2.
    Female,
}

impl Gender {
    /// Questionnaire code.
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

/// Whether the respondent works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Employment {
    /// Coded as 1.
    Employed,
    /// Coded as 2.
    Unemployed,
}

impl Employment {
    /// Questionnaire code.
    pub fn code(self) -> u8 {
        match self {
            Employment::Employed => 1,
            Employment::Unemployed => 2,
        }
    }
}

/// One survey answer. Salary is 0 when unemployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct SurveyRecord {
    gender: Gender,
    employment: Employment,
    salary: i64,
}

impl SurveyRecord {
    /// Draws gender and employment with equal odds, then a salary when employed.
    #[instrument(skip(rng))]
    pub fn random<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let employment = if rng.gen_bool(0.5) {
            Employment::Employed
        } else {
            Employment::Unemployed
        };
        let salary = match employment {
            Employment::Employed => rng.gen_range(SALARY_RANGE),
            Employment::Unemployed => 0,
        };
        Self::new(gender, employment, salary)
    }

    /// `(gender, works, salary)` as questionnaire codes.
    pub fn codes(&self) -> (u8, u8, i64) {
        (self.gender.code(), self.employment.code(), self.salary)
    }

    fn is_employed(&self, gender: Gender) -> bool {
        self.gender == gender && self.employment == Employment::Employed
    }
}

/// Generates `count` independent records.
#[instrument(skip(rng))]
pub fn generate<G: Rng + ?Sized>(count: usize, rng: &mut G) -> Vec<SurveyRecord> {
    (0..count).map(|_| SurveyRecord::random(rng)).collect()
}

/// Grouped counts, percentages and salary means.
///
/// Percentages are relative to all respondents. Salary means cover
/// employed members of each gender and are 0 for an empty group.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SurveySummary {
    respondents: usize,
    males: usize,
    females: usize,
    employed_males: usize,
    employed_females: usize,
    male_percentage: f64,
    female_percentage: f64,
    employed_male_percentage: f64,
    employed_female_percentage: f64,
    male_average_salary: f64,
    female_average_salary: f64,
}

impl SurveySummary {
    /// Aggregates a batch of records.
    #[instrument(skip(records), fields(respondents = records.len()))]
    pub fn from_records(records: &[SurveyRecord]) -> Self {
        let respondents = records.len();
        let males = records.iter().filter(|r| r.gender == Gender::Male).count();
        let females = respondents - males;

        let salaries = |gender| -> Vec<i64> {
            records
                .iter()
                .filter(|r| r.is_employed(gender))
                .map(|r| r.salary)
                .collect()
        };
        let male_salaries = salaries(Gender::Male);
        let female_salaries = salaries(Gender::Female);

        let summary = Self {
            respondents,
            males,
            females,
            employed_males: male_salaries.len(),
            employed_females: female_salaries.len(),
            male_percentage: percentage(males, respondents),
            female_percentage: percentage(females, respondents),
            employed_male_percentage: percentage(male_salaries.len(), respondents),
            employed_female_percentage: percentage(female_salaries.len(), respondents),
            male_average_salary: average(&male_salaries),
            female_average_salary: average(&female_salaries),
        };
        debug!(?summary, "Survey aggregated");
        summary
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

fn average(values: &[i64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<i64>() as f64 / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_generated_records_are_consistent() {
        let mut rng = Pcg64::seed_from_u64(1);
        let records = generate(200, &mut rng);
        assert_eq!(records.len(), 200);
        for record in &records {
            match record.employment() {
                Employment::Employed => assert!(SALARY_RANGE.contains(record.salary())),
                Employment::Unemployed => assert_eq!(*record.salary(), 0),
            }
        }
    }

    #[test]
    fn test_gender_percentages_sum_to_hundred() {
        let mut rng = Pcg64::seed_from_u64(2);
        for _ in 0..100 {
            let summary = SurveySummary::from_records(&generate(RESPONDENTS, &mut rng));
            let total = summary.male_percentage() + summary.female_percentage();
            assert!((total - 100.0).abs() < 1e-9);
            assert_eq!(summary.males() + summary.females(), RESPONDENTS);
        }
    }

    #[test]
    fn test_empty_employed_group_averages_zero() {
        let records = vec![
            SurveyRecord::new(Gender::Male, Employment::Unemployed, 0),
            SurveyRecord::new(Gender::Female, Employment::Employed, 1000),
            SurveyRecord::new(Gender::Female, Employment::Employed, 1500),
        ];
        let summary = SurveySummary::from_records(&records);
        assert_eq!(*summary.male_average_salary(), 0.0);
        assert_eq!(*summary.female_average_salary(), 1250.0);
        assert_eq!(*summary.employed_males(), 0);
        assert_eq!(*summary.employed_females(), 2);
    }

    #[test]
    fn test_empty_survey() {
        let summary = SurveySummary::from_records(&[]);
        assert_eq!(*summary.male_percentage(), 0.0);
        assert_eq!(*summary.female_average_salary(), 0.0);
    }

    #[test]
    fn test_codes() {
        let record = SurveyRecord::new(Gender::Female, Employment::Unemployed, 0);
        assert_eq!(record.codes(), (2, 2, 0));
    }
}

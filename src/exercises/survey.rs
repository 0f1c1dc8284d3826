//! Exercise 8: ten synthetic survey answers and their grouped statistics.

use super::ExerciseError;
use crate::console::Console;
use crate::i18n::Message;
use crate::survey::{RESPONDENTS, SurveySummary, generate};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::instrument;

/// Generates the answers, prints them with the summary, and returns the summary.
#[instrument(skip(console, rng))]
pub fn survey<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<SurveySummary, ExerciseError> {
    let records = generate(RESPONDENTS, rng);
    let summary = SurveySummary::from_records(&records);

    console.say(Message::SurveyData(&records))?;
    console.say(Message::MalePercentage(*summary.male_percentage()))?;
    console.say(Message::FemalePercentage(*summary.female_percentage()))?;
    console.say(Message::EmployedMalePercentage(
        *summary.employed_male_percentage(),
    ))?;
    console.say(Message::EmployedFemalePercentage(
        *summary.employed_female_percentage(),
    ))?;
    console.say(Message::MaleAverageSalary(*summary.male_average_salary()))?;
    console.say(Message::FemaleAverageSalary(*summary.female_average_salary()))?;

    Ok(summary)
}

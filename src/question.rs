//! The survey questions the tool answers.
//!
//! Each question is a fixed list of menu selections. A selection names its
//! catalog, the heading printed above its menu, the highest code the menu
//! offers and which input column it filters.

use std::io::{BufRead, Write};

use crate::data::catalog::{
    CategoryCatalog, EDUCATION_LEVEL, OCCUPATION, RECRUITMENT_STRATEGY, VACANCY_DURATION,
};
use crate::data::model::FilterCriteria;
use crate::error::{Result, VacancyError};
use crate::prompt::SelectionPrompt;

/// Which filtered column a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Occupation classification column.
    First,
    /// Job characteristic column (recruitment, education, duration).
    Second,
}

#[derive(Debug)]
pub struct Selection {
    pub catalog: &'static CategoryCatalog,
    pub heading: &'static str,
    /// Highest code offered in the menu.
    pub upper: u32,
    pub axis: Axis,
}

impl Selection {
    /// Bound check first, then catalog lookup.
    pub fn resolve(&self, code: i64) -> Result<&'static str> {
        if code < 1 || code > i64::from(self.upper) {
            return Err(VacancyError::InvalidSelection {
                catalog: self.catalog.name,
                code,
                upper: self.upper,
            });
        }
        self.catalog.resolve(code)
    }
}

#[derive(Debug)]
pub struct Question {
    pub number: u8,
    pub title: &'static str,
    pub selections: [Selection; 2],
}

const OCCUPATION_HEADING: &str =
    "Enter the number of the type of National Occupation Classification you are looking for:\n\
     Your choices are:";

pub static QUESTIONS: [Question; 4] = [
    Question {
        number: 1,
        title: "What is the proportion of job vacancies for people who got their job through \
                social media quarterly, without adjusting for seasonality, in Canada?",
        selections: [
            Selection {
                catalog: &RECRUITMENT_STRATEGY,
                heading: "Enter the type of recruitment strategy you are looking for:",
                upper: 11,
                axis: Axis::Second,
            },
            Selection {
                catalog: &OCCUPATION,
                heading: OCCUPATION_HEADING,
                upper: 12,
                axis: Axis::First,
            },
        ],
    },
    Question {
        number: 2,
        title: "What is the proportion of job vacancies for people with more than 8 years of \
                experience quarterly, without adjusting for seasonality, in Canada?",
        selections: [
            Selection {
                catalog: &OCCUPATION,
                heading: OCCUPATION_HEADING,
                upper: 11,
                axis: Axis::First,
            },
            Selection {
                catalog: &EDUCATION_LEVEL,
                heading: "Enter the type of minimum education level required:",
                upper: 7,
                axis: Axis::Second,
            },
        ],
    },
    Question {
        number: 3,
        title: "What is the proportion of job vacancies, with no minimum level of education \
                required quarterly, without adjusting for seasonality, in Canada?",
        selections: [
            Selection {
                catalog: &OCCUPATION,
                heading: OCCUPATION_HEADING,
                upper: 11,
                axis: Axis::First,
            },
            Selection {
                catalog: &EDUCATION_LEVEL,
                heading: "Enter the type of minimum education level required:",
                upper: 7,
                axis: Axis::Second,
            },
        ],
    },
    Question {
        number: 4,
        title: "What is the proportion of job vacancies that last for less than 15 days on the \
                market before they are filled quarterly, without adjusting for seasonality, \
                in Canada?",
        selections: [
            Selection {
                catalog: &VACANCY_DURATION,
                heading: "Enter the number of the duration of job vacancy you are looking for:\n\
                          Your choices are:",
                upper: 8,
                axis: Axis::Second,
            },
            Selection {
                catalog: &OCCUPATION,
                heading: OCCUPATION_HEADING,
                upper: 11,
                axis: Axis::First,
            },
        ],
    },
];

impl Question {
    pub fn get(number: u8) -> Result<&'static Question> {
        QUESTIONS
            .iter()
            .find(|q| q.number == number)
            .ok_or(VacancyError::UnknownQuestion(number))
    }

    /// Turn codes, given in prompt order, into filter labels.
    pub fn resolve(&self, codes: &[i64]) -> Result<FilterCriteria> {
        if codes.len() != self.selections.len() {
            return Err(VacancyError::SelectionCount {
                question: self.number,
                expected: self.selections.len(),
                got: codes.len(),
            });
        }

        let mut axis1 = "";
        let mut axis2 = "";
        for (selection, &code) in self.selections.iter().zip(codes) {
            let label = selection.resolve(code)?;
            match selection.axis {
                Axis::First => axis1 = label,
                Axis::Second => axis2 = label,
            }
        }
        Ok(FilterCriteria::new(axis1, axis2))
    }

    /// Show each menu and read a code for it.
    pub fn prompt<R: BufRead, W: Write>(
        &self,
        prompt: &mut SelectionPrompt<R, W>,
    ) -> Result<FilterCriteria> {
        let mut codes = Vec::with_capacity(self.selections.len());
        for selection in &self.selections {
            prompt.show(&format!(
                "{}\n{}",
                selection.heading,
                selection.catalog.menu(selection.upper)
            ))?;
            codes.push(prompt.prompt_integer(1, i64::from(selection.upper))?);
        }
        self.resolve(&codes)
    }

    /// Catalog codes that exist but that this question's menus never offer.
    pub fn unreachable_codes(&self) -> Vec<(&'static str, u32, &'static str)> {
        self.selections
            .iter()
            .flat_map(|s| {
                s.catalog
                    .entries()
                    .iter()
                    .filter(move |e| e.code > s.upper)
                    .map(move |e| (s.catalog.name, e.code, e.label))
            })
            .collect()
    }
}

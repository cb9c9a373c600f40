use std::fmt::Write as _;

use crate::error::{Result, VacancyError};

// ---------------------------------------------------------------------------
// CatalogEntry / CategoryCatalog
// ---------------------------------------------------------------------------

/// One selectable category: the code the user types, the short text shown in
/// the menu, and the exact label the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: u32,
    pub menu: &'static str,
    pub label: &'static str,
}

/// Fixed code → label mapping for one classification axis.
#[derive(Debug)]
pub struct CategoryCatalog {
    pub name: &'static str,
    entries: &'static [CatalogEntry],
}

impl CategoryCatalog {
    const fn new(name: &'static str, entries: &'static [CatalogEntry]) -> Self {
        Self { name, entries }
    }

    /// Map a code to its dataset label. Only codes present in the catalog
    /// resolve; zero, negatives and anything past the last entry fail.
    pub fn resolve(&self, code: i64) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|e| i64::from(e.code) == code)
            .map(|e| e.label)
            .ok_or(VacancyError::UnknownCategory {
                catalog: self.name,
                code,
            })
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered menu lines for codes `1..=upper`.
    pub fn menu(&self, upper: u32) -> String {
        let mut out = String::new();
        for entry in self.entries.iter().filter(|e| e.code <= upper) {
            let _ = writeln!(out, "{}. {}", entry.code, entry.menu);
        }
        out
    }
}

const fn entry(code: u32, menu: &'static str, label: &'static str) -> CatalogEntry {
    CatalogEntry { code, menu, label }
}

// ---------------------------------------------------------------------------
// The four axes
// ---------------------------------------------------------------------------

static RECRUITMENT_STRATEGY_ENTRIES: [CatalogEntry; 11] = [
    entry(1, "All types", "All types"),
    entry(
        2,
        "Personal contacts, referrals, informal networks",
        "Personal contacts, referrals, informal networks",
    ),
    // The dataset quotes this field; the reader un-doubles the inner quotes.
    entry(
        3,
        "Posting a 'help-wanted' sign on the storefront of the location",
        "Posting a \"help-wanted\" sign on the storefront of the location",
    ),
    entry(4, "Company website", "Company website"),
    entry(5, "Online job boards", "Online job boards"),
    entry(6, "Social Media", "Social Media"),
    entry(
        7,
        "Job or recruitment fairs at schools, colleges or universities",
        "Job or recruitment fairs at schools, colleges or universities",
    ),
    entry(
        8,
        "Government employment centre or website",
        "Government employment centre or website",
    ),
    entry(
        9,
        "Professional networking, headhunters or employment agency",
        "Professional networking, headhunters or employment agency",
    ),
    entry(10, "Newspaper ads", "Newspaper ads"),
    entry(
        11,
        "Other recruitment strategies",
        "Other recruitment strategies",
    ),
];

pub static RECRUITMENT_STRATEGY: CategoryCatalog =
    CategoryCatalog::new("recruitment strategy", &RECRUITMENT_STRATEGY_ENTRIES);

static OCCUPATION_ENTRIES: [CatalogEntry; 12] = [
    entry(1, "All Occupations", "Total, all occupations"),
    entry(2, "Management occupations", "Management occupations [0]"),
    entry(
        3,
        "Business, finance and administration occupations",
        "Business, finance and administration occupations [1]",
    ),
    entry(
        4,
        "Natural and applied sciences and related occupations",
        "Natural and applied sciences and related occupations [2]",
    ),
    entry(5, "Health occupations", "Health occupations [3]"),
    entry(
        6,
        "Occupations in education, law and social, community and government services",
        "Occupations in education, law and social, community, and government services [4]",
    ),
    entry(
        7,
        "Occupations in art, culture, recreation and sport",
        "Occupations in art, culture, recreation, and sport [5]",
    ),
    entry(
        8,
        "Sales and service occupations",
        "Sales and service occupations [6]",
    ),
    entry(
        9,
        "Trades, transport and equipment operators and related occupations",
        "Trades, transport, and equipment operators and related occupations [7]",
    ),
    entry(
        10,
        "Natural resources, agriculture and related production occupations",
        "Natural resources, agriculture, and related production occupations [8]",
    ),
    entry(
        11,
        "Occupations in manufacturing and utilities",
        "Occupations in manufacturing and utilities [9]",
    ),
    entry(12, "Unclassified occupations", "Unclassified occupations"),
];

pub static OCCUPATION: CategoryCatalog =
    CategoryCatalog::new("occupation", &OCCUPATION_ENTRIES);

static EDUCATION_LEVEL_ENTRIES: [CatalogEntry; 7] = [
    entry(
        1,
        "Minimum level of education required, all levels",
        "Minimum level of education required, all levels",
    ),
    entry(
        2,
        "No minimum level of education required",
        "No minimum level of education required",
    ),
    entry(
        3,
        "High school diploma or equivalent",
        "High school diploma or equivalent",
    ),
    entry(
        4,
        "Non-university certificate or diploma",
        "Non-university certificate or diploma",
    ),
    entry(
        5,
        "University certificate or diploma below bachelor's level",
        "University certificate or diploma below bachelor's level",
    ),
    entry(6, "Bachelor's degree", "Bachelor's degree"),
    entry(
        7,
        "University certificate, diploma or degree above the bachelor's level",
        "University certificate, diploma or degree above the bachelor's level",
    ),
];

pub static EDUCATION_LEVEL: CategoryCatalog =
    CategoryCatalog::new("education level", &EDUCATION_LEVEL_ENTRIES);

static VACANCY_DURATION_ENTRIES: [CatalogEntry; 8] = [
    entry(
        1,
        "All job vacancies",
        "Duration of job vacancy, all durations",
    ),
    entry(2, "Less than 15 days", "Less than 15 days"),
    entry(3, "15 to 29 days", "15 to 29 days"),
    entry(4, "30 to 59 days", "30 to 59 days"),
    entry(5, "60 to 89 days", "60 to 89 days"),
    entry(6, "90 days or more", "90 days or more"),
    entry(7, "90 to 119 days", "90 to 119 days"),
    entry(8, "120 days or more", "120 days or more"),
];

pub static VACANCY_DURATION: CategoryCatalog =
    CategoryCatalog::new("vacancy duration", &VACANCY_DURATION_ENTRIES);

pub static ALL_CATALOGS: [&CategoryCatalog; 4] = [
    &RECRUITMENT_STRATEGY,
    &OCCUPATION,
    &EDUCATION_LEVEL,
    &VACANCY_DURATION,
];

//! Sidebar query form state
//!
//! Holds the raw text the user typed plus the cycling selections, and
//! turns them into a validated [`TrendQuery`] when the query is
//! triggered. Validation failures come back as [`Error`] values the
//! status line can show; nothing here touches the network.

use crate::error::Error;
use crate::models::{
    is_valid_age_code, parse_keywords, Device, Gender, KeywordGroup, TimeUnit, TrendQuery,
};
use chrono::{Local, Months, NaiveDate};

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StartDate,
    EndDate,
    TimeUnit,
    Device,
    Gender,
    Ages,
    Keywords,
    ClientId,
    ClientSecret,
}

impl Field {
    /// Focus order, top to bottom of the sidebar
    pub const ORDER: [Field; 9] = [
        Field::StartDate,
        Field::EndDate,
        Field::TimeUnit,
        Field::Device,
        Field::Gender,
        Field::Ages,
        Field::Keywords,
        Field::ClientId,
        Field::ClientSecret,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::StartDate => "Start date",
            Field::EndDate => "End date",
            Field::TimeUnit => "Time unit",
            Field::Device => "Device",
            Field::Gender => "Gender",
            Field::Ages => "Ages",
            Field::Keywords => "Keywords",
            Field::ClientId => "Client ID",
            Field::ClientSecret => "Client Secret",
        }
    }

    /// Choice fields cycle with Left/Right instead of accepting text
    pub fn is_choice(&self) -> bool {
        matches!(self, Field::TimeUnit | Field::Device | Field::Gender)
    }
}

/// Sidebar form state
#[derive(Debug)]
pub struct QueryForm {
    pub start_date: String,
    pub end_date: String,
    pub time_unit: TimeUnit,
    pub device: Option<Device>,
    pub gender: Option<Gender>,
    /// Comma-separated age bucket codes ("1".."11")
    pub ages: String,
    /// Comma-separated keywords, at most five used
    pub keywords: String,
    /// Session-only credential entry; never persisted
    pub client_id: String,
    pub client_secret: String,
    pub focus: Field,
}

impl Default for QueryForm {
    fn default() -> Self {
        // Mirror the dashboard's default range: the last month, weekly.
        let end = Local::now().date_naive();
        let start = end.checked_sub_months(Months::new(1)).unwrap_or(end);

        Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            time_unit: TimeUnit::Week,
            device: None,
            gender: None,
            ages: String::new(),
            keywords: String::from("아이폰, 갤럭시, 에어팟, 무선이어폰, 폴더블폰"),
            client_id: String::new(),
            client_secret: String::new(),
            focus: Field::Keywords,
        }
    }
}

impl QueryForm {
    /// Move focus to the next field in sidebar order
    pub fn focus_next(&mut self) {
        self.focus = Self::neighbor(self.focus, 1);
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = Self::neighbor(self.focus, Field::ORDER.len() - 1);
    }

    fn neighbor(current: Field, step: usize) -> Field {
        let idx = Field::ORDER.iter().position(|f| *f == current).unwrap_or(0);
        Field::ORDER[(idx + step) % Field::ORDER.len()]
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(value) = self.focused_text_mut() {
            value.push(c);
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_text_mut() {
            value.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::StartDate => Some(&mut self.start_date),
            Field::EndDate => Some(&mut self.end_date),
            Field::Ages => Some(&mut self.ages),
            Field::Keywords => Some(&mut self.keywords),
            Field::ClientId => Some(&mut self.client_id),
            Field::ClientSecret => Some(&mut self.client_secret),
            _ => None,
        }
    }

    /// Cycle the focused choice field (direction −1 or +1)
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            Field::TimeUnit => {
                let units = TimeUnit::all();
                let idx = units.iter().position(|u| *u == self.time_unit).unwrap_or(0);
                let next = if forward {
                    (idx + 1) % units.len()
                } else {
                    (idx + units.len() - 1) % units.len()
                };
                self.time_unit = units[next];
            }
            Field::Device => {
                self.device = cycle_option(self.device, &[Device::Pc, Device::Mobile], forward);
            }
            Field::Gender => {
                self.gender = cycle_option(self.gender, &[Gender::Male, Gender::Female], forward);
            }
            _ => {}
        }
    }

    /// Build a validated query from the current form values
    pub fn build_query(&self) -> Result<TrendQuery, Error> {
        let start_date = parse_date(&self.start_date, "start date")?;
        let end_date = parse_date(&self.end_date, "end date")?;

        let keywords = parse_keywords(&self.keywords);
        if keywords.is_empty() {
            return Err(Error::NoKeywords);
        }
        let groups = keywords.into_iter().map(KeywordGroup::single).collect();

        let ages = self.parse_ages()?;

        Ok(TrendQuery::new(start_date, end_date, self.time_unit, groups)?
            .with_device(self.device)
            .with_gender(self.gender)
            .with_ages(ages))
    }

    fn parse_ages(&self) -> Result<Vec<String>, Error> {
        let codes: Vec<String> = self
            .ages
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        for code in &codes {
            if !is_valid_age_code(code) {
                return Err(Error::input(format!(
                    "unknown age code '{code}' (valid codes: 1-11)"
                )));
            }
        }
        Ok(codes)
    }
}

fn parse_date(value: &str, label: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::input(format!("{label} must be YYYY-MM-DD, got '{value}'")))
}

fn cycle_option<T: Copy + PartialEq>(current: Option<T>, values: &[T], forward: bool) -> Option<T> {
    // Cycle through None -> values[0] -> ... -> values[n-1] -> None
    let states: Vec<Option<T>> = std::iter::once(None)
        .chain(values.iter().copied().map(Some))
        .collect();
    let idx = states.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % states.len()
    } else {
        (idx + states.len() - 1) % states.len()
    };
    states[next]
}

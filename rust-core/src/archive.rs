//! Meteorological archive retrieval request
//!
//! Typed form of the single request sent to the reanalysis archive's web
//! client. Only the request body is built and checked here; the transfer
//! itself is done by the archive's own client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("Field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date range '{0}' ends before it starts")]
    ReversedDateRange(String),

    #[error("Invalid grid '{0}' (expected two positive increments such as 0.75/0.75)")]
    InvalidGrid(String),

    #[error("Invalid list '{value}' in field '{field}'")]
    InvalidList { field: &'static str, value: String },

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

/// Archive retrieval request, fields in the order the web client expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveRequest {
    pub stream: String,
    pub levtype: String,
    pub levelist: String,
    pub param: String,
    pub dataset: String,
    pub step: String,
    pub grid: String,
    pub time: String,
    pub date: String,
    #[serde(rename = "type")]
    pub analysis_type: String,
    pub class: String,
    pub format: String,
    pub target: String,
}

impl ArchiveRequest {
    /// Interim reanalysis on all pressure levels for 2005-08-29 00 UTC:
    /// geopotential, temperature and both wind components as NetCDF
    pub fn interim_pressure_levels() -> Self {
        Self {
            stream: "oper".into(),
            levtype: "pl".into(),
            levelist: "1000/to/1".into(),
            param: "129/130/131/132".into(),
            dataset: "interim".into(),
            step: "0".into(),
            grid: "0.75/0.75".into(),
            time: "00".into(),
            date: "2005-08-29/to/2005-08-29".into(),
            analysis_type: "an".into(),
            class: "ei".into(),
            format: "netcdf".into(),
            target: "test.nc".into(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 13] {
        [
            ("stream", self.stream.as_str()),
            ("levtype", self.levtype.as_str()),
            ("levelist", self.levelist.as_str()),
            ("param", self.param.as_str()),
            ("dataset", self.dataset.as_str()),
            ("step", self.step.as_str()),
            ("grid", self.grid.as_str()),
            ("time", self.time.as_str()),
            ("date", self.date.as_str()),
            ("type", self.analysis_type.as_str()),
            ("class", self.class.as_str()),
            ("format", self.format.as_str()),
            ("target", self.target.as_str()),
        ]
    }

    /// Check every field for shape errors the archive would reject
    pub fn validate(&self) -> Result<(), ArchiveError> {
        for (name, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(ArchiveError::EmptyField(name));
            }
        }

        validate_date_range(&self.date)?;
        validate_grid(&self.grid)?;
        validate_codes("param", self.param.as_str())?;
        validate_levels(&self.levelist)?;
        Ok(())
    }

    /// Request body as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ArchiveError> {
        serde_json::to_string_pretty(self).map_err(|e| ArchiveError::Encode(e.to_string()))
    }
}

impl Default for ArchiveRequest {
    fn default() -> Self {
        Self::interim_pressure_levels()
    }
}

/// Calendar date as (year, month, day)
fn parse_date(text: &str) -> Result<(u32, u32, u32), ArchiveError> {
    let invalid = || ArchiveError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }

    let year: u32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return Err(invalid()),
    };
    if day == 0 || day > days_in_month {
        return Err(invalid());
    }

    Ok((year, month, day))
}

/// `YYYY-MM-DD` or `YYYY-MM-DD/to/YYYY-MM-DD`
fn validate_date_range(text: &str) -> Result<(), ArchiveError> {
    match text.split_once("/to/") {
        Some((start, end)) => {
            if parse_date(start)? > parse_date(end)? {
                return Err(ArchiveError::ReversedDateRange(text.to_string()));
            }
            Ok(())
        }
        None => parse_date(text).map(|_| ()),
    }
}

fn validate_grid(text: &str) -> Result<(), ArchiveError> {
    let invalid = || ArchiveError::InvalidGrid(text.to_string());

    let (lat, lon) = text.split_once('/').ok_or_else(invalid)?;
    for increment in [lat, lon] {
        let value: f64 = increment.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid());
        }
    }
    Ok(())
}

/// `/`-separated integer codes
fn validate_codes(field: &'static str, text: &str) -> Result<(), ArchiveError> {
    let valid = text.split('/').all(|code| code.parse::<u32>().is_ok());
    if !valid {
        return Err(ArchiveError::InvalidList {
            field,
            value: text.to_string(),
        });
    }
    Ok(())
}

/// Integer levels, either listed or as `a/to/b`
fn validate_levels(text: &str) -> Result<(), ArchiveError> {
    match text.split_once("/to/") {
        Some((from, to)) if from.parse::<u32>().is_ok() && to.parse::<u32>().is_ok() => Ok(()),
        Some(_) => Err(ArchiveError::InvalidList {
            field: "levelist",
            value: text.to_string(),
        }),
        None => validate_codes("levelist", text),
    }
}

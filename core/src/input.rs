/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("All fields are required")]
    MissingFields(Vec<&'static str>),
    #[error("Invalid salary range `{0}`, expected <min>-<max>")]
    InvalidSalaryRange(String),
    #[error("Salary range `{0}` must have both a lower and an upper bound")]
    IncompleteSalaryRange(String),
    #[error("Failed to read secret file {path}")]
    SecretFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Inclusive salary bounds; a `None` side is open-ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> Result<String, InputError> {
    let s = std::fs::read_to_string(f).map_err(|source| InputError::SecretFile {
        path: f.to_string(),
        source,
    })?;

    Ok(s.trim().replace(char::from(25), ""))
}

/// Fails with the names of every field that is absent or blank.
pub fn require_fields(fields: &[(&'static str, Option<&str>)]) -> Result<(), InputError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InputError::MissingFields(missing))
    }
}

/// Parses `<min>-<max>`. With `strict` unset a missing bound
/// (`"50000"`, `"50000-"`, `"-80000"`) leaves that side open.
pub fn parse_salary_range(s: &str, strict: bool) -> Result<SalaryRange, InputError> {
    let invalid = || InputError::InvalidSalaryRange(s.to_string());

    let parts = s
        .split(SALARY_RANGE_SEPARATOR)
        .map(str::trim)
        .collect::<Vec<&str>>();

    if parts.len() > 2 {
        return Err(invalid());
    }

    let parse_bound = |part: &str| -> Result<Option<i64>, InputError> {
        if part.is_empty() {
            Ok(None)
        } else {
            part.parse::<i64>().map(Some).map_err(|_| invalid())
        }
    };

    let min = parse_bound(parts[0])?;
    let max = match parts.get(1) {
        Some(part) => parse_bound(part)?,
        None => None,
    };

    match (min, max) {
        (None, None) => Err(invalid()),
        (Some(min), Some(max)) if min > max => Err(invalid()),
        (Some(_), Some(_)) => Ok(SalaryRange { min, max }),
        _ if strict => Err(InputError::IncompleteSalaryRange(s.to_string())),
        _ => Ok(SalaryRange { min, max }),
    }
}

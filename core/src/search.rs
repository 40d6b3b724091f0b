/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Job listing search.
//!
//! Without any filter the first [`DEFAULT_JOB_LIMIT`] jobs are returned in
//! storage order. Otherwise every present filter is AND-ed into a single
//! query ordered newest first: `keyword` matches title OR description,
//! `location` and `jobtype` match their column, all as case-insensitive
//! substrings, and `salary` restricts to an inclusive range.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SelectTwo,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::consts::DEFAULT_JOB_LIMIT;
use super::input::{InputError, parse_salary_range};
use super::types::*;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilter {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub jobtype: Option<String>,
    pub salary: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl JobFilter {
    pub fn keyword(&self) -> Option<&str> {
        present(&self.keyword)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn jobtype(&self) -> Option<&str> {
        present(&self.jobtype)
    }

    pub fn salary(&self) -> Option<&str> {
        present(&self.salary)
    }

    pub fn is_empty(&self) -> bool {
        self.keyword().is_none()
            && self.location().is_none()
            && self.jobtype().is_none()
            && self.salary().is_none()
    }
}

fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_insensitive(column: CJob, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));

    Expr::expr(Func::lower(Expr::col((entity::job::Entity, column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

pub fn build_condition(filter: &JobFilter, strict_salary: bool) -> Result<Condition, InputError> {
    let mut condition = Condition::all();

    if let Some(keyword) = filter.keyword() {
        condition = condition.add(
            Condition::any()
                .add(contains_insensitive(CJob::Title, keyword))
                .add(contains_insensitive(CJob::Description, keyword)),
        );
    }

    if let Some(location) = filter.location() {
        condition = condition.add(contains_insensitive(CJob::Location, location));
    }

    if let Some(jobtype) = filter.jobtype() {
        condition = condition.add(contains_insensitive(CJob::JobType, jobtype));
    }

    if let Some(salary) = filter.salary() {
        let range = parse_salary_range(salary, strict_salary)?;

        if let Some(min) = range.min {
            condition = condition.add(CJob::Salary.gte(min));
        }

        if let Some(max) = range.max {
            condition = condition.add(CJob::Salary.lte(max));
        }
    }

    Ok(condition)
}

pub fn job_search_query(
    filter: &JobFilter,
    strict_salary: bool,
) -> Result<SelectTwo<EJob, ECompany>, InputError> {
    let query = EJob::find().find_also_related(entity::company::Entity);

    if filter.is_empty() {
        return Ok(query.offset(0).limit(DEFAULT_JOB_LIMIT));
    }

    Ok(query
        .filter(build_condition(filter, strict_salary)?)
        .order_by_desc(CJob::CreatedAt))
}

pub async fn find_jobs<C: ConnectionTrait>(
    db: &C,
    filter: &JobFilter,
    strict_salary: bool,
) -> Result<Vec<(MJob, Option<MCompany>)>, SearchError> {
    let query = job_search_query(filter, strict_salary)?;

    tracing::debug!(?filter, "Searching jobs");

    Ok(query.all(db).await?)
}

/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use std::collections::HashMap;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.db_max_connections)
        .min_connections(cli.db_min_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connected and migrated");

    Ok(db)
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

pub async fn get_job_with_company<C: ConnectionTrait>(
    db: &C,
    job_id: Uuid,
) -> Result<Option<(MJob, Option<MCompany>)>, DbErr> {
    EJob::find_by_id(job_id)
        .find_also_related(entity::company::Entity)
        .one(db)
        .await
}

pub async fn get_jobs_by_owner<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<(MJob, Option<MCompany>)>, DbErr> {
    EJob::find()
        .filter(CJob::UserId.eq(user_id))
        .find_also_related(entity::company::Entity)
        .order_by_desc(CJob::CreatedAt)
        .all(db)
        .await
}

/// Loads the companies of `jobs` in one query and pairs them back up.
pub async fn attach_companies<C: ConnectionTrait>(
    db: &C,
    jobs: Vec<MJob>,
) -> Result<Vec<(MJob, Option<MCompany>)>, DbErr> {
    let company_ids = jobs.iter().map(|j| j.company_id).collect::<Vec<Uuid>>();

    let companies = if company_ids.is_empty() {
        HashMap::new()
    } else {
        ECompany::find()
            .filter(CCompany::Id.is_in(company_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect::<HashMap<Uuid, MCompany>>()
    };

    Ok(jobs
        .into_iter()
        .map(|j| {
            let company = companies.get(&j.company_id).cloned();
            (j, company)
        })
        .collect())
}

/// Resolves each row's job to `(job, company)`, keeping the row order.
async fn attach_jobs<C: ConnectionTrait, T>(
    db: &C,
    rows: Vec<(T, Option<MJob>)>,
    job_id: fn(&T) -> Uuid,
) -> Result<Vec<(T, Option<(MJob, Option<MCompany>)>)>, DbErr> {
    let (rows, jobs): (Vec<T>, Vec<Option<MJob>>) = rows.into_iter().unzip();
    let jobs = attach_companies(db, jobs.into_iter().flatten().collect())
        .await?
        .into_iter()
        .map(|(j, c)| (j.id, (j, c)))
        .collect::<HashMap<Uuid, (MJob, Option<MCompany>)>>();

    Ok(rows
        .into_iter()
        .map(|row| {
            let job = jobs.get(&job_id(&row)).cloned();
            (row, job)
        })
        .collect())
}

pub async fn get_favourites_with_jobs<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<(MFavourite, Option<(MJob, Option<MCompany>)>)>, DbErr> {
    let favourites = EFavourite::find()
        .filter(CFavourite::UserId.eq(user_id))
        .find_also_related(entity::job::Entity)
        .order_by_desc(CFavourite::CreatedAt)
        .all(db)
        .await?;

    attach_jobs(db, favourites, |f| f.job_id).await
}

pub async fn get_applications_with_jobs<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<(MApplication, Option<(MJob, Option<MCompany>)>)>, DbErr> {
    let applications = EApplication::find()
        .filter(CApplication::ApplicantId.eq(user_id))
        .find_also_related(entity::job::Entity)
        .order_by_desc(CApplication::CreatedAt)
        .all(db)
        .await?;

    attach_jobs(db, applications, |a| a.job_id).await
}

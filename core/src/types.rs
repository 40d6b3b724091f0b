/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::MAX_JWT_EXPIRY_HOURS;
use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "JobBoard", display_name = "JobBoard", bin_name = "jobboard-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "JOBBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "JOBBOARD_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "JOBBOARD_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "JOBBOARD_SERVE_URL",
        default_value = "http://127.0.0.1:5173"
    )]
    pub serve_url: String,
    #[arg(long, env = "JOBBOARD_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "JOBBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "JOBBOARD_DB_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "20")]
    pub db_max_connections: u32,
    #[arg(long, env = "JOBBOARD_DB_MIN_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "2")]
    pub db_min_connections: u32,
    #[arg(long, env = "JOBBOARD_JWT_SECRET")]
    pub jwt_secret: Option<String>,
    #[arg(long, env = "JOBBOARD_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(long, env = "JOBBOARD_JWT_EXPIRY_HOURS", value_parser = clap::value_parser!(i64).range(1..=MAX_JWT_EXPIRY_HOURS), default_value = "24")]
    pub jwt_expiry_hours: i64,
    #[arg(long, env = "JOBBOARD_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    /// Reject salary filters missing a bound instead of treating them as open-ended.
    #[arg(long, env = "JOBBOARD_STRICT_SALARY_RANGE", default_value = "false")]
    pub strict_salary_range: bool,
    #[arg(long, env = "JOBBOARD_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "JOBBOARD_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EApplication = application::Entity;
pub type ECompany = company::Entity;
pub type EFavourite = favourite::Entity;
pub type EJob = job::Entity;
pub type EUser = user::Entity;

pub type MApplication = application::Model;
pub type MCompany = company::Model;
pub type MFavourite = favourite::Model;
pub type MJob = job::Model;
pub type MUser = user::Model;

pub type AApplication = application::ActiveModel;
pub type ACompany = company::ActiveModel;
pub type AFavourite = favourite::ActiveModel;
pub type AJob = job::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CApplication = application::Column;
pub type CCompany = company::Column;
pub type CFavourite = favourite::Column;
pub type CJob = job::Column;
pub type CUser = user::Column;

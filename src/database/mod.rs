pub mod query;

use anyhow::Context;
use diesel::{
    prelude::*,
    r2d2::ConnectionManager,
    sql_types::{Datetime, Text},
    MysqlConnection,
};
use r2d2::PooledConnection;

use crate::{
    config::SchemaMapping, export::window::DateWindow, models::appointments::AppointmentRow,
    protocol::ExportError, DbPool,
};

use self::query::AppointmentQuery;

/// Read side of the export pipeline. Called from a blocking thread.
pub trait AppointmentSource: Send + Sync {
    fn fetch(&self, window: &DateWindow) -> Result<Vec<AppointmentRow>, ExportError>;
}

pub fn get_db_conn(
    pool: &DbPool,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}

pub struct MysqlSource {
    pool: DbPool,
    query: AppointmentQuery,
    reference_doctype: String,
}

impl MysqlSource {
    pub fn new(pool: DbPool, schema: &SchemaMapping) -> Self {
        Self {
            pool,
            query: AppointmentQuery::new(schema),
            reference_doctype: schema.reference_doctype.clone(),
        }
    }
}

impl AppointmentSource for MysqlSource {
    fn fetch(&self, window: &DateWindow) -> Result<Vec<AppointmentRow>, ExportError> {
        let (from, until) = window.bounds();

        // released when `conn` drops, on every path
        let conn = get_db_conn(&self.pool)?;
        let rows = diesel::sql_query(self.query.sql(window.order))
            .bind::<Text, _>(self.reference_doctype.clone())
            .bind::<Datetime, _>(from)
            .bind::<Datetime, _>(until)
            .load::<AppointmentRow>(&conn)
            .context("DB error")?;

        Ok(rows)
    }
}

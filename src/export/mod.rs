mod requests;
mod responses;
mod utils;
pub mod window;

use crate::{database::AppointmentSource, protocol::ExportError, utils::parse_date_str};
use actix_web::{error::BlockingError, get, web, HttpResponse};
use anyhow::anyhow;
use std::sync::Arc;

use self::{
    requests::CheckAppointmentRequest,
    utils::render_csv,
    window::{Clock, WindowKind},
};

/// Shared, read-only state handed to every export handler.
#[derive(Clone)]
pub struct ExportState {
    pub source: Arc<dyn AppointmentSource>,
    pub clock: Clock,
    pub file_name: String,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(export_upcoming_appointments)
        .service(this_week_appointments)
        .service(last_7_days_appointment)
        .service(check_appointment);
}

crate::export_funcs! {
    (export_upcoming_appointments, "/export-upcoming-appointments", WindowKind::RollingForward),
    (this_week_appointments, "/this-week-appointments", WindowKind::WeekRemainder),
    (last_7_days_appointment, "/last-7-days-appointment", WindowKind::TrailingBack),
}

#[get("/check-appointment")]
async fn check_appointment(
    state: web::Data<ExportState>,
    info: web::Query<CheckAppointmentRequest>,
) -> Result<HttpResponse, ExportError> {
    let info = info.into_inner();
    let to_date = parse_date_str(&info.to_date).ok_or_else(|| {
        ExportError::InvalidRange(format!(
            "to_date không hợp lệ ({}), định dạng đúng là YYYY-MM-DD",
            info.to_date
        ))
    })?;

    export_impl(state, WindowKind::ExplicitEnd(to_date)).await
}

async fn export_impl(
    state: web::Data<ExportState>,
    kind: WindowKind,
) -> Result<HttpResponse, ExportError> {
    let window = kind.resolve(state.clock.today())?;
    log::info!(
        "export {:?}: {} .. {} (end {}), {:?}",
        kind,
        window.start,
        window.end,
        if window.end_inclusive { "inclusive" } else { "exclusive" },
        window.order,
    );

    let source = state.source.clone();
    let rows = web::block(move || source.fetch(&window))
        .await
        .map_err(|err| match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => ExportError::DataSource(anyhow!("export query canceled")),
        })?;
    log::debug!("export {:?}: {} rows", kind, rows.len());

    match render_csv(&rows)? {
        Some(body) => Ok(responses::csv_attachment(&state.file_name, body)),
        None => Ok(responses::no_data(kind.no_data_message())),
    }
}

use serde::Deserialize;

#[derive(Deserialize)]
pub struct CheckAppointmentRequest {
    pub to_date: String,
}

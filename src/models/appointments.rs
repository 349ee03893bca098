use chrono::NaiveDate;
use diesel::sql_types::{Date, Nullable, Text};
use serde::Serialize;

/// One exported line. Field order is the CSV column order.
#[derive(QueryableByName, Serialize, Clone, Debug, Default, PartialEq)]
pub struct AppointmentRow {
    #[sql_type = "Nullable<Date>"]
    pub appointment_date: Option<NaiveDate>,
    #[sql_type = "Nullable<Text>"]
    pub full_name: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub gender: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub customer_phone: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub customer_email: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub customer_website: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub customer_fax: Option<String>,
    #[sql_type = "Nullable<Text>"]
    pub title: Option<String>,
}

pub const APPOINTMENT_COLUMNS: &[&str] = &[
    "appointment_date",
    "full_name",
    "gender",
    "customer_phone",
    "customer_email",
    "customer_website",
    "customer_fax",
    "title",
];

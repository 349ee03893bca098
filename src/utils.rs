#[macro_export]
macro_rules! export_funcs {
    ( $( ( $func_name:ident, $url:literal, $kind:expr ) ),+ $(,)? ) => {
        $(
            #[get($url)]
            async fn $func_name(
                state: web::Data<ExportState>,
            ) -> Result<HttpResponse, ExportError> {
                export_impl(state, $kind).await
            }
        )+
    };
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms(0, 0, 0))
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref().trim(), "%Y-%m-%d").ok()
}

pub fn quote_ident<S: AsRef<str>>(ident: S) -> String {
    format!("`{}`", ident.as_ref())
}

use crate::{
    config::SchemaMapping, export::window::SortOrder,
    models::appointments::APPOINTMENT_COLUMNS, utils::quote_ident,
};

/// Prepared text of the appointment export query, one per sort order.
///
/// Binds, in order: reference doctype (`Text`), window start and window end
/// (`Datetime`, half-open).
pub struct AppointmentQuery {
    ascending: String,
    descending: String,
}

impl AppointmentQuery {
    pub fn new(schema: &SchemaMapping) -> Self {
        Self {
            ascending: build_sql(schema, "ASC"),
            descending: build_sql(schema, "DESC"),
        }
    }

    pub fn sql(&self, order: SortOrder) -> &str {
        match order {
            SortOrder::Ascending => &self.ascending,
            SortOrder::Descending => &self.descending,
        }
    }
}

fn build_sql(schema: &SchemaMapping, direction: &str) -> String {
    let starts_on = format!("e.{}", quote_ident(&schema.event_start_column));
    let select_exprs = [
        format!("DATE({})", starts_on),
        "CONCAT_WS(' ', l.`first_name`, l.`middle_name`, l.`last_name`)".to_string(),
        "l.`gender`".to_string(),
        "l.`phone`".to_string(),
        "l.`email_id`".to_string(),
        "l.`website`".to_string(),
        "l.`fax`".to_string(),
        "l.`job_title`".to_string(),
    ];
    let select_list = select_exprs
        .iter()
        .zip(APPOINTMENT_COLUMNS.iter())
        .map(|(expr, alias)| format!("    {} AS {}", expr, alias))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "SELECT\n{select}\n\
         FROM {event} e\n\
         LEFT JOIN {participant} p ON e.`name` = p.`parent`\n    AND p.`reference_doctype` = ?\n\
         LEFT JOIN {opportunity} o ON p.`reference_docname` = o.`name`\n\
         LEFT JOIN {lead} l ON o.`party_name` = l.`name`\n\
         WHERE {starts_on} >= ?\n  AND {starts_on} < ?\n\
         ORDER BY {starts_on} {direction}",
        select = select_list,
        event = quote_ident(&schema.event_table),
        participant = quote_ident(&schema.participant_table),
        opportunity = quote_ident(&schema.opportunity_table),
        lead = quote_ident(&schema.lead_table),
        starts_on = starts_on,
        direction = direction,
    )
}

use serde::Serialize;

use crate::protocol::ExportError;

/// Renders `rows` as CSV. The header is written from the first row's field
/// names; `None` means there was nothing to export.
pub fn render_csv<R: Serialize>(rows: &[R]) -> Result<Option<Vec<u8>>, ExportError> {
    if rows.is_empty() {
        return Ok(None);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let body = writer
        .into_inner()
        .map_err(|err| ExportError::Render(err.into_error().into()))?;

    Ok(Some(body))
}

pub fn attachment_header(file_name: &str) -> String {
    format!("attachment; filename={}", file_name)
}

use std::collections::HashMap;

/// One data line keyed by the lower-cased header names.
pub type Row = HashMap<String, String>;

/// Parses comma-delimited text into rows keyed by the header line.
///
/// The format is deliberately plain: fields split on every comma (no
/// quoted-comma escaping), double quotes stripped after trimming,
/// blank lines skipped. Rows shorter than the header keep the missing
/// keys mapped to the empty string; extra fields are dropped.
pub fn parse_delimited(text: &str) -> Vec<Row> {
    let mut lines = text.lines();

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line
            .split(',')
            .map(|header| clean_field(header).to_lowercase())
            .collect(),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<String> = line.split(',').map(clean_field).collect();

            headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    (header.clone(), values.get(index).cloned().unwrap_or_default())
                })
                .collect()
        })
        .collect()
}

fn clean_field(field: &str) -> String {
    field.trim().replace('"', "")
}

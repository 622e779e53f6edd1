//! Permissive parser for the spreadsheet CSV export.
//!
//! Quoted fields may contain commas. Doubled quotes inside a quoted field
//! (the `""` escaping convention) are not handled; the published sheets never
//! use them, so the limitation is accepted rather than papered over.

use std::collections::HashMap;

/// Split raw CSV text into rows of fields.
///
/// Lines are split on `\n` (a trailing `\r` is tolerated) and blank lines are
/// discarded. Within a line a `quoted` flag is toggled by every `"`; commas
/// split fields only while unquoted. After splitting, one leading and one
/// trailing quote are stripped from each field, then surrounding whitespace
/// is trimmed.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                current.push(ch);
            }
            ',' if !quoted => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| clean_field(&f)).collect()
}

fn clean_field(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.trim().to_string()
}

/// Parse CSV text into row maps keyed by the header row's column names.
///
/// The first row's trimmed fields become the column names. Data rows map
/// positionally to those names; rows with fewer fields than there are headers
/// are dropped entirely (partial rows are rejected, not padded), and fields
/// beyond the header count are ignored.
pub fn parse_records(text: &str) -> Vec<HashMap<String, String>> {
    let mut rows = parse(text).into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row,
        None => return Vec::new(),
    };

    rows.filter(|row| row.len() >= headers.len())
        .map(|row| {
            headers
                .iter()
                .cloned()
                .zip(row.into_iter())
                .collect::<HashMap<String, String>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_rows() {
        let rows = parse("a,b,c\n1,2,3");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn keeps_commas_inside_quoted_fields() {
        let rows = parse("name,description\n\"Shoe, Pro\",\"Great, fast\"");
        assert_eq!(rows[1], vec!["Shoe, Pro", "Great, fast"]);
    }

    #[test]
    fn strips_one_quote_pair_then_trims() {
        let rows = parse("\" padded \",plain");
        assert_eq!(rows[0], vec!["padded", "plain"]);
    }

    #[test]
    fn skips_blank_lines_and_crlf() {
        let rows = parse("a,b\r\n\r\n1,2\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn records_drop_rows_shorter_than_header() {
        let records = parse_records("a,b\n1,2\n3");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["a"], "1");
        assert_eq!(records[0]["b"], "2");
    }

    #[test]
    fn records_ignore_extra_fields() {
        let records = parse_records("a,b\n1,2,3");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn empty_input_gives_no_records() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("\n\n").is_empty());
    }
}

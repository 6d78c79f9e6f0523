use axum::http::StatusCode;
use rust_decimal::Decimal;
use standard_error::{StandardError, Status};

use crate::prelude::Result;

/// A value destined for a positional bind slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    Numeric(Decimal),
}

#[derive(Debug, PartialEq)]
pub struct UpdateFragment {
    pub set_clause: String,
    pub values: Vec<SqlParam>,
}

#[derive(Debug, PartialEq)]
pub struct WhereFragment {
    pub conditions: String,
    pub values: Vec<SqlParam>,
}

/// Builds the SET clause of a partial UPDATE from ordered `(field, value)`
/// pairs: `"column"=$1, "column"=$2, …` with placeholders numbered by input
/// position, plus the values in the same order. `columns` renames fields to
/// their storage column names; fields absent from it keep their name.
///
/// Fails with a 400-coded error when `data` is empty, since an empty SET
/// clause is invalid SQL.
pub fn partial_update(
    data: Vec<(&str, SqlParam)>,
    columns: &[(&str, &str)],
) -> Result<UpdateFragment> {
    if data.is_empty() {
        return Err(StandardError::new("ERR-SQL-001: no data").code(StatusCode::BAD_REQUEST));
    }
    let mut assignments = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());
    for (idx, (field, value)) in data.into_iter().enumerate() {
        let column = columns
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
            .unwrap_or(field);
        assignments.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }
    Ok(UpdateFragment {
        set_clause: assignments.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_renames_columns() {
        let data = vec![
            ("firstName", SqlParam::Text("value1".into())),
            ("lastName", SqlParam::Text("value2".into())),
        ];
        let columns = [("firstName", "first_name"), ("lastName", "last_name")];
        let fragment = partial_update(data, &columns).unwrap();
        assert_eq!(fragment.set_clause, r#""first_name"=$1, "last_name"=$2"#);
        assert_eq!(
            fragment.values,
            vec![
                SqlParam::Text("value1".into()),
                SqlParam::Text("value2".into())
            ]
        );
    }

    #[test]
    fn test_partial_update_keeps_unmapped_names_and_order() {
        let data = vec![
            ("title", SqlParam::Text("New".into())),
            ("salary", SqlParam::Int(999)),
            ("equity", SqlParam::Numeric(Decimal::new(5, 2))),
        ];
        let fragment = partial_update(data, &[("companyHandle", "company_handle")]).unwrap();
        assert_eq!(fragment.set_clause, r#""title"=$1, "salary"=$2, "equity"=$3"#);
        assert_eq!(fragment.values.len(), 3);
        assert_eq!(fragment.values[1], SqlParam::Int(999));
    }

    #[test]
    fn test_partial_update_rejects_empty_data() {
        assert!(partial_update(Vec::new(), &[]).is_err());
    }
}

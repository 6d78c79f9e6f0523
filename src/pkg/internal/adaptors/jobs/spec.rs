use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pkg::internal::sql::{SqlParam, WhereFragment};

#[derive(Serialize, Deserialize, FromRow, Debug, PartialEq)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    #[serde(rename = "companyHandle")]
    pub company_handle: String,
}

/// Query-string filters for the list endpoint.
///
/// `hasEquity` arrives as a string and only the exact value `"true"` switches
/// the equity condition on; anything else is ignored. `minSalary` is numeric,
/// not integral: fractional thresholds are accepted.
#[derive(Deserialize, Debug, Default)]
pub struct JobFilter {
    pub title: Option<String>,
    #[serde(rename = "minSalary")]
    pub min_salary: Option<Decimal>,
    #[serde(rename = "hasEquity")]
    pub has_equity: Option<String>,
}

impl JobFilter {
    pub fn wants_equity(&self) -> bool {
        self.has_equity.as_deref() == Some("true")
    }

    /// Whether any signal key activates the filtered list query.
    pub fn is_active(&self) -> bool {
        self.title.is_some() || self.min_salary.is_some() || self.wants_equity()
    }

    /// Conjunctive WHERE-clause body with conditions in {minSalary,
    /// hasEquity, title} order, placeholders numbered only for the
    /// parameterized ones. `None` when nothing filters, so callers never
    /// substitute an empty string after a bare `WHERE`.
    pub fn where_fragment(&self) -> Option<WhereFragment> {
        let mut conditions = Vec::new();
        let mut values = Vec::new();
        if let Some(min_salary) = self.min_salary {
            values.push(SqlParam::Numeric(min_salary));
            conditions.push(format!("salary >= ${}", values.len()));
        }
        if self.wants_equity() {
            conditions.push("equity > 0".to_string());
        }
        if let Some(title) = &self.title {
            values.push(SqlParam::Text(format!("%{}%", title)));
            conditions.push(format!("LOWER(title) LIKE LOWER(${})", values.len()));
        }
        if conditions.is_empty() {
            return None;
        }
        Some(WhereFragment {
            conditions: conditions.join(" AND "),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_salary_alone() {
        let filter = JobFilter {
            min_salary: Some(Decimal::from(100000)),
            ..Default::default()
        };
        let fragment = filter.where_fragment().unwrap();
        assert_eq!(fragment.conditions, "salary >= $1");
        assert_eq!(fragment.values, vec![SqlParam::Numeric(Decimal::from(100000))]);
    }

    #[test]
    fn test_min_salary_accepts_fractional_thresholds() {
        let filter: JobFilter =
            serde_json::from_value(serde_json::json!({ "minSalary": "99999.5" })).unwrap();
        let fragment = filter.where_fragment().unwrap();
        assert_eq!(
            fragment.values,
            vec![SqlParam::Numeric(Decimal::new(999995, 1))]
        );
    }

    #[test]
    fn test_has_equity_takes_no_parameter() {
        let filter = JobFilter {
            has_equity: Some("true".into()),
            ..Default::default()
        };
        let fragment = filter.where_fragment().unwrap();
        assert_eq!(fragment.conditions, "equity > 0");
        assert!(fragment.values.is_empty());
    }

    #[test]
    fn test_has_equity_only_matches_literal_true() {
        for value in ["false", "True", "1", "yes"] {
            let filter = JobFilter {
                has_equity: Some(value.into()),
                ..Default::default()
            };
            assert!(filter.where_fragment().is_none());
            assert!(!filter.is_active());
        }
    }

    #[test]
    fn test_title_wraps_wildcards() {
        let filter = JobFilter {
            title: Some("net".into()),
            ..Default::default()
        };
        let fragment = filter.where_fragment().unwrap();
        assert_eq!(fragment.conditions, "LOWER(title) LIKE LOWER($1)");
        assert_eq!(fragment.values, vec![SqlParam::Text("%net%".into())]);
    }

    #[test]
    fn test_combined_filters_are_conjunctive() {
        let filter = JobFilter {
            title: Some("j".into()),
            min_salary: Some(Decimal::from(125000)),
            has_equity: Some("true".into()),
        };
        let fragment = filter.where_fragment().unwrap();
        assert_eq!(
            fragment.conditions,
            "salary >= $1 AND equity > 0 AND LOWER(title) LIKE LOWER($2)"
        );
        assert_eq!(
            fragment.values,
            vec![
                SqlParam::Numeric(Decimal::from(125000)),
                SqlParam::Text("%j%".into())
            ]
        );
    }

    #[test]
    fn test_no_recognized_keys_yields_no_fragment() {
        let filter = JobFilter::default();
        assert!(filter.where_fragment().is_none());
        assert!(!filter.is_active());
    }
}

//! Property search filters
//!
//! Search options become a list of predicates, each tagged with the clause
//! it belongs to. Only options that are set (and non-empty, non-zero) yield
//! a predicate. Rendering goes through `sqlx::QueryBuilder`, which numbers
//! placeholders as values are bound, so `$1..$n` never has gaps.

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

use crate::models::property::PROPERTY_COLUMNS;

/// Optional filters for property search.
///
/// Prices are in whole currency units; they are compared against
/// `cost_per_night` in cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Case-insensitive substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

/// Where a predicate is applied relative to `GROUP BY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Where,
    /// After aggregation; required for conditions on `AVG(..)`.
    Having,
}

/// Value bound to a predicate's placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i64),
    Float(f64),
}

/// A single search condition: SQL fragment ending in an operator, plus its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub clause: Clause,
    pub fragment: &'static str,
    pub value: BindValue,
}

impl Predicate {
    fn filter(fragment: &'static str, value: BindValue) -> Self {
        Self {
            clause: Clause::Where,
            fragment,
            value,
        }
    }

    fn having(fragment: &'static str, value: BindValue) -> Self {
        Self {
            clause: Clause::Having,
            fragment,
            value,
        }
    }
}

impl PropertySearch {
    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Predicates for every option that is set, in a fixed order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let candidates = [
            self.city
                .as_deref()
                .filter(|city| !city.is_empty())
                .map(|city| {
                    Predicate::filter("properties.city ILIKE ", BindValue::Text(contains_pattern(city)))
                }),
            self.owner_id
                .filter(|id| *id != 0)
                .map(|id| Predicate::filter("properties.owner_id = ", BindValue::Int(id.into()))),
            self.minimum_price_per_night
                .filter(|price| *price != 0)
                .map(|price| {
                    Predicate::filter("properties.cost_per_night >= ", BindValue::Int(to_cents(price)))
                }),
            self.maximum_price_per_night
                .filter(|price| *price != 0)
                .map(|price| {
                    Predicate::filter("properties.cost_per_night <= ", BindValue::Int(to_cents(price)))
                }),
            self.minimum_rating
                .filter(|rating| *rating != 0.0 && !rating.is_nan())
                .map(|rating| {
                    Predicate::having("AVG(property_reviews.rating) >= ", BindValue::Float(rating))
                }),
        ];

        candidates.into_iter().flatten().collect()
    }
}

/// Convert whole currency units to cents.
pub fn to_cents(units: i64) -> i64 {
    units.saturating_mul(100)
}

/// `%needle%` with LIKE wildcards in the needle escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Build the property search statement.
///
/// Properties without any review are excluded by the inner join.
pub fn build_search_query(search: &PropertySearch, limit: u32) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {PROPERTY_COLUMNS}, AVG(property_reviews.rating)::float8 AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id"
    ));

    let (wheres, havings): (Vec<_>, Vec<_>) = search
        .predicates()
        .into_iter()
        .partition(|p| p.clause == Clause::Where);

    push_clause(&mut builder, " WHERE ", wheres);
    builder.push(" GROUP BY properties.id");
    push_clause(&mut builder, " HAVING ", havings);
    builder.push(" ORDER BY properties.cost_per_night LIMIT ");
    builder.push_bind(i64::from(limit));

    builder
}

fn push_clause(builder: &mut QueryBuilder<'static, Postgres>, keyword: &str, predicates: Vec<Predicate>) {
    if predicates.is_empty() {
        return;
    }

    builder.push(keyword);
    let mut separated = builder.separated(" AND ");
    for predicate in predicates {
        separated.push(predicate.fragment);
        match predicate.value {
            BindValue::Text(value) => separated.push_bind_unseparated(value),
            BindValue::Int(value) => separated.push_bind_unseparated(value),
            BindValue::Float(value) => separated.push_bind_unseparated(value),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Placeholder numbers in order of appearance.
    fn placeholders(sql: &str) -> Vec<u32> {
        let mut found = Vec::new();
        let mut chars = sql.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some(d) = chars.peek().filter(|c| c.is_ascii_digit()) {
                digits.push(*d);
                chars.next();
            }
            if let Ok(n) = digits.parse() {
                found.push(n);
            }
        }
        found
    }

    #[test]
    fn no_filters_binds_only_limit() {
        let builder = build_search_query(&PropertySearch::default(), 10);
        let sql = builder.sql();

        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
        assert!(sql.contains("GROUP BY properties.id ORDER BY properties.cost_per_night LIMIT $1"));
        assert_eq!(placeholders(sql), vec![1]);
    }

    #[test]
    fn city_owner_and_min_price_are_anded_without_gaps() {
        let search = PropertySearch {
            city: Some("van".into()),
            owner_id: Some(3),
            minimum_price_per_night: Some(50),
            ..Default::default()
        };
        let builder = build_search_query(&search, 10);
        let sql = builder.sql();

        assert!(sql.contains(
            " WHERE properties.city ILIKE $1 \
             AND properties.owner_id = $2 \
             AND properties.cost_per_night >= $3 \
             GROUP BY properties.id"
        ));
        assert!(sql.ends_with("LIMIT $4"));
        assert_eq!(placeholders(sql), vec![1, 2, 3, 4]);
    }

    #[test]
    fn minimum_rating_goes_after_group_by() {
        let search = PropertySearch {
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        let builder = build_search_query(&search, 10);
        let sql = builder.sql();

        assert!(!sql.contains("WHERE"));
        let group_by = sql.find("GROUP BY").unwrap();
        let having = sql.find("HAVING AVG(property_reviews.rating) >= $1").unwrap();
        assert!(having > group_by);
        assert!(having < sql.find("ORDER BY").unwrap());
    }

    #[test]
    fn every_filter_numbers_placeholders_sequentially() {
        let search = PropertySearch {
            city: Some("Vancouver".into()),
            owner_id: Some(1),
            minimum_price_per_night: Some(50),
            maximum_price_per_night: Some(100),
            minimum_rating: Some(4.0),
        };
        let builder = build_search_query(&search, 2);
        let sql = builder.sql();

        assert_eq!(placeholders(sql), vec![1, 2, 3, 4, 5, 6]);
        assert!(sql.contains("properties.cost_per_night <= $4 GROUP BY"));
        assert!(sql.contains("HAVING AVG(property_reviews.rating) >= $5 ORDER BY"));
    }

    #[test]
    fn prices_are_converted_to_cents() {
        let search = PropertySearch {
            minimum_price_per_night: Some(50),
            maximum_price_per_night: Some(100),
            ..Default::default()
        };

        let values: Vec<_> = search.predicates().into_iter().map(|p| p.value).collect();
        assert_eq!(values, vec![BindValue::Int(5000), BindValue::Int(10000)]);
    }

    #[test]
    fn cents_conversion_saturates() {
        assert_eq!(to_cents(i64::MAX), i64::MAX);
        assert_eq!(to_cents(-3), -300);
    }

    #[test]
    fn empty_and_zero_options_are_ignored() {
        let search = PropertySearch {
            city: Some(String::new()),
            owner_id: Some(0),
            minimum_price_per_night: Some(0),
            maximum_price_per_night: None,
            minimum_rating: Some(0.0),
        };

        assert!(search.is_empty());
    }

    #[test]
    fn city_is_a_contains_pattern() {
        let search = PropertySearch {
            city: Some("van".into()),
            ..Default::default()
        };

        assert_eq!(
            search.predicates()[0].value,
            BindValue::Text("%van%".into())
        );
    }

    #[test]
    fn like_wildcards_in_city_are_escaped() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn search_options_deserialize_from_partial_json() {
        let search: PropertySearch =
            serde_json::from_str(r#"{"city": "van", "minimum_rating": 4}"#).unwrap();

        assert_eq!(search.city.as_deref(), Some("van"));
        assert_eq!(search.minimum_rating, Some(4.0));
        assert_eq!(search.owner_id, None);
    }
}

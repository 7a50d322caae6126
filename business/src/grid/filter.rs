//! Column filters.
//!
//! Filters apply on every edit (no debounce). A filter whose operator needs a value is
//! inactive while that value is empty or, for numbers, unparsable. Text matching is
//! case-insensitive.

use serde::{Deserialize, Serialize};

use crate::grid::{ColumnKey, FilterKind};
use crate::people::Person;

/// Parse a numeric cell or filter input. Thousands separators are ignored
/// (`"1,358"` is 1358); anything else unparsable is blank.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextOperator {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
    Blank,
    NotBlank,
}

impl TextOperator {
    pub const ALL: [Self; 8] = [
        Self::Contains,
        Self::NotContains,
        Self::Equals,
        Self::NotEqual,
        Self::StartsWith,
        Self::EndsWith,
        Self::Blank,
        Self::NotBlank,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::NotContains => "Does not contain",
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::StartsWith => "Begins with",
            Self::EndsWith => "Ends with",
            Self::Blank => "Blank",
            Self::NotBlank => "Not blank",
        }
    }

    pub fn takes_value(self) -> bool {
        !matches!(self, Self::Blank | Self::NotBlank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberOperator {
    #[default]
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// Strictly between the two bounds.
    InRange,
    Blank,
    NotBlank,
}

impl NumberOperator {
    pub const ALL: [Self; 9] = [
        Self::Equals,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::InRange,
        Self::Blank,
        Self::NotBlank,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEqual => "≠",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "≤",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => "≥",
            Self::InRange => "Between",
            Self::Blank => "Blank",
            Self::NotBlank => "Not blank",
        }
    }

    pub fn takes_value(self) -> bool {
        !matches!(self, Self::Blank | Self::NotBlank)
    }

    pub fn takes_second_value(self) -> bool {
        self == Self::InRange
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextFilter {
    pub operator: TextOperator,
    pub value: String,
}

impl TextFilter {
    pub fn is_active(&self) -> bool {
        !self.operator.takes_value() || !self.value.trim().is_empty()
    }

    pub fn matches(&self, cell: &str) -> bool {
        if !self.is_active() {
            return true;
        }

        let cell = cell.to_lowercase();
        let needle = self.value.trim().to_lowercase();

        match self.operator {
            TextOperator::Contains => cell.contains(&needle),
            TextOperator::NotContains => !cell.contains(&needle),
            TextOperator::Equals => cell == needle,
            TextOperator::NotEqual => cell != needle,
            TextOperator::StartsWith => cell.starts_with(&needle),
            TextOperator::EndsWith => cell.ends_with(&needle),
            TextOperator::Blank => cell.trim().is_empty(),
            TextOperator::NotBlank => !cell.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberFilter {
    pub operator: NumberOperator,
    pub value: String,
    /// Upper bound, only read by `InRange`.
    pub value_to: String,
}

impl NumberFilter {
    pub fn is_active(&self) -> bool {
        match self.operator {
            NumberOperator::Blank | NumberOperator::NotBlank => true,
            NumberOperator::InRange => {
                parse_number(&self.value).is_some() && parse_number(&self.value_to).is_some()
            }
            _ => parse_number(&self.value).is_some(),
        }
    }

    pub fn matches(&self, cell: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }

        let n = match (self.operator, cell) {
            (NumberOperator::Blank, cell) => return cell.is_none(),
            (NumberOperator::NotBlank, cell) => return cell.is_some(),
            // Blank cells never satisfy a comparison.
            (_, None) => return false,
            (_, Some(n)) => n,
        };
        let Some(value) = parse_number(&self.value) else {
            return true;
        };

        match self.operator {
            NumberOperator::Equals => n == value,
            NumberOperator::NotEqual => n != value,
            NumberOperator::LessThan => n < value,
            NumberOperator::LessThanOrEqual => n <= value,
            NumberOperator::GreaterThan => n > value,
            NumberOperator::GreaterThanOrEqual => n >= value,
            NumberOperator::InRange => {
                let Some(to) = parse_number(&self.value_to) else {
                    return true;
                };
                let (low, high) = if value <= to { (value, to) } else { (to, value) };
                low < n && n < high
            }
            NumberOperator::Blank | NumberOperator::NotBlank => true,
        }
    }
}

/// The filter attached to one column; its variant follows the column's [`FilterKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnFilter {
    Text(TextFilter),
    Number(NumberFilter),
}

impl ColumnFilter {
    pub fn for_kind(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Text => Self::Text(TextFilter::default()),
            FilterKind::Number => Self::Number(NumberFilter::default()),
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Text(_) => FilterKind::Text,
            Self::Number(_) => FilterKind::Number,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(filter) => filter.is_active(),
            Self::Number(filter) => filter.is_active(),
        }
    }

    pub fn matches(&self, person: &Person, key: ColumnKey) -> bool {
        match self {
            Self::Text(filter) => filter.matches(&person.cell_text(key)),
            Self::Number(filter) => filter.matches(person.cell_number(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(operator: TextOperator, value: &str) -> TextFilter {
        TextFilter {
            operator,
            value: value.to_owned(),
        }
    }

    fn number(operator: NumberOperator, value: &str, value_to: &str) -> NumberFilter {
        NumberFilter {
            operator,
            value: value.to_owned(),
            value_to: value_to.to_owned(),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("172"), Some(172.0));
        assert_eq!(parse_number(" 1,358 "), Some(1358.0));
        assert_eq!(parse_number("78.2"), Some(78.2));
        assert_eq!(parse_number("unknown"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_empty_text_filter_matches_everything() {
        let filter = TextFilter::default();
        assert!(!filter.is_active());
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_text_operators_ignore_case() {
        assert!(text(TextOperator::Contains, "SKY").matches("Luke Skywalker"));
        assert!(!text(TextOperator::NotContains, "sky").matches("Luke Skywalker"));
        assert!(text(TextOperator::Equals, "blue").matches("Blue"));
        assert!(text(TextOperator::NotEqual, "blue").matches("blue-gray"));
        assert!(text(TextOperator::StartsWith, "luke").matches("Luke Skywalker"));
        assert!(text(TextOperator::EndsWith, "walker").matches("Luke Skywalker"));
    }

    #[test]
    fn test_text_blank_operators_need_no_value() {
        assert!(text(TextOperator::Blank, "").is_active());
        assert!(text(TextOperator::Blank, "").matches(" "));
        assert!(!text(TextOperator::Blank, "").matches("n/a"));
        assert!(text(TextOperator::NotBlank, "").matches("n/a"));
    }

    #[test]
    fn test_unparsable_number_filter_is_inactive() {
        let filter = number(NumberOperator::GreaterThan, "tall", "");
        assert!(!filter.is_active());
        assert!(filter.matches(None));
        assert!(filter.matches(Some(1.0)));
    }

    #[test]
    fn test_number_comparisons() {
        assert!(number(NumberOperator::Equals, "172", "").matches(Some(172.0)));
        assert!(number(NumberOperator::NotEqual, "172", "").matches(Some(96.0)));
        assert!(number(NumberOperator::LessThan, "100", "").matches(Some(96.0)));
        assert!(number(NumberOperator::LessThanOrEqual, "96", "").matches(Some(96.0)));
        assert!(number(NumberOperator::GreaterThan, "1,000", "").matches(Some(1358.0)));
        assert!(!number(NumberOperator::GreaterThanOrEqual, "200", "").matches(Some(172.0)));
    }

    #[test]
    fn test_blank_cells_fail_comparisons() {
        assert!(!number(NumberOperator::NotEqual, "1", "").matches(None));
        assert!(number(NumberOperator::Blank, "", "").matches(None));
        assert!(!number(NumberOperator::NotBlank, "", "").matches(None));
    }

    #[test]
    fn test_in_range_excludes_bounds_and_accepts_swapped_bounds() {
        let filter = number(NumberOperator::InRange, "100", "200");
        assert!(filter.matches(Some(150.0)));
        assert!(!filter.matches(Some(100.0)));
        assert!(!filter.matches(Some(200.0)));

        let swapped = number(NumberOperator::InRange, "200", "100");
        assert!(swapped.matches(Some(150.0)));

        let open = number(NumberOperator::InRange, "100", "");
        assert!(!open.is_active());
    }
}

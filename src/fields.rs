//! Per-field filter configuration and runtime field values.
//!
//! Filter fields are described declaratively with [`FilterField`] constants
//! instead of runtime metadata: each derived filter lists its fields once,
//! pairing the descriptor with the field's current value in a [`FieldEntry`].
//! The descriptor selects the comparison strategy (substring, exact match,
//! one-sided date range), an optional alias onto a differently named entity
//! column, and how the field takes part in query-string binding.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::ParseError;

/// Comparison strategy attached to a filter field.
///
/// Scalar fields (int, uuid, enum, enum list) carry their strategy in their
/// type and ignore this; string and date-time fields contribute no clause
/// unless one is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterStrategy {
    #[default]
    None,
    /// Case-insensitive substring match (strings).
    Contains,
    /// Exact match (strings).
    Equals,
    /// `>=` lower bound of a date-time range.
    DateFrom,
    /// `<=` upper bound of a date-time range.
    DateTo,
}

/// Wire representation of enum values during query-string binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumBinding {
    /// Bind the variant's integer ordinal (the default).
    #[default]
    Integer,
    /// Bind the variant's name.
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum QueryBinding {
    /// Not emitted when serializing the filter to query parameters.
    #[default]
    Excluded,
    /// Bound under the field's own name.
    FieldName,
    /// Bound under an explicit parameter name.
    Named(&'static str),
}

/// Declarative description of one filter field.
///
/// Built with a `const` fluent API so filters can keep their descriptors in
/// statics:
///
/// ```
/// use entity_filter::FilterField;
///
/// const TITLE: FilterField = FilterField::new("title_contains")
///     .contains()
///     .underlying("title")
///     .query_param_named("t");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    name: &'static str,
    strategy: FilterStrategy,
    underlying: Option<&'static str>,
    query: QueryBinding,
    computed: bool,
    enum_binding: EnumBinding,
}

impl FilterField {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            strategy: FilterStrategy::None,
            underlying: None,
            query: QueryBinding::Excluded,
            computed: false,
            enum_binding: EnumBinding::Integer,
        }
    }

    /// Case-insensitive substring matching for a string field.
    #[must_use]
    pub const fn contains(mut self) -> Self {
        self.strategy = FilterStrategy::Contains;
        self
    }

    /// Exact matching for a string field.
    #[must_use]
    pub const fn equals(mut self) -> Self {
        self.strategy = FilterStrategy::Equals;
        self
    }

    /// Lower bound (`>=`) of a date-time range.
    #[must_use]
    pub const fn date_from(mut self) -> Self {
        self.strategy = FilterStrategy::DateFrom;
        self
    }

    /// Upper bound (`<=`) of a date-time range.
    #[must_use]
    pub const fn date_to(mut self) -> Self {
        self.strategy = FilterStrategy::DateTo;
        self
    }

    /// Targets a differently named column on the entity being queried.
    #[must_use]
    pub const fn underlying(mut self, column: &'static str) -> Self {
        self.underlying = Some(column);
        self
    }

    /// Includes the field in query-string binding under its own name.
    #[must_use]
    pub const fn query_param(mut self) -> Self {
        self.query = QueryBinding::FieldName;
        self
    }

    /// Includes the field in query-string binding under `name`.
    #[must_use]
    pub const fn query_param_named(mut self, name: &'static str) -> Self {
        self.query = QueryBinding::Named(name);
        self
    }

    /// Marks the field as derived at runtime: it still filters, but is never
    /// read from or written to the URL.
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Bind enum values by variant name instead of ordinal.
    #[must_use]
    pub const fn enum_as_name(mut self) -> Self {
        self.enum_binding = EnumBinding::Name;
        self
    }

    /// Bind enum values by ordinal (the default).
    #[must_use]
    pub const fn enum_as_integer(mut self) -> Self {
        self.enum_binding = EnumBinding::Integer;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn strategy(&self) -> FilterStrategy {
        self.strategy
    }

    #[must_use]
    pub const fn enum_binding(&self) -> EnumBinding {
        self.enum_binding
    }

    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.computed
    }

    /// The entity column this field's value is compared against: the
    /// `underlying` alias when present, otherwise the field's own name.
    #[must_use]
    pub const fn target_column(&self) -> &'static str {
        match self.underlying {
            Some(column) => column,
            None => self.name,
        }
    }

    /// The query-string key, or `None` when the field is not emitted.
    #[must_use]
    pub const fn query_key(&self) -> Option<&'static str> {
        match self.query {
            QueryBinding::Excluded => None,
            QueryBinding::FieldName => Some(self.name),
            QueryBinding::Named(name) => Some(name),
        }
    }
}

/// An enum variant detached from its Rust type: name plus ordinal.
///
/// Carrying both representations lets the predicate compare against entities
/// that store the enum as an integer, and lets the binder emit either wire
/// form without any runtime type lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub name: &'static str,
    pub ordinal: i32,
}

/// Enumerations usable as filter fields.
///
/// Implemented declaratively (usually via [`crate::filter_enum!`]) with a
/// static variant table. Parsing is case-insensitive on names and also
/// accepts ordinal strings, which is what integer-bound query parameters
/// round-trip through.
pub trait FilterEnum: Sized + Copy + PartialEq + 'static {
    const ENUM_NAME: &'static str;

    /// `(name, ordinal, value)` for every variant.
    fn variants() -> &'static [(&'static str, i32, Self)];

    fn ordinal(self) -> i32 {
        Self::variants()
            .iter()
            .find(|(_, _, value)| *value == self)
            .map_or(0, |(_, ordinal, _)| *ordinal)
    }

    fn name(self) -> &'static str {
        Self::variants()
            .iter()
            .find(|(_, _, value)| *value == self)
            .map_or(Self::ENUM_NAME, |(name, _, _)| name)
    }

    /// Parses a variant from its name (case-insensitive) or ordinal.
    fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if let Some((_, _, value)) = Self::variants()
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(*value);
        }
        if let Ok(ordinal) = trimmed.parse::<i32>()
            && let Some((_, _, value)) = Self::variants()
                .iter()
                .find(|(_, candidate, _)| *candidate == ordinal)
        {
            return Ok(*value);
        }
        Err(ParseError::InvalidEnumValue {
            value: trimmed.to_string(),
            enum_name: Self::ENUM_NAME,
        })
    }

    fn as_enum_value(self) -> EnumValue {
        EnumValue {
            name: self.name(),
            ordinal: self.ordinal(),
        }
    }
}

/// The value a filter field currently holds, as a closed tagged union.
///
/// `Unset` stands for "not filtering on this field", the equivalent of a
/// null property on the source filter object.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Unset,
    Int(i32),
    Bool(bool),
    Double(f64),
    Decimal(Decimal),
    Uuid(Uuid),
    Str(String),
    DateTime(NaiveDateTime),
    Enum(EnumValue),
    EnumList(Vec<EnumValue>),
}

impl FieldValue {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Emptiness as seen by [`crate::EntityFilter::is_empty`]: unset values,
    /// empty strings and empty lists are blank; a date-time is never blank,
    /// whatever its value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Unset => true,
            Self::Str(value) => value.is_empty(),
            Self::EnumList(values) => values.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub fn from_enum<E: FilterEnum>(value: Option<E>) -> Self {
        value.map_or(Self::Unset, |v| Self::Enum(v.as_enum_value()))
    }

    #[must_use]
    pub fn from_enum_list<E: FilterEnum>(values: &[E]) -> Self {
        Self::EnumList(values.iter().map(|v| v.as_enum_value()).collect())
    }

    /// Value view of a labeled enum list; labels are presentation-only and
    /// do not take part in filtering or binding.
    #[must_use]
    pub fn from_labeled_enum_list<E: FilterEnum>(values: &[(E, String)]) -> Self {
        Self::EnumList(values.iter().map(|(v, _)| v.as_enum_value()).collect())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// One filter field paired with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub field: FilterField,
    pub value: FieldValue,
}

impl FieldEntry {
    #[must_use]
    pub fn new(field: FilterField, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Defines an enum together with its [`FilterEnum`] variant table and the
/// query-string parsing impls that go with it.
///
/// ```
/// entity_filter::filter_enum! {
///     pub enum Status {
///         Open = 0,
///         Closed = 1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! filter_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $ordinal:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($variant = $ordinal),+
        }

        impl $crate::FilterEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);

            fn variants() -> &'static [(&'static str, i32, Self)] {
                &[$((stringify!($variant), $ordinal, Self::$variant)),+]
            }
        }

        impl $crate::ParseParam for $name {
            fn parse_param(raw: &str) -> Result<Self, $crate::ParseError> {
                <Self as $crate::FilterEnum>::parse(raw)
            }
        }
    };
}

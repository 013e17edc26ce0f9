//! # Field Access
//!
//! Named access over the raw data of a sentence. Field order in the data is
//! the wire order; names are a view over that order driven by the sentence's
//! [`FieldSchema`], never a second copy of the values.
//!
//! Reading a schema field coerces its raw text according to the field's
//! [`FieldKind`]. Names outside the schema fall back to the identity fields of
//! the sentence (`talker`, `listener`, `sentence_type`, `manufacturer`).

use std::fmt;

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::{i64, u8},
    combinator::all_consuming,
    number::complete::double,
};

use crate::{
    error::FieldError,
    schema::{Field, FieldKind, FieldSchema},
};

/// A field value coerced from its raw text.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A typed field with no value
    Null,
    /// Raw text
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Decimal number
    Float(f64),
    /// UTC time of day
    Time(time::Time),
    /// Calendar date
    Date(time::Date),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a float; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<time::Time> {
        match self {
            Self::Time(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<time::Date> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Time(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{value}"),
        }
    }
}

type FieldResult<'a, O> = nom::IResult<&'a str, O>;

fn integer(i: &str) -> FieldResult<'_, i64> {
    all_consuming(i64).parse(i)
}

fn float(i: &str) -> FieldResult<'_, f64> {
    all_consuming(double).parse(i)
}

fn two_digits(i: &str) -> FieldResult<'_, u8> {
    take(2u8).and_then(all_consuming(u8)).parse(i)
}

fn time_of_day(i: &str) -> FieldResult<'_, Option<time::Time>> {
    let (i, (hour, minute, second)) = all_consuming((two_digits, two_digits, double)).parse(i)?;

    if !(0.0..60.0).contains(&second) {
        return Ok((i, None));
    }

    let micros = ((second.fract() * 1_000_000.0).round() as u32).min(999_999);
    let time = time::Time::from_hms_micro(hour, minute, second.trunc() as u8, micros).ok();

    Ok((i, time))
}

fn calendar_date(i: &str) -> FieldResult<'_, Option<time::Date>> {
    let (i, (day, month, year)) = all_consuming((two_digits, two_digits, two_digits)).parse(i)?;

    let year = match year {
        83..=99 => 1900 + year as i32,
        _ => 2000 + year as i32,
    };
    let date = time::Month::try_from(month)
        .ok()
        .and_then(|month| time::Date::from_calendar_date(year, month, day).ok());

    Ok((i, date))
}

/// Coerces the raw text of a field according to its kind.
///
/// Text fields are returned as is, empty or not. Empty typed fields are
/// [`FieldValue::Null`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{Field, FieldKind, FieldValue, coerce};
///
/// let field = Field::typed("Altitude", "altitude", FieldKind::Float);
/// assert_eq!(coerce(&field, "100.00"), Ok(FieldValue::Float(100.0)));
/// assert_eq!(coerce(&field, ""), Ok(FieldValue::Null));
/// assert!(coerce(&field, "M").is_err());
/// ```
pub fn coerce(field: &Field, raw: &str) -> Result<FieldValue, FieldError> {
    let value = match field.kind {
        FieldKind::Text => return Ok(FieldValue::Text(raw.to_owned())),
        _ if raw.is_empty() => return Ok(FieldValue::Null),
        FieldKind::Integer => integer(raw).ok().map(|(_, value)| FieldValue::Integer(value)),
        FieldKind::Float => float(raw).ok().map(|(_, value)| FieldValue::Float(value)),
        FieldKind::Time => time_of_day(raw)
            .ok()
            .and_then(|(_, time)| time)
            .map(FieldValue::Time),
        FieldKind::Date => calendar_date(raw)
            .ok()
            .and_then(|(_, date)| date)
            .map(FieldValue::Date),
    };

    value.ok_or_else(|| FieldError::Invalid {
        name: field.name.to_owned(),
        value: raw.to_owned(),
        kind: field.kind,
    })
}

/// The raw text of a schema slot; slots past the end of the data are empty.
pub(crate) fn raw_at(data: &[String], index: usize) -> &str {
    data.get(index).map_or("", String::as_str)
}

/// Overwrites the slot of a schema field in place.
///
/// Returns `None` when `name` is not in the schema. A slot past the end of the
/// data is an error; the field count never changes.
pub(crate) fn write_slot(
    schema: &FieldSchema,
    data: &mut [String],
    name: &str,
    value: String,
) -> Option<Result<(), FieldError>> {
    let index = schema.index_of(name)?;
    let len = data.len();

    Some(match data.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(FieldError::OutOfRange {
            name: name.to_owned(),
            index,
            len,
        }),
    })
}

/// Writes `TYPE(name="raw", ...) data=[...]` for a sentence with a schema.
pub(crate) fn debug_fields(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    identity: &[(&str, &str)],
    schema: &FieldSchema,
    data: &[String],
) -> fmt::Result {
    write!(f, "{type_name}(")?;

    let named = schema
        .fields()
        .iter()
        .zip(data)
        .map(|(field, raw)| (field.name, raw.as_str()));
    for (position, (name, value)) in identity.iter().copied().chain(named).enumerate() {
        if position > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{name}={value:?}")?;
    }
    write!(f, ")")?;

    let extra = data.get(schema.len()..).unwrap_or_default();
    if !extra.is_empty() {
        write!(f, " data={extra:?}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(kind: FieldKind) -> Field {
        Field::typed("Test", "test", kind)
    }

    #[test]
    fn test_coerce_text() {
        let field = Field::new("Latitude", "lat");
        assert_eq!(
            coerce(&field, "1929.045"),
            Ok(FieldValue::Text("1929.045".into()))
        );
        assert_eq!(coerce(&field, ""), Ok(FieldValue::Text(String::new())));
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(
            coerce(&typed(FieldKind::Integer), "04"),
            Ok(FieldValue::Integer(4))
        );
        assert_eq!(
            coerce(&typed(FieldKind::Integer), "-12"),
            Ok(FieldValue::Integer(-12))
        );
        assert_eq!(
            coerce(&typed(FieldKind::Float), "-33.9"),
            Ok(FieldValue::Float(-33.9))
        );
        assert_eq!(coerce(&typed(FieldKind::Integer), ""), Ok(FieldValue::Null));

        let cases = [
            (FieldKind::Integer, "2.6"),
            (FieldKind::Integer, "A"),
            (FieldKind::Float, "1.0M"),
            (FieldKind::Float, "abc"),
        ];
        for (kind, raw) in cases {
            assert_eq!(
                coerce(&typed(kind), raw),
                Err(FieldError::Invalid {
                    name: "test".into(),
                    value: raw.into(),
                    kind,
                }),
                "Accepted: {raw:?}"
            );
        }
    }

    #[test]
    fn test_coerce_time() {
        let value = coerce(&typed(FieldKind::Time), "184353.07").unwrap();
        let time = value.as_time().unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (18, 43, 53));
        assert_eq!(time.millisecond(), 70);

        let value = coerce(&typed(FieldKind::Time), "225446").unwrap();
        assert_eq!(value, FieldValue::Time(time::Time::from_hms(22, 54, 46).unwrap()));

        for raw in ["254400", "1843", "18a353", "186053"] {
            assert!(coerce(&typed(FieldKind::Time), raw).is_err(), "Accepted: {raw:?}");
        }
    }

    #[test]
    fn test_coerce_date() {
        let value = coerce(&typed(FieldKind::Date), "191194").unwrap();
        let date = value.as_date().unwrap();
        assert_eq!(date.year(), 1994);
        assert_eq!(date.month(), time::Month::November);
        assert_eq!(date.day(), 19);

        let value = coerce(&typed(FieldKind::Date), "010125").unwrap();
        assert_eq!(value.as_date().unwrap().year(), 2025);

        for raw in ["321194", "011394", "0111", "01119x"] {
            assert!(coerce(&typed(FieldKind::Date), raw).is_err(), "Accepted: {raw:?}");
        }
    }

    #[test]
    fn test_write_slot() {
        let schema = FieldSchema::new([Field::new("A", "a"), Field::new("B", "b")]).unwrap();
        let mut data = vec!["1".to_string()];

        assert_eq!(write_slot(&schema, &mut data, "a", "9".into()), Some(Ok(())));
        assert_eq!(data, vec!["9".to_string()]);
        assert_eq!(write_slot(&schema, &mut data, "c", "3".into()), None);
        assert_eq!(raw_at(&data, 5), "");
    }

    #[test]
    fn test_write_slot_past_end() {
        let schema = FieldSchema::new([Field::new("A", "a"), Field::new("B", "b")]).unwrap();
        let mut data = vec!["1".to_string()];

        assert_eq!(
            write_slot(&schema, &mut data, "b", "2".into()),
            Some(Err(FieldError::OutOfRange {
                name: "b".into(),
                index: 1,
                len: 1,
            }))
        );
        assert_eq!(data, vec!["1".to_string()]);
    }

    #[test]
    fn test_coerce_number_helpers() {
        assert_eq!(integer("42"), Ok(("", 42)));
        assert!(integer("4.2").is_err());
        assert_eq!(float("4.25"), Ok(("", 4.25)));
        assert!(float("4.2x").is_err());
    }
}

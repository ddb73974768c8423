use time::{
    format_description::{
        well_known::Rfc3339,
        FormatItem,
    },
    macros::{
        format_description,
        offset,
    },
    OffsetDateTime,
    PrimitiveDateTime,
    UtcOffset,
};

/// The timezone the api works in, UTC+03:00.
pub const SERVICE_OFFSET: UtcOffset = offset!(+3);

/// An iso 8601 date-time without an offset.
const NAIVE_DATETIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

const DATETIME_FORMAT: &[FormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

const DATETIME_SUBSECOND_FORMAT: &[FormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:1+][offset_hour sign:mandatory]:[offset_minute]"
);

/// An iso 8601 date.
pub(crate) const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Format a date-time the way the api expects it, in the api's timezone.
pub fn format_datetime(date_time: OffsetDateTime) -> Result<String, time::error::Format> {
    let date_time = date_time.to_offset(SERVICE_OFFSET);

    // Whole seconds are sent without a fraction.
    if date_time.nanosecond() == 0 {
        date_time.format(DATETIME_FORMAT)
    } else {
        date_time.format(DATETIME_SUBSECOND_FORMAT)
    }
}

/// Format a date-time that is already in the api's timezone.
pub fn format_local_datetime(date_time: PrimitiveDateTime) -> Result<String, time::error::Format> {
    format_datetime(date_time.assume_offset(SERVICE_OFFSET))
}

/// Parse a date-time sent by the api.
///
/// Date-times without an offset are in the api's timezone.
pub(crate) fn parse_datetime(input: &str) -> Result<OffsetDateTime, time::error::Parse> {
    match OffsetDateTime::parse(input, &Rfc3339) {
        Ok(date_time) => Ok(date_time),
        Err(_) => PrimitiveDateTime::parse(input, NAIVE_DATETIME_FORMAT)
            .map(|date_time| date_time.assume_offset(SERVICE_OFFSET)),
    }
}

/// Serde impls for api date-times
pub(crate) mod datetime {
    use serde::{
        Deserialize,
        Deserializer,
        Serializer,
    };
    use time::OffsetDateTime;

    pub(crate) fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = super::format_datetime(*value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&value)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_datetime(&value).map_err(serde::de::Error::custom)
    }

    pub(crate) mod option {
        use serde::{
            Deserialize,
            Deserializer,
            Serializer,
        };
        use time::OffsetDateTime;

        pub(crate) fn serialize<S>(
            value: &Option<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D>(
            deserializer: D,
        ) -> Result<Option<OffsetDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|value| super::super::parse_datetime(&value))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Serde impls for api dates
pub(crate) mod iso_date {
    time::serde::format_description!(iso_date_impl, Date, DATE_FORMAT);

    pub(crate) use self::iso_date_impl::*;
    use super::DATE_FORMAT;
}

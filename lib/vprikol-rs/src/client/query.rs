use crate::{
    util::DATE_FORMAT,
    Error,
};
use std::borrow::Cow;
use time::{
    Date,
    OffsetDateTime,
    PrimitiveDateTime,
};
use url::Url;

/// A query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value
    Scalar(String),

    /// A list of values, sent as one pair per element
    List(Vec<String>),
}

/// A value that cannot be sent as a query parameter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidQueryValue(pub Cow<'static, str>);

/// A value that can be sent as a query parameter.
pub trait ToQueryValue {
    /// Convert this into a [`QueryValue`].
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue>;
}

impl<T> ToQueryValue for &T
where
    T: ToQueryValue + ?Sized,
{
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        (**self).to_query_value()
    }
}

macro_rules! impl_to_query_value_int {
    ($($ty:ty),*) => {
        $(
            impl ToQueryValue for $ty {
                fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
                    let mut buffer = itoa::Buffer::new();
                    Ok(QueryValue::Scalar(buffer.format(*self).into()))
                }
            }
        )*
    };
}

impl_to_query_value_int!(u8, u16, u32, u64, i8, i16, i32, i64, usize);

macro_rules! impl_to_query_value_float {
    ($($ty:ty),*) => {
        $(
            impl ToQueryValue for $ty {
                fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
                    if !self.is_finite() {
                        return Err(InvalidQueryValue(
                            format!("must be finite, got {self}").into(),
                        ));
                    }

                    let mut buffer = ryu::Buffer::new();
                    Ok(QueryValue::Scalar(buffer.format_finite(*self).into()))
                }
            }
        )*
    };
}

impl_to_query_value_float!(f32, f64);

impl ToQueryValue for bool {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(
            if *self { "true" } else { "false" }.into(),
        ))
    }
}

impl ToQueryValue for str {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(self.into()))
    }
}

impl ToQueryValue for String {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(self.clone()))
    }
}

impl ToQueryValue for Box<str> {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(self.to_string()))
    }
}

impl From<time::error::Format> for InvalidQueryValue {
    fn from(error: time::error::Format) -> Self {
        Self(format!("could not be formatted: {error}").into())
    }
}

impl ToQueryValue for OffsetDateTime {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(crate::format_datetime(*self)?))
    }
}

impl ToQueryValue for PrimitiveDateTime {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(crate::format_local_datetime(*self)?))
    }
}

impl ToQueryValue for Date {
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        Ok(QueryValue::Scalar(self.format(DATE_FORMAT)?))
    }
}

impl<T> ToQueryValue for [T]
where
    T: ToQueryValue,
{
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        let mut values = Vec::with_capacity(self.len());
        for item in self.iter() {
            match item.to_query_value()? {
                QueryValue::Scalar(value) => values.push(value),
                QueryValue::List(list) => values.extend(list),
            }
        }
        Ok(QueryValue::List(values))
    }
}

impl<T> ToQueryValue for Vec<T>
where
    T: ToQueryValue,
{
    fn to_query_value(&self) -> Result<QueryValue, InvalidQueryValue> {
        self.as_slice().to_query_value()
    }
}

/// Ordered query parameters.
///
/// Only absent values are dropped. Empty strings and zero are kept.
/// The first value that cannot be sent is kept,
/// and returned as an error when the url is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(Cow<'static, str>, QueryValue)>,
    invalid: Option<(Cow<'static, str>, InvalidQueryValue)>,
}

impl QueryParams {
    /// Make empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn append<V>(&mut self, name: impl Into<Cow<'static, str>>, value: V) -> &mut Self
    where
        V: ToQueryValue,
    {
        let name = name.into();
        match value.to_query_value() {
            Ok(value) => self.pairs.push((name, value)),
            Err(error) => {
                self.invalid.get_or_insert((name, error));
            }
        }
        self
    }

    /// Add a parameter if it is `Some`.
    pub fn append_opt<V>(&mut self, name: impl Into<Cow<'static, str>>, value: Option<V>) -> &mut Self
    where
        V: ToQueryValue,
    {
        if let Some(value) = value {
            self.append(name, value);
        }
        self
    }

    /// Get the value of a parameter.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(key, value)| (&**key, value))
    }

    /// Append these parameters to the query of a url.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidArguments`] if a value could not be sent.
    pub fn apply_to(&self, url: &mut Url) -> Result<(), Error> {
        if let Some((name, error)) = self.invalid.as_ref() {
            return Err(Error::invalid_arguments(format!("`{name}` {error}")));
        }

        if self.pairs.is_empty() {
            return Ok(());
        }

        let mut query_pairs_mut = url.query_pairs_mut();
        for (name, value) in self.pairs.iter() {
            match value {
                QueryValue::Scalar(value) => {
                    query_pairs_mut.append_pair(name, value);
                }
                QueryValue::List(values) => {
                    for value in values.iter() {
                        query_pairs_mut.append_pair(name, value);
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{
        date,
        datetime,
    };

    fn render(query: &QueryParams) -> String {
        let mut url = Url::parse("https://api.szx.su/find").expect("invalid url");
        query.apply_to(&mut url).expect("invalid query");
        url.query().unwrap_or("").to_string()
    }

    #[test]
    fn none_is_dropped() {
        let mut query = QueryParams::new();
        query
            .append("server_id", 5_u32)
            .append_opt("nickname", Some("Bob"))
            .append_opt("account_id", None::<u64>);

        assert!(render(&query) == "server_id=5&nickname=Bob");
    }

    #[test]
    fn empty_and_zero_are_kept() {
        let mut query = QueryParams::new();
        query
            .append_opt("nickname", Some(""))
            .append_opt("offset", Some(0_u64))
            .append("active", false);

        assert!(render(&query) == "nickname=&offset=0&active=false");
    }

    #[test]
    fn lists_repeat_the_name() {
        let mut query = QueryParams::new();
        query.append("methods", ["find", "status"].as_slice());

        assert!(render(&query) == "methods=find&methods=status");
    }

    #[test]
    fn timestamps_use_service_offset() {
        let mut query = QueryParams::new();
        query
            .append("start_datetime", datetime!(2024-03-01 00:00:00 UTC))
            .append("end_datetime", datetime!(2024-03-02 00:00:00))
            .append("date", date!(2024 - 03 - 05));

        assert!(
            render(&query)
                == "start_datetime=2024-03-01T03%3A00%3A00%2B03%3A00\
                    &end_datetime=2024-03-02T00%3A00%3A00%2B03%3A00\
                    &date=2024-03-05"
        );
    }

    #[test]
    fn no_params_no_query() {
        let query = QueryParams::new();
        let mut url = Url::parse("https://api.szx.su/token").expect("invalid url");
        query.apply_to(&mut url).expect("invalid query");
        assert!(url.as_str() == "https://api.szx.su/token");
    }

    #[test]
    fn floats() {
        let mut query = QueryParams::new();
        query.append("text_size", 0.95_f32);
        assert!(query.get("text_size") == Some(&QueryValue::Scalar("0.95".into())));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let mut query = QueryParams::new();
        query
            .append("server_id", 5_u32)
            .append_opt("min_sessions_per_day", Some(f64::NAN))
            .append("text_size", f32::INFINITY);
        assert!(query.get("min_sessions_per_day").is_none());

        let mut url = Url::parse("https://api.szx.su/admin/bots").expect("invalid url");
        let error = query
            .apply_to(&mut url)
            .expect_err("sent a non-finite float");
        assert!(error.to_string() == "invalid arguments: `min_sessions_per_day` must be finite, got NaN");
        assert!(url.query().is_none());
    }
}

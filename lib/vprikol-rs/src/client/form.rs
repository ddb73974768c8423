use crate::Error;
use bytes::Bytes;
use std::borrow::Cow;

/// A multipart form field value
#[derive(Debug, Clone)]
pub enum FormValue {
    /// A text value
    Text(Cow<'static, str>),

    /// A file
    File {
        /// The file contents
        data: Bytes,

        /// The file name
        file_name: Option<Cow<'static, str>>,

        /// The mime type
        content_type: Option<Cow<'static, str>>,
    },
}

/// A multipart form field
#[derive(Debug, Clone)]
pub struct FormField {
    /// The field name
    pub name: Cow<'static, str>,

    /// The field value
    pub value: FormValue,
}

/// An ordered multipart form.
///
/// Names may repeat.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    /// The fields, in order
    pub fields: Vec<FormField>,
}

impl FormData {
    /// Make an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    /// Add a file field.
    pub fn file(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        data: Bytes,
        file_name: Option<Cow<'static, str>>,
        content_type: Option<Cow<'static, str>>,
    ) -> &mut Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::File {
                data,
                file_name,
                content_type,
            },
        });
        self
    }

    /// Iterate over the fields with the given name.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FormValue> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.name == name)
            .map(|field| &field.value)
    }

    /// Convert this into a reqwest form.
    ///
    /// # Errors
    /// Fails if a content type is not a valid mime type.
    pub(crate) fn into_multipart(self) -> Result<reqwest::multipart::Form, Error> {
        let mut form = reqwest::multipart::Form::new();
        for field in self.fields {
            form = match field.value {
                FormValue::Text(value) => form.text(field.name, value),
                FormValue::File {
                    data,
                    file_name,
                    content_type,
                } => {
                    let mut part = reqwest::multipart::Part::bytes(Vec::from(data));
                    if let Some(file_name) = file_name {
                        part = part.file_name(file_name);
                    }
                    if let Some(content_type) = content_type {
                        part = part.mime_str(&content_type)?;
                    }
                    form.part(field.name, part)
                }
            };
        }

        Ok(form)
    }
}

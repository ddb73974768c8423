use crate::{
    types::{
        AiResponse,
        Gender,
        Nation,
    },
    Client,
    Error,
    FormData,
    Request,
    SSFont,
};
use bytes::Bytes;
use std::collections::BTreeMap;

/// A screenshot to draw chat lines on
#[derive(Debug, Clone)]
pub struct Screenshot {
    /// The image
    pub screen: Bytes,

    /// The chat lines, top to bottom
    pub commands: Vec<String>,

    /// The font
    pub font: SSFont,

    /// The text scale, must be finite and positive
    pub text_size: f32,

    /// Whether to draw the text at the top of the image
    pub text_top: bool,

    /// Colors for chat lines, keyed by line prefix
    pub commands_colors: Option<BTreeMap<String, String>>,
}

impl Screenshot {
    /// Make a new [`Screenshot`] with the default font and text layout.
    pub fn new(screen: impl Into<Bytes>, commands: Vec<String>) -> Self {
        Self {
            screen: screen.into(),
            commands,
            font: SSFont::default(),
            text_size: 0.95,
            text_top: true,
            commands_colors: None,
        }
    }

    /// Check this screenshot and make the form to upload it.
    pub(crate) fn to_form(&self) -> Result<FormData, Error> {
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(Error::invalid_arguments(format!(
                "`text_size` must be finite and positive, got {}",
                self.text_size
            )));
        }

        let mut form = FormData::new();
        form.file(
            "screen",
            self.screen.clone(),
            Some("screen.png".into()),
            Some("application/octet-stream".into()),
        );
        for command in self.commands.iter() {
            form.text("commands", command.clone());
        }

        let mut text_size_buffer = ryu::Buffer::new();
        form.text("font", self.font.as_str())
            .text("text_size", text_size_buffer.format(self.text_size).to_string())
            .text("text_top", if self.text_top { "true" } else { "false" });

        if let Some(commands_colors) = self.commands_colors.as_ref() {
            let commands_colors = serde_json::to_string(commands_colors).map_err(|error| {
                Error::invalid_arguments(format!("invalid `commands_colors`: {error}"))
            })?;
            form.text("commands_colors", commands_colors);
        }

        Ok(form)
    }
}

impl Client {
    /// Draw chat lines on a screenshot.
    ///
    /// Returns the rendered image.
    pub async fn generate_ss(&self, screenshot: &Screenshot) -> Result<Bytes, Error> {
        let request = Request::post("generate_ss").form(screenshot.to_form()?);
        self.execute(request).await?.into_bytes()
    }

    /// Generate an rp situation on a theme.
    pub async fn ai_situation(&self, theme: &str) -> Result<AiResponse, Error> {
        let mut request = Request::get("ai/situation");
        request.query.append("theme", theme);

        self.execute_json(request).await
    }

    /// Generate a character biography.
    pub async fn ai_biography(
        &self,
        nickname: &str,
        gender: Gender,
        nation: Nation,
    ) -> Result<AiResponse, Error> {
        let mut request = Request::get("ai/biography");
        request
            .query
            .append("nickname", nickname)
            .append("gender", gender)
            .append("nation", nation);

        self.execute_json(request).await
    }
}

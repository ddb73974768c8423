/// Generated text
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AiResponse {
    /// The generated lines, in order
    pub lines: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let response: AiResponse =
            serde_json::from_str(r#"{"lines": ["first", "second"]}"#).expect("failed to parse");
        assert!(response.lines == ["first", "second"]);
    }
}

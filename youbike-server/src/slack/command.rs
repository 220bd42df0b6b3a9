//! Slash-command request parsing.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// The slash-command fields this server cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    pub command: String,
    pub text: String,
    pub user_id: String,
    pub channel_id: String,
    /// One-time callback URL for deferred replies. Empty values are `None`.
    pub response_url: Option<String>,
}

impl SlashCommand {
    fn from_fields(mut fields: HashMap<String, String>) -> Self {
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();

        let command = take("command");
        let text = take("text");
        let user_id = take("user_id");
        let channel_id = take("channel_id");
        let response_url = Some(take("response_url"))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Self {
            command,
            text,
            user_id,
            channel_id,
            response_url,
        }
    }
}

/// Parse a slash-command body.
///
/// Form-encoded bodies with a form content type are decoded strictly.
/// Anything else (wrong content type, invalid UTF-8) falls back to a
/// lenient pass over the raw text, so a usable `response_url` is recovered
/// whenever one is present.
pub fn parse_slash_command(content_type: Option<&str>, body: &[u8]) -> SlashCommand {
    match decode_form(content_type, body) {
        Some(fields) => SlashCommand::from_fields(fields),
        None => {
            tracing::debug!(?content_type, "falling back to lenient slash-command parsing");
            SlashCommand::from_fields(decode_text(&String::from_utf8_lossy(body)))
        }
    }
}

fn is_form_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
}

fn decode_form(content_type: Option<&str>, body: &[u8]) -> Option<HashMap<String, String>> {
    if !content_type.is_some_and(is_form_content_type) {
        return None;
    }
    std::str::from_utf8(body).ok()?;

    Some(
        url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    )
}

fn decode_text(text: &str) -> HashMap<String, String> {
    text.trim()
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((decode_component(key), decode_component(value)))
        })
        .collect()
}

fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = "application/x-www-form-urlencoded";
    const BODY: &str = "token=abc&team_id=T1&channel_id=C123&user_id=U9&\
                        command=%2Fyoubike&text=&\
                        response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1%2F123%2Fxyz";

    #[test]
    fn parses_form_body() {
        let cmd = parse_slash_command(Some(FORM), BODY.as_bytes());
        assert_eq!(cmd.command, "/youbike");
        assert_eq!(cmd.channel_id, "C123");
        assert_eq!(cmd.user_id, "U9");
        assert_eq!(
            cmd.response_url.as_deref(),
            Some("https://hooks.slack.com/commands/T1/123/xyz")
        );
    }

    #[test]
    fn content_type_with_charset() {
        let cmd = parse_slash_command(
            Some("application/x-www-form-urlencoded; charset=utf-8"),
            BODY.as_bytes(),
        );
        assert_eq!(cmd.command, "/youbike");
    }

    #[test]
    fn falls_back_for_text_content_type() {
        let cmd = parse_slash_command(Some("text/plain"), BODY.as_bytes());
        assert_eq!(
            cmd.response_url.as_deref(),
            Some("https://hooks.slack.com/commands/T1/123/xyz")
        );
    }

    #[test]
    fn falls_back_for_invalid_utf8() {
        let mut body = b"text=\xff\xfe&".to_vec();
        body.extend_from_slice(b"response_url=https%3A%2F%2Fexample.com%2Fcb");
        let cmd = parse_slash_command(Some(FORM), &body);
        assert_eq!(cmd.response_url.as_deref(), Some("https://example.com/cb"));
    }

    #[test]
    fn lenient_parsing_skips_garbage_pairs() {
        let cmd = parse_slash_command(None, b"garbage&&text=hello+world&=x");
        assert_eq!(cmd.text, "hello world");
        assert!(cmd.response_url.is_none());
    }

    #[test]
    fn empty_response_url_is_none() {
        let cmd = parse_slash_command(Some(FORM), b"command=%2Fyoubike&response_url=");
        assert!(cmd.response_url.is_none());
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse_slash_command(Some(FORM), b""), SlashCommand::default());
        assert_eq!(parse_slash_command(None, b""), SlashCommand::default());
    }
}

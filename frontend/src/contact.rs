//! Contact form payload. There is no backend yet, submissions are only
//! logged.

use serde::Serialize;

/// Length of the HTML tag at the start of `rest`, if there is one.
///
/// A tag is `<name>`, `</name>` or `<name attr=...>`; a `<` that does not
/// open one of those is plain text ("1 < 2", "<3").
fn tag_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('<')?;
    let name = body.strip_prefix('/').unwrap_or(body);
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = name
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(name.len());
    let after = &name[name_len..];
    let close = after.find(|c: char| c == '>' || c == '<')?;
    if !after[close..].starts_with('>') {
        return None;
    }
    let attrs = after[..close].trim();
    let attrs = attrs.strip_suffix('/').unwrap_or(attrs).trim_end();
    if !attrs.is_empty() && (!after.starts_with(char::is_whitespace) || !attrs.contains('=')) {
        return None;
    }
    Some(rest.len() - after.len() + close + 1)
}

/// Drops HTML tags and trims the result. Stray angle brackets are kept.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match tag_len(rest) {
            Some(len) => rest = &rest[len..],
            None => {
                out.push('<');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Sanitised submission, or `None` if a field ends up empty.
    pub fn submit(&self) -> Option<ContactSubmission> {
        let submission = ContactSubmission {
            first_name: sanitize(&self.first_name),
            last_name: sanitize(&self.last_name),
            email: sanitize(&self.email),
            message: sanitize(&self.message),
        };
        let complete = [
            &submission.first_name,
            &submission.last_name,
            &submission.email,
            &submission.message,
        ]
        .iter()
        .all(|field| !field.is_empty());
        complete.then_some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_whitespace() {
        assert_eq!(sanitize("  hello  "), "hello");
        assert_eq!(sanitize("<b>bold</b> move"), "bold move");
        assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(sanitize("a > b"), "a > b");
        assert_eq!(sanitize("مرحبا <i>بكم</i>"), "مرحبا بكم");
    }

    #[test]
    fn attributes_and_self_closing_tags_are_stripped() {
        assert_eq!(sanitize(r#"<a href="x">link</a>"#), "link");
        assert_eq!(sanitize("line<br/>break<br />"), "linebreak");
        assert_eq!(sanitize("<img src=x onerror=alert(1)>hi"), "hi");
    }

    #[test]
    fn stray_brackets_stay_as_text() {
        assert_eq!(sanitize("1 < 2"), "1 < 2");
        assert_eq!(sanitize("Budget is < 500k, please call me"), "Budget is < 500k, please call me");
        assert_eq!(sanitize("x<y and y>z"), "x<y and y>z");
        assert_eq!(sanitize("<3 love the villas"), "<3 love the villas");
        assert_eq!(sanitize("unclosed <b"), "unclosed <b");
    }

    #[test]
    fn message_with_a_heart_is_accepted() {
        let draft = ContactDraft {
            first_name: "Sara".into(),
            last_name: "Ali".into(),
            email: "sara@example.com".into(),
            message: "<3 love the villas".into(),
        };
        let submission = draft.submit().expect("draft is complete");
        assert_eq!(submission.message, "<3 love the villas");
    }

    #[test]
    fn empty_after_sanitizing_is_rejected() {
        let draft = ContactDraft {
            first_name: "Sara".into(),
            last_name: "<br>".into(),
            email: "sara@example.com".into(),
            message: "Hi".into(),
        };
        assert_eq!(draft.submit(), None);
    }

    #[test]
    fn submission_serializes_camel_case() {
        let draft = ContactDraft {
            first_name: " Sara ".into(),
            last_name: "Ali".into(),
            email: "sara@example.com".into(),
            message: "<p>New villa</p>".into(),
        };
        let submission = draft.submit().unwrap();
        assert_eq!(submission.message, "New villa");
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["firstName"], "Sara");
        assert_eq!(json["lastName"], "Ali");
    }
}

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};

/// An HTML email ready to hand to the mail backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html_body: String,
}

impl OutgoingEmail {
    /// Renders an RFC 822 message with an HTML body.
    pub fn to_rfc822(&self) -> String {
        [
            "Content-Type: text/html; charset=utf-8".to_string(),
            "MIME-Version: 1.0".to_string(),
            format!("To: {}", header_value(&self.to)),
            format!("From: {}", header_value(&self.from)),
            format!("Subject: {}", encode_subject(&self.subject)),
            String::new(),
            self.html_body.clone(),
        ]
        .join("\r\n")
    }

    /// Base64url without padding, the form Gmail's `raw` field expects.
    pub fn encode_raw(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_rfc822())
    }
}

/// Header values come from prospect input; a stray CR/LF would start a new header.
fn header_value(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// RFC 2047 encoded-word for non-ASCII subjects.
fn encode_subject(subject: &str) -> String {
    let subject = header_value(subject);
    if subject.is_ascii() {
        subject
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(subject))
    }
}

/// Placeholder token replaced with the recipient display name.
pub const NAME_PLACEHOLDER: &str = "{nome}";

/// Subject used when no subject template is configured.
pub const DEFAULT_SUBJECT: &str = "Seu arquivo PDF";

/// Render subject and body for one recipient.
///
/// The body template gets a single literal substitution pass: every
/// occurrence of `{nome}` becomes the display name, with no escaping and no
/// recursion, so a name that itself contains `{nome}` is left as the caller
/// produced it. A blank body template falls back to a fixed message that
/// embeds the name; a blank subject template falls back to
/// [`DEFAULT_SUBJECT`]. The subject is taken literally, without substitution.
pub fn compose(display_name: &str, subject_template: &str, body_template: &str) -> (String, String) {
    let subject = if subject_template.is_empty() {
        DEFAULT_SUBJECT.to_string()
    } else {
        subject_template.to_string()
    };

    let template = body_template.trim();
    let body = if template.is_empty() {
        format!("Olá {}, segue em anexo o seu arquivo PDF.", display_name)
    } else {
        template.replace(NAME_PLACEHOLDER, display_name)
    };

    (subject, body)
}

//! Structured request composer.
//!
//! Merges the persona block, session memory, document context, and the
//! user message into the final request text. Section order is fixed:
//! persona, memory (if any), documents (if any), user request, response
//! format footer. Present sections are separated by one blank line.

use fc_catalog::strings::MessageKey;
use fc_catalog::resolve;
use fc_domain::{Document, Locale};

/// Assemble the final request string.
///
/// `user_message` is expected to be trimmed and non-empty; the engine
/// rejects empty input before this point. The response-format footer is
/// always appended regardless of toggles, since it shapes output
/// structure rather than content policy. This function never fails.
pub fn compose_request(
    persona: &str,
    user_message: &str,
    memory_notes: &[String],
    documents: &[Document],
    locale: Locale,
) -> String {
    let mut sections: Vec<String> = vec![persona.to_string()];

    if !memory_notes.is_empty() {
        sections.push(format!(
            "{}{}",
            resolve(locale, MessageKey::MemoryPrefix),
            memory_notes.join("; ")
        ));
    }

    if !documents.is_empty() {
        let blocks: Vec<String> = documents
            .iter()
            .map(|doc| render_document(doc, locale))
            .collect();
        sections.push(format!(
            "{}\n{}",
            resolve(locale, MessageKey::DocumentsLabel),
            blocks.join("\n\n")
        ));
    }

    sections.push(format!(
        "{}\n{}",
        resolve(locale, MessageKey::UserRequestLabel),
        user_message
    ));

    sections.push(response_format(locale));

    sections.join("\n\n")
}

/// One document block: header line (name plus truncation marker) followed
/// by the full stored content.
fn render_document(doc: &Document, locale: Locale) -> String {
    let marker = if doc.truncated {
        resolve(locale, MessageKey::TruncatedSuffix)
    } else {
        ""
    };
    format!(
        "{}: {}{}\n{}",
        resolve(locale, MessageKey::DocumentPrefix),
        doc.name,
        marker,
        doc.content
    )
}

fn response_format(locale: Locale) -> String {
    [
        resolve(locale, MessageKey::ResponseFormatTitle),
        resolve(locale, MessageKey::ResponseStep1),
        resolve(locale, MessageKey::ResponseStep2),
        resolve(locale, MessageKey::ResponseStep3),
        resolve(locale, MessageKey::ResponseStep4),
        resolve(locale, MessageKey::ResponseStep5),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, content: &str, truncated: bool) -> Document {
        Document {
            name: name.into(),
            content: content.into(),
            preview: content.into(),
            truncated,
            char_count: content.chars().count(),
        }
    }

    #[test]
    fn minimal_request_has_persona_message_and_footer() {
        let out = compose_request("PERSONA", "help me", &[], &[], Locale::English);
        let sections: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], "PERSONA");
        assert_eq!(sections[1], "User request:\nhelp me");
        assert!(sections[2].starts_with("Response format:"));
        assert!(sections[2].contains("5. Compliance or risk caveats"));
    }

    #[test]
    fn memory_line_joins_notes_with_semicolons() {
        let notes = vec!["save more".to_string(), "low risk".to_string()];
        let out = compose_request("P", "q", &notes, &[], Locale::English);
        assert!(out.contains("Session memory: key user preferences so far -> save more; low risk"));
    }

    #[test]
    fn no_memory_section_when_notes_empty() {
        let out = compose_request("P", "q", &[], &[], Locale::English);
        assert!(!out.contains("Session memory"));
    }

    #[test]
    fn documents_render_header_and_content_in_order() {
        let docs = vec![doc("a.txt", "alpha", false), doc("b.pdf", "beta", true)];
        let out = compose_request("P", "q", &[], &docs, Locale::English);

        let a = out.find("Document: a.txt\nalpha").unwrap();
        let b = out.find("Document: b.pdf (truncated)\nbeta").unwrap();
        assert!(a < b);
        assert!(out.contains("Reference documents supplied by the user:"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let notes = vec!["note".to_string()];
        let docs = vec![doc("a.txt", "alpha", false)];
        let out = compose_request("PERSONA", "question", &notes, &docs, Locale::English);

        let persona = out.find("PERSONA").unwrap();
        let memory = out.find("Session memory").unwrap();
        let documents = out.find("Reference documents").unwrap();
        let request = out.find("User request:").unwrap();
        let footer = out.find("Response format:").unwrap();
        assert!(persona < memory && memory < documents && documents < request && request < footer);
    }

    #[test]
    fn indonesian_labels_are_used() {
        let out = compose_request("P", "q", &[], &[], Locale::Indonesian);
        assert!(out.contains("Permintaan pengguna:"));
        assert!(out.contains("Format respons:"));
    }
}

use crate::error::ParseError;
use crate::tree::{BuildError, ManifestTree, TreeBuilder};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;

/// Calculate the 1-based line number from a byte offset in the source text.
fn byte_offset_to_line(source: &str, offset: usize) -> u32 {
    let line_count = source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    u32::try_from(line_count + 1).unwrap_or(u32::MAX)
}

fn malformed(source: &str, offset: u64, message: impl ToString) -> ParseError {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    ParseError::Malformed {
        line: byte_offset_to_line(source, offset),
        message: message.to_string(),
    }
}

/// XML end-of-line handling: `\r\n` and a lone `\r` both become `\n`.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Parse manifest text into a normalized tree.
///
/// Comments, processing instructions, and the prolog are dropped. Line endings are
/// normalized first, so text nodes never contain a literal carriage return. Never panics.
pub fn parse_manifest(text: &str) -> Result<ManifestTree, ParseError> {
    let normalized = normalize_line_endings(text);
    let text = normalized.as_ref();
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder::default();
    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => return Err(malformed(text, reader.buffer_position() as u64, err)),
        };
        let step: Result<(), String> = match event {
            Event::Start(e) => element_name(e.name().as_ref())
                .and_then(|name| builder.open_element(&name).map_err(|e| e.to_string())),
            Event::Empty(e) => element_name(e.name().as_ref()).and_then(|name| {
                builder
                    .open_element(&name)
                    .and_then(|()| builder.close_element(&name))
                    .map_err(|e| e.to_string())
            }),
            Event::End(e) => element_name(e.name().as_ref())
                .and_then(|name| builder.close_element(&name).map_err(|e| e.to_string())),
            Event::Text(t) => match t.unescape() {
                Ok(s) => builder.text(&s).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            },
            Event::CData(c) => {
                let raw = c.into_inner();
                match std::str::from_utf8(&raw) {
                    Ok(s) => builder.text(s).map_err(|e| e.to_string()),
                    Err(err) => Err(err.to_string()),
                }
            }
            Event::Eof => break,
            _ => Ok(()),
        };
        step.map_err(|message| malformed(text, reader.buffer_position() as u64, message))?;
    }

    builder
        .finish()
        .map_err(|err: BuildError| malformed(text, text.len() as u64, err))
}

fn element_name(raw: &[u8]) -> Result<String, String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|err| format!("element name is not UTF-8: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_to_line() {
        let source = "line1\nline2\nline3\nline4";
        assert_eq!(byte_offset_to_line(source, 0), 1);
        assert_eq!(byte_offset_to_line(source, 5), 1);
        assert_eq!(byte_offset_to_line(source, 6), 2);
        assert_eq!(byte_offset_to_line(source, 12), 3);
        assert_eq!(byte_offset_to_line(source, 18), 4);
        // Offset beyond end should clamp
        assert_eq!(byte_offset_to_line(source, 1000), 4);
    }

    #[test]
    fn carriage_returns_become_newlines() {
        let tree = parse_manifest("<project>\r\n<version>${v}\r</version>\r</project>")
            .expect("parse");
        let version = tree.root().first_child_named("version").expect("version");
        assert_eq!(version.text_content(), "${v}\n");
        assert_eq!(tree.root().text_content(), "\n${v}\n\n");
    }

    #[test]
    fn crlf_keeps_error_line_numbers() {
        let err = parse_manifest("<project>\r\n<a>\r\n</b>\r\n</project>").expect_err("mismatch");
        match err {
            ParseError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn parses_prolog_comments_and_cdata() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- header -->
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <!-- inline -->
  <version><![CDATA[${app]]>.version}</version>
  <packaging/>
</project>
"#;
        let tree = parse_manifest(text).expect("parse");
        let root = tree.root();
        assert_eq!(root.tag_name(), Some("project"));

        let version = root.first_child_named("version").expect("version");
        assert_eq!(version.text_content(), "${app.version}");
        assert_eq!(version.children().count(), 1);

        let packaging = root.first_child_named("packaging").expect("packaging");
        assert_eq!(packaging.children().count(), 0);
    }

    #[test]
    fn unescapes_predefined_entities() {
        let tree = parse_manifest("<a>x &amp; y</a>").expect("parse");
        assert_eq!(tree.root().text_content(), "x & y");
    }

    #[test]
    fn mismatched_end_tag_is_malformed() {
        let err = parse_manifest("<project>\n<dependencies>\n</project>").expect_err("must fail");
        assert!(matches!(err, ParseError::Malformed { .. }), "{err:?}");
    }

    #[test]
    fn unclosed_root_reports_last_line() {
        let err = parse_manifest("<project>\n  <dependencies/>\n").expect_err("must fail");
        match err {
            ParseError::Malformed { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("project"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_and_text_only_documents_are_rejected() {
        assert!(parse_manifest("").is_err());
        assert!(parse_manifest("   \n").is_err());
        assert!(parse_manifest("not xml at all").is_err());
    }

    #[test]
    fn trailing_second_root_is_rejected() {
        assert!(parse_manifest("<project/><project/>").is_err());
    }
}

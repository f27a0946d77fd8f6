// file: src/parser/tagged.rs
// description: tagged document body parsing with quick-xml
// reference: https://docs.rs/quick-xml

use super::DocumentParser;
use crate::error::{ParseError, Result};
use crate::models::Article;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

pub const DOCNO_TAG: &str = "DOCNO";
pub const DATE_TAG: &str = "DATE";
pub const HEADLINE_TAG: &str = "HEADLINE";
pub const TEXT_TAG: &str = "TEXT";
pub const PARAGRAPH_TAG: &str = "P";

/// Parser for `<DOC>` bodies of the form
///
/// ```text
/// <DOC>
/// <DOCNO> A1 </DOCNO>
/// <DATE><P> 2020-01-01 </P></DATE>
/// <HEADLINE><P> Part 1 </P><P> Part 2 </P></HEADLINE>
/// <TEXT><P> Hello world. </P></TEXT>
/// </DOC>
/// ```
///
/// Field tags are recognised in any ASCII case, but every end tag must
/// match its start tag exactly (`<docno>..</DOCNO>` is malformed). Text
/// inside nested markup is concatenated into the enclosing field.
pub struct TaggedDocumentParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Docno,
    Date,
    Headline,
    Paragraph,
}

struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct Collected {
    docno: Option<String>,
    date: Option<String>,
    headline: Vec<String>,
    paragraphs: Vec<String>,
}

impl Collected {
    fn store(&mut self, field: Field, text: String) -> std::result::Result<(), ParseError> {
        match field {
            Field::Docno => set_once(&mut self.docno, text, DOCNO_TAG),
            Field::Date => set_once(&mut self.date, text, DATE_TAG),
            Field::Headline => {
                self.headline.push(text);
                Ok(())
            }
            Field::Paragraph => {
                self.paragraphs.push(text);
                Ok(())
            }
        }
    }

    fn finish(self) -> std::result::Result<Article, ParseError> {
        let docno = required(self.docno, DOCNO_TAG)?;
        let date = required(self.date, DATE_TAG)?;

        Ok(Article {
            docno,
            date,
            headline: self.headline,
            paragraphs: self.paragraphs,
        })
    }
}

fn set_once(
    slot: &mut Option<String>,
    text: String,
    tag: &'static str,
) -> std::result::Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateField(tag));
    }
    *slot = Some(text);
    Ok(())
}

fn required(value: Option<String>, tag: &'static str) -> std::result::Result<String, ParseError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ParseError::MissingField(tag)),
    }
}

/// Decide which field, if any, an element opened under `open` starts.
fn field_for(name: &str, open: &[String]) -> Option<Field> {
    if name == DOCNO_TAG {
        return Some(Field::Docno);
    }

    if name != PARAGRAPH_TAG {
        return None;
    }

    open.iter().rev().find_map(|ancestor| match ancestor.as_str() {
        DATE_TAG => Some(Field::Date),
        HEADLINE_TAG => Some(Field::Headline),
        TEXT_TAG => Some(Field::Paragraph),
        _ => None,
    })
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_uppercase()
}

impl TaggedDocumentParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_fields(&self, raw: &str) -> std::result::Result<Article, ParseError> {
        let mut reader = Reader::from_str(raw);
        reader.config_mut().check_end_names = true;

        let mut open: Vec<String> = Vec::new();
        let mut capture: Option<Capture> = None;
        let mut collected = Collected::default();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let name = tag_name(e.name().as_ref());
                    if capture.is_none() {
                        if let Some(field) = field_for(&name, &open) {
                            capture = Some(Capture {
                                field,
                                depth: open.len(),
                                text: String::new(),
                            });
                        }
                    }
                    open.push(name);
                }
                Ok(Event::Empty(ref e)) => {
                    if capture.is_none() {
                        let name = tag_name(e.name().as_ref());
                        if let Some(field) = field_for(&name, &open) {
                            collected.store(field, String::new())?;
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    open.pop();
                    let closes_capture = capture
                        .as_ref()
                        .is_some_and(|current| open.len() == current.depth);
                    if closes_capture {
                        if let Some(done) = capture.take() {
                            collected.store(done.field, done.text.trim().to_string())?;
                        }
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(current) = capture.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|err| ParseError::Malformed(err.to_string()))?;
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(current) = capture.as_mut() {
                        current.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ParseError::Malformed(e.to_string())),
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(ParseError::Malformed(format!(
                "unexpected end of document inside <{}>",
                unclosed
            )));
        }

        collected.finish()
    }
}

impl DocumentParser for TaggedDocumentParser {
    fn parse(&self, raw: &str) -> Result<Article> {
        let article = self.parse_fields(raw)?;

        debug!(
            "Parsed document {}: {} heading fragments, {} paragraphs",
            article.docno,
            article.headline.len(),
            article.paragraphs.len()
        );

        Ok(article)
    }
}

impl Default for TaggedDocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "<DOC>\n<DOCNO> A1 </DOCNO>\n<DATE>\n<P>\n2020-01-01\n</P>\n</DATE>\n\
        <HEADLINE>\n<P>\nPart 1\n</P>\n<P>\nPart 2\n</P>\n</HEADLINE>\n\
        <TEXT>\n<P>  Hello world.  </P>\n</TEXT>\n</DOC>\n";

    fn parse_err(raw: &str) -> ParseError {
        match TaggedDocumentParser::new().parse(raw) {
            Err(SearchError::Parse(err)) => err,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_all_fields_trimmed() {
        let article = TaggedDocumentParser::new().parse(SAMPLE).unwrap();

        assert_eq!(
            article,
            Article {
                docno: "A1".to_string(),
                date: "2020-01-01".to_string(),
                headline: vec!["Part 1".to_string(), "Part 2".to_string()],
                paragraphs: vec!["Hello world.".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = TaggedDocumentParser::new();
        assert_eq!(parser.parse(SAMPLE).unwrap(), parser.parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_missing_date() {
        let raw = "<DOC><DOCNO>A1</DOCNO><HEADLINE><P>H</P></HEADLINE></DOC>";
        assert_eq!(parse_err(raw), ParseError::MissingField(DATE_TAG));
    }

    #[test]
    fn test_missing_docno() {
        let raw = "<DOC><DATE><P>2020-01-01</P></DATE><TEXT><P>x</P></TEXT></DOC>";
        assert_eq!(parse_err(raw), ParseError::MissingField(DOCNO_TAG));
    }

    #[test]
    fn test_blank_docno_counts_as_missing() {
        let raw = "<DOC><DOCNO>   </DOCNO><DATE><P>2020-01-01</P></DATE></DOC>";
        assert_eq!(parse_err(raw), ParseError::MissingField(DOCNO_TAG));
    }

    #[test]
    fn test_date_outside_paragraph_is_missing() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DATE>2020-01-01</DATE></DOC>";
        assert_eq!(parse_err(raw), ParseError::MissingField(DATE_TAG));
    }

    #[test]
    fn test_duplicate_docno() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DOCNO>A2</DOCNO><DATE><P>d</P></DATE></DOC>";
        assert_eq!(parse_err(raw), ParseError::DuplicateField(DOCNO_TAG));
    }

    #[test]
    fn test_duplicate_date() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DATE><P/><P>2020-01-01</P></DATE></DOC>";
        assert_eq!(parse_err(raw), ParseError::DuplicateField(DATE_TAG));
    }

    #[test]
    fn test_end_tag_case_must_match_start_tag() {
        let raw = "<DOC><docno>A1</DOCNO><DATE><P>2020-01-01</P></DATE></DOC>";
        assert!(matches!(parse_err(raw), ParseError::Malformed(_)));
    }

    #[test]
    fn test_malformed_markup() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DATE><P>2020-01-01</DATE></DOC>";
        assert!(matches!(parse_err(raw), ParseError::Malformed(_)));
    }

    #[test]
    fn test_truncated_markup() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DATE><P>2020-01-01</P></DATE><TEXT><P>cut off";
        assert!(matches!(parse_err(raw), ParseError::Malformed(_)));
    }

    #[test]
    fn test_no_body_paragraphs() {
        let raw = "<DOC><DOCNO>A1</DOCNO><DATE><P>2020-01-01</P></DATE><TEXT></TEXT></DOC>";
        let article = TaggedDocumentParser::new().parse(raw).unwrap();
        assert!(article.paragraphs.is_empty());
        assert!(article.headline.is_empty());
    }

    #[test]
    fn test_nested_markup_and_entities() {
        let raw = "<doc><docno>A1</docno><date><p>2020-01-01</p></date>\
            <text><p> Fish &amp; <b>chips</b> </p><p/></text></doc>";
        let article = TaggedDocumentParser::new().parse(raw).unwrap();
        assert_eq!(
            article.paragraphs,
            vec!["Fish & chips".to_string(), String::new()]
        );
    }

    #[test]
    fn test_paragraphs_outside_blocks_ignored() {
        let raw = "<DOC><DOCNO>A1</DOCNO><P>stray</P><DATE><P>d</P></DATE>\
            <BYLINE><P>By someone</P></BYLINE></DOC>";
        let article = TaggedDocumentParser::new().parse(raw).unwrap();
        assert!(article.paragraphs.is_empty());
        assert!(article.headline.is_empty());
    }
}

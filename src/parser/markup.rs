use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::rest,
    IResult, Parser,
};

use crate::error::ParseError;
use crate::model::{ContentBlock, HeadingLevel, LabeledValue, ListStyle};

/// One classified source line
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Directive,
    Heading(HeadingLevel, &'a str),
    Item(ListStyle, &'a str),
    /// Indented text following a list item
    Continuation(&'a str),
    Pair(&'a str, &'a str),
    Centered {
        text: &'a str,
        link: Option<&'a str>,
    },
    Emphasis(&'a str),
    Label(&'a str),
    Note(&'a str),
    SectionStart(&'a str),
    SectionEnd,
    Text(&'a str),
}

fn heading_marker(input: &str) -> IResult<&str, &str> {
    let (input, marker) = take_while1(|c| c == '=')(input)?;
    let (input, _) = space1(input)?;
    Ok((input, marker))
}

fn bullet_item(input: &str) -> IResult<&str, &str> {
    let (input, _) = alt((char('*'), char('-'))).parse(input)?;
    let (input, _) = space1(input)?;
    rest(input)
}

fn numbered_item(input: &str) -> IResult<&str, &str> {
    let (input, _) = digit1(input)?;
    let (input, _) = char('.')(input)?;
    let (input, _) = space1(input)?;
    rest(input)
}

/// `| label | value`, with an optional closing `|`
fn pair(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = char('|')(input)?;
    let (input, label) = take_till(|c| c == '|')(input)?;
    let (input, _) = char('|')(input)?;
    let (input, value) = rest(input)?;
    let value = value.trim();
    let value = value.strip_suffix('|').unwrap_or(value);
    Ok((input, (label.trim(), value.trim())))
}

fn marked<'a>(marker: char, input: &'a str) -> IResult<&'a str, &'a str> {
    let (input, _) = char(marker)(input)?;
    let (input, _) = space0(input)?;
    rest(input)
}

/// Split a trailing `<url>` off centered text
fn split_link(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    if let Some(body) = trimmed.strip_suffix('>') {
        if let Some(open) = body.rfind('<') {
            let url = body[open + 1..].trim();
            if !url.is_empty() {
                return (body[..open].trim_end(), Some(url));
            }
        }
    }
    (trimmed, None)
}

fn syntax(line: usize, message: impl Into<String>) -> ParseError {
    ParseError::Syntax {
        line,
        message: message.into(),
    }
}

/// Classify a single line. `number` is 1-based and only used for errors.
pub fn classify_line(line: &str, number: usize) -> Result<Line<'_>, ParseError> {
    if line.trim().is_empty() {
        return Ok(Line::Blank);
    }

    if line.starts_with([' ', '\t']) {
        return Ok(Line::Continuation(line.trim()));
    }

    let line = line.trim_end();
    match line.chars().next() {
        Some('%') => return Ok(Line::Directive),
        Some(';') => return Ok(Line::Comment),
        _ => {}
    }

    if line.starts_with('=') {
        let (text, marker) =
            heading_marker(line).map_err(|_| syntax(number, "heading marker needs a space"))?;
        let level = match marker.len() {
            1 => HeadingLevel::Title,
            2 => HeadingLevel::Section,
            3 => HeadingLevel::Subsection,
            n => return Err(syntax(number, format!("heading level {} is too deep", n))),
        };
        let text = text.trim();
        if text.is_empty() {
            return Err(syntax(number, "empty heading"));
        }
        return Ok(Line::Heading(level, text));
    }

    if let Ok((_, text)) = bullet_item(line) {
        return Ok(Line::Item(ListStyle::Bullet, text.trim()));
    }

    if let Ok((_, text)) = numbered_item(line) {
        return Ok(Line::Item(ListStyle::Numbered, text.trim()));
    }

    if line.starts_with('|') {
        let (_, (label, value)) =
            pair(line).map_err(|_| syntax(number, "pair needs `| label | value`"))?;
        return Ok(Line::Pair(label, value));
    }

    if let Ok((_, text)) = marked('^', line) {
        let (text, link) = split_link(text);
        if text.is_empty() {
            return Err(syntax(number, "empty centered line"));
        }
        return Ok(Line::Centered { text, link });
    }

    if let Ok((_, text)) = marked('~', line) {
        let text = text.trim();
        if text.is_empty() {
            return Err(syntax(number, "empty emphasis line"));
        }
        return Ok(Line::Emphasis(text));
    }

    if let Ok((_, text)) = marked('!', line) {
        let text = text.trim();
        if text.is_empty() {
            return Err(syntax(number, "empty label"));
        }
        return Ok(Line::Label(text));
    }

    if let Ok((_, text)) = marked('_', line) {
        let text = text.trim();
        if text.is_empty() {
            return Err(syntax(number, "empty note"));
        }
        return Ok(Line::Note(text));
    }

    if line.starts_with('@') {
        if line.strip_prefix("@end").is_some_and(|r| r.trim().is_empty()) {
            return Ok(Line::SectionEnd);
        }
        let (_, heading) = marked('@', line).map_err(|_| syntax(number, "bad section marker"))?;
        let heading = heading.trim();
        if heading.is_empty() {
            return Err(syntax(number, "section needs a heading"));
        }
        return Ok(Line::SectionStart(heading));
    }

    Ok(Line::Text(line.trim()))
}

/// Lines that can extend the previous one
enum Pending {
    None,
    Paragraph(Vec<String>),
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Pairs(Vec<LabeledValue>),
}

struct OpenSection {
    heading: String,
    line: usize,
    children: Vec<ContentBlock>,
}

/// Builds the block tree one line at a time
struct BlockBuilder {
    root: Vec<ContentBlock>,
    sections: Vec<OpenSection>,
    pending: Pending,
}

impl BlockBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            sections: Vec::new(),
            pending: Pending::None,
        }
    }

    fn container(&mut self) -> &mut Vec<ContentBlock> {
        match self.sections.last_mut() {
            Some(section) => &mut section.children,
            None => &mut self.root,
        }
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => return,
            Pending::Paragraph(lines) => ContentBlock::paragraph(lines.join(" ")),
            Pending::List { style, items } => ContentBlock::List { items, style },
            Pending::Pairs(items) => ContentBlock::TwoColumnEntry { items },
        };
        self.container().push(block);
    }

    fn push(&mut self, block: ContentBlock) {
        self.flush();
        self.container().push(block);
    }

    fn text(&mut self, text: &str) {
        match &mut self.pending {
            Pending::Paragraph(lines) => lines.push(text.to_string()),
            _ => {
                self.flush();
                self.pending = Pending::Paragraph(vec![text.to_string()]);
            }
        }
    }

    fn item(&mut self, style: ListStyle, text: &str) {
        match &mut self.pending {
            Pending::List { style: current, items } if *current == style => {
                items.push(text.to_string())
            }
            _ => {
                self.flush();
                self.pending = Pending::List {
                    style,
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn continuation(&mut self, text: &str) {
        match &mut self.pending {
            Pending::List { items, .. } => {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(text);
                }
            }
            _ => self.text(text),
        }
    }

    fn pair(&mut self, label: &str, value: &str) {
        let entry = LabeledValue::new(label, value);
        match &mut self.pending {
            Pending::Pairs(items) => items.push(entry),
            _ => {
                self.flush();
                self.pending = Pending::Pairs(vec![entry]);
            }
        }
    }

    fn open_section(&mut self, heading: &str, line: usize) {
        self.flush();
        self.sections.push(OpenSection {
            heading: heading.to_string(),
            line,
            children: Vec::new(),
        });
    }

    fn close_section(&mut self, line: usize) -> Result<(), ParseError> {
        self.flush();
        let section = self
            .sections
            .pop()
            .ok_or(ParseError::UnexpectedSectionEnd { line })?;
        self.container()
            .push(ContentBlock::section(section.heading, section.children));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<ContentBlock>, ParseError> {
        self.flush();
        if let Some(section) = self.sections.pop() {
            return Err(ParseError::UnclosedSection {
                line: section.line,
                heading: section.heading,
            });
        }
        Ok(self.root)
    }
}

/// Parse the body of a resume file into content blocks.
///
/// Directive lines are skipped here; see [`super::header::parse_headers`].
pub fn parse_blocks(content: &str) -> Result<Vec<ContentBlock>, ParseError> {
    let mut builder = BlockBuilder::new();

    for (index, raw) in content.lines().enumerate() {
        let number = index + 1;
        match classify_line(raw, number)? {
            Line::Blank => builder.flush(),
            Line::Comment | Line::Directive => {}
            Line::Heading(level, text) => builder.push(ContentBlock::heading(level, text)),
            Line::Item(style, text) => builder.item(style, text),
            Line::Continuation(text) => builder.continuation(text),
            Line::Pair(label, value) => builder.pair(label, value),
            Line::Centered { text, link } => builder.push(ContentBlock::Centered {
                text: text.to_string(),
                link: link.map(String::from),
                emphasis: false,
            }),
            Line::Emphasis(text) => builder.push(ContentBlock::Centered {
                text: text.to_string(),
                link: None,
                emphasis: true,
            }),
            Line::Label(text) => builder.push(ContentBlock::label(text)),
            Line::Note(text) => builder.push(ContentBlock::note(text)),
            Line::SectionStart(heading) => builder.open_section(heading, number),
            Line::SectionEnd => builder.close_section(number)?,
            Line::Text(text) => builder.text(text),
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            classify_line("= JANE DOE", 1).unwrap(),
            Line::Heading(HeadingLevel::Title, "JANE DOE")
        );
        assert_eq!(
            classify_line("== Experience", 1).unwrap(),
            Line::Heading(HeadingLevel::Section, "Experience")
        );
        assert_eq!(
            classify_line("=== Data Engineer", 1).unwrap(),
            Line::Heading(HeadingLevel::Subsection, "Data Engineer")
        );
    }

    #[test]
    fn test_classify_heading_errors() {
        assert!(matches!(
            classify_line("==== Too deep", 4),
            Err(ParseError::Syntax { line: 4, .. })
        ));
        assert!(matches!(
            classify_line("==Missing space", 2),
            Err(ParseError::Syntax { line: 2, .. })
        ));
    }

    #[test]
    fn test_classify_list_items() {
        assert_eq!(
            classify_line("* Built pipelines", 1).unwrap(),
            Line::Item(ListStyle::Bullet, "Built pipelines")
        );
        assert_eq!(
            classify_line("- Built pipelines", 1).unwrap(),
            Line::Item(ListStyle::Bullet, "Built pipelines")
        );
        assert_eq!(
            classify_line("12. Shipped", 1).unwrap(),
            Line::Item(ListStyle::Numbered, "Shipped")
        );
        // No space after the marker: plain text
        assert_eq!(classify_line("-5 degrees", 1).unwrap(), Line::Text("-5 degrees"));
        assert_eq!(classify_line("2021 - 2023", 1).unwrap(), Line::Text("2021 - 2023"));
    }

    #[test]
    fn test_classify_pair() {
        assert_eq!(
            classify_line("| Cloud | AWS, GCP |", 1).unwrap(),
            Line::Pair("Cloud", "AWS, GCP")
        );
        assert!(matches!(
            classify_line("| Cloud AWS", 9),
            Err(ParseError::Syntax { line: 9, .. })
        ));
    }

    #[test]
    fn test_classify_centered_link() {
        assert_eq!(
            classify_line("^ linkedin.com/in/jane <https://linkedin.com/in/jane>", 1).unwrap(),
            Line::Centered {
                text: "linkedin.com/in/jane",
                link: Some("https://linkedin.com/in/jane"),
            }
        );
        assert_eq!(
            classify_line("^ Vancouver, Canada", 1).unwrap(),
            Line::Centered {
                text: "Vancouver, Canada",
                link: None,
            }
        );
    }

    #[test]
    fn test_classify_label_and_note() {
        assert_eq!(
            classify_line("! Responsibilities:", 1).unwrap(),
            Line::Label("Responsibilities:")
        );
        assert_eq!(
            classify_line("_ Vetted by three universities", 1).unwrap(),
            Line::Note("Vetted by three universities")
        );
    }

    #[test]
    fn test_empty_marked_lines_are_rejected() {
        assert!(matches!(
            classify_line("~", 5),
            Err(ParseError::Syntax { line: 5, .. })
        ));
        assert!(matches!(
            classify_line("~   ", 6),
            Err(ParseError::Syntax { line: 6, .. })
        ));
        assert!(matches!(
            classify_line("^ <https://example.com>", 7),
            Err(ParseError::Syntax { line: 7, .. })
        ));
        assert!(matches!(
            classify_line("!", 8),
            Err(ParseError::Syntax { line: 8, .. })
        ));
        assert!(matches!(
            classify_line("_", 9),
            Err(ParseError::Syntax { line: 9, .. })
        ));
    }

    #[test]
    fn test_label_ends_paragraph() {
        let blocks = parse_blocks("AERC | 2021
! Achievements:
1. Cut costs
_ Small print").unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("AERC | 2021"),
                ContentBlock::label("Achievements:"),
                ContentBlock::numbered(["Cut costs"]),
                ContentBlock::note("Small print"),
            ]
        );
    }

    #[test]
    fn test_classify_sections() {
        assert_eq!(
            classify_line("@ Data Engineer", 1).unwrap(),
            Line::SectionStart("Data Engineer")
        );
        assert_eq!(classify_line("@end", 1).unwrap(), Line::SectionEnd);
        assert!(matches!(
            classify_line("@", 3),
            Err(ParseError::Syntax { line: 3, .. })
        ));
    }

    #[test]
    fn test_paragraph_lines_join() {
        let blocks = parse_blocks("First line\nsecond line\n\nNext paragraph").unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::paragraph("First line second line"),
                ContentBlock::paragraph("Next paragraph"),
            ]
        );
    }

    #[test]
    fn test_list_continuation_and_style_switch() {
        let blocks = parse_blocks("* Led migration\n  to the cloud\n* Cut costs\n1. First\n2. Second")
            .unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::bullets(["Led migration to the cloud", "Cut costs"]),
                ContentBlock::numbered(["First", "Second"]),
            ]
        );
    }

    #[test]
    fn test_pairs_merge_into_one_table() {
        let blocks = parse_blocks("| Languages | Rust, Python\n| Cloud | AWS\n; note\n| Data | Spark").unwrap();
        assert_eq!(
            blocks,
            vec![ContentBlock::TwoColumnEntry {
                items: vec![
                    LabeledValue::new("Languages", "Rust, Python"),
                    LabeledValue::new("Cloud", "AWS"),
                    LabeledValue::new("Data", "Spark"),
                ],
            }]
        );
    }

    #[test]
    fn test_nested_sections() {
        let source = "\
@ Data Engineer
AERC | 2021 - 2023
* Built pipelines
@ Project
Detail
@end
@end
Trailing";
        let blocks = parse_blocks(source).unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::section(
                    "Data Engineer",
                    vec![
                        ContentBlock::paragraph("AERC | 2021 - 2023"),
                        ContentBlock::bullets(["Built pipelines"]),
                        ContentBlock::section("Project", vec![ContentBlock::paragraph("Detail")]),
                    ],
                ),
                ContentBlock::paragraph("Trailing"),
            ]
        );
    }

    #[test]
    fn test_unclosed_section() {
        let err = parse_blocks("Intro\n@ Education\nBSc").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnclosedSection { line: 2, ref heading } if heading == "Education"
        ));
    }

    #[test]
    fn test_unexpected_section_end() {
        let err = parse_blocks("Intro\n\n@end").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSectionEnd { line: 3 }));
    }

    #[test]
    fn test_directives_and_comments_are_skipped() {
        let blocks = parse_blocks("% Title: Jane\n; draft\n~ Referees available upon request").unwrap();
        assert_eq!(
            blocks,
            vec![ContentBlock::Centered {
                text: "Referees available upon request".to_string(),
                link: None,
                emphasis: true,
            }]
        );
    }
}

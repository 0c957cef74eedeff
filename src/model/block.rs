/// Heading levels, from the document title down to a job or degree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    Title,
    Section,
    Subsection,
}

/// Marker style for list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    #[default]
    Bullet,
    Numbered,
}

impl ListStyle {
    /// Prefix drawn before the first line of the item at `index` (0-based)
    pub fn prefix(&self, index: usize) -> String {
        match self {
            ListStyle::Bullet => "\u{2022} ".to_string(),
            ListStyle::Numbered => format!("{}. ", index + 1),
        }
    }
}

/// One label/value pair of a two-column table (e.g. a skill category)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Label as drawn in a table: terminated by a colon
    pub fn display_label(&self) -> String {
        let label = self.label.trim();
        if label.is_empty() || label.ends_with(':') {
            label.to_string()
        } else {
            format!("{}:", label)
        }
    }
}

/// A semantic unit of resume content, fully resolved before layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading {
        text: String,
        level: HeadingLevel,
    },
    Paragraph {
        text: String,
    },
    /// Bold body-size line introducing the content below it
    Label {
        text: String,
    },
    /// Small print, e.g. details under an education entry
    Note {
        text: String,
    },
    List {
        items: Vec<String>,
        style: ListStyle,
    },
    /// Pairs laid out two per row, column 0 first
    TwoColumnEntry {
        items: Vec<LabeledValue>,
    },
    /// Grouped content whose heading is never left alone at the bottom of a page
    KeyedSection {
        heading: String,
        children: Vec<ContentBlock>,
    },
    /// A line centered between the margins, optionally linked
    Centered {
        text: String,
        link: Option<String>,
        emphasis: bool,
    },
}

impl ContentBlock {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn label(text: impl Into<String>) -> Self {
        ContentBlock::Label { text: text.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        ContentBlock::Note { text: text.into() }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            items: items.into_iter().map(Into::into).collect(),
            style: ListStyle::Bullet,
        }
    }

    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::List {
            items: items.into_iter().map(Into::into).collect(),
            style: ListStyle::Numbered,
        }
    }

    pub fn section(heading: impl Into<String>, children: Vec<ContentBlock>) -> Self {
        ContentBlock::KeyedSection {
            heading: heading.into(),
            children,
        }
    }

    /// All source text of the block in reading order, split into words
    pub fn words(&self) -> Vec<&str> {
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text }
            | ContentBlock::Label { text }
            | ContentBlock::Note { text }
            | ContentBlock::Centered { text, .. } => text.split_whitespace().collect(),
            ContentBlock::List { items, .. } => {
                items.iter().flat_map(|i| i.split_whitespace()).collect()
            }
            ContentBlock::TwoColumnEntry { items } => items
                .iter()
                .flat_map(|p| p.label.split_whitespace().chain(p.value.split_whitespace()))
                .collect(),
            ContentBlock::KeyedSection { heading, children } => heading
                .split_whitespace()
                .chain(children.iter().flat_map(|c| c.words()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prefixes() {
        assert_eq!(ListStyle::Bullet.prefix(0), "\u{2022} ");
        assert_eq!(ListStyle::Bullet.prefix(7), "\u{2022} ");
        assert_eq!(ListStyle::Numbered.prefix(0), "1. ");
        assert_eq!(ListStyle::Numbered.prefix(9), "10. ");
    }

    #[test]
    fn test_display_label_adds_single_colon() {
        assert_eq!(LabeledValue::new("Cloud", "AWS").display_label(), "Cloud:");
        assert_eq!(LabeledValue::new("Cloud:", "AWS").display_label(), "Cloud:");
        assert_eq!(LabeledValue::new("", "AWS").display_label(), "");
    }

    #[test]
    fn test_section_words_follow_reading_order() {
        let block = ContentBlock::section(
            "Data Engineer",
            vec![
                ContentBlock::paragraph("AERC | 2021"),
                ContentBlock::TwoColumnEntry {
                    items: vec![LabeledValue::new("Cloud", "AWS, GCP")],
                },
            ],
        );
        assert_eq!(
            block.words(),
            vec!["Data", "Engineer", "AERC", "|", "2021", "Cloud", "AWS,", "GCP"]
        );
    }
}

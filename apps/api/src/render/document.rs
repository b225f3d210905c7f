//! Format-independent document model produced by the builder and consumed by
//! the writers. Paragraph-level layout (alignment, indent, role) and
//! run-level styling (bold, underline, size, colour, link) are explicit so a
//! writer never has to know which résumé section a paragraph came from.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0, 0, 255);

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// A styled span of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub underline: bool,
    /// Font size override in points; `None` inherits the document default.
    pub size_pt: Option<f32>,
    pub color: Option<Rgb>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Run::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn sized(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(Run),
    Link { target: String, run: Run },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(run) | Inline::Link { run, .. } => &run.text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// What a paragraph is, structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    /// The applicant's name.
    Title,
    /// A section heading.
    Heading,
    Body,
    /// A bulleted list item.
    Bullet,
    /// Empty line used for vertical spacing.
    Spacer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub role: ParagraphRole,
    pub align: Align,
    pub indent_pt: f32,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new(role: ParagraphRole) -> Self {
        Paragraph {
            role,
            align: Align::Left,
            indent_pt: 0.0,
            inlines: Vec::new(),
        }
    }

    pub fn body(run: Run) -> Self {
        Paragraph::new(ParagraphRole::Body).with(Inline::Text(run))
    }

    pub fn spacer() -> Self {
        Paragraph::new(ParagraphRole::Spacer)
    }

    pub fn with(mut self, inline: Inline) -> Self {
        self.inlines.push(inline);
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn indented(mut self, indent_pt: f32) -> Self {
        self.indent_pt = indent_pt;
        self
    }

    /// Concatenated visible text of every inline.
    pub fn text(&self) -> String {
        self.inlines.iter().map(Inline::text).collect()
    }

    #[cfg(test)]
    pub fn is_bold(&self) -> bool {
        !self.inlines.is_empty()
            && self.inlines.iter().all(|inline| match inline {
                Inline::Text(run) | Inline::Link { run, .. } => run.bold,
            })
    }

    #[cfg(test)]
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inlines.iter().filter_map(|inline| match inline {
            Inline::Link { target, run } => Some((target.as_str(), run.text.as_str())),
            Inline::Text(_) => None,
        })
    }
}

/// The paragraphs rendered for one input section, tagged with its title.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Running page header, if any.
    pub header: Option<Paragraph>,
    pub blocks: Vec<SectionBlock>,
}

impl Document {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.blocks.is_empty()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().flat_map(|block| block.paragraphs.iter())
    }
}

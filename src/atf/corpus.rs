//! Corpus lines
//!
//!     A chapter line of the corpus pairs a reconstructed line with the witnesses for it:
//!     one transliterated line per manuscript, located on the manuscript by its labels
//!     (`o iii'`). A location is at most one surface followed by at most one column.
//!
//!     Manuscript lines travel as `{manuscriptId, labels, atf}` with short-form labels and
//!     the line as ATF; [`ManuscriptLineDto`] converts both ways.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::atf::ast::error::{LabelError, ParseError, ParseErrorKind};
use crate::atf::ast::labels::{parse_labels, ColumnLabel, Label, SurfaceLabel};
use crate::atf::ast::lines::{Line, TextLine};
use crate::atf::parsing::parse_line;
use crate::atf::reconstruction::{parse_reconstructed_line, ReconstructionToken};

static LINE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s.]\S*\.$").unwrap());

/// A corpus line number in ATF form, e.g. `1.`, `2'.` or `a+1.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineNumber(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumberError {
    pub number: String,
}

impl fmt::Display for LineNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid line number \"{}\"", self.number)
    }
}

impl std::error::Error for LineNumberError {}

impl LineNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, LineNumberError> {
        let number = number.into();
        if LINE_NUMBER.is_match(&number) {
            Ok(Self(number))
        } else {
            Err(LineNumberError { number })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineNumber {
    type Error = LineNumberError;

    fn try_from(number: String) -> Result<Self, Self::Error> {
        LineNumber::new(number)
    }
}

impl From<LineNumber> for String {
    fn from(number: LineNumber) -> Self {
        number.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a line on a manuscript. Ordered by surface, then column.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManuscriptLabels {
    pub surface: Option<SurfaceLabel>,
    pub column: Option<ColumnLabel>,
}

impl ManuscriptLabels {
    pub fn labels(&self) -> Vec<Label> {
        self.surface
            .iter()
            .cloned()
            .map(Label::Surface)
            .chain(self.column.iter().cloned().map(Label::Column))
            .collect()
    }

    /// Short form, e.g. `o iii'`.
    pub fn to_value(&self) -> String {
        self.labels()
            .iter()
            .map(Label::to_value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<Vec<Label>> for ManuscriptLabels {
    type Error = LabelError;

    fn try_from(labels: Vec<Label>) -> Result<Self, Self::Error> {
        let invalid = |labels: &[Label]| {
            LabelError::InvalidCombination(
                labels
                    .iter()
                    .map(Label::to_value)
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };
        let mut result = ManuscriptLabels::default();
        for label in &labels {
            match label {
                Label::Surface(surface) if result.surface.is_none() && result.column.is_none() => {
                    result.surface = Some(surface.clone());
                }
                Label::Column(column) if result.column.is_none() => {
                    result.column = Some(column.clone());
                }
                _ => return Err(invalid(&labels)),
            }
        }
        Ok(result)
    }
}

/// One manuscript's witness for a chapter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptLine {
    pub manuscript_id: u32,
    pub labels: ManuscriptLabels,
    pub line: TextLine,
}

impl ManuscriptLine {
    pub fn new(manuscript_id: u32, labels: Vec<Label>, line: TextLine) -> Result<Self, LabelError> {
        Ok(Self {
            manuscript_id,
            labels: ManuscriptLabels::try_from(labels)?,
            line,
        })
    }

    pub fn atf(&self) -> String {
        Line::Text(self.line.clone()).atf()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    Label(LabelError),
    Parse(ParseError),
    LineNumber(LineNumberError),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Label(error) => write!(f, "{}", error),
            CorpusError::Parse(error) => write!(f, "{}", error),
            CorpusError::LineNumber(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<LabelError> for CorpusError {
    fn from(error: LabelError) -> Self {
        CorpusError::Label(error)
    }
}

impl From<ParseError> for CorpusError {
    fn from(error: ParseError) -> Self {
        CorpusError::Parse(error)
    }
}

impl From<LineNumberError> for CorpusError {
    fn from(error: LineNumberError) -> Self {
        CorpusError::LineNumber(error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptLineDto {
    pub manuscript_id: u32,
    pub labels: Vec<String>,
    pub atf: String,
}

impl From<&ManuscriptLine> for ManuscriptLineDto {
    fn from(line: &ManuscriptLine) -> Self {
        Self {
            manuscript_id: line.manuscript_id,
            labels: line.labels.labels().iter().map(Label::to_value).collect(),
            atf: line.atf(),
        }
    }
}

impl TryFrom<ManuscriptLineDto> for ManuscriptLine {
    type Error = CorpusError;

    /// The ATF must be a single text line.
    fn try_from(dto: ManuscriptLineDto) -> Result<Self, Self::Error> {
        let labels = parse_labels(&dto.labels.join(" "))?;
        let line = match parse_line(&dto.atf, 1)? {
            Line::Text(line) => line,
            _ => return Err(ParseError::new(1, &dto.atf, ParseErrorKind::InvalidLine).into()),
        };
        Ok(ManuscriptLine::new(dto.manuscript_id, labels, line)?)
    }
}

/// A chapter line: number, reconstruction and the manuscript witnesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterLine {
    pub number: LineNumber,
    pub reconstruction: Vec<ReconstructionToken>,
    pub manuscripts: Vec<ManuscriptLine>,
}

impl ChapterLine {
    pub fn parse(
        number: &str,
        reconstruction: &str,
        manuscripts: Vec<ManuscriptLine>,
    ) -> Result<Self, CorpusError> {
        Ok(Self {
            number: LineNumber::new(number)?,
            reconstruction: parse_reconstructed_line(reconstruction)?,
            manuscripts,
        })
    }

    pub fn reconstruction_atf(&self) -> String {
        self.reconstruction
            .iter()
            .map(ReconstructionToken::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

//! Input parsing and validation
//!
//! [`parse_and_validate_inputs`] is the pure validator. [`InputSession`]
//! wraps it for the interactive prompt loop so the re-prompt rules can be
//! tested without simulating a terminal.

use std::fmt;
use thiserror::Error;

/// One of the four values a run needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
    Columns,
    Rows,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Start, Field::End, Field::Columns, Field::Rows];

    /// Prompt shown when asking for this field
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Start => "Starting Number: ",
            Field::End => "Ending Number: ",
            Field::Columns => "Number of columns on the sheet: ",
            Field::Rows => "Number of rows on the sheet: ",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Start => 0,
            Field::End => 1,
            Field::Columns => 2,
            Field::Rows => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Start => "starting number",
            Field::End => "ending number",
            Field::Columns => "columns",
            Field::Rows => "rows",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{input}' is not a whole number for the {field}. Please enter valid whole numbers.")]
    NotAnInteger { field: Field, input: String },
    #[error("Starting number must be smaller than ending number. Please try again! (got {start} > {end})")]
    InvalidRange { start: i64, end: i64 },
    #[error("Number of columns and rows must be greater than 0. Please try again! (got {columns}x{rows})")]
    InvalidGrid { columns: i64, rows: i64 },
    #[error("Number of {field} must be greater than 0. Please try again! (got {value})")]
    NotPositive { field: Field, value: i64 },
}

/// Inclusive range of label numbers, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRange {
    start: i64,
    end: i64,
}

impl LabelRange {
    pub fn new(start: i64, end: i64) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of labels in the range (never zero)
    pub fn len(&self) -> u64 {
        u64::try_from(self.end as i128 - self.start as i128 + 1).unwrap_or(u64::MAX)
    }

    /// Label values in ascending order
    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

/// Columns × rows of labels on one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    columns: usize,
    rows: usize,
}

impl GridSpec {
    pub fn new(columns: i64, rows: i64) -> Result<Self, ValidationError> {
        let invalid = ValidationError::InvalidGrid { columns, rows };
        if columns <= 0 || rows <= 0 {
            return Err(invalid);
        }
        let (Ok(cols), Ok(rws)) = (usize::try_from(columns), usize::try_from(rows)) else {
            return Err(invalid);
        };
        if cols.checked_mul(rws).is_none() {
            return Err(invalid);
        }
        Ok(Self {
            columns: cols,
            rows: rws,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn labels_per_sheet(&self) -> usize {
        self.columns * self.rows
    }
}

/// Everything a generation run needs, already checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedParams {
    pub range: LabelRange,
    pub grid: GridSpec,
}

impl ValidatedParams {
    pub fn new(start: i64, end: i64, columns: i64, rows: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            range: LabelRange::new(start, end)?,
            grid: GridSpec::new(columns, rows)?,
        })
    }

    /// Default output file name: `ASNLabels_{start}to{end}_{cols}x{rows}_bracodes.pdf`
    pub fn output_filename(&self) -> String {
        format!(
            "ASNLabels_{}to{}_{}x{}_bracodes.pdf",
            self.range.start(),
            self.range.end(),
            self.grid.columns(),
            self.grid.rows()
        )
    }
}

/// Unparsed answers, as typed by the user
#[derive(Debug, Clone, Copy)]
pub struct RawInputs<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub columns: &'a str,
    pub rows: &'a str,
}

/// Parse a whole number, ignoring surrounding whitespace
pub fn parse_integer(field: Field, input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            input: input.trim().to_string(),
        })
}

pub fn validate_range(start: i64, end: i64) -> Result<LabelRange, ValidationError> {
    LabelRange::new(start, end)
}

pub fn validate_grid(columns: i64, rows: i64) -> Result<GridSpec, ValidationError> {
    GridSpec::new(columns, rows)
}

/// Parse and check all four inputs.
///
/// Fields are checked in prompt order, so the first error reported is the
/// one the interactive loop would have hit first.
pub fn parse_and_validate_inputs(raw: &RawInputs<'_>) -> Result<ValidatedParams, ValidationError> {
    let start = parse_integer(Field::Start, raw.start)?;
    let end = parse_integer(Field::End, raw.end)?;
    let range = validate_range(start, end)?;
    let columns = parse_integer(Field::Columns, raw.columns)?;
    let rows = parse_integer(Field::Rows, raw.rows)?;
    let grid = validate_grid(columns, rows)?;
    Ok(ValidatedParams { range, grid })
}

/// Outcome of feeding one answer to an [`InputSession`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    /// Ask for this field next
    Ask(Field),
    /// The answer was rejected; show the message and ask for the field again
    Retry { error: ValidationError, next: Field },
    /// All four values are present and valid
    Done(ValidatedParams),
}

/// State machine behind the interactive prompts.
///
/// Values given up front (e.g. from command-line flags) are kept across
/// retries; prompted values are discarded whenever any check fails, and
/// prompting restarts at the first missing field.
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    preset: [Option<i64>; 4],
    answers: [Option<i64>; 4],
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with some fields already known.
    ///
    /// Fails if the known fields already contradict each other, since no
    /// amount of prompting could fix that.
    pub fn with_presets(
        start: Option<i64>,
        end: Option<i64>,
        columns: Option<i64>,
        rows: Option<i64>,
    ) -> Result<Self, ValidationError> {
        if let (Some(s), Some(e)) = (start, end) {
            validate_range(s, e)?;
        }
        for (field, value) in [(Field::Columns, columns), (Field::Rows, rows)] {
            if let Some(value) = value.filter(|&v| v <= 0) {
                return Err(ValidationError::NotPositive { field, value });
            }
        }
        if let (Some(c), Some(r)) = (columns, rows) {
            validate_grid(c, r)?;
        }

        let preset = [start, end, columns, rows];
        Ok(Self {
            preset,
            answers: preset,
        })
    }

    /// The next field that still needs an answer
    pub fn next_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.answers[field.index()].is_none())
    }

    /// Current step without submitting anything
    pub fn step(&self) -> SessionStep {
        match self.answers {
            [Some(s), Some(e), Some(c), Some(r)] => match ValidatedParams::new(s, e, c, r) {
                Ok(params) => SessionStep::Done(params),
                Err(error) => SessionStep::Retry {
                    error,
                    next: Field::Start,
                },
            },
            _ => SessionStep::Ask(self.next_field().unwrap_or(Field::Start)),
        }
    }

    /// Feed the answer for the current field
    pub fn submit(&mut self, line: &str) -> SessionStep {
        let Some(field) = self.next_field() else {
            return self.step();
        };

        let value = match parse_integer(field, line) {
            Ok(value) => value,
            Err(error) => return self.reject(error),
        };
        self.answers[field.index()] = Some(value);

        if let Err(error) = self.check_partial() {
            return self.reject(error);
        }

        self.step()
    }

    fn check_partial(&self) -> Result<(), ValidationError> {
        let [start, end, columns, rows] = self.answers;
        if let (Some(s), Some(e)) = (start, end) {
            validate_range(s, e)?;
        }
        if let (Some(c), Some(r)) = (columns, rows) {
            validate_grid(c, r)?;
        }
        Ok(())
    }

    fn reject(&mut self, error: ValidationError) -> SessionStep {
        self.answers = self.preset;
        SessionStep::Retry {
            error,
            next: self.next_field().unwrap_or(Field::Start),
        }
    }
}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `[ts] thread logger SEV message`
static RE_LOGGER_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x)
        ^\[ (?P<timestamp>[^\]]+) \]
        \s+ (?P<thread>\S+)
        \s+ (?P<logger>\S+)
        \s+ (?P<severity>[A-Z]+)
        \s+ (?P<message>.*)
        $")
    .expect("logger-first line pattern")
});

// `[ts] thread component SEV dotted.logger message`
static RE_COMPONENT_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?x)
        ^\[ (?P<timestamp>[^\]]+) \]
        \s+ (?P<thread>\S+)
        \s+ (?P<component>\S+)
        \s+ (?P<severity>[A-Z]+)
        \s+ (?P<logger>[\w.$]+)
        \s+ (?P<message>.*)
        $")
    .expect("component-first line pattern")
});

/// Structural line shapes understood by the parser, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// `[timestamp] thread logger SEVERITY message`
    LoggerFirst,
    /// `[timestamp] thread component SEVERITY logger message`
    ComponentFirst,
}

impl LineShape {
    pub const ALL: [LineShape; 2] = [LineShape::LoggerFirst, LineShape::ComponentFirst];

    fn regex(self) -> &'static Regex {
        match self {
            LineShape::LoggerFirst => &RE_LOGGER_FIRST,
            LineShape::ComponentFirst => &RE_COMPONENT_FIRST,
        }
    }

    /// Try this one shape against a line.
    pub fn extract(self, line: &str) -> Option<LineFields> {
        let caps = self.regex().captures(line)?;
        Some(LineFields::from_captures(self, &caps))
    }
}

/// Raw fields captured from a header line, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields {
    pub shape: LineShape,
    pub timestamp: String,
    pub thread: String,
    pub component: Option<String>,
    pub severity: String,
    pub logger: Option<String>,
    pub message: String,
}

impl LineFields {
    fn from_captures(shape: LineShape, caps: &Captures<'_>) -> Self {
        let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
        LineFields {
            shape,
            timestamp: group("timestamp").unwrap_or_default(),
            thread: group("thread").unwrap_or_default(),
            component: group("component"),
            severity: group("severity").unwrap_or_default(),
            logger: group("logger"),
            message: caps
                .name("message")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Classify a trimmed line. `None` means the line starts no new record.
pub fn classify_line(line: &str) -> Option<LineFields> {
    LineShape::ALL.iter().find_map(|shape| shape.extract(line))
}

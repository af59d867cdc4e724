use crate::parser::base::{DispatchError, ErrorContext};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Target 95% of the total width, so the renderer never runs right up to the terminal edge.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Assuming an average word length of 5, 17 allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders a name column followed by a wrapped description column.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    padding: usize,
    left: usize,
    middle: usize,
}

impl ColumnRenderer {
    /// Produce a renderer whose middle column fits the `total_width`, when possible.
    /// The middle column is never narrower than `MINIMUM_MIDDLE_WIDTH`.
    pub(crate) fn guided(
        indent: usize,
        padding: usize,
        left: usize,
        middle: usize,
        total_width: usize,
    ) -> Self {
        let non_middle = indent + left + padding;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        let middle = if guided_middle + non_middle <= target_total_width {
            guided_middle
        } else if non_middle < total_width {
            std::cmp::max(total_width - non_middle, MINIMUM_MIDDLE_WIDTH)
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_middle} within total {total_width}.  Selecting middle: {middle}.");
        }

        Self::new(indent, padding, left, middle)
    }

    pub(crate) fn new(indent: usize, padding: usize, left: usize, middle: usize) -> Self {
        assert!(middle >= 2, "internal error - middle must allow hyphenation");
        Self {
            indent,
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str) -> Vec<String> {
        let ColumnRenderer {
            indent,
            padding,
            left: left_width,
            middle: middle_width,
        } = *self;
        let mut out = Vec::default();

        for (i, part) in chunk(middle, middle_width).iter().enumerate() {
            let name = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{name:left_width$}{:padding$}{part}",
                "", ""
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

/// Break the `paragraph` into lines of at most `width` characters, hyphenating words that don't fit on a line of their own.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// Where the dispatcher writes its output.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: DispatchError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: DispatchError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

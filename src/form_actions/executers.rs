// src/form_actions/executers.rs

use bevy::log::{debug, info};
use rand::Rng;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::resources::{ActionError, NumberFileSettings};

/// Builds the greeting for `name` exactly as typed, or `None` when the entry is empty.
pub fn greeting_for(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(format!("Hello, {}!", name))
    }
}

pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ActionError> {
    raw.trim().parse::<f64>().map_err(|_| ActionError::InvalidNumber {
        field,
        input: raw.to_string(),
    })
}

/// Results of the four basic operations on two numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticReport {
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// `None` when the divisor is zero.
    pub quotient: Option<f64>,
}

pub fn calculate(first: f64, second: f64) -> ArithmeticReport {
    ArithmeticReport {
        sum: first + second,
        difference: first - second,
        product: first * second,
        quotient: if second == 0.0 { None } else { Some(first / second) },
    }
}

impl ArithmeticReport {
    pub fn render(&self) -> String {
        let quotient = match self.quotient {
            Some(q) => format_number(q),
            None => "Division by zero is impossible".to_string(),
        };
        format!(
            "Sum: {}\nDifference: {}\nProduct: {}\nQuotient: {}",
            format_number(self.sum),
            format_number(self.difference),
            format_number(self.product),
            quotient
        )
    }
}

// Debug keeps the fractional part on whole numbers ("3.0", not "3"); the
// exponent is rewritten to carry a sign and two digits ("1e+16", "1e-05").
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{:?}", value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Writes `settings.file_count` files of random integers into `directory`,
/// creating it first if needed. Returns the written paths in index order.
pub fn generate_number_files<R: Rng>(
    directory: &str,
    settings: &NumberFileSettings,
    rng: &mut R,
) -> Result<Vec<PathBuf>, ActionError> {
    let directory = directory.trim();
    if directory.is_empty() {
        return Err(ActionError::DirectoryNotSelected);
    }
    if settings.value_range.is_empty() {
        return Err(ActionError::FileGeneration(format!(
            "empty value range {:?}",
            settings.value_range
        )));
    }

    let target = Path::new(directory);
    fs::create_dir_all(target).map_err(|e| {
        ActionError::FileGeneration(format!("cannot create {}: {}", target.display(), e))
    })?;

    let mut written = Vec::with_capacity(settings.file_count);
    for index in 1..=settings.file_count {
        let path = target.join(settings.file_name(index));
        let contents = (0..settings.numbers_per_file)
            .map(|_| rng.random_range(settings.value_range.clone()).to_string())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, contents).map_err(|e| {
            ActionError::FileGeneration(format!("cannot write {}: {}", path.display(), e))
        })?;
        debug!("FormActions: Wrote {} numbers to {:?}", settings.numbers_per_file, path);
        written.push(path);
    }

    info!("FormActions: Generated {} number files in {:?}", written.len(), target);
    Ok(written)
}

/// Arithmetic mean of a set of integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mean {
    /// The sum divided evenly.
    Exact(i64),
    Fractional(f64),
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mean::Exact(value) => write!(f, "{}", value),
            Mean::Fractional(value) => write!(f, "{}", format_number(*value)),
        }
    }
}

pub fn mean_of(numbers: &[i64]) -> Option<Mean> {
    if numbers.is_empty() {
        return None;
    }
    let count = numbers.len() as i128;
    let sum: i128 = numbers.iter().map(|&n| n as i128).sum();
    if sum % count == 0 {
        // The mean of i64 values always fits back into i64.
        Some(Mean::Exact((sum / count) as i64))
    } else {
        Some(Mean::Fractional(sum as f64 / count as f64))
    }
}

fn is_digit_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Collects the integers of `text`, one per line. Only lines made of ASCII
/// digits count, so signed values are skipped; a value that overflows `i64`
/// is an error.
pub fn parse_numbers(text: &str, source: &Path) -> Result<Vec<i64>, ActionError> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_digit_line(line))
        .map(|line| {
            line.parse::<i64>()
                .map_err(|_| ActionError::DataProcessing(source.to_path_buf()))
        })
        .collect()
}

pub fn average_of_file(path: &str) -> Result<Mean, ActionError> {
    if path.trim().is_empty() {
        return Err(ActionError::FileNotSelected);
    }
    let source = Path::new(path);
    let text = fs::read_to_string(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ActionError::FileNotFound(source.to_path_buf()),
        ErrorKind::InvalidData => ActionError::DataProcessing(source.to_path_buf()),
        _ => ActionError::from(e),
    })?;

    let numbers = parse_numbers(&text, source)?;
    debug!("FormActions: Read {} numbers from {:?}", numbers.len(), source);
    mean_of(&numbers).ok_or(ActionError::NoNumbers)
}

use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const FOLDER_PROMPT: &str = "Enter the folder path:";
pub const FORMAT_PROMPT: &str = "Enter the file format (JSON/CSV):";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    pub folder: String,
    pub format: String,
}

/// Prints the question on its own line and reads one trimmed answer.
/// End of input reads as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn read_answers<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PromptAnswers> {
    let folder = ask(input, output, FOLDER_PROMPT)?;
    let format = ask(input, output, FORMAT_PROMPT)?;
    Ok(PromptAnswers { folder, format })
}

/// Blocks until one more line (or end of input) arrives.
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

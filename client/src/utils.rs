use std::io::{self, BufRead, Write};

/// Prompts on stderr and reads one line from stdin. Empty input or EOF
/// yields `default_value`. Stdout is left for the dumps and `--find-id`.
pub fn get_input_with_default(prompt: &str, default_value: &str) -> io::Result<String> {
    let stdin = io::stdin();
    read_input_with_default(&mut stdin.lock(), &mut io::stderr(), prompt, default_value)
}

fn read_input_with_default(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    default_value: &str,
) -> io::Result<String> {
    write!(output, "{} [default: {}]: ", prompt, default_value)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed_input = line.trim();
    if trimmed_input.is_empty() {
        Ok(default_value.to_string())
    } else {
        Ok(trimmed_input.to_string())
    }
}

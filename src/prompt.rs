use std::io::{self, BufRead, Write};

/// Reads menu selections from a line-oriented input.
pub struct SelectionPrompt<R, W> {
    input: R,
    output: W,
}

impl SelectionPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SelectionPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` as-is (menus, headings).
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Ask until the user enters an integer in `lower..=upper`.
    ///
    /// Bad input re-prompts indefinitely; only a closed input ends the loop,
    /// as `UnexpectedEof`.
    pub fn prompt_integer(&mut self, lower: i64, upper: i64) -> io::Result<i64> {
        let mut line = String::new();
        loop {
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid selection was entered",
                ));
            }

            match line.trim().parse::<i64>() {
                Ok(v) if (lower..=upper).contains(&v) => return Ok(v),
                Ok(_) => writeln!(
                    self.output,
                    "Please enter an integer between {lower} and {upper}."
                )?,
                Err(_) => writeln!(self.output, "Please enter a valid integer.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str, lower: i64, upper: i64) -> (io::Result<i64>, String) {
        let mut out = Vec::new();
        let result = SelectionPrompt::new(input.as_bytes(), &mut out).prompt_integer(lower, upper);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn first_valid_value_wins() {
        let (value, _) = prompt("4\n9\n", 1, 11);
        assert_eq!(value.unwrap(), 4);
    }

    #[test]
    fn reprompts_until_in_range() {
        let (value, out) = prompt("abc\n0\n12\n-3\n 7 \n2\n", 1, 11);
        assert_eq!(value.unwrap(), 7);
        assert_eq!(out.matches("Enter your choice: ").count(), 5);
        assert_eq!(out.matches("Please enter a valid integer.").count(), 1);
        assert_eq!(
            out.matches("Please enter an integer between 1 and 11.").count(),
            3
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(prompt("1\n", 1, 8).0.unwrap(), 1);
        assert_eq!(prompt("8\n", 1, 8).0.unwrap(), 8);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (value, out) = prompt("x\n", 1, 7);
        assert_eq!(value.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
        assert!(out.contains("Please enter a valid integer."));
    }
}

use super::*;
use std::io::BufRead;

/// Reads one answer per line from any buffered source, such as stdin when it
/// is not a terminal. Prompts are not echoed. Bytes that are not UTF-8 are
/// replaced rather than rejected, so a garbled line is just a wrong answer.
pub struct Piped<R>(R);

impl<R> Piped<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<R> Player for Piped<R>
where
    R: BufRead,
{
    fn answer(&mut self, _: &str) -> anyhow::Result<Option<String>> {
        let ref mut bytes = Vec::new();
        match self.0.read_until(b'\n', bytes)? {
            0 => Ok(None),
            _ => Ok(Some(
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn one_answer_per_line() {
        let mut player = Piped::new(Cursor::new("1\r\n?\nexit"));
        assert_eq!(player.answer("").unwrap().as_deref(), Some("1"));
        assert_eq!(player.answer("").unwrap().as_deref(), Some("?"));
        assert_eq!(player.answer("").unwrap().as_deref(), Some("exit"));
        assert_eq!(player.answer("").unwrap(), None);
    }

    #[test]
    fn garbled_line_is_an_answer() {
        let mut player = Piped::new(Cursor::new(&b"\xff\xfe\n2\n"[..]));
        let garbled = player.answer("").unwrap().unwrap();
        assert!(garbled.chars().all(|c| c == char::REPLACEMENT_CHARACTER));
        assert_eq!(player.answer("").unwrap().as_deref(), Some("2"));
        assert_eq!(player.answer("").unwrap(), None);
    }

    #[test]
    fn blank_line_is_an_answer() {
        let mut player = Piped::new(Cursor::new("\n"));
        assert_eq!(player.answer("").unwrap().as_deref(), Some(""));
        assert_eq!(player.answer("").unwrap(), None);
    }
}

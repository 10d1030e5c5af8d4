use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use war_core::{Map, Territory};

const MAX_TERRITORIES: usize = 64;

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// What the player typed at a prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Quit,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Reads one trimmed line. `None` on end of input.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_owned()))
    }

    /// Asks until the answer parses. `q` or end of input quits.
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<Answer<T>> {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(Answer::Quit);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(Answer::Quit);
            }
            match line.parse() {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(_) => self.say(&format!("`{line}` is not valid, try again."))?,
            }
        }
    }

    /// Asks for a non-empty word.
    pub fn ask_word(&mut self, prompt: &str) -> Result<Answer<String>> {
        loop {
            match self.line(prompt)? {
                None => return Ok(Answer::Quit),
                Some(word) if word.is_empty() => self.say("A value is required.")?,
                Some(word) => return Ok(Answer::Value(word)),
            }
        }
    }

    /// Prompts for the territories of a new game. `None` if the player quits.
    pub fn register_territories(&mut self) -> Result<Option<Map>> {
        let count = loop {
            match self.ask::<usize>("How many territories? ")? {
                Answer::Value(count) if count <= MAX_TERRITORIES => break count,
                Answer::Value(count) => self.say(&format!(
                    "{count} is too many, the map holds at most {MAX_TERRITORIES}."
                ))?,
                Answer::Quit => return Ok(None),
            }
        };

        self.say("\n=== Territory registration ===")?;
        let mut territories = Vec::new();
        for i in 0..count {
            self.say(&format!("Territory {}:", i + 1))?;
            let Answer::Value(name) = self.ask_word("Name: ")? else {
                return Ok(None);
            };
            let Answer::Value(faction) = self.ask_word("Faction: ")? else {
                return Ok(None);
            };
            let Answer::Value(troops) = self.ask::<u32>("Troops: ")? else {
                return Ok(None);
            };
            territories.push(Territory::new(name, faction, troops));
            self.say("")?;
        }
        Ok(Some(Map::new(territories)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_retries_until_it_parses() {
        let mut c = console("abc\n-1\n3\n");
        assert_eq!(Answer::Value(3u32), c.ask::<u32>("n? ").unwrap());
        let printed = String::from_utf8(c.output).unwrap();
        assert!(printed.contains("`abc` is not valid"));
        assert!(printed.contains("`-1` is not valid"));
    }

    #[test]
    fn quit_and_eof_both_stop() {
        let mut c = console("Q\n");
        assert_eq!(Answer::Quit, c.ask::<usize>("n? ").unwrap());
        let mut c = console("");
        assert_eq!(Answer::Quit, c.ask::<usize>("n? ").unwrap());
    }

    #[test]
    fn registers_territories_in_order() {
        let mut c = console("2\nAlpha\nred\n10\nBeta\nblue\n4\n");
        let map = c.register_territories().unwrap().unwrap();
        assert_eq!(2, map.len());
        let beta = map.get(1).unwrap();
        assert_eq!(("Beta", "blue", 4), (beta.name(), beta.faction(), beta.troops()));
    }

    #[test]
    fn oversized_count_is_asked_again() {
        let mut c = console("18446744073709551615\n1000000000000\n1\nAlpha\nred\n3\n");
        let map = c.register_territories().unwrap().unwrap();
        assert_eq!(1, map.len());
        let printed = String::from_utf8(c.output).unwrap();
        assert!(printed.contains("18446744073709551615 is too many"));
        assert!(printed.contains("1000000000000 is too many"));

        let mut c = console("18446744073709551615\nq\n");
        assert!(c.register_territories().unwrap().is_none());
    }

    #[test]
    fn registration_can_be_abandoned() {
        let mut c = console("2\nAlpha\n");
        assert!(c.register_territories().unwrap().is_none());
    }
}

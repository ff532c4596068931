//! Interactive console input.
//!
//! `ConsolePrompter` asks for applicant records and stage results line by
//! line. Unparseable answers are reported and asked again; only a closed
//! input stream ends the session.

use anyhow::{bail, Result};
use roster::parser::{parse_fee_paid, parse_score};
use roster::{Candidate, CandidateId, RosterEntry};
use sources::StageInputSource;
use std::io::{BufRead, Write};

pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", prompt.trim_end());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until a non-empty answer is given
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.read_line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask until `parse` accepts the answer
    pub fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> roster::Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "  {err}, please try again")?,
            }
        }
    }

    /// Ask for one applicant's name and academic record
    pub fn ask_applicant(&mut self) -> Result<RosterEntry> {
        let name = self.ask_text("Name: ")?;
        let matric = self.ask_parsed("Matric Marks: ", |v| parse_score("matric marks", v))?;
        let fsc = self.ask_parsed("FSC Marks: ", |v| parse_score("FSC marks", v))?;
        Ok(RosterEntry::new(name, matric, fsc))
    }
}

impl<R: BufRead, W: Write> StageInputSource for ConsolePrompter<R, W> {
    fn fee_paid(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<bool> {
        self.ask_parsed(
            &format!("{} (Fee Paid? true/false): ", candidate.name),
            parse_fee_paid,
        )
    }

    fn test_score(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<f64> {
        self.ask_parsed(&format!("{} (Test Score): ", candidate.name), |v| {
            parse_score("test score", v)
        })
    }

    fn interview_score(&mut self, _id: CandidateId, candidate: &Candidate) -> Result<f64> {
        self.ask_parsed(&format!("{} (Interview Score): ", candidate.name), |v| {
            parse_score("interview score", v)
        })
    }
}

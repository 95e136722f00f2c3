//! Recording Surface
//!
//! Captures every call the presenter makes, in order, and can be told to
//! fail as a given section starts or partway through one. Used by the
//! integration tests.

use std::io;

use voidkeeper_core::Section;

use super::Surface;

/// One surface call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Begin(Section),
    Clear,
    Line(String),
    Redraw(String),
    Commit,
}

/// In-memory surface with optional failure injection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    columns: usize,
    records: Vec<Record>,
    fail_at: Option<Section>,
    fail_on_write: Option<(Section, usize)>,
    current: Option<Section>,
    writes_in_section: usize,
}

impl RecordingSurface {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Fail with a broken pipe when `section` begins
    #[must_use]
    pub fn failing_at(mut self, section: Section) -> Self {
        self.fail_at = Some(section);
        self
    }

    /// Fail with a broken pipe on the `n`th line written (printed or
    /// redrawn) inside `section`, counting from 1
    #[must_use]
    pub fn failing_on_write(mut self, section: Section, n: usize) -> Self {
        self.fail_on_write = Some((section, n));
        self
    }

    /// Every recorded call
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sections in the order they began
    pub fn sections(&self) -> Vec<Section> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Begin(section) => Some(section.clone()),
                _ => None,
            })
            .collect()
    }

    /// Lines as they would remain on screen: printed lines, plus the last
    /// redraw of each line that was committed
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending: Option<&str> = None;
        for record in &self.records {
            match record {
                Record::Clear => lines.clear(),
                Record::Line(line) => lines.push(line.clone()),
                Record::Redraw(line) => pending = Some(line.as_str()),
                Record::Commit => lines.push(pending.take().unwrap_or_default().to_string()),
                Record::Begin(_) => {}
            }
        }
        if let Some(line) = pending {
            lines.push(line.to_string());
        }
        lines
    }

    /// Records belonging to `section`, up to the next section
    pub fn records_in(&self, section: &Section) -> Vec<Record> {
        self.records
            .iter()
            .skip_while(|r| *r != &Record::Begin(section.clone()))
            .skip(1)
            .take_while(|r| !matches!(r, Record::Begin(_)))
            .cloned()
            .collect()
    }

    fn write(&mut self, record: Record) -> io::Result<()> {
        self.writes_in_section += 1;
        if let (Some((section, n)), Some(current)) = (&self.fail_on_write, &self.current) {
            if section == current && *n == self.writes_in_section {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    format!("injected failure on write {n} in {section}"),
                ));
            }
        }
        self.records.push(record);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn columns(&self) -> usize {
        self.columns
    }

    fn begin(&mut self, section: &Section) -> io::Result<()> {
        if self.fail_at.as_ref() == Some(section) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("injected failure at {section}"),
            ));
        }
        self.records.push(Record::Begin(section.clone()));
        self.current = Some(section.clone());
        self.writes_in_section = 0;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.records.push(Record::Clear);
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.write(Record::Line(line.to_string()))
    }

    fn redraw_line(&mut self, line: &str) -> io::Result<()> {
        self.write(Record::Redraw(line.to_string()))
    }

    fn commit_line(&mut self) -> io::Result<()> {
        self.records.push(Record::Commit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_keeps_last_redraw() {
        let mut surface = RecordingSurface::new(80);
        surface.redraw_line("⠋ loading").unwrap();
        surface.redraw_line("⠙ loading").unwrap();
        surface.commit_line().unwrap();
        surface.print_line("after").unwrap();
        assert_eq!(surface.transcript(), vec!["⠙ loading", "after"]);
    }

    #[test]
    fn test_clear_wipes_transcript() {
        let mut surface = RecordingSurface::new(80);
        surface.print_line("gone").unwrap();
        surface.clear().unwrap();
        surface.print_line("kept").unwrap();
        assert_eq!(surface.transcript(), vec!["kept"]);
    }

    #[test]
    fn test_failing_section() {
        let mut surface = RecordingSurface::new(80).failing_at(Section::Banner);
        assert!(surface.begin(&Section::LoadingAnimation).is_ok());
        let err = surface.begin(&Section::Banner).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(surface.sections(), vec![Section::LoadingAnimation]);
    }

    #[test]
    fn test_failing_on_write_keeps_earlier_lines() {
        let mut surface = RecordingSurface::new(80).failing_on_write(Section::Banner, 2);
        surface.print_line("before").unwrap();
        surface.begin(&Section::Banner).unwrap();
        surface.print_line("one").unwrap();
        let err = surface.print_line("two").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(
            surface.records_in(&Section::Banner),
            vec![Record::Line("one".to_string())]
        );
    }

    #[test]
    fn test_records_in() {
        let mut surface = RecordingSurface::new(80);
        surface.begin(&Section::Banner).unwrap();
        surface.print_line("a").unwrap();
        surface.begin(&Section::Tagline).unwrap();
        surface.print_line("b").unwrap();
        assert_eq!(
            surface.records_in(&Section::Banner),
            vec![Record::Line("a".to_string())]
        );
    }
}

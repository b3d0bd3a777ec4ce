use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
}

/// Buffered display output for one render pass, flushed in one go so a turn
/// never interleaves partial lines.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }
}

/// Write the buffered blocks to the screen and flush.
pub fn flush_to(w: &mut impl Write, out: Output) -> io::Result<()> {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => writeln!(w, "\n{}", t)?,
            OutputBlock::Text(line) => writeln!(w, "{}", line)?,
            OutputBlock::Event(ev) => writeln!(w, "{}", ev)?,
        }
    }
    w.flush()
}

/// Plain-text output surface: each write replaces what is displayed.
pub trait TextSink {
    fn write(&mut self, text: &str);
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn write(&mut self, text: &str) {
        (**self).write(text)
    }
}

impl<T: TextSink + ?Sized> TextSink for Box<T> {
    fn write(&mut self, text: &str) {
        (**self).write(text)
    }
}

/// In-memory sink that keeps every write.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    writes: Vec<String>,
}

impl RecordingSink {
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Text currently on display.
    pub fn current(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl TextSink for RecordingSink {
    fn write(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}

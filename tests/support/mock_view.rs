use amount_keypad::{AmountView, PlaceholderRange};

/// Records every frame an editor presents.
#[derive(Default, Debug, Clone)]
pub struct MockView {
    pub frames: Vec<(String, Option<PlaceholderRange>)>,
}

impl MockView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.frames.last().map(|(text, _)| text.as_str())
    }

    /// The filler substring of the last frame, empty when nothing is filler.
    pub fn last_filler(&self) -> Option<String> {
        self.frames.last().map(|(text, range)| match range {
            Some(range) => range.split(text).1.to_string(),
            None => String::new(),
        })
    }
}

impl AmountView for MockView {
    fn render(&mut self, formatted: &str, placeholder: Option<PlaceholderRange>) {
        self.frames.push((formatted.to_string(), placeholder));
    }
}

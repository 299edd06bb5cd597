//! Level markup output.
//!
//! Science Birds is picky about its XML: the document must not start with a
//! newline, and every object element has to sit on its own line.

use super::layout::*;

/// Receives placed objects in emission order.
pub trait LevelSink {
    fn place(&mut self, record: &PlacedObject);
}

impl LevelSink for Vec<PlacedObject> {
    fn place(&mut self, record: &PlacedObject) {
        self.push(record.clone());
    }
}

/// Collects `<Block>` and `<Pig>` elements and wraps them in the level
/// template.
pub struct XmlLevelWriter {
    birds: Vec<String>,
    slingshot: (f64, f64),
    elements: String,
}

impl Default for XmlLevelWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlLevelWriter {
    pub fn new() -> Self {
        XmlLevelWriter {
            birds: vec!["BirdRed".to_string()],
            slingshot: (-8.0, -2.5),
            elements: String::new(),
        }
    }

    /// Replace the bird loadout.
    pub fn with_birds<I, S>(mut self, birds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.birds = birds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_slingshot(mut self, x: f64, y: f64) -> Self {
        self.slingshot = (x, y);
        self
    }

    /// Elements written so far, one per line.
    pub fn elements(&self) -> &str {
        &self.elements
    }

    pub fn finish(self) -> String {
        let birds: String = self
            .birds
            .iter()
            .map(|b| format!("      <Bird type=\"{}\"/>\n", escape_attribute(b)))
            .collect();

        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"utf-16\"?>\n",
                "<Level width=\"2\">\n",
                "  <Camera x=\"0\" y=\"2\" minWidth=\"20\" maxWidth=\"30\">\n",
                "    <Birds>\n",
                "{birds}",
                "    </Birds>\n",
                "    <Slingshot x=\"{sx}\" y=\"{sy}\">\n",
                "      <GameObjects>\n",
                "{elements}",
                "      </GameObjects>\n",
                "    </Slingshot>\n",
                "  </Camera>\n",
                "</Level>\n"
            ),
            birds = birds,
            sx = self.slingshot.0,
            sy = self.slingshot.1,
            elements = self.elements,
        )
    }
}

impl LevelSink for XmlLevelWriter {
    fn place(&mut self, record: &PlacedObject) {
        let element = match record.kind {
            ObjectKind::Enemy => "Pig",
            ObjectKind::PrincipalBlock | ObjectKind::PlatformBlock => "Block",
        };
        self.elements.push_str(&format!(
            "        <{} type=\"{}\" material=\"{}\" x=\"{}\" y=\"{}\" rotation=\"{}\"/>\n",
            element,
            escape_attribute(&record.display_name),
            escape_attribute(&record.material),
            record.x,
            record.y,
            record.rotation
        ));
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

use serde::Deserialize;

/// A synthetic voice as reported by the remote catalog.
///
/// Records are rebuilt on every catalog fetch and never persisted. The
/// service guarantees `voice_id` is present; everything else is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    /// Human-readable label. The service may omit it, and a voice without
    /// a name can never be selected by name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Voice {
    /// Label to show a human: the name when present, the id otherwise.
    pub fn display_label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.voice_id)
    }
}

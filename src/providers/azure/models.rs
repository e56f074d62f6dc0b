use serde::Deserialize;

/// Body of `GET {Operation-Location}` for a Read operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOperationResult {
    pub status: OperationStatus,
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    #[serde(default)]
    pub read_results: Vec<ReadResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReadResult {
    #[serde(default)]
    pub lines: Vec<Line>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Word {
    pub text: String,
}

impl Line {
    /// Words joined by single spaces, or the raw line text when the service
    /// sent no word breakdown.
    pub fn joined(&self) -> String {
        if self.words.is_empty() {
            self.text.clone()
        } else {
            self.words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

impl AnalyzeResult {
    /// Every recognized line, pages in order, one per row.
    pub fn text(&self) -> String {
        self.read_results
            .iter()
            .flat_map(|page| page.lines.iter())
            .map(Line::joined)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Body of `POST /describe`.
#[derive(Debug, Deserialize)]
pub struct DescribeResult {
    pub description: ImageDescription,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageDescription {
    #[serde(default)]
    pub captions: Vec<Caption>,
}

#[derive(Debug, Deserialize)]
pub struct Caption {
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Generate,
    Audit,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub mode: Mode,
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub exclude_similar: bool,
    pub alpha_lead: bool,
    pub length: Option<usize>,
    pub upper: Option<usize>,
    pub lower: Option<usize>,
    pub digits: Option<usize>,
    pub special: Option<usize>,
    pub number: Option<usize>,
    pub max_attempts: Option<usize>,
    pub min_entropy: Option<f64>,
    pub common: Option<String>,
    pub dictionary: Option<String>,
    pub passphrase: Option<usize>,
    pub wordlist: Option<String>,
    pub separator: Option<String>,
    pub password: Option<String>,
}

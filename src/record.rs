use serde::Serialize;

/// Sentinel name when a page has neither an <h1> nor a usable <title>.
pub const UNKNOWN_CAVE: &str = "Unknown Cave";

/// The known section fields, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Overview,
    History,
    Location,
    Access,
    Description,
    Tackle,
    Video,
    References,
    Warnings,
    Disclaimer,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Overview,
        Field::History,
        Field::Location,
        Field::Access,
        Field::Description,
        Field::Tackle,
        Field::Video,
        Field::References,
        Field::Warnings,
        Field::Disclaimer,
    ];

    /// Section name as it appears in page markers, doubling as the dump label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Overview => "Overview",
            Field::History => "History",
            Field::Location => "Location",
            Field::Access => "Access",
            Field::Description => "Description",
            Field::Tackle => "Tackle",
            Field::Video => "Video",
            Field::References => "References",
            Field::Warnings => "Warnings",
            Field::Disclaimer => "Disclaimer",
        }
    }
}

/// One extraction pass over one cave page. Every field defaults to empty;
/// empty means "section absent", not an error. `name` is only empty when
/// the fetch itself failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaveRecord {
    pub name: String,
    pub overview: String,
    pub history: String,
    pub location: String,
    pub access: String,
    pub description: String,
    pub tackle: String,
    pub video: String,
    pub references: String,
    pub warnings: String,
    pub disclaimer: String,
}

impl CaveRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Overview => &self.overview,
            Field::History => &self.history,
            Field::Location => &self.location,
            Field::Access => &self.access,
            Field::Description => &self.description,
            Field::Tackle => &self.tackle,
            Field::Video => &self.video,
            Field::References => &self.references,
            Field::Warnings => &self.warnings,
            Field::Disclaimer => &self.disclaimer,
        }
    }
}

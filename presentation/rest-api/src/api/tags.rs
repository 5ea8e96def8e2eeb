use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Pages,
    /// Text correction, summary and reorganization
    Text,
}

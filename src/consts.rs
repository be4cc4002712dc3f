pub const DEFAULT_DEVOPS_URL: &str = "https://dev.azure.com";
pub const DEFAULT_DEVOPS_API_VERSION: &str = "6.1-preview.1";
pub const DEFAULT_TEST_HTTP_URL: &str = "http://httpstat.us";
pub const DEFAULT_PLANTUML_COMMAND: &str = "plantuml";

pub const SAMPLE_DIAGRAM: &str = "@startuml\nBob -> Alice: Hello!\n@enduml\n";

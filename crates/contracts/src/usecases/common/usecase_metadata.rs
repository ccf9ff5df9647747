/// Identification metadata shared by every UseCase
pub trait UseCaseMetadata {
    /// Index of the UseCase (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "export_reports")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u601_export_reports"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

use serde::{Deserialize, Serialize};

///
/// Config
///
/// Generation flags for one translator run. This replaces the annotation
/// surface of attribute-driven generators: callers pass the flags explicitly
/// next to the model descriptor.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    /// Resolve column names by converting field idents to snake_case.
    #[serde(default)]
    pub auto_snake_case_names: bool,

    /// Inject an `id` key field and `created_at`/`updated_at` audit fields
    /// into the effective model before generation.
    #[serde(default)]
    pub auto_id_and_date_fields: bool,
}

impl Config {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_snake_case_names: false,
            auto_id_and_date_fields: false,
        }
    }

    #[must_use]
    pub const fn with_snake_case_names(mut self) -> Self {
        self.auto_snake_case_names = true;
        self
    }

    #[must_use]
    pub const fn with_id_and_date_fields(mut self) -> Self {
        self.auto_id_and_date_fields = true;
        self
    }
}

use convert_case::{Case, Casing};
use quarry_schema::config::Config;

/// Resolve a field ident to its column name.
pub fn resolved(ident: &str, config: &Config) -> String {
    if config.auto_snake_case_names {
        ident.to_case(Case::Snake)
    } else {
        ident.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_without_the_flag() {
        let config = Config::default();

        assert_eq!(resolved("createdAt", &config), "createdAt");
        assert_eq!(resolved("created_at", &config), "created_at");
    }

    #[test]
    fn snake_case_with_the_flag() {
        let config = Config::new().with_snake_case_names();

        assert_eq!(resolved("createdAt", &config), "created_at");
        assert_eq!(resolved("payloadSize", &config), "payload_size");

        // already-snake idents are untouched
        assert_eq!(resolved("created_at", &config), "created_at");
    }
}

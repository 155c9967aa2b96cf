use crate::{MAX_TABLE_NAME_LEN, node::NodeError, validate::reserved::is_reserved_word};

fn is_ident_shaped(s: &str) -> bool {
    // a lone underscore is a wildcard pattern, not an identifier
    if s == "_" {
        return false;
    }

    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a field or type identifier against shape, length, and the
/// reserved-word list.
pub fn validate_ident(ident: &str, max_len: usize) -> Result<(), NodeError> {
    if ident.is_empty() {
        return Err(NodeError::EmptyIdent);
    }

    if ident.len() > max_len {
        return Err(NodeError::IdentTooLong {
            ident: ident.to_string(),
            max_len,
        });
    }

    if !is_ident_shaped(ident) {
        return Err(NodeError::InvalidIdent {
            ident: ident.to_string(),
        });
    }

    if is_reserved_word(ident) {
        return Err(NodeError::ReservedIdent {
            ident: ident.to_string(),
        });
    }

    Ok(())
}

/// Validate a table name. Tables follow the same shape rules as idents but
/// skip the reserved-word list because they are always quoted downstream.
pub fn validate_table(table: &str) -> Result<(), NodeError> {
    if table.is_empty() {
        return Err(NodeError::EmptyTable);
    }

    if table.len() > MAX_TABLE_NAME_LEN {
        return Err(NodeError::TableTooLong {
            table: table.to_string(),
            max_len: MAX_TABLE_NAME_LEN,
        });
    }

    if !is_ident_shaped(table) {
        return Err(NodeError::InvalidTable {
            table: table.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_FIELD_NAME_LEN;

    #[test]
    fn accepts_snake_and_camel_idents() {
        assert!(validate_ident("created_at", MAX_FIELD_NAME_LEN).is_ok());
        assert!(validate_ident("createdAt", MAX_FIELD_NAME_LEN).is_ok());
        assert!(validate_ident("_private", MAX_FIELD_NAME_LEN).is_ok());
    }

    #[test]
    fn rejects_empty_and_malformed_idents() {
        assert!(matches!(
            validate_ident("", MAX_FIELD_NAME_LEN),
            Err(NodeError::EmptyIdent)
        ));
        assert!(matches!(
            validate_ident("1up", MAX_FIELD_NAME_LEN),
            Err(NodeError::InvalidIdent { .. })
        ));
        assert!(matches!(
            validate_ident("with space", MAX_FIELD_NAME_LEN),
            Err(NodeError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn rejects_a_lone_underscore() {
        assert!(matches!(
            validate_ident("_", MAX_FIELD_NAME_LEN),
            Err(NodeError::InvalidIdent { .. })
        ));
        assert!(matches!(validate_table("_"), Err(NodeError::InvalidTable { .. })));
    }

    #[test]
    fn rejects_overlong_idents() {
        let long = "f".repeat(MAX_FIELD_NAME_LEN + 1);

        assert!(matches!(
            validate_ident(&long, MAX_FIELD_NAME_LEN),
            Err(NodeError::IdentTooLong { .. })
        ));
    }

    #[test]
    fn rejects_reserved_idents() {
        assert!(matches!(
            validate_ident("select", MAX_FIELD_NAME_LEN),
            Err(NodeError::ReservedIdent { .. })
        ));
    }

    #[test]
    fn table_names_skip_the_reserved_list() {
        assert!(validate_table("order").is_ok());
        assert!(matches!(validate_table(""), Err(NodeError::EmptyTable)));
        assert!(matches!(
            validate_table("no spaces"),
            Err(NodeError::InvalidTable { .. })
        ));
    }
}

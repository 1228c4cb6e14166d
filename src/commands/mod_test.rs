use super::*;

fn parse(input: &str) -> Result<Command, CommandError> {
    input.parse()
}

#[test]
fn test_update() {
    assert_eq!(parse("update"), Ok(Command::Update));
    assert_eq!(parse("  update  "), Ok(Command::Update));
}

#[test]
fn test_add_with_keywords() {
    assert_eq!(
        parse("add 🐈 cat kitty"),
        Ok(Command::Add {
            glyph: "🐈".to_string(),
            keywords: vec!["cat".to_string(), "kitty".to_string()],
        })
    );
}

#[test]
fn test_add_without_glyph_or_keywords() {
    assert_eq!(parse("add"), Err(CommandError::MissingGlyph));
    assert_eq!(parse("add 🐈"), Err(CommandError::MissingKeywords(ADD)));
}

#[test]
fn test_remove_excludes_command_word() {
    assert_eq!(
        parse("remove cat dog"),
        Ok(Command::Remove {
            keywords: vec!["cat".to_string(), "dog".to_string()],
        })
    );
    assert_eq!(parse("remove"), Err(CommandError::MissingKeywords(REMOVE)));
}

#[test]
fn test_anything_else_is_translated() {
    assert_eq!(
        parse("the cat sat"),
        Ok(Command::Translate {
            text: "the cat sat".to_string()
        })
    );
    assert_eq!(parse(""), Ok(Command::Translate { text: String::new() }));
}

#[test]
fn test_keywords_are_case_sensitive_selectors() {
    // Only the exact lowercase word selects a command
    assert_eq!(
        parse("Update"),
        Ok(Command::Translate {
            text: "Update".to_string()
        })
    );
    assert_eq!(
        parse("updates are great"),
        Ok(Command::Translate {
            text: "updates are great".to_string()
        })
    );
}

#[test]
fn test_command_serializes_with_tag() {
    let json = serde_json::to_string(&Command::Remove {
        keywords: vec!["cat".to_string()],
    })
    .unwrap();
    assert_eq!(json, r#"{"type":"remove","keywords":["cat"]}"#);

    let json = serde_json::to_string(&Command::Translate {
        text: "cat".to_string(),
    })
    .unwrap();
    assert_eq!(json, r#"{"type":"translate","text":"cat"}"#);
}

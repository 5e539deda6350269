#[cfg(test)]
mod tests {
    use trellis_ir::*;

    // Helper functions to build trees for testing
    fn ident(name: &str) -> Ident {
        Ident::new(name, Position::NONE).unwrap()
    }

    fn int(value: i64) -> Tree {
        Tree::IntLiteral {
            value,
            pos: Position::NONE,
        }
    }

    fn string(value: &str) -> Tree {
        Tree::StringLiteral(StringLiteral::new(value, Position::NONE))
    }

    fn this() -> Tree {
        Tree::This {
            pos: Position::NONE,
        }
    }

    // ========================================================================
    // Identifier Validation Tests
    // ========================================================================

    #[test]
    fn test_ident_rejects_leading_digit() {
        assert_eq!(
            Ident::new("3bad", Position::NONE),
            Err(TreeError::InvalidIdentifier("3bad".to_string()))
        );
    }

    #[test]
    fn test_ident_rejects_empty_name() {
        assert_eq!(
            Ident::new("", Position::NONE),
            Err(TreeError::InvalidIdentifier(String::new()))
        );
    }

    #[test]
    fn test_ident_accepts_dollar_and_underscore() {
        let ident = Ident::new("a_1$", Position::new(2)).unwrap();
        assert_eq!(ident.name(), "a_1$");
        assert_eq!(ident.pos(), Position::new(2));
    }

    #[test]
    fn test_ident_error_display_carries_name() {
        let err = Ident::new("a-b", Position::NONE).unwrap_err();
        assert!(err.to_string().contains("a-b"));
    }

    // ========================================================================
    // PropertyName Normalization Tests
    // ========================================================================

    #[test]
    fn test_property_name_round_trip() {
        for name in ["foo", "a_1$", "1abc", "a-b", "", "with space", "été"] {
            let property = PropertyName::new(name, Position::NONE);
            assert_eq!(property.name(), name);
        }
    }

    #[test]
    fn test_property_name_picks_ident_for_valid_names() {
        for name in ["foo", "a_1$", "_x", "$y", "été"] {
            let property = PropertyName::new(name, Position::NONE);
            assert!(
                matches!(property, PropertyName::Ident(_)),
                "{name:?} should normalize to an identifier"
            );
        }
    }

    #[test]
    fn test_property_name_picks_string_for_invalid_names() {
        for name in ["1abc", "a-b", "", "with space"] {
            let property = PropertyName::new(name, Position::NONE);
            assert!(
                matches!(property, PropertyName::StringLiteral(_)),
                "{name:?} should fall back to a string key"
            );
        }
    }

    #[test]
    fn test_property_name_from_tree() {
        let from_ident = PropertyName::from_tree(&Tree::Ident(ident("k"))).unwrap();
        assert_eq!(from_ident.name(), "k");

        let from_string = PropertyName::from_tree(&string("a-b")).unwrap();
        assert_eq!(from_string.name(), "a-b");

        assert_eq!(PropertyName::from_tree(&int(1)), None);
    }

    #[test]
    fn test_property_name_into_tree() {
        let tree: Tree = PropertyName::new("k", Position::NONE).into();
        assert!(matches!(tree, Tree::Ident(_)));

        let tree: Tree = PropertyName::new("a-b", Position::NONE).into();
        assert!(matches!(tree, Tree::StringLiteral(_)));
    }

    // ========================================================================
    // Select Normalization Tests
    // ========================================================================

    #[test]
    fn test_select_valid_name_becomes_dotted() {
        let sel = make_select(this(), PropertyName::new("foo", Position::NONE), Position::NONE);
        assert!(matches!(sel, Tree::DotSelect { .. }));

        let (qualifier, property) = match_select(&sel).unwrap();
        assert_eq!(*qualifier, this());
        assert_eq!(property, PropertyName::new("foo", Position::NONE));
        assert!(matches!(property, PropertyName::Ident(_)));
    }

    #[test]
    fn test_select_invalid_name_becomes_bracketed() {
        let sel = make_select(this(), PropertyName::new("1bad", Position::NONE), Position::NONE);
        assert!(matches!(sel, Tree::BracketSelect { .. }));

        let (qualifier, property) = match_select(&sel).unwrap();
        assert_eq!(*qualifier, this());
        assert_eq!(property.name(), "1bad");
        assert!(matches!(property, PropertyName::StringLiteral(_)));
    }

    #[test]
    fn test_select_rewraps_ident_shaped_string_key() {
        // A string-literal key whose value happens to be identifier-shaped
        // degenerates to the dotted form.
        let key = PropertyName::StringLiteral(StringLiteral::new("foo", Position::NONE));
        let sel = make_select(this(), key, Position::NONE);
        match &sel {
            Tree::DotSelect { item, .. } => assert_eq!(item.name(), "foo"),
            other => panic!("expected DotSelect, got {other:?}"),
        }
    }

    #[test]
    fn test_select_recognizes_bracketed_string_key() {
        // A producer may build the bracketed encoding directly; the matcher
        // still recovers the name.
        let sel = Tree::BracketSelect {
            qualifier: Box::new(this()),
            item: Box::new(string("a-b")),
            pos: Position::NONE,
        };
        let (_, property) = match_select(&sel).unwrap();
        assert_eq!(property.name(), "a-b");
    }

    #[test]
    fn test_select_ignores_computed_index() {
        // obj[i + 1] is not a *named* access.
        let sel = Tree::BracketSelect {
            qualifier: Box::new(this()),
            item: Box::new(Tree::BinaryOp {
                op: BinaryOperator::Add,
                left: Box::new(int(1)),
                right: Box::new(int(2)),
                pos: Position::NONE,
            }),
            pos: Position::NONE,
        };
        assert_eq!(match_select(&sel), None);
        assert_eq!(match_select(&int(5)), None);
    }

    #[test]
    fn test_select_preserves_positions() {
        let sel = make_select(
            this(),
            PropertyName::new("foo", Position::new(7)),
            Position::new(3),
        );
        assert_eq!(sel.pos(), Position::new(3));
        match &sel {
            Tree::DotSelect { item, .. } => assert_eq!(item.pos(), Position::new(7)),
            other => panic!("expected DotSelect, got {other:?}"),
        }
    }

    // ========================================================================
    // ApplyMethod Tests
    // ========================================================================

    #[test]
    fn test_apply_method_round_trip() {
        let call = make_apply_method(
            this(),
            PropertyName::new("m", Position::NONE),
            vec![int(1), int(2)],
            Position::NONE,
        );

        let (receiver, method, args) = match_apply_method(&call).unwrap();
        assert_eq!(*receiver, this());
        assert_eq!(method, PropertyName::new("m", Position::NONE));
        assert!(matches!(method, PropertyName::Ident(_)));
        assert_eq!(args, [int(1), int(2)].as_slice());
    }

    #[test]
    fn test_apply_method_matches_bracketed_encoding() {
        let call = make_apply_method(
            this(),
            PropertyName::new("not-an-ident", Position::NONE),
            vec![],
            Position::NONE,
        );
        match &call {
            Tree::Apply { fun, .. } => assert!(matches!(fun.as_ref(), Tree::BracketSelect { .. })),
            other => panic!("expected Apply, got {other:?}"),
        }

        let (receiver, method, args) = match_apply_method(&call).unwrap();
        assert_eq!(*receiver, this());
        assert_eq!(method.name(), "not-an-ident");
        assert!(args.is_empty());
    }

    #[test]
    fn test_apply_method_rejects_plain_calls() {
        // A call whose callee is not a recognized select is not a method call.
        let plain = Tree::Apply {
            fun: Box::new(Tree::Ident(ident("f"))),
            args: vec![int(1)],
            pos: Position::NONE,
        };
        assert_eq!(match_apply_method(&plain), None);

        let computed = Tree::Apply {
            fun: Box::new(Tree::BracketSelect {
                qualifier: Box::new(this()),
                item: Box::new(int(0)),
                pos: Position::NONE,
            }),
            args: vec![],
            pos: Position::NONE,
        };
        assert_eq!(match_apply_method(&computed), None);
    }
}

#[cfg(test)]
/// Parser unit tests.
///
/// These focus on the shape of parsed syntax and on error recovery: a
/// malformed fragment must become an `Error` sentinel node without taking
/// the rest of the file down with it.
mod tests {
    use super::*;
    use crate::ast;
    use crate::lexer;

    fn parse_str(source: &str) -> ParseResult {
        let tokens = lexer::lex(source);
        parse("test.ns", &tokens)
    }

    /// The statements of a clean parse.
    fn statements(source: &str) -> Vec<Located<Statement>> {
        let result = parse_str(source);
        assert!(
            !result.has_errors(),
            "unexpected diagnostics: {:?}",
            result.diagnostics
        );
        result.file.statements
    }

    fn simple_name(expr: &Expression) -> &str {
        match expr {
            Expression::Identifier(name) => name.as_simple().expect("simple identifier"),
            other => panic!("expected identifier, got {other:?}"),
        }
    }

    #[test]
    fn test_precedence_multiplication_binds_tighter() {
        let stmts = statements("x = 1 + 2 * 3\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        let Expression::Binary { op, left, right } = &right.node else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinaryOp::Add);
        assert!(matches!(&left.node, Expression::Number(n) if n == "1"));
        let Expression::Binary { op, left, right } = &right.node else {
            panic!("expected nested multiplication");
        };
        assert_eq!(*op, BinaryOp::Multiply);
        assert!(matches!(&left.node, Expression::Number(n) if n == "2"));
        assert!(matches!(&right.node, Expression::Number(n) if n == "3"));
    }

    #[test]
    fn test_same_tier_is_left_associative() {
        let stmts = statements("x = a - b + c\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        // (a - b) + c
        let Expression::Binary { op, left, right } = &right.node else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinaryOp::Add);
        assert_eq!(simple_name(&right.node), "c");
        let Expression::Binary { op, left, right } = &left.node else {
            panic!("expected nested subtraction");
        };
        assert_eq!(*op, BinaryOp::Subtract);
        assert_eq!(simple_name(&left.node), "a");
        assert_eq!(simple_name(&right.node), "b");
    }

    #[test]
    fn test_is_shares_the_relational_tier() {
        // `a is T == b` folds as `(a is T) == b`: equality is below the
        // relational tier that `is` shares.
        let stmts = statements("x = a is T == b\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        let Expression::Binary { op, left, .. } = &right.node else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinaryOp::Equal);
        assert!(matches!(
            &left.node,
            Expression::Binary { op: BinaryOp::Is, .. }
        ));
    }

    #[test]
    fn test_class_with_field() {
        let stmts = statements("class Foo\n    i32 x\n");
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class, got {:?}", stmts[0].node);
        };
        assert_eq!(class.name, "Foo");
        assert_eq!(class.kind, ClassKind::Class);
        assert_eq!(class.body.len(), 1);
        let Statement::Field(field) = &class.body[0].node else {
            panic!("expected field, got {:?}", class.body[0].node);
        };
        assert_eq!(field.name, "x");
        assert_eq!(field.ty.to_string(), "i32");
        assert_eq!(field.value, None);
    }

    #[test]
    fn test_class_header_with_parent_and_interfaces() {
        let stmts = statements("public class Foo from Base, IDisposable, IShape\n    i32 x\n");
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class");
        };
        assert_eq!(class.modifiers, vec![Modifier::Public]);
        assert_eq!(class.parent.as_ref().map(|p| p.to_string()), Some("Base".into()));
        let interfaces: Vec<String> = class.interfaces.iter().map(|i| i.to_string()).collect();
        assert_eq!(interfaces, vec!["IDisposable", "IShape"]);
    }

    #[test]
    fn test_methods_with_and_without_return_type() {
        let source = "class Calc\n    i32 add(i32 a, i32 b)\n        return a + b\n    reset()\n        count = 0\n";
        let stmts = statements(source);
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class");
        };
        let Statement::Method(add) = &class.body[0].node else {
            panic!("expected method, got {:?}", class.body[0].node);
        };
        assert_eq!(add.name, "add");
        assert_eq!(add.return_type.as_ref().map(|t| t.to_string()), Some("i32".into()));
        assert_eq!(add.params.len(), 2);
        assert_eq!(add.params[0].name, "a");
        assert_eq!(add.params[0].ty.to_string(), "i32");
        assert_eq!(add.body.len(), 1);

        let Statement::Method(reset) = &class.body[1].node else {
            panic!("expected method, got {:?}", class.body[1].node);
        };
        assert_eq!(reset.name, "reset");
        assert_eq!(reset.return_type, None);
        assert!(reset.params.is_empty());
    }

    #[test]
    fn test_interface_with_abstract_method() {
        let stmts = statements("interface IShape\n    f64 area()\n");
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected interface");
        };
        assert_eq!(class.kind, ClassKind::Interface);
        let Statement::Method(method) = &class.body[0].node else {
            panic!("expected method");
        };
        assert!(method.body.is_empty(), "abstract method has no body");
    }

    #[test]
    fn test_property_with_get_and_set() {
        let source = "class Person\n    str name\n    str display\n        get\n            return name\n        set\n            name = value\n";
        let stmts = statements(source);
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class");
        };
        let Statement::Property(property) = &class.body[1].node else {
            panic!("expected property, got {:?}", class.body[1].node);
        };
        assert_eq!(property.name, "display");
        assert_eq!(property.ty.to_string(), "str");
        assert_eq!(property.get_body.len(), 1);
        assert_eq!(property.set_body.len(), 1);
    }

    #[test]
    fn test_auto_property_accessors() {
        let stmts = statements("class Person\n    str name\n        get\n        set\n");
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class");
        };
        let Statement::Property(property) = &class.body[0].node else {
            panic!("expected property");
        };
        assert!(property.get_body.is_empty());
        assert!(property.set_body.is_empty());
    }

    #[test]
    fn test_constant_declaration() {
        let stmts = statements("class Math\n    public const f64 Pi = 3.14159\n");
        let Statement::Class(class) = &stmts[0].node else {
            panic!("expected class");
        };
        let Statement::Constant(constant) = &class.body[0].node else {
            panic!("expected constant");
        };
        assert_eq!(constant.name, "Pi");
        assert_eq!(constant.modifiers, vec![Modifier::Public]);
        assert!(matches!(&constant.value.node, Expression::Number(n) if n == "3.14159"));
    }

    #[test]
    fn test_namespace_and_import() {
        let stmts = statements("ns App.Core\nuse System.Text\n");
        assert_eq!(
            stmts[0].node,
            Statement::Namespace(vec!["App".into(), "Core".into()])
        );
        assert_eq!(
            stmts[1].node,
            Statement::Import(vec!["System".into(), "Text".into()])
        );
    }

    #[test]
    fn test_else_if_chain_nests_in_else_body() {
        let source = "if a\n    f()\nelse if b\n    g()\nelse\n    h()\n";
        let stmts = statements(source);
        assert_eq!(stmts.len(), 1, "one chained if statement");
        let Statement::If(outer) = &stmts[0].node else {
            panic!("expected if");
        };
        assert_eq!(outer.body.len(), 1);
        assert_eq!(outer.else_body.len(), 1);
        let Statement::If(chained) = &outer.else_body[0].node else {
            panic!("expected chained if in else body");
        };
        assert_eq!(simple_name(&chained.condition.node), "b");
        assert_eq!(chained.else_body.len(), 1, "final else belongs to the chain");
    }

    #[test]
    fn test_for_both_forms() {
        let stmts = statements("for x in items\n    f(x)\nfor i < 10\n    g()\n");
        let Statement::For(iteration) = &stmts[0].node else {
            panic!("expected for");
        };
        assert_eq!(iteration.var.as_deref(), Some("x"));
        assert_eq!(simple_name(&iteration.iterated.node), "items");
        let Statement::For(conditional) = &stmts[1].node else {
            panic!("expected for");
        };
        assert_eq!(conditional.var, None);
        assert!(matches!(&conditional.iterated.node, Expression::Binary { .. }));
    }

    #[test]
    fn test_case_with_default_branch() {
        let source = "case x\n    1, 2\n        f()\n    _\n        g()\n";
        let stmts = statements(source);
        let Statement::Case(case) = &stmts[0].node else {
            panic!("expected case");
        };
        assert_eq!(case.branches.len(), 2);
        assert_eq!(case.branches[0].values.len(), 2);
        assert!(matches!(case.branches[1].values[0].node, Expression::Discard));
    }

    #[test]
    fn test_try_catch() {
        let source = "try\n    f()\ncatch ParseFailure e\n    g(e)\ncatch\n    h()\n";
        let stmts = statements(source);
        let Statement::Try(try_stmt) = &stmts[0].node else {
            panic!("expected try");
        };
        assert_eq!(try_stmt.catches.len(), 2);
        assert_eq!(
            try_stmt.catches[0].ty.as_ref().map(|t| t.to_string()),
            Some("ParseFailure".into())
        );
        assert_eq!(try_stmt.catches[0].name.as_deref(), Some("e"));
        assert_eq!(try_stmt.catches[1].ty, None);
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let stmts = statements("x = y = 5\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { op, left, right } = &expr.node else {
            panic!("expected assignment");
        };
        assert_eq!(*op, AssignmentOp::Assign);
        assert_eq!(simple_name(&left.node), "x");
        let Expression::Assignment { left, right, .. } = &right.node else {
            panic!("expected nested assignment");
        };
        assert_eq!(simple_name(&left.node), "y");
        assert!(matches!(&right.node, Expression::Number(n) if n == "5"));
    }

    #[test]
    fn test_compound_assignment_on_member() {
        let stmts = statements("this.count += 1\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { op, left, .. } = &expr.node else {
            panic!("expected assignment");
        };
        assert_eq!(*op, AssignmentOp::Add);
        assert!(matches!(&left.node, Expression::Member { .. }));
    }

    #[test]
    fn test_dangling_operator_continuation_is_one_statement() {
        let stmts = statements("a +\n    .. b\n");
        assert_eq!(stmts.len(), 1, "continuation joins the physical lines");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Binary { op, left, right } = &expr.node else {
            panic!("expected binary expression, got {:?}", expr.node);
        };
        assert_eq!(*op, BinaryOp::Add);
        assert_eq!(simple_name(&left.node), "a");
        assert_eq!(simple_name(&right.node), "b");
    }

    #[test]
    fn test_method_chain_across_lines() {
        let stmts = statements("builder.reset()\n    .append(x)\n    .build()\n");
        assert_eq!(stmts.len(), 1, "chain is one statement");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        // build() wraps append() wraps reset().
        let Expression::MethodCall { target, .. } = &expr.node else {
            panic!("expected call");
        };
        let Expression::Member { target, name } = &target.node else {
            panic!("expected member access");
        };
        assert_eq!(name.name, "build");
        assert!(matches!(&target.node, Expression::MethodCall { .. }));
    }

    #[test]
    fn test_constructor_call_with_nested_generics() {
        let stmts = statements("m = new Map<str, List<i32>>()\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        let Expression::ConstructorCall { ty, args } = &right.node else {
            panic!("expected constructor call, got {:?}", right.node);
        };
        assert_eq!(ty.to_string(), "Map<str, List<i32>>");
        assert!(args.is_empty());
    }

    #[test]
    fn test_string_interpolation_segments() {
        let stmts = statements("msg = \"sum: {a + b}!\"\n");
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        let Expression::StringInterpolation(string) = &right.node else {
            panic!("expected string, got {:?}", right.node);
        };
        assert_eq!(string.lines.len(), 1);
        let line = &string.lines[0];
        assert_eq!(line.len(), 3);
        assert!(matches!(&line[0], StringSegment::Literal(s) if s == "sum: "));
        assert!(matches!(
            &line[1],
            StringSegment::Expression(e) if matches!(e.node, Expression::Binary { .. })
        ));
        assert!(matches!(&line[2], StringSegment::Literal(s) if s == "!"));
    }

    #[test]
    fn test_multi_line_string_concatenation() {
        let stmts = statements("s = \"first\"\n    .. \"second\"\n");
        assert_eq!(stmts.len(), 1);
        let Statement::Expression(expr) = &stmts[0].node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        let Expression::StringInterpolation(string) = &right.node else {
            panic!("expected string");
        };
        assert_eq!(string.lines.len(), 2, "continued string appends a line");
        assert!(matches!(&string.lines[1][0], StringSegment::Literal(s) if s == "second"));
    }

    #[test]
    fn test_blank_lines_and_comments_are_preserved() {
        let stmts = statements("x = 1\n\n; a note\ny = 2\n");
        assert!(matches!(stmts[0].node, Statement::Expression(_)));
        assert!(matches!(stmts[1].node, Statement::Space));
        assert!(matches!(&stmts[2].node, Statement::Comment(c) if c == " a note"));
        assert!(matches!(stmts[3].node, Statement::Expression(_)));
    }

    #[test]
    fn test_malformed_statement_recovers() {
        let result = parse_str("class 123\nx = 1\n");
        assert!(result.has_errors());
        assert_eq!(result.file.statements.len(), 2);
        assert!(matches!(result.file.statements[0].node, Statement::Error(_)));
        assert!(matches!(
            result.file.statements[1].node,
            Statement::Expression(_)
        ));
    }

    #[test]
    fn test_unexpected_indent_is_a_single_error() {
        let result = parse_str("  x = 1\n");
        assert_eq!(
            result.diagnostics.len(),
            1,
            "exactly one error, no cascade: {:?}",
            result.diagnostics
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_unterminated_string_still_yields_full_file() {
        let result = parse_str("s = \"abc\nx = 1\n");
        assert!(result.has_errors());
        assert_eq!(result.file.statements.len(), 2, "rest of the input parsed");
        assert!(matches!(
            result.file.statements[1].node,
            Statement::Expression(_)
        ));
    }

    #[test]
    fn test_bad_argument_becomes_error_expression() {
        let result = parse_str("f(a, , b)\n");
        assert!(result.has_errors());
        let Statement::Expression(expr) = &result.file.statements[0].node else {
            panic!("expected expression statement");
        };
        let Expression::MethodCall { args, .. } = &expr.node else {
            panic!("expected call, got {:?}", expr.node);
        };
        assert_eq!(args.len(), 3);
        assert!(matches!(&args[1].node, Expression::Error(_)));
    }

    #[test]
    fn test_collect_errors_matches_sentinels() {
        let result = parse_str("class 123\nf(a, , b)\n");
        let collected = ast::collect_errors(&result.file);
        assert_eq!(collected.len(), 2, "one error statement, one error argument");
        assert!(result.has_errors());
    }

    #[test]
    fn test_mismatched_dedent_keeps_rest_of_file() {
        let source = "class A\n    x = 1\n  y = 2\nclass B\n    z = 3\n";
        let result = parse_str(source);
        assert!(result.has_errors(), "mismatched indentation is reported");
        let classes = result
            .file
            .statements
            .iter()
            .filter(|s| matches!(s.node, Statement::Class(_)))
            .count();
        assert_eq!(classes, 2, "both classes still parse: {:?}", result.file.statements);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_str("");
        assert!(!result.has_errors());
        assert!(result.file.statements.is_empty());
        assert_eq!(result.file.name, "test.ns");
    }

    #[test]
    fn test_node_positions_point_at_first_token() {
        let result = parse_str("x = 1 + 2\n");
        let stmt = &result.file.statements[0];
        assert_eq!((stmt.pos.line, stmt.pos.column), (1, 1));
        let Statement::Expression(expr) = &stmt.node else {
            panic!("expected expression statement");
        };
        let Expression::Assignment { right, .. } = &expr.node else {
            panic!("expected assignment");
        };
        // The addition's position is its first token, the `1`.
        assert_eq!((right.pos.line, right.pos.column), (1, 5));
    }
}

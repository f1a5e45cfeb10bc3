//! Layout laws of the class formatter.

use classgen_codegen::{ClassFormatter, synthesize_accessors};
use classgen_ir::{
    Abstractness, ClassConstantDefinition, ClassDefinition, ClassMethodDefinition,
    ClassPropertyDefinition, Expr, FunctionParameterDefinition, PhpType, Statement, Visibility,
};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

/// Route synthesis and render events to the test output (`RUST_LOG=debug`).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn format(class: ClassDefinition) -> String {
    init_tracing();
    ClassFormatter::default()
        .format(class)
        .expect("Formatting failed")
}

#[test]
fn test_methods_only_class_has_no_stray_blank_lines() {
    let class = ClassDefinition::new("App", "Service").method(
        ClassMethodDefinition::new("run", PhpType::Void).statement(Statement::return_void()),
    );

    assert_eq!(
        format(class),
        "<?php\n\nnamespace App;\n\n/**\n * Class Service\n */\nclass Service\n{\n    public function run(): void\n    {\n        return;\n    }\n}\n"
    );
}

#[test]
fn test_constants_and_properties_blocks() {
    let class = ClassDefinition::new("App", "Config")
        .constant(ClassConstantDefinition::new("A", 1))
        .constant(ClassConstantDefinition::new("B", "it's"))
        .property(ClassPropertyDefinition::new("x", PhpType::Int).visibility(Visibility::Private))
        .property(ClassPropertyDefinition::new("y", PhpType::Mixed));

    let output = format(class);
    assert!(output.contains(
        "{\n    public const A = 1;\n    public const B = 'it\\'s';\n\n    private int $x;\n    public mixed $y;\n}\n"
    ));
}

#[test]
fn test_no_visibility_has_no_whitespace_artifact() {
    let class = ClassDefinition::new("App", "Helpers")
        .method(ClassMethodDefinition::new("helper", PhpType::Bool).without_visibility());

    let output = format(class);
    assert!(output.lines().any(|line| line == "    function helper(): bool"));
    assert!(
        output
            .lines()
            .filter_map(|line| line.strip_prefix("    "))
            .all(|rest| {
                !(rest.starts_with(char::is_whitespace) && rest.trim_start().starts_with("function"))
            }),
        "function keyword preceded by stray whitespace:\n{output}"
    );
}

#[test]
fn test_abstract_without_visibility() {
    let class = ClassDefinition::new("App", "Base").method(
        ClassMethodDefinition::new("make", PhpType::Static)
            .without_visibility()
            .abstract_(),
    );

    assert!(format(class).contains("    abstract function make(): static\n    {\n    }\n"));
}

#[test]
fn test_multiline_raw_statement_is_not_reindented() {
    let class = ClassDefinition::new("App", "User").method(
        ClassMethodDefinition::new("toArray", PhpType::Array)
            .statement(Statement::raw("return [\n'id' => 1,\n];")),
    );

    assert!(format(class).contains("    {\n        return [\n'id' => 1,\n];\n    }"));
}

#[test]
fn test_ordering_law() {
    let class = ClassDefinition::new("App", "Post")
        .property(ClassPropertyDefinition::new("p1", PhpType::String).with_accessors())
        .property(ClassPropertyDefinition::new("p2", PhpType::String).with_getter());

    let output = format(class);
    let set_p1 = output.find("function setP1(").unwrap();
    let get_p1 = output.find("function getP1(").unwrap();
    let get_p2 = output.find("function getP2(").unwrap();
    assert!(set_p1 < get_p1 && get_p1 < get_p2);
    assert!(!output.contains("setP2"));
}

#[test]
fn test_formatting_many_classes_across_threads() {
    let formatter = ClassFormatter::default();
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let formatter = &formatter;
                scope.spawn(move || {
                    let class = ClassDefinition::new("App", format!("Model{}", i)).property(
                        ClassPropertyDefinition::new("id", PhpType::Int).with_getter(),
                    );
                    formatter.format(class).expect("Formatting failed")
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Thread panicked"))
            .collect()
    });

    for (i, output) in outputs.iter().enumerate() {
        assert!(output.contains(&format!("class Model{}\n", i)));
        assert_eq!(output.matches("function getId()").count(), 1);
    }
}

// =========================================================================
// Property-based laws
// =========================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}(_[a-z0-9]{1,4}){0,2}"
}

fn arb_type() -> impl Strategy<Value = PhpType> {
    prop_oneof![
        Just(PhpType::String),
        Just(PhpType::Int),
        Just(PhpType::Float),
        Just(PhpType::Bool),
        Just(PhpType::Array),
        Just(PhpType::Mixed),
        Just(PhpType::nullable(PhpType::Int)),
        Just(PhpType::class("\\DateTimeInterface")),
    ]
}

fn arb_visibility() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::Public),
        Just(Visibility::Protected),
        Just(Visibility::Private),
    ]
}

fn arb_property() -> impl Strategy<Value = ClassPropertyDefinition> {
    (arb_name(), arb_type(), arb_visibility(), any::<bool>(), any::<bool>()).prop_map(
        |(name, ty, visibility, has_getter, has_setter)| ClassPropertyDefinition {
            name,
            ty,
            visibility,
            has_getter,
            has_setter,
        },
    )
}

fn arb_method() -> impl Strategy<Value = ClassMethodDefinition> {
    (
        arb_name(),
        arb_type(),
        prop::option::of(arb_visibility()),
        any::<bool>(),
        prop::collection::vec((arb_name(), arb_type()), 0..3),
        0usize..4,
    )
        .prop_map(|(name, return_type, visibility, is_abstract, params, statements)| {
            ClassMethodDefinition {
                // Distinct prefix keeps declared methods apart from accessors.
                name: format!("do_{}", name),
                return_type,
                parameters: params
                    .into_iter()
                    .map(|(n, t)| FunctionParameterDefinition::new(n, t))
                    .collect(),
                visibility,
                abstractness: if is_abstract {
                    Abstractness::Abstract
                } else {
                    Abstractness::Concrete
                },
                body: (0..statements)
                    .map(|i| Statement::returns(Expr::raw(i.to_string())))
                    .collect(),
            }
        })
}

fn arb_class() -> impl Strategy<Value = ClassDefinition> {
    (
        prop::collection::vec((arb_name(), any::<i64>()), 0..4),
        prop::collection::vec(arb_property(), 0..6),
        prop::collection::vec(arb_method(), 0..4),
    )
        .prop_map(|(constants, properties, methods)| {
            let mut class = ClassDefinition::new("App\\Generated", "Model");
            class.constants = constants
                .into_iter()
                .map(|(n, v)| ClassConstantDefinition::new(n.to_uppercase(), v))
                .collect();
            // Unique property names so accessor names cannot clash.
            let mut seen = std::collections::HashSet::new();
            class.properties = properties
                .into_iter()
                .filter(|p| seen.insert(classgen_core::to_studly_case(&p.name).to_lowercase()))
                .collect();
            let mut seen_methods = std::collections::HashSet::new();
            class.methods = methods
                .into_iter()
                .filter(|m| seen_methods.insert(m.name.to_lowercase()))
                .collect();
            class
        })
}

proptest! {
    /// Property: one opening and one closing brace for the class and for every method
    #[test]
    fn proptest_braces_balanced(class in arb_class()) {
        let expected_methods = class.methods.len()
            + class.properties.iter().filter(|p| p.has_getter).count()
            + class.properties.iter().filter(|p| p.has_setter).count();

        let output = ClassFormatter::default().format(class).expect("Formatting failed");

        let opening = output.lines().filter(|l| l.trim() == "{").count();
        let closing = output.lines().filter(|l| l.trim() == "}").count();
        prop_assert_eq!(opening, closing);
        prop_assert_eq!(opening, expected_methods + 1);
    }

    /// Property: each flagged property contributes exactly one setter and/or getter, in order
    #[test]
    fn proptest_accessor_order(class in arb_class()) {
        let declared = class.methods.len();
        let expected: Vec<String> = class
            .properties
            .iter()
            .flat_map(|p| {
                let setter = p.has_setter.then(|| classgen_codegen::setter_name(&p.name));
                let getter = p.has_getter.then(|| classgen_codegen::getter_name(&p.name));
                setter.into_iter().chain(getter)
            })
            .collect();

        let synthesized = synthesize_accessors(class).expect("Synthesis failed");
        let appended: Vec<String> = synthesized.methods[declared..]
            .iter()
            .map(|m| m.name.clone())
            .collect();

        prop_assert_eq!(appended, expected);
    }

    /// Property: rendering is deterministic
    #[test]
    fn proptest_render_deterministic(class in arb_class()) {
        let formatter = ClassFormatter::default();
        let synthesized = synthesize_accessors(class).expect("Synthesis failed");
        prop_assert_eq!(formatter.render(&synthesized), formatter.render(&synthesized));
    }
}

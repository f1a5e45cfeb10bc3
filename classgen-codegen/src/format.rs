//! The class formatter.
//!
//! Renders a [`SynthesizedClass`] to PHP source:
//!
//! ```text
//! <?php
//!
//! namespace App\Models;
//!
//! /**
//!  * Class User
//!  */
//! class User
//! {
//!     <constants>
//!
//!     <properties>
//!
//!     <methods>
//! }
//! ```
//!
//! Constants and properties are one per line, methods are separated by a
//! blank line, and empty blocks are dropped.

use classgen_ir::{
    ClassConstantDefinition, ClassDefinition, ClassMethodDefinition, ClassPropertyDefinition,
};

use crate::{
    CodeBuilder, FormatterConfig, Result, SynthesizedClass, literal::export_literal,
    synthesize::synthesize_accessors,
};

/// Class members render one level inside the class braces.
const MEMBER_LEVEL: usize = 1;

/// Renders class definitions to PHP source text.
///
/// Holds only configuration and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ClassFormatter {
    config: FormatterConfig,
}

impl ClassFormatter {
    /// Create a formatter with the given configuration.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Synthesize accessors for `class`, then render it.
    pub fn format(&self, class: ClassDefinition) -> Result<String> {
        let synthesized = synthesize_accessors(class)?;
        Ok(self.render(&synthesized))
    }

    /// Render an already synthesized class.
    pub fn render(&self, class: &SynthesizedClass) -> String {
        let class = class.class();

        tracing::debug!(
            class = %class.name,
            constants = class.constants.len(),
            properties = class.properties.len(),
            methods = class.methods.len(),
            "Rendering class"
        );

        let blocks = [
            self.render_lines(&class.constants, |c| self.render_constant(c), "\n"),
            self.render_lines(&class.properties, |p| self.render_property(p), "\n"),
            self.render_lines(&class.methods, |m| self.render_method(m), "\n\n"),
        ];
        let body = blocks
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        self.render_header(class)
            .line(&format!("class {}", class.name))
            .line("{")
            .raw(&body)
            .raw("\n}\n")
            .build()
    }

    fn render_header(&self, class: &ClassDefinition) -> CodeBuilder {
        let builder = CodeBuilder::new(self.config.indent)
            .line("<?php")
            .blank()
            .when(!class.is_global_namespace(), |b| {
                b.line(&format!("namespace {};", class.namespace)).blank()
            })
            .line("/**")
            .line(&format!(" * Class {}", class.name));

        let builder = match &self.config.banner {
            Some(banner) => builder.line(" * ").line(&format!(" * {}", banner)),
            None => builder,
        };
        builder.line(" */")
    }

    fn render_lines<T>(&self, items: &[T], render: impl Fn(&T) -> String, sep: &str) -> String {
        items.iter().map(render).collect::<Vec<_>>().join(sep)
    }

    /// `public const NAME = 'value';`
    fn render_constant(&self, constant: &ClassConstantDefinition) -> String {
        format!(
            "{}{} const {} = {};",
            self.config.indent.repeat(MEMBER_LEVEL),
            constant.visibility.as_reserved_word(),
            constant.name,
            export_literal(&constant.value)
        )
    }

    /// `protected string $name;`
    fn render_property(&self, property: &ClassPropertyDefinition) -> String {
        format!(
            "{}{} {} ${};",
            self.config.indent.repeat(MEMBER_LEVEL),
            property.visibility.as_reserved_word(),
            property.ty.to_declaration_type(),
            property.name
        )
    }

    /// Signature line, then the brace-delimited body one level deeper.
    ///
    /// Abstract methods keep their braces.
    fn render_method(&self, method: &ClassMethodDefinition) -> String {
        let mut builder = CodeBuilder::new(self.config.indent).at_level(MEMBER_LEVEL);
        builder.push_block(&method_signature(method), |b| {
            for statement in &method.body {
                b.push_line(&statement.to_php_code());
            }
        });

        let mut rendered = builder.build();
        // The block joiner supplies the separators.
        rendered.truncate(rendered.trim_end_matches('\n').len());
        rendered
    }
}

/// `[abstract ][visibility ]function name(type $a, type $b): return`
fn method_signature(method: &ClassMethodDefinition) -> String {
    let mut signature = String::new();

    if let Some(keyword) = method.abstractness.as_reserved_word() {
        signature.push_str(keyword);
        signature.push(' ');
    }
    if let Some(visibility) = method.visibility {
        signature.push_str(visibility.as_reserved_word());
        signature.push(' ');
    }

    let params = method
        .parameters
        .iter()
        .map(|p| format!("{} ${}", p.ty.to_declaration_type(), p.name))
        .collect::<Vec<_>>()
        .join(", ");

    signature.push_str(&format!(
        "function {}({}): {}",
        method.name,
        params,
        method.return_type.to_declaration_type()
    ));
    signature
}

//! Code builder utility for generating properly indented code.

use classgen_core::Indent;

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) prefixed with `push_`.
///
/// # Example (Consuming API)
///
/// ```
/// use classgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::php()
///     .line("<?php")
///     .blank()
///     .when(true, |b| b.line("namespace App;").blank())
///     .line("class User")
///     .build();
///
/// assert_eq!(code, "<?php\n\nnamespace App;\n\nclass User\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use classgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder.push_block("function main()", |b| {
///     b.push_line("return 1;");
/// });
/// assert_eq!(builder.build(), "function main()\n{\n    return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    /// Start at the given indentation level instead of zero.
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a brace block with the opening brace on its own line (mutable).
    ///
    /// Renders `header`, then `{`, the body one level deeper, then `}`,
    /// all braces at the header's indentation.
    pub fn push_block<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_line("{");
        self.push_indent();
        f(self);
        self.push_dedent();
        self.push_line("}")
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

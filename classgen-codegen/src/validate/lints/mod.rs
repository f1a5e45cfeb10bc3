//! Built-in lints.

mod abstract_body;
mod accessor_collision;
mod duplicate_member;
mod invalid_identifier;
mod multiline_statement;

pub use abstract_body::AbstractBodyLint;
pub use accessor_collision::AccessorCollisionLint;
pub use duplicate_member::DuplicateMemberLint;
pub use invalid_identifier::InvalidIdentifierLint;
pub use multiline_statement::MultilineStatementLint;

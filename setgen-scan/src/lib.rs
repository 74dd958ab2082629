//! Discovery of settings containers in C# sources.
//!
//! - [`read_declarations`] turns one C# file into plain [`Declaration`] data
//! - [`scan`] filters declarations down to attributed [`DeclarationTarget`]s
//! - [`collect_sources`] and [`load_declarations`] walk the project tree

mod declaration;
mod lexer;
mod reader;
mod scan;
mod sources;

pub use declaration::{
    Attribute, AttributeArg, Declaration, DeclarationTarget, EnclosingType, TypeKeyword,
};
pub use reader::read_declarations;
pub use scan::{attribute_matches, scan};
pub use sources::{collect_sources, load_declarations};

//! `trust-segment` - Element segmentation and round-trip serialization for
//! IEC 61131-3 Structured Text units.
//!
//! A unit (one function block, program, interface, type, ...) is split into
//! a tree of named elements with exact line ranges, and can be rebuilt from
//! that tree byte for byte:
//!
//! - **Scanner**: finds opening and closing keywords, skipping comments,
//!   pragmas and string literals
//! - **Tree builder**: matches keywords into nested elements
//! - **Merger**: folds leading variable sections into the declaration
//! - **Extractor**: slices deindented declaration and implementation text
//! - **Serializer**: reindents and concatenates an element tree
//!
//! Only element boundaries are recognized; statement bodies are opaque text.
//! Nested text is deindented by four spaces per level, with implementations
//! one level deeper than their declaration. Lines that carry less (a root
//! body at column 0, tab indentation) remember the columns they lacked and
//! are rebuilt at their original column.
//!
//! # Example
//!
//! ```
//! use trust_segment::{dumps, SourceUnit};
//!
//! let source = "\
//! FUNCTION_BLOCK FB_Counter
//! VAR
//!     count : INT;
//! END_VAR
//!
//!     METHOD Reset
//!         count := 0;
//!     END_METHOD
//!
//!     count := count + 1;
//! END_FUNCTION_BLOCK
//! ";
//!
//! let unit = SourceUnit::parse(source)?;
//! let mut model = unit.to_model();
//! assert_eq!(model.implementation.text(), "count := count + 1;\n");
//! assert_eq!(dumps(&model)?, source);
//!
//! let reset = model.find_mut("Reset").expect("method");
//! assert_eq!(reset.implementation.text(), "count := 0;\n");
//! reset.implementation.replace("count := 0;\nlast := 0;\n");
//! assert!(dumps(&model)?.contains("        last := 0;\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extract;
pub mod kind;
pub mod lexer;
pub mod merge;
pub mod model;
pub mod segment;
pub mod serialize;
pub mod tree;
pub mod unit;

pub use error::{ParseError, SerializeError};
pub use extract::{extract, Extractor, Segments, INDENT_WIDTH};
pub use kind::{DelimiterKind, ElementKind, EndKind, ObjectKind};
pub use lexer::{detect_kind, scan, Delimiter};
pub use merge::merge_var_sections;
pub use model::{
    ElementNode, HasChildren, HasDeclaration, HasImplementation, Layout, SourceObject,
    TextDocument,
};
pub use segment::LineSegment;
pub use serialize::{dumps, dumps_at, Serializer};
pub use tree::{build_tree, Element, TreeBuilder};
pub use unit::{parse_element, split, SourceUnit};

mod apply;
mod args;
mod audit;
mod construct;
mod error;
mod field;
mod range;
mod registry;
mod schema;
mod token;
mod value;

/// Object-initializer entry point and runtime options.
pub use apply::{InitOptions, initialize_all};
/// Positional argument list forwarded to one field constructor.
pub use args::{ArgList, extract};
/// Stream diagnostics for marker and value binding problems.
pub use audit::{AuditIssue, audit_stream};
/// Constructor-dispatch traits and scalar implementations.
pub use construct::{FromArg, FromArgs};
/// Error and result aliases.
pub use error::{InitError, Result};
/// Field descriptor and per-field dispatch types.
pub use field::{FieldDescriptor, FieldSlot, TypedSlot};
/// Argument-range resolution over a token stream.
pub use range::{Range, resolve};
/// Ordered field registry and its builder.
pub use registry::{Registry, RegistryBuilder};
/// Dynamic schema facade over the registry mechanism.
pub use schema::{FieldValue, Record, Schema, SchemaField};
/// Token stream input types.
pub use token::{Arg, Token, TokenStream};
/// Runtime value payloads.
pub use value::{Value, ValueKind};

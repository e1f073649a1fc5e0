//! Prompt document conversion for AI coding assistants
//!
//!     One directory of markdown prompts, many assistants. This crate reads prompt documents
//!     (markdown with an optional `---` fenced block of `key: value` fields) and rewrites them
//!     into the prompt-file envelopes each assistant expects. The body of a prompt is never
//!     touched; only the envelope around it changes.
//!
//!     This is a pure lib as far as the conversion core goes: parsing and emitting do no I/O
//!     and never fail. The only module that touches the filesystem is ./sync.rs, which walks a
//!     source tree and writes the results, and it reports through `tracing` rather than
//!     printing. Printing, prompting and exit codes belong to the CLI.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError, SyncError
//!     ├── frontmatter.rs          # Metadata block scanner
//!     ├── document.rs             # Document: metadata + body
//!     ├── target.rs               # Target enum, per-target data and emit dispatch
//!     ├── formats
//!     │   └── <target>.rs         # One envelope per target
//!     ├── selection.rs            # "1,3" / "gemini,cursor" / "all" -> targets
//!     ├── convert.rs              # Single document conversion + path conventions
//!     ├── sync.rs                 # Directory pipeline
//!     └── lib.rs
//!
//! Targets
//!
//!     | Target          | Extension    | Envelope                                              |
//!     |-----------------|--------------|-------------------------------------------------------|
//!     | claude-code     | .md          | `---` / `description: ..` / `---` / blank / body      |
//!     | gemini          | .toml        | `description = ".."` / blank / `prompt = """` body `"""` |
//!     | github-copilot  | .prompt.md   | like claude-code with `mode: agent` first             |
//!     | cursor          | .md          | `<!-- .. -->` / blank / body                          |
//!
//!     The description field is left out entirely when the source has none.
//!
//! Metadata
//!
//!     The metadata block is deliberately not YAML. Values are flat strings split on the first
//!     colon, so `url: http://x` works and nested structures are not understood. Only the first
//!     fenced block counts; later `---` lines (horizontal rules) stay in the body.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # Fixture loading helpers
//!     ├── fixtures/prompts        # Sample prompt tree
//!     ├── targets                 # Envelope snapshots and properties per target
//!     └── sync                    # End to end directory runs
//!
pub mod convert;
pub mod document;
pub mod error;
pub mod formats;
pub mod frontmatter;
pub mod selection;
pub mod sync;
pub mod target;

pub use convert::{convert, Conversion};
pub use document::Document;
pub use error::{FormatError, SyncError};
pub use selection::parse_selection;
pub use sync::{SyncPlan, SyncReport};
pub use target::Target;

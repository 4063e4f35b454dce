//! Transfer instructions produced by the diff engine and consumed by the
//! transfer manager.

/// The kind of transfer a [`Command`] performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Push a local file to the remote store.
    Upload,
    /// Pull a remote object to the local filesystem.
    Download,
    /// Server-side copy between two bucket prefixes.
    Copy,
    /// Remove an object at the target.
    Delete,
}

/// A single transfer instruction.
///
/// `source_id` is the identifier in the source inventory (the read side);
/// `target_id` is the identifier at the target after relocation (the write
/// side). For [`CommandKind::Delete`], `source_id` and `target_id` are the
/// same id — the entry only ever existed at the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The transfer variant.
    pub kind: CommandKind,
    /// The id to read from, in the source inventory's coordinate space.
    pub source_id: String,
    /// The id to write to, after relocation.
    pub target_id: String,
    /// The object's size in bytes, used for progress accounting.
    pub size: u64,
}

impl Command {
    /// Creates a new [`Command`].
    #[must_use]
    pub fn new(kind: CommandKind, source_id: impl Into<String>, target_id: impl Into<String>, size: u64) -> Self {
        Self {
            kind,
            source_id: source_id.into(),
            target_id: target_id.into(),
            size,
        }
    }
}

pub mod avatar;
pub mod clear;
pub mod copy;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod new;
pub mod remove;
pub mod render;
pub mod templates;
pub mod validate;

pub use avatar::{avatar, AvatarArgs};
pub use clear::{clear, ClearArgs};
pub use copy::{copy, CopyArgs};
pub use edit::{edit, EditArgs};
pub use export::{export, ExportArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use list::{list, ListArgs};
pub use new::{new, NewArgs};
pub use remove::{remove, RemoveArgs};
pub use render::{render, RenderArgs};
pub use templates::{templates, TemplatesArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use sigforge_schema::Signature;
use sigforge_store::{JsonFileRepository, SignatureRepository};

/// Open the store named by the config in `cwd`.
pub(crate) fn open_store(cwd: &str) -> Result<(Config, JsonFileRepository)> {
    let config = Config::load(cwd)?;
    let repo = JsonFileRepository::open(config.get_store_path(cwd))?;
    Ok((config, repo))
}

/// Find one signature by full id, unique id prefix, or exact name.
pub(crate) fn find_signature<'a, R: SignatureRepository>(
    repo: &'a R,
    query: &str,
) -> Result<&'a Signature> {
    let query_lower = query.to_ascii_lowercase();
    let matches: Vec<&Signature> = repo
        .list()
        .iter()
        .filter(|signature| {
            signature.id.to_string().starts_with(&query_lower) || signature.name == query
        })
        .collect();

    match matches.as_slice() {
        [signature] => Ok(signature),
        [] => Err(anyhow!("No signature matches {query:?}")),
        many => Err(anyhow!(
            "{query:?} matches {} signatures; use a longer id",
            many.len()
        )),
    }
}

/// Short form of an id for tables.
pub(crate) fn short_id(signature: &Signature) -> String {
    signature.id.to_string()[..8].to_string()
}

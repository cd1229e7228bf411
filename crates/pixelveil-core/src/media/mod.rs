pub mod image;

use std::path::Path;

/// anything that can persist itself to a file on disk
pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}

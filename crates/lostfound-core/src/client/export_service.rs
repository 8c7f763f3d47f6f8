use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::{
    ExportTarget, FOUND_ITEMS_FILE, LOST_ITEMS_FILE, MATCHES_FILE, write_found_items,
    write_lost_items, write_matches,
};
use crate::store::ItemSource;

use super::LostFound;

impl LostFound {
    /// Write the CSV files for `target` into `out_dir` and return their paths.
    pub fn export(&self, out_dir: &Path, target: ExportTarget) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir)?;
        let mut written = Vec::new();

        if matches!(target, ExportTarget::Lost | ExportTarget::All) {
            let path = out_dir.join(LOST_ITEMS_FILE);
            let items = self.state.list_lost_items()?;
            write_lost_items(BufWriter::new(File::create(&path)?), &items)?;
            written.push(path);
        }
        if matches!(target, ExportTarget::Found | ExportTarget::All) {
            let path = out_dir.join(FOUND_ITEMS_FILE);
            let items = self.state.list_found_items()?;
            write_found_items(BufWriter::new(File::create(&path)?), &items)?;
            written.push(path);
        }
        if matches!(target, ExportTarget::Matches | ExportTarget::All) {
            let path = out_dir.join(MATCHES_FILE);
            let matches = self.lifecycle.list_all_matches()?;
            write_matches(BufWriter::new(File::create(&path)?), &matches)?;
            written.push(path);
        }

        Ok(written)
    }
}

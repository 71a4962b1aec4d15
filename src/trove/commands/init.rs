use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TroveError};
use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(data_dir).map_err(TroveError::Io)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized trove store at {}",
        data_dir.display()
    )));
    Ok(result)
}

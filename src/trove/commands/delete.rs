use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repo::Repository;
use crate::store::StoreAdapter;

pub fn run<S: StoreAdapter>(repo: &mut Repository<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match repo.delete(id)? {
        Some(removed) => {
            result.add_message(CmdMessage::success(format!(
                "Record deleted (#{}): {}",
                removed.id, removed.title
            )));
            result.affected_records.push(removed);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No record with id #{}.", id)));
        }
    }
    Ok(result)
}

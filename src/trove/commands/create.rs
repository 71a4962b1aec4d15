use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Draft;
use crate::repo::Repository;
use crate::store::StoreAdapter;

pub fn run<S: StoreAdapter>(
    repo: &mut Repository<S>,
    title: &str,
    description: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Validation boundary: a blank title means the repository is never
    // invoked. Not an error, the submission is just dropped.
    let draft = match Draft::parse(title, description) {
        Some(draft) => draft,
        None => {
            result.add_message(CmdMessage::warning("Title is required, nothing created."));
            return Ok(result);
        }
    };

    let record = repo.create(draft)?;
    result.add_message(CmdMessage::success(format!(
        "Record created (#{}): {}",
        record.id, record.title
    )));
    result.affected_records.push(record);
    Ok(result)
}

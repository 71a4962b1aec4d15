use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repo::Repository;
use crate::store::StoreAdapter;

pub fn run<S: StoreAdapter>(repo: &Repository<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match repo.get(id) {
        Some(record) => result.listed_records.push(record.clone()),
        None => result.add_message(CmdMessage::info(format!("No record with id #{}.", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn views_single_record() {
        let mut repo = Repository::open(InMemoryStore::new());
        let id = create::run(&mut repo, "Title", "Body").unwrap().affected_records[0].id;

        let result = run(&repo, id).unwrap();

        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].description, "Body");
    }

    #[test]
    fn unknown_id_reports_miss() {
        let repo = Repository::open(InMemoryStore::new());
        let result = run(&repo, 1).unwrap();

        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}

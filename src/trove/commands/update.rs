use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Draft;
use crate::repo::Repository;
use crate::store::StoreAdapter;

/// Updates a record. Fields left as `None` keep the current value of the
/// record selected for editing, mirroring a form pre-filled from the
/// existing record.
pub fn run<S: StoreAdapter>(
    repo: &mut Repository<S>,
    id: u64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    repo.select_for_edit(Some(id));
    let current = match repo.editing() {
        Some(record) => record.clone(),
        None => {
            repo.select_for_edit(None);
            result.add_message(CmdMessage::info(format!("No record with id #{}.", id)));
            return Ok(result);
        }
    };

    let title = title.unwrap_or(&current.title);
    let description = description.unwrap_or(&current.description);

    let draft = match Draft::parse(title, description) {
        Some(draft) => draft,
        None => {
            repo.select_for_edit(None);
            result.add_message(CmdMessage::warning("Title is required, nothing updated."));
            return Ok(result);
        }
    };

    // The repository clears the editing selection as part of the update.
    if let Some(updated) = repo.update(id, draft)? {
        result.add_message(CmdMessage::success(format!(
            "Record updated (#{}): {}",
            updated.id, updated.title
        )));
        result.affected_records.push(updated);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    fn seeded_repo() -> (Repository<InMemoryStore>, u64) {
        let mut repo = Repository::open(InMemoryStore::new());
        let result = create::run(&mut repo, "Title", "Body").unwrap();
        let id = result.affected_records[0].id;
        (repo, id)
    }

    #[test]
    fn updates_both_fields() {
        let (mut repo, id) = seeded_repo();
        run(&mut repo, id, Some("New"), Some("New body")).unwrap();

        assert_eq!(repo.records()[0].title, "New");
        assert_eq!(repo.records()[0].description, "New body");
    }

    #[test]
    fn omitted_fields_keep_current_values() {
        let (mut repo, id) = seeded_repo();
        run(&mut repo, id, Some("New"), None).unwrap();

        assert_eq!(repo.records()[0].title, "New");
        assert_eq!(repo.records()[0].description, "Body");

        run(&mut repo, id, None, Some("Changed body")).unwrap();
        assert_eq!(repo.records()[0].title, "New");
        assert_eq!(repo.records()[0].description, "Changed body");
    }

    #[test]
    fn unknown_id_is_noop() {
        let (mut repo, _) = seeded_repo();
        let result = run(&mut repo, 999, Some("Ghost"), None).unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(repo.records()[0].title, "Title");
    }

    #[test]
    fn blank_title_leaves_record_untouched() {
        let (mut repo, id) = seeded_repo();
        let result = run(&mut repo, id, Some("   "), Some("new body")).unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(repo.records()[0].title, "Title");
        assert_eq!(repo.records()[0].description, "Body");
    }

    #[test]
    fn clears_editing_selection_after_update() {
        let (mut repo, id) = seeded_repo();
        run(&mut repo, id, Some("New"), None).unwrap();
        assert!(repo.editing().is_none());
    }
}

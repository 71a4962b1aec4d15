use crate::commands::CmdResult;
use crate::error::Result;
use crate::repo::Repository;
use crate::store::StoreAdapter;

pub fn run<S: StoreAdapter>(repo: &Repository<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(repo.records().to_vec()))
}

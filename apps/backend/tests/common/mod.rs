#![allow(dead_code)]

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Policy defaults to rollback but can be flipped per run via `TRUMPS_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("TRUMPS_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => trumps_backend::db::txn_policy::TxnPolicy::CommitOnOk,
        _ => trumps_backend::db::txn_policy::TxnPolicy::RollbackOnOk,
    };

    trumps_backend::db::txn_policy::set_txn_policy(policy);
}
